//! Error types for theme synthesis.

use n_color::ColorError;
use thiserror::Error;

/// Errors raised by the adaptive engine and the theme builder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThemeError {
    /// The palette names a base scale that is not among its color scales.
    #[error("base scale `{name}` is not defined in the palette")]
    MissingBaseScale {
        /// Name the palette declared as its base.
        name: String,
    },
    /// A color scale has no keys to interpolate between.
    #[error("color scale `{scale}` has no color keys")]
    EmptyColorKeys {
        /// Offending scale.
        scale: String,
    },
    /// Engine output lacks a scale the caller needs.
    #[error("rendered theme has no `{name}` scale")]
    MissingScale {
        /// Name of the absent scale.
        name: String,
    },
    /// Brightness outside 0–100.
    #[error("brightness {value} is outside 0..=100")]
    Brightness {
        /// Rejected brightness.
        value: f64,
    },
    /// Contrast multiplier below 1 (or not a number).
    #[error("contrast multiplier {value} must be at least 1")]
    Contrast {
        /// Rejected multiplier.
        value: f64,
    },
    /// A theme configuration field failed validation.
    #[error("invalid theme config field `{field}`: {reason}")]
    Config {
        /// Field that failed.
        field: &'static str,
        /// Machine-readable reason.
        reason: &'static str,
    },
    /// A color key or seed did not parse.
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Convenience alias for theme results.
pub type Result<T> = std::result::Result<T, ThemeError>;
