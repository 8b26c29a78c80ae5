// SPDX-License-Identifier: MIT
//
// Error types for color parsing and color math.

use thiserror::Error;

/// Errors produced by the color math layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string is not a `#RGB` or `#RRGGBB` hex color.
    #[error("invalid hex color `{value}`")]
    InvalidHex {
        /// The rejected input, verbatim.
        value: String,
    },
    /// A scale was requested with no color stops.
    #[error("color scale needs at least one stop")]
    EmptyScale,
}

/// Convenience alias for color results.
pub type Result<T> = std::result::Result<T, ColorError>;
