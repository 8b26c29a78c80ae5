// SPDX-License-Identifier: MIT
//
// Error type for palette generation.

use n_color::ColorError;
use n_theme::ThemeError;
use thiserror::Error;

use crate::sampler::Band;

/// Everything that can stop a palette from being produced.
///
/// A seed whose tone scale has no readable text color is *not* an error;
/// it is discarded and re-sampled. Only running out of attempts is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// A generator option is out of range.
    #[error("invalid generator option `{field}`: {reason}")]
    InvalidOptions {
        field: &'static str,
        reason: &'static str,
    },
    /// Every sampled seed for a band was rejected.
    #[error("no readable {band} pair after {attempts} attempts")]
    Exhausted { band: Band, attempts: u32 },
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Convenience alias for palette results.
pub type Result<T> = std::result::Result<T, PaletteError>;
