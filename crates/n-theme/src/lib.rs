//! # n-theme — Contrast-Driven Tonal Scales
//!
//! Turns one seed color into two readable tone scales (light mode and dark
//! mode) and picks text colors from them by contrast. Every color is chosen
//! for its contrast ratio against a background, never for its lightness
//! alone, so a scale stays legible when the background changes.
//!
//! # Architecture
//!
//! ```text
//! seed hex
//!     │
//!     ▼
//! builder.rs:  color keys [lighten 0.3, seed, darken 0.3] + ThemeConfig
//!     │
//!     ▼
//! adaptive.rs: render the palette at light and dark brightness
//!     │        (AdaptiveThemeEngine, ContrastScaleEngine)
//!     ▼
//! builder.rs:  BuiltTheme { colors, inverse }, nine steps each
//!     │
//!     ▼
//! select.rs:   first step with contrast ≥ threshold against the seed
//! ```
//!
//! # Color Space
//!
//! Ramps are interpolated in OKLCH (perceptually uniform) and gamut-mapped
//! to sRGB. Contrast is measured with the WCAG 2.1 formula on the final
//! 8-bit colors, so the numbers match what any checker reports.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Ramp steps are small integer-to-float casts.
#![allow(clippy::cast_precision_loss)]

pub mod adaptive;
pub mod builder;
pub mod error;
pub mod select;

pub use adaptive::{AdaptiveThemeEngine, ContrastScaleEngine, PaletteSpec, ScaleEntry, ScaleValue};
pub use builder::{BuiltTheme, ThemeBuilder, ThemeConfig, ThemeOverrides, ToneScale, build_theme};
pub use error::ThemeError;
pub use select::{select_text, valid_contrast};
