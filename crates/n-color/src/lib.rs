// SPDX-License-Identifier: MIT
//
// n-color — color math for n-pair.
//
// Everything the palette generator needs from "a color library", and
// nothing else: hex parsing and normalization, HSL arithmetic in the web
// sense (lighten/darken by absolute lightness points), evenly spaced sRGB
// scales, OKLCH for perceptually even lightness ramps, and the WCAG
// contrast ratio that every accessibility decision is made with.
//
//   rgb.rs      → Rgb, hex strings, HSL, lighten/darken
//   color.rs    → OKLCH Color, gamut mapping, sRGB gamma
//   gradient.rs → interpolate_scale
//   contrast.rs → relative luminance, contrast ratio, the AA threshold

// Mathematical code uses small integer-to-float casts (loop indices, steps).
#![allow(clippy::cast_precision_loss)]

pub mod color;
pub mod contrast;
pub mod error;
pub mod gradient;
pub mod rgb;

pub use color::Color;
pub use contrast::{WCAG_AA_NORMAL, contrast_ratio, contrast_ratio_hex};
pub use error::ColorError;
pub use gradient::interpolate_scale;
pub use rgb::{Rgb, darken, hsl_to_hex, lighten, normalize_hex};
