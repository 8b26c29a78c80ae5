// SPDX-License-Identifier: MIT
//
// WCAG 2.1 contrast ratio.
//
// Readability is judged in sRGB relative luminance (the WCAG definition),
// always on the quantized 8-bit color that will be displayed.

use crate::color::srgb_to_linear;
use crate::error::Result;
use crate::rgb::Rgb;

/// WCAG AA minimum for normal body text.
pub const WCAG_AA_NORMAL: f64 = 4.5;

/// Relative luminance per WCAG 2.1, in [0.0, 1.0].
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_srgb();
    let r_lin = f64::from(srgb_to_linear(r));
    let g_lin = f64::from(srgb_to_linear(g));
    let b_lin = f64::from(srgb_to_linear(b));
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// WCAG 2.1 contrast ratio between two colors, in [1.0, 21.0].
///
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// Argument order does not matter.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// [`contrast_ratio`] on hex strings.
///
/// # Errors
///
/// Returns [`crate::ColorError::InvalidHex`] if either side does not parse.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64> {
    Ok(contrast_ratio(Rgb::parse(a)?, Rgb::parse(b)?))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
