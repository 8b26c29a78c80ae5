// SPDX-License-Identifier: MIT
//
// Perceptual color in OKLCH.
//
// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
//
// Tonal scales need a lightness axis that looks even to the eye, so the
// adaptive engine walks its ramps in OKLCH rather than HSL. Everything that
// leaves this module goes back through sRGB as an `Rgb`.
//
// Conversion pipeline:
//
//   OKLCH ↔ Oklab ↔ Linear sRGB ↔ sRGB ↔ Rgb (8-bit) ↔ hex
//
// Gamut mapping reduces chroma when an OKLCH value falls outside sRGB.

use std::fmt;

use crate::error::Result;
use crate::rgb::Rgb;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque color stored in OKLCH space.
///
/// ```
/// use n_color::color::Color;
///
/// let seed = Color::hex("#3366CC").unwrap();
/// let pale = seed.set_lightness(0.95).to_gamut();
/// assert!(pale.l > seed.l);
/// assert!(pale.to_hex().starts_with('#'));
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f32,

    /// Chroma: 0.0 (gray) to ~0.37 (most vivid in sRGB).
    pub c: f32,

    /// Hue angle in degrees, 0.0 to 360.0.
    pub h: f32,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    /// Create a color from sRGB values (0.0 to 1.0 range).
    #[must_use]
    pub fn srgb(r: f32, g: f32, b: f32) -> Self {
        let (l, c, h) = srgb_to_oklch(r, g, b);
        Self { l, c, h }
    }

    /// Create a color from an 8-bit sRGB value.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = rgb.to_srgb();
        Self::srgb(r, g, b)
    }

    /// Parse `#RGB` / `#RRGGBB`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ColorError::InvalidHex`] if `s` does not parse.
    pub fn hex(s: &str) -> Result<Self> {
        Rgb::parse(s).map(Self::from_rgb)
    }

    /// Pure black.
    pub const BLACK: Self = Self::oklch(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::oklch(1.0, 0.0, 0.0);

    /// Whether this color is achromatic (no visible chroma).
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < 1e-5
    }

    // ─── Perceptual Operations ───────────────────────────────────────────

    /// Set lightness to an absolute value (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub const fn set_lightness(self, l: f32) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Mix this color with another in OKLCH space.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`.
    /// Hue interpolation takes the shortest path around the color wheel;
    /// a gray endpoint borrows the other endpoint's hue.
    #[must_use]
    pub fn mix(self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        let h = if self.is_achromatic() {
            other.h
        } else if other.is_achromatic() {
            self.h
        } else {
            interpolate_hue(self.h, other.h, t)
        };

        Self {
            l: self.l.mul_add(inv_t, other.l * t),
            c: self.c.mul_add(inv_t, other.c * t),
            h,
        }
    }

    // ─── Gamut ───────────────────────────────────────────────────────────

    /// Whether this color is within the sRGB gamut.
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        // Tolerate float noise at the cube faces.
        const EPS: f32 = 1e-4;
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        let ok = |v: f32| (-EPS..=1.0 + EPS).contains(&v);
        ok(r) && ok(g) && ok(b)
    }

    /// Reduce chroma until this color fits within the sRGB gamut.
    ///
    /// Binary search for the maximum in-gamut chroma, preserving hue and
    /// lightness.
    #[must_use]
    pub fn to_gamut(self) -> Self {
        if self.in_srgb_gamut() {
            return self;
        }

        let mut lo: f32 = 0.0;
        let mut hi: f32 = self.c;

        for _ in 0..16 {
            let mid = (lo + hi) * 0.5;
            let candidate = Self { c: mid, ..self };
            if candidate.in_srgb_gamut() {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Self { c: lo, ..self }
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Convert to sRGB with channels clamped to 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f32, f32, f32) {
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Quantize to 8-bit sRGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = self.to_srgb();
        Rgb::from_srgb(r, g, b)
    }

    /// Uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::oklch({:.4}, {:.4}, {:.1})", self.l, self.c, self.h)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f32 = 1e-5;
        (self.l - other.l).abs() < EPS
            && (self.c - other.c).abs() < EPS
            && (self.is_achromatic()
                || other.is_achromatic()
                || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        color.to_rgb()
    }
}

// ─── Color Space Conversion Functions ────────────────────────────────────────
//
// Oklab math by Björn Ottosson: https://bottosson.github.io/posts/oklab/

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f32) -> f32 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
fn hue_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Interpolate between two hue angles taking the shortest path.
#[inline]
fn interpolate_hue(h1: f32, h2: f32, t: f32) -> f32 {
    let diff = h2 - h1;
    let diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    normalize_hue(diff.mul_add(t, h1))
}

// ─── OKLCH ↔ Oklab ──────────────────────────────────────────────────────────

#[inline]
fn oklch_to_oklab_ab(c: f32, h: f32) -> (f32, f32) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

#[inline]
fn oklab_ab_to_oklch(a: f32, b: f32) -> (f32, f32) {
    let c = a.hypot(b);
    let h = if c < 1e-8 {
        0.0 // Achromatic: hue is undefined
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };
    (c, h)
}

// ─── Oklab ↔ Linear sRGB ────────────────────────────────────────────────────
//
// Through the intermediate LMS cone-response space; matrices from the
// Oklab specification.

#[inline]
fn oklab_to_linear_srgb(l_ok: f32, a: f32, b: f32) -> (f32, f32, f32) {
    let l_ = 0.215_803_76f32.mul_add(b, 0.396_337_78f32.mul_add(a, l_ok));
    let m_ = 0.063_854_17f32.mul_add(-b, 0.105_561_346f32.mul_add(-a, l_ok));
    let s_ = 1.291_485_5f32.mul_add(-b, 0.089_484_18f32.mul_add(-a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let r = 0.230_969_94f32.mul_add(s, 4.076_741_7f32.mul_add(l, -(3.307_711_6 * m)));
    let g = 0.341_319_38f32.mul_add(-s, (-1.268_438f32).mul_add(l, 2.609_757_4 * m));
    let bl = 1.707_614_7f32.mul_add(s, (-0.004_196_086_3f32).mul_add(l, -(0.703_418_6 * m)));

    (r, g, bl)
}

#[inline]
fn linear_srgb_to_oklab(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let l = 0.051_445_995f32.mul_add(b, 0.412_221_47f32.mul_add(r, 0.536_332_55 * g));
    let m = 0.107_396_96f32.mul_add(b, 0.211_903_5f32.mul_add(r, 0.680_699_5 * g));
    let s = 0.629_978_7f32.mul_add(b, 0.088_302_46f32.mul_add(r, 0.281_718_84 * g));

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let l_ok = 0.004_072_047f32.mul_add(-s_, 0.210_454_26f32.mul_add(l_, 0.793_617_8 * m_));
    let a = 0.450_593_7f32.mul_add(s_, 1.977_998_5f32.mul_add(l_, -(2.428_592_2 * m_)));
    let b_ok = 0.808_675_77f32.mul_add(-s_, 0.025_904_037f32.mul_add(l_, 0.782_771_77 * m_));

    (l_ok, a, b_ok)
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f32.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Composite Conversions ───────────────────────────────────────────────────

fn srgb_to_oklch(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let (l, a, b_ok) = linear_srgb_to_oklab(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    let (c, h) = oklab_ab_to_oklch(a, b_ok);
    (l, c, h)
}

/// OKLCH → sRGB (0.0–1.0, may be out of gamut).
fn oklch_to_srgb(l: f32, c: f32, h: f32) -> (f32, f32, f32) {
    let (a, b) = oklch_to_oklab_ab(c, h);
    let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    fn assert_rgb_close(actual: Rgb, expected: Rgb) {
        let close = |a: u8, b: u8| a.abs_diff(b) <= 1;
        assert!(
            close(actual.r, expected.r) && close(actual.g, expected.g) && close(actual.b, expected.b),
            "RGB mismatch: got {actual}, expected {expected}"
        );
    }

    // ── Roundtrip ────────────────────────────────────────────────────────

    #[test]
    fn rgb_to_oklch_roundtrip() {
        let samples = [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 0),
            Rgb::new(0, 255, 255),
            Rgb::new(255, 0, 255),
            Rgb::WHITE,
            Rgb::BLACK,
            Rgb::new(0x0D, 0x1E, 0x26),
        ];

        for rgb in samples {
            assert_rgb_close(Color::from_rgb(rgb).to_rgb(), rgb);
        }
    }

    #[test]
    fn hex_roundtrip() {
        let color = Color::hex("#c86432").unwrap();
        assert_eq!(color.to_hex(), "#C86432");
    }

    #[test]
    fn hex_rejects_garbage() {
        assert!(Color::hex("#12345").is_err());
    }

    // ── Known Values ─────────────────────────────────────────────────────

    #[test]
    fn black_and_white_lightness() {
        let black = Color::from_rgb(Rgb::BLACK);
        let white = Color::from_rgb(Rgb::WHITE);
        assert!(approx_eq(black.l, 0.0, 0.001));
        assert!(approx_eq(white.l, 1.0, 0.001));
        assert!(white.is_achromatic());
    }

    #[test]
    fn red_has_hue_near_30() {
        let red = Color::srgb(1.0, 0.0, 0.0);
        assert!(red.h > 20.0 && red.h < 35.0, "Red hue was {}", red.h);
        assert!(red.c > 0.2, "Red chroma was {}", red.c);
    }

    #[test]
    fn oklch_white_and_black_constants() {
        assert_eq!(Color::WHITE.to_hex(), "#FFFFFF");
        assert_eq!(Color::BLACK.to_hex(), "#000000");
    }

    // ── Lightness ────────────────────────────────────────────────────────

    #[test]
    fn set_lightness_clamps() {
        let color = Color::oklch(0.5, 0.1, 90.0);
        assert!(approx_eq(color.set_lightness(1.4).l, 1.0, 1e-6));
        assert!(approx_eq(color.set_lightness(-0.3).l, 0.0, 1e-6));
    }

    #[test]
    fn gray_lightness_is_monotonic_in_rgb() {
        let mut last = 0u8;
        for step in 1..=20 {
            let gray = Color::oklch(step as f32 / 20.0, 0.0, 0.0).to_rgb();
            assert!(gray.r >= last, "gray ramp not monotonic at step {step}");
            last = gray.r;
        }
    }

    // ── Mix ──────────────────────────────────────────────────────────────

    #[test]
    fn mix_endpoints() {
        let a = Color::oklch(0.3, 0.1, 30.0);
        let b = Color::oklch(0.7, 0.2, 270.0);
        assert_eq!(a.mix(&b, 0.0), a);
        assert_eq!(a.mix(&b, 1.0), b);
    }

    #[test]
    fn mix_takes_short_hue_path() {
        let a = Color::oklch(0.5, 0.1, 350.0);
        let b = Color::oklch(0.5, 0.1, 10.0);
        let mid = a.mix(&b, 0.5);
        assert!(hue_diff(mid.h, 0.0) < 0.01, "Hue went the long way: {}", mid.h);
    }

    #[test]
    fn mix_with_gray_keeps_hue() {
        let blue = Color::oklch(0.5, 0.15, 260.0);
        let mid = blue.mix(&Color::WHITE, 0.5);
        assert!(approx_eq(mid.h, 260.0, 1e-4));
        assert!(approx_eq(mid.l, 0.75, 1e-4));
    }

    // ── Gamut ────────────────────────────────────────────────────────────

    #[test]
    fn gamut_mapping_reduces_chroma() {
        let wild = Color::oklch(0.9, 0.35, 264.0);
        assert!(!wild.in_srgb_gamut());
        let mapped = wild.to_gamut();
        assert!(mapped.in_srgb_gamut());
        assert!(mapped.c < wild.c);
        assert!(approx_eq(mapped.l, wild.l, 1e-6));
    }

    #[test]
    fn in_gamut_color_is_untouched() {
        let color = Color::oklch(0.6, 0.05, 120.0);
        assert_eq!(color.to_gamut(), color);
    }

    // ── Gamma ────────────────────────────────────────────────────────────

    #[test]
    fn gamma_roundtrip() {
        for i in 0..=10 {
            let v = i as f32 / 10.0;
            assert!(approx_eq(linear_to_srgb(srgb_to_linear(v)), v, 1e-5));
        }
    }
}
