// SPDX-License-Identifier: MIT
//
// 8-bit sRGB colors, hex strings, and HSL arithmetic.
//
// Hex is the interchange format of the whole workspace: every color that
// leaves a crate boundary is a normalized `#RRGGBB` string in uppercase.
// HSL is where the "classic" web operations live (lighten/darken by an
// absolute lightness amount), so those are implemented here rather than in
// the perceptual OKLCH type.
#![allow(clippy::many_single_char_names)]

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color.
///
/// ```
/// use n_color::rgb::Rgb;
///
/// let teal: Rgb = "#0a8".parse().unwrap();
/// assert_eq!(teal.to_hex(), "#00AA88");
/// assert_eq!(teal.lighten(0.1).to_hex(), "#00DDB1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB`, with or without the leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] for any other length or a
    /// non-hex digit.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || ColorError::InvalidHex {
            value: s.to_owned(),
        };
        let digits = s.trim().strip_prefix('#').unwrap_or_else(|| s.trim());
        let bytes = digits.as_bytes();

        match bytes.len() {
            3 => {
                let r = hex_digit(bytes[0]).ok_or_else(invalid)?;
                let g = hex_digit(bytes[1]).ok_or_else(invalid)?;
                let b = hex_digit(bytes[2]).ok_or_else(invalid)?;
                Ok(Self::new(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = hex_byte(&bytes[0..2]).ok_or_else(invalid)?;
                let g = hex_byte(&bytes[2..4]).ok_or_else(invalid)?;
                let b = hex_byte(&bytes[4..6]).ok_or_else(invalid)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(invalid()),
        }
    }

    /// Format as uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels as sRGB floats in 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }

    /// Build from sRGB floats, clamping each channel to 0.0–1.0.
    #[must_use]
    pub fn from_srgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(
            unit_to_u8(f64::from(r)),
            unit_to_u8(f64::from(g)),
            unit_to_u8(f64::from(b)),
        )
    }

    // ─── HSL ─────────────────────────────────────────────────────────────

    /// Build from HSL: hue in degrees (any value, wrapped to 0–360),
    /// saturation and lightness in 0.0–1.0 (clamped).
    #[must_use]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = h.rem_euclid(360.0);
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        let c = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
        let sector = h / 60.0;
        let x = c * (1.0 - (sector % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match sector {
            s if s < 1.0 => (c, x, 0.0),
            s if s < 2.0 => (x, c, 0.0),
            s if s < 3.0 => (0.0, c, x),
            s if s < 4.0 => (0.0, x, c),
            s if s < 5.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self::new(unit_to_u8(r + m), unit_to_u8(g + m), unit_to_u8(b + m))
    }

    /// Decompose into HSL: hue in degrees 0–360, saturation and lightness
    /// in 0.0–1.0. Achromatic colors report hue 0.
    #[must_use]
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let d = max - min;

        if d < f64::EPSILON {
            return (0.0, 0.0, l);
        }

        let s = d / (1.0 - 2.0f64.mul_add(l, -1.0).abs());
        let h = if (max - r).abs() < f64::EPSILON {
            60.0 * ((g - b) / d).rem_euclid(6.0)
        } else if (max - g).abs() < f64::EPSILON {
            60.0 * ((b - r) / d + 2.0)
        } else {
            60.0 * ((r - g) / d + 4.0)
        };

        (h, s, l)
    }

    /// Raise HSL lightness by an absolute `amount` (clamped to 1.0).
    ///
    /// `0.2` means twenty lightness points, not twenty percent of the
    /// current lightness.
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l + amount).clamp(0.0, 1.0))
    }

    /// Lower HSL lightness by an absolute `amount` (clamped to 0.0).
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l - amount).clamp(0.0, 1.0))
    }

    /// Channel-wise interpolation in gamma-encoded sRGB.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`.
    #[must_use]
    pub fn mix(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| {
            let a = f64::from(a);
            (f64::from(b) - a).mul_add(t, a) / 255.0
        };
        Self::new(
            unit_to_u8(lerp(self.r, other.r)),
            unit_to_u8(lerp(self.g, other.g)),
            unit_to_u8(lerp(self.b, other.b)),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// ─── Hex-string helpers ──────────────────────────────────────────────────────
//
// Thin string-in/string-out wrappers. Callers that pass colors around as
// hex strings use these; everything else should hold an `Rgb`.

/// Expand shorthand and uppercase: `#0a8` → `#00AA88`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] if `hex` does not parse.
pub fn normalize_hex(hex: &str) -> Result<String> {
    Rgb::parse(hex).map(Rgb::to_hex)
}

/// Integer HSL (hue 0–360, saturation and lightness 0–100) to `#RRGGBB`.
#[must_use]
pub fn hsl_to_hex(h: u16, s: u8, l: u8) -> String {
    Rgb::from_hsl(f64::from(h), f64::from(s) / 100.0, f64::from(l) / 100.0).to_hex()
}

/// Lighten a hex color by an absolute HSL lightness `amount`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] if `hex` does not parse.
pub fn lighten(amount: f64, hex: &str) -> Result<String> {
    Ok(Rgb::parse(hex)?.lighten(amount).to_hex())
}

/// Darken a hex color by an absolute HSL lightness `amount`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] if `hex` does not parse.
pub fn darken(amount: f64, hex: &str) -> Result<String> {
    Ok(Rgb::parse(hex)?.darken(amount).to_hex())
}

// ─── Internals ───────────────────────────────────────────────────────────────

#[inline]
const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = hex_digit(bytes[0])?;
    let lo = hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding to nearest.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
