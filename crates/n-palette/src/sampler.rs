// SPDX-License-Identifier: MIT
//
// Random seed colors.
//
// Each band is a box in HSL space. A seed is three independent uniform
// integer draws (hue, saturation, lightness), each range inclusive,
// converted to a canonical `#RRGGBB` string.
//
//   band    hue       saturation  lightness
//   pastel  [0, 360]  [25, 100]   [75, 95]
//   light   [0, 360]  [50, 100]   [45, 100]
//   dark    [0, 360]  [0, 100]    [0, 25]

use std::fmt;
use std::ops::RangeInclusive;

use n_color::{ColorError, hsl_to_hex, normalize_hex};
use rand::Rng;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Band
// ---------------------------------------------------------------------------

/// A sampling profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Pastel,
    Light,
    Dark,
}

/// Inclusive HSL ranges of a band (degrees, percent, percent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandRanges {
    pub hue: RangeInclusive<u16>,
    pub saturation: RangeInclusive<u8>,
    pub lightness: RangeInclusive<u8>,
}

impl Band {
    /// Generation order.
    pub const ALL: [Self; 3] = [Self::Pastel, Self::Light, Self::Dark];

    #[must_use]
    pub const fn ranges(self) -> BandRanges {
        match self {
            Self::Pastel => BandRanges {
                hue: 0..=360,
                saturation: 25..=100,
                lightness: 75..=95,
            },
            Self::Light => BandRanges {
                hue: 0..=360,
                saturation: 50..=100,
                lightness: 45..=100,
            },
            Self::Dark => BandRanges {
                hue: 0..=360,
                saturation: 0..=100,
                lightness: 0..=25,
            },
        }
    }

    /// Dark seeds take their text from the dark-mode scale.
    #[must_use]
    pub const fn uses_inverse(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pastel => "pastel",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// SeedColor
// ---------------------------------------------------------------------------

/// A canonical `#RRGGBB` color drawn from a band.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SeedColor(String);

impl SeedColor {
    /// Wrap an existing hex color, normalizing it.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] if `hex` is not a hex color.
    pub fn new(hex: &str) -> Result<Self, ColorError> {
        normalize_hex(hex).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for SeedColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Draw one seed from `band`.
pub fn sample_band<R: Rng + ?Sized>(band: Band, rng: &mut R) -> SeedColor {
    let ranges = band.ranges();
    let h = rng.random_range(ranges.hue);
    let s = rng.random_range(ranges.saturation);
    let l = rng.random_range(ranges.lightness);
    SeedColor(hsl_to_hex(h, s, l))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
