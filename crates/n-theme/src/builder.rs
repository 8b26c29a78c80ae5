//! Seed color → pair of tonal scales.
//!
//! A seed becomes three color keys (lighter, itself, darker). The keys are
//! rendered by an [`AdaptiveThemeEngine`] twice against the same base
//! color: once at light-mode brightness (`colors`), once at dark-mode
//! brightness with a stretched contrast (`inverse`). Each render yields a
//! nine-step [`ToneScale`] at the fixed [`SCALE_RATIOS`].

use std::borrow::Cow;

use n_color::{darken, lighten, normalize_hex};
use serde::{Deserialize, Serialize};

use crate::adaptive::{AdaptiveThemeEngine, ColorScaleSpec, ContrastScaleEngine, PaletteSpec, ScaleEntry, ScaleValue};
use crate::error::{Result, ThemeError};

/// Target contrast ratios of every tone scale, ascending.
pub const SCALE_RATIOS: [f64; 9] = [1.5, 2.0, 3.0, 4.5, 5.0, 6.0, 7.0, 8.0, 12.0];

/// Position of the conventional body-text step in a tone scale.
pub const CANONICAL_TEXT_INDEX: usize = 4;

/// Name of the background scale handed to the engine.
pub const BASE_SCALE: &str = "base";

/// Name of the seed-derived scale handed to the engine.
pub const COLOR_SCALE: &str = "color";

/// HSL lightness offset between the seed and its outer color keys.
const KEY_SPREAD: f64 = 0.3;

// ---------------------------------------------------------------------------
// ThemeConfig
// ---------------------------------------------------------------------------

/// Render parameters shared by every theme a builder produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Background key of the base scale.
    pub base_color: Cow<'static, str>,
    /// Contrast ratio of the base scale's single step.
    pub base_ratio: f64,
    /// Background brightness (0–100) for the `colors` scale.
    pub light_brightness: f64,
    /// Background brightness (0–100) for the `inverse` scale.
    pub dark_brightness: f64,
    /// Contrast multiplier for the `inverse` scale.
    pub dark_contrast: f64,
}

impl ThemeConfig {
    pub const DEFAULT: Self = Self {
        base_color: Cow::Borrowed("#FFFFFF"),
        base_ratio: 1.0,
        light_brightness: 95.0,
        dark_brightness: 20.0,
        dark_contrast: 1.3,
    };

    /// A copy of `self` with every field `overrides` sets replaced.
    #[must_use]
    pub fn merge(&self, overrides: &ThemeOverrides) -> Self {
        Self {
            base_color: overrides
                .base_color
                .clone()
                .map_or_else(|| self.base_color.clone(), Cow::Owned),
            base_ratio: overrides.base_ratio.unwrap_or(self.base_ratio),
            light_brightness: overrides.light_brightness.unwrap_or(self.light_brightness),
            dark_brightness: overrides.dark_brightness.unwrap_or(self.dark_brightness),
            dark_contrast: overrides.dark_contrast.unwrap_or(self.dark_contrast),
        }
    }

    /// Check ranges before anything is rendered.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::Color`] if `base_color` is not a hex color
    /// - [`ThemeError::Config`] if `base_ratio` is below 1
    /// - [`ThemeError::Brightness`] if either brightness leaves 0–100
    /// - [`ThemeError::Contrast`] if `dark_contrast` is below 1
    pub fn validate(&self) -> Result<()> {
        normalize_hex(&self.base_color)?;
        if self.base_ratio.is_nan() || self.base_ratio < 1.0 {
            return Err(ThemeError::Config {
                field: "baseRatio",
                reason: "must be at least 1",
            });
        }
        for brightness in [self.light_brightness, self.dark_brightness] {
            if !(0.0..=100.0).contains(&brightness) {
                return Err(ThemeError::Brightness { value: brightness });
            }
        }
        if self.dark_contrast.is_nan() || self.dark_contrast < 1.0 {
            return Err(ThemeError::Contrast {
                value: self.dark_contrast,
            });
        }
        Ok(())
    }

    fn palette(&self, keys: Vec<String>) -> PaletteSpec {
        PaletteSpec {
            base_scale: BASE_SCALE.to_owned(),
            color_scales: vec![
                ColorScaleSpec {
                    name: BASE_SCALE.to_owned(),
                    color_keys: vec![self.base_color.to_string()],
                    ratios: vec![self.base_ratio],
                },
                ColorScaleSpec {
                    name: COLOR_SCALE.to_owned(),
                    color_keys: keys,
                    ratios: SCALE_RATIOS.to_vec(),
                },
            ],
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Optional replacements for [`ThemeConfig`] fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeOverrides {
    pub base_color: Option<String>,
    pub base_ratio: Option<f64>,
    pub light_brightness: Option<f64>,
    pub dark_brightness: Option<f64>,
    pub dark_contrast: Option<f64>,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Hex colors at ascending contrast against the base.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ToneScale(Vec<String>);

impl ToneScale {
    /// The step conventionally used for body text, if the scale is long
    /// enough to have one.
    #[must_use]
    pub fn canonical_text(&self) -> Option<&str> {
        self.0.get(CANONICAL_TEXT_INDEX).map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    #[must_use]
    pub fn contains(&self, hex: &str) -> bool {
        self.0.iter().any(|c| c == hex)
    }

    fn from_values(values: &[ScaleValue]) -> Self {
        Self(values.iter().map(|v| v.value.clone()).collect())
    }
}

impl<'a> IntoIterator for &'a ToneScale {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The two scales derived from one seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeScales {
    /// Rendered at light-mode brightness.
    pub colors: ToneScale,
    /// Rendered at dark-mode brightness with stretched contrast.
    pub inverse: ToneScale,
}

impl ThemeScales {
    /// `inverse` when `use_inverse`, `colors` otherwise.
    #[must_use]
    pub const fn pick(&self, use_inverse: bool) -> &ToneScale {
        if use_inverse { &self.inverse } else { &self.colors }
    }
}

/// Engine-native values of the `color` scale, with measured contrast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawTheme {
    pub values: Vec<ScaleValue>,
    pub inverse: Vec<ScaleValue>,
}

/// Everything built from one seed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltTheme {
    /// The seed, normalized.
    pub base: String,
    #[serde(rename = "theme")]
    pub scale: ThemeScales,
    pub raw: RawTheme,
}

// ---------------------------------------------------------------------------
// ThemeBuilder
// ---------------------------------------------------------------------------

/// Builds [`BuiltTheme`]s from seeds with a fixed engine and config.
#[derive(Debug, Clone)]
pub struct ThemeBuilder<E = ContrastScaleEngine> {
    engine: E,
    config: ThemeConfig,
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self {
            engine: ContrastScaleEngine,
            config: ThemeConfig::DEFAULT,
        }
    }
}

impl<E: AdaptiveThemeEngine> ThemeBuilder<E> {
    /// # Errors
    ///
    /// Returns the first [`ThemeConfig::validate`] failure.
    pub fn new(engine: E, config: ThemeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { engine, config })
    }

    #[must_use]
    pub const fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub const fn engine(&self) -> &E {
        &self.engine
    }

    /// Render both tone scales for `seed`.
    ///
    /// # Errors
    ///
    /// Propagates seed parse failures and engine errors unchanged.
    pub fn build(&self, seed: &str) -> Result<BuiltTheme> {
        let base = normalize_hex(seed)?;
        let palette = self.config.palette(color_keys(&base)?);

        let values = color_values(
            self.engine
                .render(&palette, self.config.light_brightness, None)?,
        )?;
        let inverse = color_values(self.engine.render(
            &palette,
            self.config.dark_brightness,
            Some(self.config.dark_contrast),
        )?)?;

        Ok(BuiltTheme {
            base,
            scale: ThemeScales {
                colors: ToneScale::from_values(&values),
                inverse: ToneScale::from_values(&inverse),
            },
            raw: RawTheme { values, inverse },
        })
    }
}

/// Build once with the default engine and `config`.
///
/// # Errors
///
/// Returns the first [`ThemeConfig::validate`] failure, then see
/// [`ThemeBuilder::build`].
pub fn build_theme(seed: &str, config: &ThemeConfig) -> Result<BuiltTheme> {
    ThemeBuilder::new(ContrastScaleEngine, config.clone())?.build(seed)
}

/// `[lighten(0.3, seed), seed, darken(0.3, seed)]`, normalized.
///
/// # Errors
///
/// Returns [`ThemeError::Color`] if `seed` is not a hex color.
pub fn color_keys(seed: &str) -> Result<Vec<String>> {
    Ok(vec![
        lighten(KEY_SPREAD, seed)?,
        normalize_hex(seed)?,
        darken(KEY_SPREAD, seed)?,
    ])
}

fn color_values(entries: Vec<ScaleEntry>) -> Result<Vec<ScaleValue>> {
    entries
        .into_iter()
        .find(|entry| entry.name == COLOR_SCALE)
        .map(|entry| entry.values)
        .ok_or_else(|| ThemeError::MissingScale {
            name: COLOR_SCALE.to_owned(),
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
