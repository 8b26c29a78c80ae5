// SPDX-License-Identifier: MIT
//
// The palette loop: per band, sample → build → select, re-sampling on
// rejection until a readable pair appears or the attempt budget runs out.
//
//   pastel ──▶ (pastel, invertedPastel)
//   light  ──▶ (light,  invertedLight)
//   dark   ──▶ (dark,   invertedDark)     text from the inverse scale
//
// Bands are independent and run in that order on one RNG.

use n_theme::{AdaptiveThemeEngine, ContrastScaleEngine, ThemeBuilder, ThemeConfig};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::error::{PaletteError, Result};
use crate::options::GeneratorOptions;
use crate::sampler::{Band, sample_band};
use crate::variant::{VariantGenerator, VariantPair, VariantResult};

/// Six readable variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteResult {
    pub pastel: VariantResult,
    pub light: VariantResult,
    pub dark: VariantResult,
    pub inverted_pastel: VariantResult,
    pub inverted_light: VariantResult,
    pub inverted_dark: VariantResult,
}

impl PaletteResult {
    /// Variants with their camelCase keys, normal variants first.
    #[must_use]
    pub fn variants(&self) -> [(&'static str, &VariantResult); 6] {
        [
            ("pastel", &self.pastel),
            ("light", &self.light),
            ("dark", &self.dark),
            ("invertedPastel", &self.inverted_pastel),
            ("invertedLight", &self.inverted_light),
            ("invertedDark", &self.inverted_dark),
        ]
    }
}

/// Generates palettes with one engine and theme config.
#[derive(Debug, Clone)]
pub struct PaletteGenerator<E = ContrastScaleEngine> {
    builder: ThemeBuilder<E>,
}

impl Default for PaletteGenerator {
    fn default() -> Self {
        Self {
            builder: ThemeBuilder::default(),
        }
    }
}

impl<E: AdaptiveThemeEngine> PaletteGenerator<E> {
    /// # Errors
    ///
    /// Returns [`PaletteError::Theme`] if `config` is invalid.
    pub fn new(engine: E, config: ThemeConfig) -> Result<Self> {
        Ok(Self {
            builder: ThemeBuilder::new(engine, config)?,
        })
    }

    #[must_use]
    pub const fn builder(&self) -> &ThemeBuilder<E> {
        &self.builder
    }

    /// Generate all three bands with `rng`.
    ///
    /// # Errors
    ///
    /// Invalid options, collaborator failures, or
    /// [`PaletteError::Exhausted`] from the first band that runs out.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        options: &GeneratorOptions,
        rng: &mut R,
    ) -> Result<PaletteResult> {
        let VariantPair {
            normal: pastel,
            inverted: inverted_pastel,
        } = self.generate_band(Band::Pastel, options, rng)?;
        let VariantPair {
            normal: light,
            inverted: inverted_light,
        } = self.generate_band(Band::Light, options, rng)?;
        let VariantPair {
            normal: dark,
            inverted: inverted_dark,
        } = self.generate_band(Band::Dark, options, rng)?;

        Ok(PaletteResult {
            pastel,
            light,
            dark,
            inverted_pastel,
            inverted_light,
            inverted_dark,
        })
    }

    /// Sample seeds from `band` until one has a readable text color.
    ///
    /// # Errors
    ///
    /// Invalid options, collaborator failures, or
    /// [`PaletteError::Exhausted`] after `options.max_attempts` rejections.
    #[instrument(skip_all, fields(band = %band))]
    pub fn generate_band<R: Rng + ?Sized>(
        &self,
        band: Band,
        options: &GeneratorOptions,
        rng: &mut R,
    ) -> Result<VariantPair> {
        options.validate()?;
        let variants = VariantGenerator::new(&self.builder);

        for attempt in 1..=options.max_attempts {
            let seed = sample_band(band, rng);
            if let Some(pair) = variants.generate(&seed, band.uses_inverse(), &options.gradient)? {
                debug!(%seed, attempt, "band resolved");
                return Ok(pair);
            }
        }

        warn!(attempts = options.max_attempts, "no readable seed found");
        Err(PaletteError::Exhausted {
            band,
            attempts: options.max_attempts,
        })
    }
}

/// Generate a palette with the thread-local RNG and the default engine.
///
/// # Errors
///
/// See [`PaletteGenerator::generate_with`].
pub fn generate_palette(options: &GeneratorOptions) -> Result<PaletteResult> {
    let generator: PaletteGenerator = PaletteGenerator::default();
    generator.generate_with(options, &mut rand::rng())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::ColorValue;
    use n_color::contrast_ratio_hex;
    use n_theme::ThemeError;
    use n_theme::adaptive::{PaletteSpec, ScaleEntry, ScaleValue};
    use n_theme::builder::COLOR_SCALE;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Echoes the seed back as every step, so nothing is ever readable.
    #[derive(Debug)]
    struct Echo;

    impl AdaptiveThemeEngine for Echo {
        fn render(
            &self,
            palette: &PaletteSpec,
            _brightness: f64,
            _contrast: Option<f64>,
        ) -> std::result::Result<Vec<ScaleEntry>, ThemeError> {
            let seed = palette
                .scale(COLOR_SCALE)
                .and_then(|scale| scale.color_keys.get(1))
                .cloned()
                .unwrap_or_default();
            let values = (1..=9)
                .map(|i| ScaleValue {
                    name: format!("color{}", i * 100),
                    contrast: 1.0,
                    value: seed.clone(),
                })
                .collect();
            Ok(vec![ScaleEntry {
                name: COLOR_SCALE.to_owned(),
                values,
            }])
        }
    }

    fn standard() -> PaletteGenerator {
        PaletteGenerator::default()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5EED)
    }

    fn solid(value: &ColorValue) -> &str {
        value.as_solid().unwrap()
    }

    #[test]
    fn every_variant_is_readable() {
        let palette = standard()
            .generate_with(&GeneratorOptions::DEFAULT, &mut rng())
            .unwrap();
        for (key, variant) in palette.variants() {
            let ratio = contrast_ratio_hex(solid(&variant.bg), solid(&variant.text)).unwrap();
            assert!(ratio >= 4.45, "{key}: {ratio}");
        }
    }

    #[test]
    fn inverted_variants_swap_colors() {
        let palette = standard()
            .generate_with(&GeneratorOptions::DEFAULT, &mut rng())
            .unwrap();
        let pairs = [
            (&palette.pastel, &palette.inverted_pastel),
            (&palette.light, &palette.inverted_light),
            (&palette.dark, &palette.inverted_dark),
        ];
        for (normal, inverted) in pairs {
            assert_eq!(inverted.bg, normal.text);
            assert_eq!(inverted.text, normal.bg);
            assert_eq!(inverted.theme, normal.theme);
        }
    }

    #[test]
    fn dark_text_comes_from_inverse_scale() {
        let palette = standard()
            .generate_with(&GeneratorOptions::DEFAULT, &mut rng())
            .unwrap();
        assert!(palette.dark.theme.inverse.contains(solid(&palette.dark.text)));
        assert!(palette.light.theme.colors.contains(solid(&palette.light.text)));
        assert!(palette.pastel.theme.colors.contains(solid(&palette.pastel.text)));
    }

    #[test]
    fn same_rng_seed_same_palette() {
        let generator = standard();
        let a = generator.generate_with(&GeneratorOptions::DEFAULT, &mut rng()).unwrap();
        let b = generator.generate_with(&GeneratorOptions::DEFAULT, &mut rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn exhaustion_reports_band_and_attempts() {
        let generator = PaletteGenerator::new(Echo, ThemeConfig::DEFAULT).unwrap();
        let options = GeneratorOptions {
            max_attempts: 3,
            ..GeneratorOptions::DEFAULT
        };
        let err = generator.generate_with(&options, &mut rng()).unwrap_err();
        assert_eq!(
            err,
            PaletteError::Exhausted {
                band: Band::Pastel,
                attempts: 3,
            }
        );
        assert_eq!(err.to_string(), "no readable pastel pair after 3 attempts");
    }

    #[test]
    fn single_band_generation() {
        let pair = standard()
            .generate_band(Band::Dark, &GeneratorOptions::DEFAULT, &mut rng())
            .unwrap();
        assert_eq!(pair.inverted.bg, pair.normal.text);
    }

    #[test]
    fn invalid_options_fail_before_sampling() {
        let options = GeneratorOptions {
            max_attempts: 0,
            ..GeneratorOptions::DEFAULT
        };
        let err = standard()
            .generate_with(&options, &mut rng())
            .unwrap_err();
        assert!(matches!(err, PaletteError::InvalidOptions { .. }));
    }

    #[test]
    fn invalid_theme_config_is_rejected() {
        let config = ThemeConfig {
            dark_contrast: 0.5,
            ..ThemeConfig::DEFAULT
        };
        assert!(matches!(
            PaletteGenerator::new(ContrastScaleEngine, config),
            Err(PaletteError::Theme(ThemeError::Contrast { .. }))
        ));
    }

    #[test]
    fn thread_rng_entry_point() {
        let palette = generate_palette(&GeneratorOptions::DEFAULT).unwrap();
        assert!(palette.variants().iter().all(|(_, v)| v.text.first().is_some()));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let palette = standard()
            .generate_with(&GeneratorOptions::DEFAULT, &mut rng())
            .unwrap();
        let json = serde_json::to_value(&palette).unwrap();
        for key in ["pastel", "light", "dark", "invertedPastel", "invertedLight", "invertedDark"] {
            assert!(json[key]["bg"].is_string(), "{key}");
            assert_eq!(json[key]["theme"]["colors"].as_array().unwrap().len(), 9);
        }
    }
}
