// SPDX-License-Identifier: MIT
//
// n-palette — random background/text pairs with a contrast guarantee.
//
// Three bands of random seed colors (pastel, light, dark). For each band a
// seed is drawn, turned into two tone scales by n-theme, and paired with the
// first scale step that reaches WCAG AA against it. Seeds without such a
// step are discarded and re-drawn. The result is six variants: each band's
// pair and its inversion, optionally expanded into gradients.
//
//   sampler.rs   → Band, SeedColor, sample_band
//   options.rs   → GeneratorOptions, overrides, merge
//   variant.rs   → VariantGenerator, ColorValue, VariantResult
//   generator.rs → PaletteGenerator, PaletteResult, generate_palette
//   error.rs     → PaletteError

pub mod error;
pub mod generator;
pub mod options;
pub mod sampler;
pub mod variant;

pub use error::PaletteError;
pub use generator::{PaletteGenerator, PaletteResult, generate_palette};
pub use options::{GeneratorOptions, GeneratorOverrides, GradientOptions, GradientOverrides};
pub use sampler::{Band, SeedColor, sample_band};
pub use variant::{ColorValue, VariantGenerator, VariantPair, VariantResult};
