// SPDX-License-Identifier: MIT
//
// One seed → (normal, inverted) background/text pair.
//
// The seed is the normal background. Its text is the first step of a tone
// scale (light-mode `colors`, or dark-mode `inverse` for dark seeds) that
// reaches WCAG AA against it. The inverted variant swaps the two. When no
// step qualifies the seed is rejected with `Ok(None)` and the caller draws
// a new one.
//
// Gradients are decided after the contrast check and never change it:
//
//   normal bg     seed → darken 0.2       normal text    text → lighten 0.2
//   inverted bg   text → lighten 0.2      inverted text  seed → darken 0.2

use n_color::{WCAG_AA_NORMAL, contrast_ratio_hex, darken, interpolate_scale, lighten};
use n_theme::builder::{RawTheme, ThemeScales};
use n_theme::{AdaptiveThemeEngine, ThemeBuilder, select_text};
use serde::Serialize;
use tracing::trace;

use crate::error::Result;
use crate::options::GradientOptions;
use crate::sampler::SeedColor;

/// HSL lightness distance between the two ends of a gradient.
const GRADIENT_SPREAD: f64 = 0.2;

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// A single hex color, or the stops of a gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColorValue {
    Solid(String),
    Gradient(Vec<String>),
}

impl ColorValue {
    /// The solid color, or the first gradient stop.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Solid(hex) => Some(hex),
            Self::Gradient(stops) => stops.first().map(String::as_str),
        }
    }

    #[must_use]
    pub fn as_solid(&self) -> Option<&str> {
        match self {
            Self::Solid(hex) => Some(hex),
            Self::Gradient(_) => None,
        }
    }

    #[must_use]
    pub const fn is_gradient(&self) -> bool {
        matches!(self, Self::Gradient(_))
    }
}

/// One background/text pairing and the theme it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantResult {
    pub bg: ColorValue,
    pub text: ColorValue,
    pub theme: ThemeScales,
    pub raw: RawTheme,
}

/// A variant and its inversion. Both carry the same theme data.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantPair {
    pub normal: VariantResult,
    pub inverted: VariantResult,
}

#[derive(Clone, Copy)]
enum Shade {
    Lighter,
    Darker,
}

// ---------------------------------------------------------------------------
// VariantGenerator
// ---------------------------------------------------------------------------

/// Builds variant pairs with a borrowed [`ThemeBuilder`].
#[derive(Debug)]
pub struct VariantGenerator<'a, E> {
    builder: &'a ThemeBuilder<E>,
    threshold: f64,
}

impl<'a, E: AdaptiveThemeEngine> VariantGenerator<'a, E> {
    /// A generator requiring WCAG AA normal-text contrast.
    #[must_use]
    pub const fn new(builder: &'a ThemeBuilder<E>) -> Self {
        Self {
            builder,
            threshold: WCAG_AA_NORMAL,
        }
    }

    /// Override the contrast a text color must reach.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Pair `seed` with a readable text color.
    ///
    /// Returns `Ok(None)` when no step of the chosen scale reaches the
    /// threshold against `seed`.
    ///
    /// # Errors
    ///
    /// Theme builder and color math failures, unchanged.
    pub fn generate(
        &self,
        seed: &SeedColor,
        use_inverse: bool,
        gradient: &GradientOptions,
    ) -> Result<Option<VariantPair>> {
        let built = self.builder.build(seed.as_str())?;
        let scale = built.scale.pick(use_inverse);

        let Some(text) = select_text(&built.base, scale.as_slice(), self.threshold)? else {
            if let Some(fallback) = scale.canonical_text() {
                let ratio = contrast_ratio_hex(&built.base, fallback)?;
                trace!(%seed, use_inverse, fallback, ratio, "no readable step, seed rejected");
            }
            return Ok(None);
        };
        let text = text.to_owned();
        let bg = built.base;

        let normal = VariantResult {
            bg: expand(&bg, gradient.bg, gradient.steps, Shade::Darker)?,
            text: expand(&text, gradient.text, gradient.steps, Shade::Lighter)?,
            theme: built.scale.clone(),
            raw: built.raw.clone(),
        };
        let inverted = VariantResult {
            bg: expand(&text, gradient.bg, gradient.steps, Shade::Lighter)?,
            text: expand(&bg, gradient.text, gradient.steps, Shade::Darker)?,
            theme: built.scale,
            raw: built.raw,
        };
        Ok(Some(VariantPair { normal, inverted }))
    }
}

fn expand(hex: &str, enabled: bool, steps: usize, shade: Shade) -> Result<ColorValue> {
    if !enabled {
        return Ok(ColorValue::Solid(hex.to_owned()));
    }
    let end = match shade {
        Shade::Lighter => lighten(GRADIENT_SPREAD, hex)?,
        Shade::Darker => darken(GRADIENT_SPREAD, hex)?,
    };
    Ok(ColorValue::Gradient(interpolate_scale(&[hex, &end], steps)?))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
