//! Adaptive tonal scales: colors chosen by contrast, not by lightness.
//!
//! A palette is a set of named color scales. Each scale has a few color
//! keys (anchors the ramp passes through) and a list of target contrast
//! ratios. Rendering the palette at a given background brightness answers:
//! "for each target ratio, which color on this scale's ramp sits exactly
//! that far from the background?" Changing brightness (light mode vs dark
//! mode) re-derives every color while keeping the contrast relationships.
//!
//! # Algorithm
//!
//! ```text
//! base scale key ──set L = brightness/100──▶ background
//!
//! scale keys ──sort by OKLCH L──▶ white ─ key ─ key ─ key ─ black   (ramp)
//!
//! for each ratio r:
//!     r' = (r - 1) · contrast + 1                 (contrast multiplier)
//!     walk the ramp away from the background      (darker if bg L ≥ 0.5)
//!     coarse scan → first sample with ratio ≥ r'
//!     bisection between the last miss and the hit
//! ```
//!
//! Contrast is always measured on the quantized 8-bit color, so a reported
//! value is exactly what a caller re-measuring the hex string will see.

use n_color::{Color, Rgb, contrast_ratio};
use serde::Serialize;
use tracing::trace;

use crate::error::{Result, ThemeError};

/// Coarse samples along the readable half of a ramp.
const SCAN_STEPS: u16 = 64;

/// Bisection rounds after the coarse scan brackets the target.
const REFINE_STEPS: u16 = 16;

// ---------------------------------------------------------------------------
// Palette description
// ---------------------------------------------------------------------------

/// One scale of a palette.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScaleSpec {
    pub name: String,
    /// Hex colors the ramp passes through. Order does not matter.
    pub color_keys: Vec<String>,
    /// Target contrast ratios against the background, in output order.
    pub ratios: Vec<f64>,
}

/// Everything the engine needs to render a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteSpec {
    /// Name of the scale (among `color_scales`) whose first key becomes
    /// the background.
    pub base_scale: String,
    pub color_scales: Vec<ColorScaleSpec>,
}

impl PaletteSpec {
    /// Look up a scale by name.
    #[must_use]
    pub fn scale(&self, name: &str) -> Option<&ColorScaleSpec> {
        self.color_scales.iter().find(|s| s.name == name)
    }
}

// ---------------------------------------------------------------------------
// Rendered output
// ---------------------------------------------------------------------------

/// One rendered color: `color300`, its measured contrast, its hex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleValue {
    pub name: String,
    pub contrast: f64,
    pub value: String,
}

/// A rendered scale, values in the same order as the scale's ratios.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleEntry {
    pub name: String,
    pub values: Vec<ScaleValue>,
}

// ---------------------------------------------------------------------------
// Engine seam
// ---------------------------------------------------------------------------

/// Renders a palette against a background of the given brightness.
pub trait AdaptiveThemeEngine {
    /// Render every scale of `palette`.
    ///
    /// - `brightness`: background lightness, 0 (black) to 100 (white)
    /// - `contrast`: multiplier applied to every ratio above 1 (`None` = 1)
    ///
    /// The base scale comes first in the output, followed by the remaining
    /// scales in palette order.
    ///
    /// # Errors
    ///
    /// Implementations reject out-of-range parameters and malformed
    /// palettes with a [`ThemeError`].
    fn render(
        &self,
        palette: &PaletteSpec,
        brightness: f64,
        contrast: Option<f64>,
    ) -> Result<Vec<ScaleEntry>>;
}

impl<E: AdaptiveThemeEngine + ?Sized> AdaptiveThemeEngine for &E {
    fn render(
        &self,
        palette: &PaletteSpec,
        brightness: f64,
        contrast: Option<f64>,
    ) -> Result<Vec<ScaleEntry>> {
        (**self).render(palette, brightness, contrast)
    }
}

/// The default engine: OKLCH lightness ramps searched by contrast.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContrastScaleEngine;

impl AdaptiveThemeEngine for ContrastScaleEngine {
    fn render(
        &self,
        palette: &PaletteSpec,
        brightness: f64,
        contrast: Option<f64>,
    ) -> Result<Vec<ScaleEntry>> {
        if !(0.0..=100.0).contains(&brightness) {
            return Err(ThemeError::Brightness { value: brightness });
        }
        let multiplier = contrast.unwrap_or(1.0);
        if multiplier.is_nan() || multiplier < 1.0 {
            return Err(ThemeError::Contrast { value: multiplier });
        }

        let base = palette
            .scale(&palette.base_scale)
            .ok_or_else(|| ThemeError::MissingBaseScale {
                name: palette.base_scale.clone(),
            })?;
        let background = background(base, brightness)?;
        let darker = Color::from_rgb(background).l >= 0.5;

        std::iter::once(base)
            .chain(palette.color_scales.iter().filter(|s| s.name != base.name))
            .map(|scale| render_scale(scale, background, multiplier, darker))
            .collect()
    }
}

/// Apply a contrast multiplier to a target ratio. Ratios at or below 1
/// (the background itself) are left alone.
#[must_use]
pub fn adjust_ratio(ratio: f64, multiplier: f64) -> f64 {
    if ratio > 1.0 {
        (ratio - 1.0).mul_add(multiplier, 1.0)
    } else {
        ratio
    }
}

#[allow(clippy::cast_possible_truncation)]
fn background(base: &ColorScaleSpec, brightness: f64) -> Result<Rgb> {
    let key = base
        .color_keys
        .first()
        .ok_or_else(|| ThemeError::EmptyColorKeys {
            scale: base.name.clone(),
        })?;
    Ok(Color::hex(key)?
        .set_lightness((brightness / 100.0) as f32)
        .to_gamut()
        .to_rgb())
}

fn render_scale(
    scale: &ColorScaleSpec,
    background: Rgb,
    multiplier: f64,
    darker: bool,
) -> Result<ScaleEntry> {
    if scale.color_keys.is_empty() {
        return Err(ThemeError::EmptyColorKeys {
            scale: scale.name.clone(),
        });
    }
    let keys = scale
        .color_keys
        .iter()
        .map(|key| Color::hex(key))
        .collect::<n_color::error::Result<Vec<_>>>()?;
    let ramp = ToneRamp::new(&keys);

    let values = scale
        .ratios
        .iter()
        .enumerate()
        .map(|(i, &ratio)| {
            let target = adjust_ratio(ratio, multiplier);
            let (rgb, achieved) = ramp.find(background, target, darker);
            if achieved < target {
                trace!(scale = %scale.name, wanted = target, achieved, "ratio out of reach, clamped to ramp end");
            }
            ScaleValue {
                name: format!("{}{}", scale.name, (i + 1) * 100),
                contrast: achieved,
                value: rgb.to_hex(),
            }
        })
        .collect();

    Ok(ScaleEntry {
        name: scale.name.clone(),
        values,
    })
}

// ---------------------------------------------------------------------------
// ToneRamp
// ---------------------------------------------------------------------------

/// White → keys → black, ordered by descending OKLCH lightness.
struct ToneRamp {
    stops: Vec<Color>,
}

impl ToneRamp {
    fn new(keys: &[Color]) -> Self {
        let mut stops = Vec::with_capacity(keys.len() + 2);
        stops.push(Color::WHITE);
        stops.extend_from_slice(keys);
        stops.push(Color::BLACK);
        stops.sort_by(|a, b| b.l.total_cmp(&a.l));
        Self { stops }
    }

    /// The in-gamut ramp color at `lightness`.
    fn at(&self, lightness: f32) -> Color {
        let l = lightness.clamp(0.0, 1.0);
        for pair in self.stops.windows(2) {
            let (upper, lower) = (pair[0], pair[1]);
            if l <= upper.l && l >= lower.l {
                let span = upper.l - lower.l;
                let t = if span < 1e-6 { 0.0 } else { (upper.l - l) / span };
                return upper.mix(&lower, t).set_lightness(l).to_gamut();
            }
        }
        // Float noise just past either end of the ramp.
        let end = if l > 0.5 {
            self.stops[0]
        } else {
            self.stops[self.stops.len() - 1]
        };
        end.set_lightness(l).to_gamut()
    }

    /// Color whose contrast against `background` is closest to `target`
    /// from above, walking away from the background's lightness. Returns
    /// the ramp's extreme when the target is out of reach.
    fn find(&self, background: Rgb, target: f64, darker: bool) -> (Rgb, f64) {
        let start = Color::from_rgb(background).l;
        let end: f32 = if darker { 0.0 } else { 1.0 };
        let probe = |t: f32| {
            let rgb = self.at((end - start).mul_add(t, start)).to_rgb();
            (rgb, contrast_ratio(rgb, background))
        };

        let mut miss = 0.0f32;
        let mut hit = None;
        for k in 0..=SCAN_STEPS {
            let t = f32::from(k) / f32::from(SCAN_STEPS);
            let sample = probe(t);
            if sample.1 >= target {
                hit = Some((t, sample));
                break;
            }
            miss = t;
        }

        let Some((mut above, mut best)) = hit else {
            return probe(1.0);
        };
        if above <= 0.0 {
            return best;
        }

        for _ in 0..REFINE_STEPS {
            let mid = (miss + above) * 0.5;
            let sample = probe(mid);
            if sample.1 >= target {
                above = mid;
                best = sample;
            } else {
                miss = mid;
            }
        }
        best
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
