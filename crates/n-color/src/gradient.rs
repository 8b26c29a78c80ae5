// SPDX-License-Identifier: MIT
//
// Evenly spaced color scales between hex stops.

use crate::error::{ColorError, Result};
use crate::rgb::Rgb;

/// Sample `steps` evenly spaced colors along a piecewise-linear sRGB scale
/// through `stops`.
///
/// The first sample is always the first stop and, for `steps >= 2`, the
/// last sample is the last stop. `steps == 1` yields just the first stop;
/// `steps == 0` yields an empty scale.
///
/// ```
/// use n_color::gradient::interpolate_scale;
///
/// let ramp = interpolate_scale(&["#000000", "#FFFFFF"], 3).unwrap();
/// assert_eq!(ramp, ["#000000", "#808080", "#FFFFFF"]);
/// ```
///
/// # Errors
///
/// Returns [`ColorError::EmptyScale`] when `stops` is empty and
/// [`ColorError::InvalidHex`] when a stop does not parse.
pub fn interpolate_scale(stops: &[&str], steps: usize) -> Result<Vec<String>> {
    let stops = stops
        .iter()
        .map(|s| Rgb::parse(s))
        .collect::<Result<Vec<_>>>()?;
    Ok(sample(&stops, steps)?.into_iter().map(Rgb::to_hex).collect())
}

/// [`interpolate_scale`] on parsed colors.
///
/// # Errors
///
/// Returns [`ColorError::EmptyScale`] when `stops` is empty.
#[allow(clippy::cast_precision_loss)]
pub fn sample(stops: &[Rgb], steps: usize) -> Result<Vec<Rgb>> {
    let (&first, &last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ColorError::EmptyScale),
    };

    Ok(match steps {
        0 => Vec::new(),
        1 => vec![first],
        _ => (0..steps)
            .map(|i| {
                if i + 1 == steps {
                    return last;
                }
                at(stops, i as f64 / (steps - 1) as f64)
            })
            .collect(),
    })
}

/// Color at position `t` (0.0–1.0) along the piecewise scale.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn at(stops: &[Rgb], t: f64) -> Rgb {
    if stops.len() == 1 {
        return stops[0];
    }
    let segments = (stops.len() - 1) as f64;
    let pos = t.clamp(0.0, 1.0) * segments;
    let idx = (pos.floor() as usize).min(stops.len() - 2);
    stops[idx].mix(stops[idx + 1], pos - idx as f64)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
