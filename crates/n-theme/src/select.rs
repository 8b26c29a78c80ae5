//! Text color selection by contrast threshold.
//!
//! Candidates come from a tone scale, which is ordered by ascending target
//! ratio. Taking the *first* qualifying candidate therefore picks the
//! gentlest color that is still readable, rather than always jumping to
//! near-black or near-white.

use n_color::{Rgb, contrast_ratio};

use crate::error::Result;

/// Every candidate whose contrast against `bg` is at least `threshold`,
/// in original order. Candidates that do not parse never qualify.
///
/// # Errors
///
/// Returns [`crate::ThemeError::Color`] if `bg` does not parse.
pub fn valid_contrast<'a, S: AsRef<str>>(
    bg: &str,
    candidates: &'a [S],
    threshold: f64,
) -> Result<Vec<&'a str>> {
    let bg = Rgb::parse(bg)?;
    Ok(candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|candidate| meets(bg, candidate, threshold))
        .collect())
}

/// The first candidate whose contrast against `bg` is at least
/// `threshold`, or `None` if no candidate qualifies.
///
/// Pure and deterministic: the same inputs always select the same color.
///
/// # Errors
///
/// Returns [`crate::ThemeError::Color`] if `bg` does not parse.
pub fn select_text<'a, S: AsRef<str>>(
    bg: &str,
    candidates: &'a [S],
    threshold: f64,
) -> Result<Option<&'a str>> {
    let bg = Rgb::parse(bg)?;
    Ok(candidates
        .iter()
        .map(AsRef::as_ref)
        .find(|candidate| meets(bg, candidate, threshold)))
}

fn meets(bg: Rgb, candidate: &str, threshold: f64) -> bool {
    Rgb::parse(candidate).is_ok_and(|fg| contrast_ratio(bg, fg) >= threshold)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use n_color::WCAG_AA_NORMAL;
    use pretty_assertions::assert_eq;

    // White background; grays in ascending contrast.
    //   #EEEEEE ≈ 1.2, #949494 ≈ 3.0, #767676 ≈ 4.5, #595959 ≈ 7.0, #000000 = 21
    const GRAYS: [&str; 5] = ["#EEEEEE", "#949494", "#767676", "#595959", "#000000"];

    #[test]
    fn picks_first_qualifying_candidate() {
        let text = select_text("#FFFFFF", &GRAYS, WCAG_AA_NORMAL).unwrap();
        assert_eq!(text, Some("#767676"));
    }

    #[test]
    fn higher_threshold_moves_down_the_scale() {
        let text = select_text("#FFFFFF", &GRAYS, 7.0).unwrap();
        assert_eq!(text, Some("#595959"));
    }

    #[test]
    fn none_when_nothing_qualifies() {
        let text = select_text("#FFFFFF", &GRAYS[..2], WCAG_AA_NORMAL).unwrap();
        assert_eq!(text, None);
    }

    #[test]
    fn empty_candidates_select_nothing() {
        let empty: [&str; 0] = [];
        assert_eq!(select_text("#000000", &empty, 1.0).unwrap(), None);
    }

    #[test]
    fn selection_is_idempotent() {
        let candidates: Vec<String> = GRAYS.iter().map(|s| (*s).to_owned()).collect();
        let first = select_text("#3366CC", &candidates, WCAG_AA_NORMAL).unwrap();
        for _ in 0..10 {
            assert_eq!(select_text("#3366CC", &candidates, WCAG_AA_NORMAL).unwrap(), first);
        }
    }

    #[test]
    fn unparseable_candidates_are_skipped() {
        let candidates = ["not-a-color", "#000000"];
        assert_eq!(
            select_text("#FFFFFF", &candidates, WCAG_AA_NORMAL).unwrap(),
            Some("#000000")
        );
    }

    #[test]
    fn bad_background_is_an_error() {
        assert!(select_text("#GGGGGG", &GRAYS, WCAG_AA_NORMAL).is_err());
        assert!(valid_contrast("", &GRAYS, WCAG_AA_NORMAL).is_err());
    }

    #[test]
    fn valid_contrast_keeps_order() {
        let valid = valid_contrast("#FFFFFF", &GRAYS, WCAG_AA_NORMAL).unwrap();
        assert_eq!(valid, ["#767676", "#595959", "#000000"]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let ratio = n_color::contrast_ratio_hex("#FFFFFF", "#767676").unwrap();
        let text = select_text("#FFFFFF", &["#767676"], ratio).unwrap();
        assert_eq!(text, Some("#767676"));
    }
}
