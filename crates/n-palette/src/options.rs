// SPDX-License-Identifier: MIT
//
// Generator options: const defaults, optional overrides, pure merge.

use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};

/// Attempts per band before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Which colors of a variant are expanded into gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientOptions {
    /// Stops per gradient. Must be at least 1.
    pub steps: usize,
    /// Expand backgrounds.
    pub bg: bool,
    /// Expand text colors.
    pub text: bool,
}

impl GradientOptions {
    pub const DEFAULT: Self = Self {
        steps: 2,
        bg: false,
        text: false,
    };
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Options for one palette run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    pub gradient: GradientOptions,
    /// Seeds tried per band before [`PaletteError::Exhausted`].
    pub max_attempts: u32,
}

impl GeneratorOptions {
    pub const DEFAULT: Self = Self {
        gradient: GradientOptions::DEFAULT,
        max_attempts: DEFAULT_MAX_ATTEMPTS,
    };

    /// A copy of `self` with every field `overrides` sets replaced.
    #[must_use]
    pub fn merge(&self, overrides: &GeneratorOverrides) -> Self {
        let gradient = &overrides.gradient;
        Self {
            gradient: GradientOptions {
                steps: gradient.steps.unwrap_or(self.gradient.steps),
                bg: gradient.bg.unwrap_or(self.gradient.bg),
                text: gradient.text.unwrap_or(self.gradient.text),
            },
            max_attempts: overrides.max_attempts.unwrap_or(self.max_attempts),
        }
    }

    /// # Errors
    ///
    /// [`PaletteError::InvalidOptions`] for zero gradient steps or zero
    /// attempts.
    pub fn validate(&self) -> Result<()> {
        if self.gradient.steps == 0 {
            return Err(PaletteError::InvalidOptions {
                field: "gradient.steps",
                reason: "must be at least 1",
            });
        }
        if self.max_attempts == 0 {
            return Err(PaletteError::InvalidOptions {
                field: "maxAttempts",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Optional replacements for [`GradientOptions`] fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GradientOverrides {
    pub steps: Option<usize>,
    pub bg: Option<bool>,
    pub text: Option<bool>,
}

/// Optional replacements for [`GeneratorOptions`] fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorOverrides {
    pub gradient: GradientOverrides,
    pub max_attempts: Option<u32>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let options = GeneratorOptions::default();
        assert_eq!(options.gradient.steps, 2);
        assert!(!options.gradient.bg);
        assert!(!options.gradient.text);
        assert_eq!(options.max_attempts, 10_000);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn empty_overrides_change_nothing() {
        let merged = GeneratorOptions::DEFAULT.merge(&GeneratorOverrides::default());
        assert_eq!(merged, GeneratorOptions::DEFAULT);
    }

    #[test]
    fn merge_is_field_by_field() {
        let overrides = GeneratorOverrides {
            gradient: GradientOverrides {
                bg: Some(true),
                ..GradientOverrides::default()
            },
            max_attempts: Some(5),
        };
        let merged = GeneratorOptions::DEFAULT.merge(&overrides);
        assert_eq!(
            merged,
            GeneratorOptions {
                gradient: GradientOptions {
                    steps: 2,
                    bg: true,
                    text: false,
                },
                max_attempts: 5,
            }
        );
    }

    #[test]
    fn overrides_parse_partial_json() {
        let overrides: GeneratorOverrides =
            serde_json::from_str(r#"{ "gradient": { "steps": 5 }, "maxAttempts": 100 }"#).unwrap();
        assert_eq!(overrides.gradient.steps, Some(5));
        assert_eq!(overrides.gradient.text, None);
        assert_eq!(overrides.max_attempts, Some(100));

        let empty: GeneratorOverrides = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, GeneratorOverrides::default());
    }

    #[test]
    fn zero_steps_rejected() {
        let options = GeneratorOptions {
            gradient: GradientOptions {
                steps: 0,
                ..GradientOptions::DEFAULT
            },
            ..GeneratorOptions::DEFAULT
        };
        assert_eq!(
            options.validate(),
            Err(PaletteError::InvalidOptions {
                field: "gradient.steps",
                reason: "must be at least 1",
            })
        );
    }

    #[test]
    fn zero_attempts_rejected() {
        let options = GeneratorOptions {
            max_attempts: 0,
            ..GeneratorOptions::DEFAULT
        };
        assert!(matches!(
            options.validate(),
            Err(PaletteError::InvalidOptions { field: "maxAttempts", .. })
        ));
    }
}
