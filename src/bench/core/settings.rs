use super::PrecisionTier;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// When a completed solve has its candidate solution re-verified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValidationPolicy {
    /// Validate after every completed solve, whatever the engine reported
    #[default]
    Always,
    /// Validate only when the mapped status claims a solution
    SolutionPresent,
}

/// Settings shared by every benchmark adapter
///
/// Options left as `None` are distinct from an explicit `false`, but both
/// leave the corresponding behaviour off.

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BenchSettings {
    ///verbose printing of adapter diagnostics
    #[builder(default, setter(strip_option))]
    pub verbose: Option<bool>,

    ///maximum run time (seconds).  Exceeding it overrides the result status
    #[builder(default, setter(strip_option))]
    pub time_limit: Option<f64>,

    ///validate candidate solutions at the high precision tier
    #[builder(default, setter(strip_option))]
    pub high_accuracy: Option<bool>,

    ///which completed solves are re-verified
    #[builder(default)]
    pub validation_policy: ValidationPolicy,
}

impl Default for BenchSettings {
    fn default() -> BenchSettings {
        BenchSettingsBuilder::default().build().unwrap()
    }
}

impl BenchSettings {
    /// Checks that numerical fields hold legal values
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_time_limit(self.time_limit)
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }

    /// tolerance tier used when validating candidate solutions
    pub fn precision_tier(&self) -> PrecisionTier {
        if self.high_accuracy.unwrap_or(false) {
            PrecisionTier::High
        } else {
            PrecisionTier::Standard
        }
    }

    /// true if a time limit is set and `run_time` (seconds) exceeds it
    pub fn time_limit_exceeded(&self, run_time: f64) -> bool {
        self.time_limit.is_some_and(|limit| run_time > limit)
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for BenchSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        BenchSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl BenchSettingsBuilder {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(time_limit) = self.time_limit {
            validate_time_limit(time_limit)?;
        }
        Ok(())
    }
}

fn validate_time_limit(time_limit: Option<f64>) -> Result<(), SettingsError> {
    match time_limit {
        Some(t) if t.is_nan() || t <= 0.0 => Err(SettingsError::BadFieldValue("time_limit")),
        _ => Ok(()),
    }
}

#[test]
fn test_settings_validate() {
    let settings = BenchSettingsBuilder::default().build().unwrap();
    assert_eq!(settings, BenchSettings::default());
    assert!(!settings.is_verbose());
    assert_eq!(settings.precision_tier(), PrecisionTier::Standard);
    assert_eq!(settings.validation_policy, ValidationPolicy::Always);

    // fail on nonpositive or NaN time limits
    assert!(BenchSettingsBuilder::default().time_limit(0.0).build().is_err());
    assert!(BenchSettingsBuilder::default().time_limit(-1.0).build().is_err());
    assert!(BenchSettingsBuilder::default()
        .time_limit(f64::NAN)
        .build()
        .is_err());

    // directly construct a bad BenchSettings and manually check
    let settings = BenchSettings {
        time_limit: Some(-2.0),
        ..BenchSettings::default()
    };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("time_limit"))
    );
}

#[test]
fn test_settings_helpers() {
    let settings = BenchSettingsBuilder::default()
        .verbose(false)
        .high_accuracy(true)
        .time_limit(1.5)
        .build()
        .unwrap();

    // explicit false is recorded but still quiet
    assert_eq!(settings.verbose, Some(false));
    assert!(!settings.is_verbose());
    assert_eq!(settings.precision_tier(), PrecisionTier::High);
    assert!(!settings.time_limit_exceeded(1.5));
    assert!(settings.time_limit_exceeded(1.6));

    assert!(!BenchSettings::default().time_limit_exceeded(f64::MAX));
}
