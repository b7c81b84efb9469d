//! Evolver configuration, validation, and error types.
//!
//! [`EvolverConfig`] carries the scalar knobs of a run. [`validate()`]
//! checks them on their own; the evolver constructor additionally checks
//! that the label field and the speed functor's data fields cover the
//! domain.
//!
//! [`validate()`]: EvolverConfig::validate

use frontier_core::FieldError;
use thiserror::Error;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Band width is not in `(0, 1]`.
    #[error("band width must be in (0, 1], got {value}")]
    InvalidBandWidth {
        /// The invalid value.
        value: f64,
    },
    /// Maximum time step is NaN, infinite, zero, or negative.
    #[error("max time step must be finite and positive, got {value}")]
    InvalidTimeStep {
        /// The invalid value.
        value: f64,
    },
    /// Seed search budget is zero.
    #[error("seed search budget must be at least 1")]
    ZeroSearchBudget,
    /// A per-point field does not cover the domain.
    #[error("{field} does not match the domain")]
    FieldSize {
        /// Which field.
        field: &'static str,
        /// Underlying size error.
        #[source]
        source: FieldError,
    },
}

// ── EvolverConfig ──────────────────────────────────────────────────

/// Scalar parameters of a frontier evolution.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvolverConfig {
    /// Width `w` of the flipping band. Default: 1.0. Must be in `(0, 1]`.
    pub band_width: f64,
    /// Upper bound on the time step. `None` = bounded only by the CFL-like
    /// rule `w / max|v|`.
    pub max_time_step: Option<f64>,
    /// Number of point pairs sampled by the seed search. Default: 10 000.
    pub search_budget: usize,
}

impl Default for EvolverConfig {
    fn default() -> Self {
        Self {
            band_width: 1.0,
            max_time_step: None,
            search_budget: 10_000,
        }
    }
}

impl EvolverConfig {
    /// Config with the given band width and defaults elsewhere.
    pub fn with_band_width(band_width: f64) -> Self {
        Self {
            band_width,
            ..Self::default()
        }
    }

    /// Half the band width: the flip threshold on the time field.
    pub fn half_band(&self) -> f64 {
        self.band_width / 2.0
    }

    /// Validate all scalar invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = self.band_width;
        if !w.is_finite() || w <= 0.0 || w > 1.0 {
            return Err(ConfigError::InvalidBandWidth { value: w });
        }
        if let Some(dt) = self.max_time_step {
            if !dt.is_finite() || dt <= 0.0 {
                return Err(ConfigError::InvalidTimeStep { value: dt });
            }
        }
        if self.search_budget == 0 {
            return Err(ConfigError::ZeroSearchBudget);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = EvolverConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.half_band(), 0.5);
    }

    #[test]
    fn band_width_bounds() {
        assert!(EvolverConfig::with_band_width(1.0).validate().is_ok());
        assert!(EvolverConfig::with_band_width(0.1).validate().is_ok());
        for w in [0.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    EvolverConfig::with_band_width(w).validate(),
                    Err(ConfigError::InvalidBandWidth { .. })
                ),
                "band width {w} accepted"
            );
        }
    }

    #[test]
    fn time_step_must_be_positive() {
        for dt in [0.0, -1.0, f64::NAN] {
            let c = EvolverConfig {
                max_time_step: Some(dt),
                ..EvolverConfig::default()
            };
            assert!(matches!(
                c.validate(),
                Err(ConfigError::InvalidTimeStep { .. })
            ));
        }
        let c = EvolverConfig {
            max_time_step: Some(0.25),
            ..EvolverConfig::default()
        };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_budget_rejected() {
        let c = EvolverConfig {
            search_budget: 0,
            ..EvolverConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::ZeroSearchBudget));
    }

    #[test]
    fn error_messages() {
        let e = ConfigError::InvalidBandWidth { value: 2.0 };
        assert_eq!(e.to_string(), "band width must be in (0, 1], got 2");
        let e = ConfigError::FieldSize {
            field: "labels",
            source: FieldError::LengthMismatch {
                expected: 4,
                actual: 3,
            },
        };
        assert!(std::error::Error::source(&e).is_some());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_uses_defaults() {
        let c: EvolverConfig = serde_json::from_str(r#"{"band_width": 0.5}"#).unwrap();
        assert_eq!(c.band_width, 0.5);
        assert_eq!(c.search_budget, 10_000);
        assert_eq!(c.max_time_step, None);
    }
}
