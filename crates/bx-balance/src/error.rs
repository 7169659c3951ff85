//! Validation errors for the mass-balance solver.

use bx_core::BxError;
use thiserror::Error;

/// Result type for balance operations.
pub type BalanceResult<T> = Result<T, ValidationError>;

/// Rejected inputs. Every variant is detected before any arithmetic runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// NaN or infinite input.
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Pulp mass must be strictly positive.
    #[error("Initial mass must be positive (got {mass_kg} kg)")]
    NonPositiveMass { mass_kg: f64 },

    /// Concentrations are percentages by mass.
    #[error("{what} must be within [0, 100] % (got {value})")]
    BrixOutOfRange { what: &'static str, value: f64 },

    /// A sugar addition can only raise the concentration.
    #[error(
        "Final concentration ({final_pct}%) must exceed initial concentration ({initial_pct}%)"
    )]
    TargetNotAboveInitial { initial_pct: f64, final_pct: f64 },

    /// At 100 % the balance denominator (1 - C2) vanishes.
    #[error("Final concentration must be below 100% (got {final_pct}%)")]
    TargetAtSaturation { final_pct: f64 },
}

impl From<ValidationError> for BxError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::NonFinite { what, value } => BxError::NonFinite { what, value },
            ValidationError::NonPositiveMass { mass_kg } => BxError::InvalidArg {
                what: Box::leak(
                    format!("Initial mass must be positive (got {} kg)", mass_kg).into_boxed_str(),
                ),
            },
            ValidationError::BrixOutOfRange { what, value } => BxError::InvalidArg {
                what: Box::leak(format!("{} out of range: {}", what, value).into_boxed_str()),
            },
            ValidationError::TargetNotAboveInitial {
                initial_pct,
                final_pct,
            } => BxError::InvalidArg {
                what: Box::leak(
                    format!(
                        "Final concentration {}% not above initial {}%",
                        final_pct, initial_pct
                    )
                    .into_boxed_str(),
                ),
            },
            ValidationError::TargetAtSaturation { final_pct } => BxError::InvalidArg {
                what: Box::leak(
                    format!("Final concentration {}% at or above saturation", final_pct)
                        .into_boxed_str(),
                ),
            },
        }
    }
}
