//! Closed-form solids mass-balance solve for sugar addition.

use crate::error::{BalanceResult, ValidationError};
use bx_core::numeric::ensure_finite;
use bx_core::units::{Mass, kg};
use uom::si::mass::kilogram;

/// Inputs for one sugar-addition calculation.
///
/// Concentrations are soluble-solids percentages by mass (°Brix). The
/// request is a transient value: built from user input, consumed by
/// [`solve`], discarded after display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveRequest {
    /// Initial pulp mass.
    pub initial_mass: Mass,
    /// Measured soluble-solids concentration (%).
    pub initial_brix_pct: f64,
    /// Target soluble-solids concentration (%).
    pub final_brix_pct: f64,
}

impl SolveRequest {
    pub fn new(initial_mass_kg: f64, initial_brix_pct: f64, final_brix_pct: f64) -> Self {
        Self {
            initial_mass: kg(initial_mass_kg),
            initial_brix_pct,
            final_brix_pct,
        }
    }

    pub fn initial_mass_kg(&self) -> f64 {
        self.initial_mass.get::<kilogram>()
    }
}

/// Outcome of a successful solve, at full precision.
///
/// Rounding for display is owned by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveResult {
    /// Sucrose mass to add.
    pub sugar_to_add: Mass,
    /// Batch mass after the addition.
    pub final_mass: Mass,
}

impl SolveResult {
    pub fn sugar_to_add_kg(&self) -> f64 {
        self.sugar_to_add.get::<kilogram>()
    }

    pub fn final_mass_kg(&self) -> f64 {
        self.final_mass.get::<kilogram>()
    }
}

/// Ensure a value is finite, returning ValidationError if not.
fn check_finite(value: f64, what: &'static str) -> BalanceResult<()> {
    ensure_finite(value, what).map_err(|_| ValidationError::NonFinite { what, value })?;
    Ok(())
}

fn validate(req: &SolveRequest) -> BalanceResult<()> {
    let m1 = req.initial_mass_kg();
    check_finite(m1, "initial mass")?;
    check_finite(req.initial_brix_pct, "initial concentration")?;
    check_finite(req.final_brix_pct, "final concentration")?;

    if m1 <= 0.0 {
        return Err(ValidationError::NonPositiveMass { mass_kg: m1 });
    }
    if !(0.0..=100.0).contains(&req.initial_brix_pct) {
        return Err(ValidationError::BrixOutOfRange {
            what: "initial concentration",
            value: req.initial_brix_pct,
        });
    }
    if !(0.0..=100.0).contains(&req.final_brix_pct) {
        return Err(ValidationError::BrixOutOfRange {
            what: "final concentration",
            value: req.final_brix_pct,
        });
    }
    if req.final_brix_pct <= req.initial_brix_pct {
        return Err(ValidationError::TargetNotAboveInitial {
            initial_pct: req.initial_brix_pct,
            final_pct: req.final_brix_pct,
        });
    }
    // Denominator (1 - C2) must stay strictly positive
    if req.final_brix_pct >= 100.0 {
        return Err(ValidationError::TargetAtSaturation {
            final_pct: req.final_brix_pct,
        });
    }
    Ok(())
}

/// Solve the solids balance `M1*C1 + A = (M1 + A)*C2` for the sugar mass `A`.
///
/// Returns the sugar to add and the resulting batch mass. All
/// preconditions are checked before any arithmetic; a failed call leaves
/// nothing behind.
pub fn solve(req: &SolveRequest) -> BalanceResult<SolveResult> {
    validate(req)?;

    let m1 = req.initial_mass_kg();
    let c1 = req.initial_brix_pct / 100.0;
    let c2 = req.final_brix_pct / 100.0;

    // A = M1 * (C2 - C1) / (1 - C2)
    let sugar_kg = m1 * (c2 - c1) / (1.0 - c2);
    let final_kg = m1 + sugar_kg;

    tracing::debug!(sugar_kg, final_kg, "solved sugar addition");

    Ok(SolveResult {
        sugar_to_add: kg(sugar_kg),
        final_mass: kg(final_kg),
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use bx_core::numeric::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn sugar_is_nonnegative_and_masses_add_up(
            m1 in 0.1_f64..10_000.0,
            c1 in 0.0_f64..99.0,
            step in 0.001_f64..0.999,
        ) {
            let c2 = c1 + step * (100.0 - c1);
            prop_assume!(c2 > c1 && c2 < 100.0);

            let result = solve(&SolveRequest::new(m1, c1, c2)).unwrap();
            prop_assert!(result.sugar_to_add_kg() >= 0.0);

            let tol = Tolerances::default();
            prop_assert!(nearly_equal(
                result.final_mass_kg(),
                m1 + result.sugar_to_add_kg(),
                tol
            ));
        }

        #[test]
        fn solids_are_conserved(
            m1 in 0.1_f64..10_000.0,
            c1 in 0.0_f64..99.0,
            step in 0.001_f64..0.999,
        ) {
            let c2 = c1 + step * (100.0 - c1);
            prop_assume!(c2 > c1 && c2 < 100.0);

            let result = solve(&SolveRequest::new(m1, c1, c2)).unwrap();
            let sugar = result.sugar_to_add_kg();

            // Solids before + solids added = solids after
            let solids_in = m1 * c1 / 100.0 + sugar;
            let solids_out = (m1 + sugar) * c2 / 100.0;
            let tol = Tolerances { abs: 1e-12, rel: 1e-9 };
            prop_assert!(nearly_equal(solids_in, solids_out, tol));
        }
    }
}
