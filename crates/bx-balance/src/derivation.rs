//! Algebra record behind a solved sugar addition.
//!
//! Captures the substituted solids-balance equation so display layers can
//! show how the sugar mass was obtained.

use crate::balance::{SolveRequest, SolveResult};
use std::fmt;

/// Substituted derivation of the closed-form sugar mass.
///
/// Built from a request and its already-validated result, so construction
/// is infallible.
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    pub m1_kg: f64,
    pub initial_brix_pct: f64,
    pub final_brix_pct: f64,
    /// Initial concentration as a mass fraction.
    pub c1: f64,
    /// Target concentration as a mass fraction.
    pub c2: f64,
    pub sugar_kg: f64,
    pub final_kg: f64,
}

impl Derivation {
    pub fn new(req: &SolveRequest, result: &SolveResult) -> Self {
        Self {
            m1_kg: req.initial_mass_kg(),
            initial_brix_pct: req.initial_brix_pct,
            final_brix_pct: req.final_brix_pct,
            c1: req.initial_brix_pct / 100.0,
            c2: req.final_brix_pct / 100.0,
            sugar_kg: result.sugar_to_add_kg(),
            final_kg: result.final_mass_kg(),
        }
    }

    /// Rendered derivation, one display line per step.
    pub fn lines(&self) -> Vec<String> {
        vec![
            "Solids balance (solids before + solids added = solids after):".to_string(),
            "  M1*C1 + A = (M1 + A)*C2".to_string(),
            "Solved for the sugar mass A:".to_string(),
            "  A = M1*(C2 - C1) / (1 - C2)".to_string(),
            format!(
                "Where M1 = {} kg, C1 = {}% = {}, C2 = {}% = {}",
                self.m1_kg, self.initial_brix_pct, self.c1, self.final_brix_pct, self.c2
            ),
            format!(
                "  A = {}*({} - {}) / (1 - {}) = {:.2} kg",
                self.m1_kg, self.c2, self.c1, self.c2, self.sugar_kg
            ),
            format!("Final batch mass: M1 + A = {:.2} kg", self.final_kg),
        ]
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::solve;

    #[test]
    fn derivation_substitutes_the_inputs() {
        let req = SolveRequest::new(50.0, 7.0, 10.0);
        let result = solve(&req).unwrap();
        let derivation = Derivation::new(&req, &result);

        assert_eq!(derivation.c1, 0.07);
        assert_eq!(derivation.c2, 0.1);

        let text = derivation.to_string();
        assert!(text.contains("A = M1*(C2 - C1) / (1 - C2)"));
        assert!(text.contains("50"));
        assert!(text.contains("1.67 kg"));
        assert!(text.contains("51.67 kg"));
    }

    #[test]
    fn one_line_per_step() {
        let req = SolveRequest::new(100.0, 5.0, 12.0);
        let result = solve(&req).unwrap();
        let derivation = Derivation::new(&req, &result);

        let lines = derivation.lines();
        assert_eq!(lines.len(), 7);
        assert_eq!(derivation.to_string().lines().count(), lines.len());
    }
}
