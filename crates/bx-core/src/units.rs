// bx-core/src/units.rs

use uom::si::f64::Mass as UomMass;

// Public canonical unit types (SI, f64)
pub type Mass = UomMass;

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

pub mod constants {
    // Documented defaults of the calculator input form
    pub const DEFAULT_PULP_MASS_KG: f64 = 50.0;
    pub const DEFAULT_INITIAL_BRIX_PCT: f64 = 7.0;
    pub const DEFAULT_TARGET_BRIX_PCT: f64 = 10.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::mass::kilogram;

    #[test]
    fn constructors_smoke() {
        let m = kg(50.0);
        assert_eq!(m.get::<kilogram>(), 50.0);
    }

    #[test]
    fn default_form_values_are_a_valid_scenario() {
        assert!(constants::DEFAULT_PULP_MASS_KG > 0.0);
        assert!(constants::DEFAULT_INITIAL_BRIX_PCT < constants::DEFAULT_TARGET_BRIX_PCT);
        assert!(constants::DEFAULT_TARGET_BRIX_PCT < 100.0);
    }
}
