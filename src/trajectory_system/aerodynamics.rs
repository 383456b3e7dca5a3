use crate::config::SimulationConstants;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub reference_area: f64,
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64, reference_area: f64) -> Self {
        Aerodynamics {
            drag_coefficient,
            reference_area,
        }
    }

    pub fn from_constants(constants: &SimulationConstants) -> Self {
        Aerodynamics::new(constants.drag_coefficient, constants.reference_area)
    }

    /// Signed drag `0.5·ρ·Cd·A·v·|v|`; same sign as `velocity`.
    pub fn calculate_drag(&self, velocity: f64, air_density: f64) -> f64 {
        0.5 * air_density * self.drag_coefficient * self.reference_area * velocity * velocity.abs()
    }

    /// Unsigned drag `0.5·ρ·Cd·A·v²`.
    pub fn calculate_drag_magnitude(&self, velocity: f64, air_density: f64) -> f64 {
        self.calculate_drag(velocity, air_density).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-9;

    fn default_aerodynamics() -> Aerodynamics {
        Aerodynamics::from_constants(&SimulationConstants::default())
    }

    #[test]
    fn test_drag_at_sea_level() {
        // 0.5 * 1.225 * 0.3 * 10 * 100²
        let drag = default_aerodynamics().calculate_drag(100.0, 1.225);
        assert_relative_eq!(drag, 18_375.0, epsilon = EPSILON);
    }

    #[test]
    fn test_drag_opposes_descent() {
        let aerodynamics = default_aerodynamics();
        let ascending = aerodynamics.calculate_drag(50.0, 1.0);
        let descending = aerodynamics.calculate_drag(-50.0, 1.0);
        assert!(ascending > 0.0);
        assert_relative_eq!(descending, -ascending, epsilon = EPSILON);
        assert_relative_eq!(
            aerodynamics.calculate_drag_magnitude(-50.0, 1.0),
            ascending,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_no_drag_without_reference_area() {
        let aerodynamics = Aerodynamics::new(0.3, 0.0);
        assert_eq!(aerodynamics.calculate_drag(1_000.0, 1.225), 0.0);
    }

    #[test]
    fn test_no_drag_at_rest() {
        assert_eq!(default_aerodynamics().calculate_drag(0.0, 1.225), 0.0);
    }
}
