use crate::config::SimulationConstants;

/// Isothermal exponential atmosphere: `ρ(h) = ρ0 · exp(-h / H)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub sea_level_density: f64,
    pub scale_height: f64,
    pub gravity: f64,
}

impl Environment {
    pub fn new(constants: &SimulationConstants) -> Self {
        Environment {
            sea_level_density: constants.sea_level_density,
            scale_height: constants.scale_height,
            gravity: constants.gravity,
        }
    }

    /// Density at `altitude`; below the surface the sea-level value is used, which keeps the
    /// drag of a rocket sinking on the pad within the stable range of the fixed-step integrator.
    pub fn air_density(&self, altitude: f64) -> f64 {
        self.sea_level_density * (-altitude.max(0.0) / self.scale_height).exp()
    }

    pub fn weight(&self, mass: f64) -> f64 {
        mass * self.gravity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn earth() -> Environment {
        Environment::new(&SimulationConstants::default())
    }

    #[test]
    fn test_sea_level_density() {
        assert_abs_diff_eq!(earth().air_density(0.0), 1.225, epsilon = 1e-12);
    }

    #[test]
    fn test_density_drops_by_e_per_scale_height() {
        let environment = earth();
        let ratio = environment.air_density(8_400.0) / environment.air_density(0.0);
        assert_relative_eq!(ratio, (-1.0f64).exp(), max_relative = 1e-12);
    }

    #[test]
    fn test_density_is_negligible_in_space() {
        assert!(earth().air_density(500_000.0) < 1e-20);
    }

    #[test]
    fn test_density_below_ground_is_sea_level() {
        assert_abs_diff_eq!(earth().air_density(-5_000.0), 1.225, epsilon = 1e-12);
    }

    #[test]
    fn test_weight() {
        assert_relative_eq!(earth().weight(1_000.0), 9_810.0);
    }
}
