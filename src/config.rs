use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::constants::{
    AIR_DENSITY_SEA_LEVEL, ATMOSPHERE_SCALE_HEIGHT, GRAVITY, MAX_SIMULATION_TIME,
    ROCKET_DRAG_COEFFICIENT, ROCKET_REFERENCE_AREA, TIME_STEP,
};
use crate::control::rocket::RocketConfig;
use crate::errors::SimulationError;

/// Model constants shared by the parameter engine and the flight integrator.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConstants {
    pub gravity: f64,
    pub time_step: f64,
    pub drag_coefficient: f64,
    pub reference_area: f64,
    pub sea_level_density: f64,
    pub scale_height: f64,
    pub max_simulation_time: f64,
}

impl Default for SimulationConstants {
    fn default() -> Self {
        SimulationConstants {
            gravity: GRAVITY,
            time_step: TIME_STEP,
            drag_coefficient: ROCKET_DRAG_COEFFICIENT,
            reference_area: ROCKET_REFERENCE_AREA,
            sea_level_density: AIR_DENSITY_SEA_LEVEL,
            scale_height: ATMOSPHERE_SCALE_HEIGHT,
            max_simulation_time: MAX_SIMULATION_TIME,
        }
    }
}

impl SimulationConstants {
    pub fn with_reference_area(mut self, reference_area: f64) -> Self {
        self.reference_area = reference_area;
        self
    }

    pub fn with_drag_coefficient(mut self, drag_coefficient: f64) -> Self {
        self.drag_coefficient = drag_coefficient;
        self
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_max_simulation_time(mut self, max_simulation_time: f64) -> Self {
        self.max_simulation_time = max_simulation_time;
        self
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let strictly_positive = [
            ("gravity", self.gravity),
            ("time_step", self.time_step),
            ("sea_level_density", self.sea_level_density),
            ("scale_height", self.scale_height),
            ("max_simulation_time", self.max_simulation_time),
        ];
        for (name, value) in strictly_positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::InvalidConstants(format!(
                    "{} must be a finite value > 0, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("drag_coefficient", self.drag_coefficient),
            ("reference_area", self.reference_area),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SimulationError::InvalidConstants(format!(
                    "{} must be a finite value >= 0, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

/// A rocket plus the model constants it should be flown with, as stored in a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub rocket: RocketConfig,
    #[serde(default)]
    pub constants: SimulationConstants,
}

impl Scenario {
    pub fn from_toml_str(source: &str) -> Result<Self, SimulationError> {
        let scenario: Scenario = toml::from_str(source)?;
        scenario.rocket.validate()?;
        scenario.constants.validate()?;
        Ok(scenario)
    }
}

pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario, SimulationError> {
    let source = fs::read_to_string(path.as_ref())?;
    Scenario::from_toml_str(&source)
}
