use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::SimulationError;

/// Bipropellant combinations the calculator knows the bulk density of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum PropellantType {
    HydrogenLox,
    MethaneLox,
    #[default]
    KeroseneLox,
}

impl PropellantType {
    pub const ALL: [PropellantType; 3] = [
        PropellantType::HydrogenLox,
        PropellantType::MethaneLox,
        PropellantType::KeroseneLox,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PropellantType::HydrogenLox => "LH2/LOX",
            PropellantType::MethaneLox => "Methane/LOX",
            PropellantType::KeroseneLox => "Kerosene/LOX",
        }
    }

    /// Mixed bulk density of fuel and oxidizer in kg/m³.
    pub fn density_kg_m3(&self) -> f64 {
        match self {
            PropellantType::HydrogenLox => 350.0,
            PropellantType::MethaneLox => 900.0,
            PropellantType::KeroseneLox => 1_000.0,
        }
    }

    /// Representative vacuum-ish Isp in seconds, offered as a default for the input form.
    pub fn typical_isp_s(&self) -> f64 {
        match self {
            PropellantType::HydrogenLox => 450.0,
            PropellantType::MethaneLox => 370.0,
            PropellantType::KeroseneLox => 340.0,
        }
    }
}

impl fmt::Display for PropellantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PropellantType {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PropellantType::ALL
            .iter()
            .copied()
            .find(|propellant| propellant.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                SimulationError::InvalidInput(format!("unknown propellant type '{}'", wanted))
            })
    }
}

impl TryFrom<String> for PropellantType {
    type Error = SimulationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
