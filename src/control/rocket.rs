use serde::Deserialize;

use crate::constants::{
    DEFAULT_BURN_TIME, DEFAULT_DRY_MASS, DEFAULT_PAYLOAD_MASS, DEFAULT_SPECIFIC_IMPULSE,
    DEFAULT_THRUST_KN,
};
use crate::errors::SimulationError;

use super::propellant::PropellantType;

/// Single-stage rocket design inputs, in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RocketConfig {
    pub thrust_n: f64,
    pub specific_impulse_s: f64,
    pub burn_time_s: f64,
    pub dry_mass_kg: f64,
    pub payload_mass_kg: f64,
    pub propellant: PropellantType,
}

impl Default for RocketConfig {
    fn default() -> Self {
        RocketConfig {
            thrust_n: DEFAULT_THRUST_KN * 1_000.0,
            specific_impulse_s: DEFAULT_SPECIFIC_IMPULSE,
            burn_time_s: DEFAULT_BURN_TIME,
            dry_mass_kg: DEFAULT_DRY_MASS,
            payload_mass_kg: DEFAULT_PAYLOAD_MASS,
            propellant: PropellantType::default(),
        }
    }
}

impl RocketConfig {
    pub fn new(
        thrust_n: f64,
        specific_impulse_s: f64,
        burn_time_s: f64,
        dry_mass_kg: f64,
        payload_mass_kg: f64,
        propellant: PropellantType,
    ) -> Self {
        RocketConfig {
            thrust_n,
            specific_impulse_s,
            burn_time_s,
            dry_mass_kg,
            payload_mass_kg,
            propellant,
        }
    }

    /// Same rocket with the specific impulse replaced by the propellant's catalog value.
    pub fn with_typical_isp(mut self) -> Self {
        self.specific_impulse_s = self.propellant.typical_isp_s();
        self
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let strictly_positive = [
            ("thrust", self.thrust_n),
            ("specific impulse", self.specific_impulse_s),
            ("burn time", self.burn_time_s),
            ("dry mass", self.dry_mass_kg),
        ];
        for (field, value) in strictly_positive {
            check_finite(field, value)?;
            if value <= 0.0 {
                return Err(SimulationError::InvalidInput(format!(
                    "{} must be > 0, got {}",
                    field, value
                )));
            }
        }

        check_finite("payload mass", self.payload_mass_kg)?;
        if self.payload_mass_kg < 0.0 {
            return Err(SimulationError::InvalidInput(format!(
                "payload mass must be >= 0, got {}",
                self.payload_mass_kg
            )));
        }

        Ok(())
    }
}

fn check_finite(field: &str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimulationError::InvalidInput(format!(
            "{} must be a finite number, got {}",
            field, value
        )))
    }
}

/// Raw text of the rocket input form. Thrust is entered in kN.
#[derive(Debug, Clone, PartialEq)]
pub struct RocketInput {
    pub propellant: String,
    pub thrust_kn: String,
    pub specific_impulse_s: String,
    pub burn_time_s: String,
    pub dry_mass_kg: String,
    pub payload_mass_kg: String,
}

impl Default for RocketInput {
    fn default() -> Self {
        RocketInput {
            propellant: PropellantType::default().name().to_string(),
            thrust_kn: DEFAULT_THRUST_KN.to_string(),
            specific_impulse_s: DEFAULT_SPECIFIC_IMPULSE.to_string(),
            burn_time_s: DEFAULT_BURN_TIME.to_string(),
            dry_mass_kg: DEFAULT_DRY_MASS.to_string(),
            payload_mass_kg: DEFAULT_PAYLOAD_MASS.to_string(),
        }
    }
}

impl RocketInput {
    /// Overwrites the Isp field with the typical value of the currently selected propellant.
    pub fn apply_typical_isp(&mut self) -> Result<(), SimulationError> {
        let propellant: PropellantType = self.propellant.parse()?;
        self.specific_impulse_s = propellant.typical_isp_s().to_string();
        Ok(())
    }

    pub fn parse(&self) -> Result<RocketConfig, SimulationError> {
        let config = RocketConfig {
            thrust_n: parse_field("thrust", &self.thrust_kn)? * 1_000.0,
            specific_impulse_s: parse_field("specific impulse", &self.specific_impulse_s)?,
            burn_time_s: parse_field("burn time", &self.burn_time_s)?,
            dry_mass_kg: parse_field("dry mass", &self.dry_mass_kg)?,
            payload_mass_kg: parse_field("payload mass", &self.payload_mass_kg)?,
            propellant: self.propellant.parse()?,
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_field(field: &str, raw: &str) -> Result<f64, SimulationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SimulationError::InvalidInput(format!("{} is missing", field)));
    }
    trimmed.parse::<f64>().map_err(|_| {
        SimulationError::InvalidInput(format!("{} is not a number: '{}'", field, trimmed))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config() {
        let config = RocketConfig::default();
        assert_relative_eq!(config.thrust_n, 7_500_000.0);
        assert_relative_eq!(config.specific_impulse_s, 340.0);
        assert_relative_eq!(config.burn_time_s, 150.0);
        assert_relative_eq!(config.dry_mass_kg, 22_200.0);
        assert_relative_eq!(config.payload_mass_kg, 22_800.0);
        assert_eq!(config.propellant, PropellantType::KeroseneLox);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_payload_is_valid() {
        let config = RocketConfig {
            payload_mass_kg: 0.0,
            ..RocketConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_fields() {
        let base = RocketConfig::default();
        let invalid = [
            RocketConfig { thrust_n: 0.0, ..base },
            RocketConfig { specific_impulse_s: 0.0, ..base },
            RocketConfig { burn_time_s: -1.0, ..base },
            RocketConfig { dry_mass_kg: 0.0, ..base },
            RocketConfig { payload_mass_kg: -1.0, ..base },
        ];
        for config in invalid {
            assert!(
                matches!(config.validate(), Err(SimulationError::InvalidInput(_))),
                "expected {:?} to be rejected",
                config
            );
        }
    }

    #[test]
    fn test_rejects_non_finite_fields() {
        let config = RocketConfig {
            specific_impulse_s: f64::NAN,
            ..RocketConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidInput(_))
        ));

        let config = RocketConfig {
            thrust_n: f64::INFINITY,
            ..RocketConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_with_typical_isp() {
        let config = RocketConfig {
            propellant: PropellantType::HydrogenLox,
            ..RocketConfig::default()
        }
        .with_typical_isp();
        assert_relative_eq!(config.specific_impulse_s, 450.0);
    }

    #[test]
    fn test_default_input_parses_to_default_config() {
        let config = RocketInput::default().parse().unwrap();
        assert_eq!(config, RocketConfig::default());
    }

    #[test]
    fn test_input_converts_kilonewtons() {
        let input = RocketInput {
            thrust_kn: "12.5".to_string(),
            ..RocketInput::default()
        };
        assert_relative_eq!(input.parse().unwrap().thrust_n, 12_500.0);
    }

    #[test]
    fn test_input_missing_field() {
        let input = RocketInput {
            burn_time_s: "  ".to_string(),
            ..RocketInput::default()
        };
        match input.parse() {
            Err(SimulationError::InvalidInput(message)) => {
                assert!(message.contains("burn time"), "{}", message)
            }
            other => panic!("expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn test_input_non_numeric_field() {
        let input = RocketInput {
            dry_mass_kg: "heavy".to_string(),
            ..RocketInput::default()
        };
        match input.parse() {
            Err(SimulationError::InvalidInput(message)) => {
                assert!(message.contains("dry mass"), "{}", message)
            }
            other => panic!("expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn test_input_rejects_zero_isp() {
        let input = RocketInput {
            specific_impulse_s: "0".to_string(),
            ..RocketInput::default()
        };
        assert!(matches!(
            input.parse(),
            Err(SimulationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_apply_typical_isp() {
        let mut input = RocketInput {
            propellant: "Methane/LOX".to_string(),
            ..RocketInput::default()
        };
        input.apply_typical_isp().unwrap();
        assert_relative_eq!(input.parse().unwrap().specific_impulse_s, 370.0);
    }
}
