use log::debug;

use crate::config::SimulationConstants;
use crate::errors::SimulationError;

use super::propellant::PropellantType;
use super::rocket::RocketConfig;

/// Design parameters derived from a [`RocketConfig`]. Recomputed wholesale on every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedParameters {
    pub thrust_n: f64,
    pub specific_impulse_s: f64,
    pub burn_time_s: f64,
    pub dry_mass_kg: f64,
    pub payload_mass_kg: f64,
    pub propellant: PropellantType,

    pub exhaust_velocity: f64,
    pub mass_flow_rate: f64,
    pub propellant_mass: f64,
    pub total_initial_mass: f64,
    pub final_mass: f64,
    pub dry_mass_percent: f64,
    pub payload_percent: f64,
    pub propellant_percent: f64,
    /// Ideal Tsiolkovsky delta-v. Gravity and drag losses are not included.
    pub delta_v: f64,
    pub initial_twr: f64,
    pub final_twr: f64,
    /// Propellant volume only; ignores tank structure, ullage and insulation.
    pub tank_volume: f64,
}

pub fn compute(
    config: &RocketConfig,
    constants: &SimulationConstants,
) -> Result<DerivedParameters, SimulationError> {
    config.validate()?;
    constants.validate()?;

    let g0 = constants.gravity;
    let exhaust_velocity = config.specific_impulse_s * g0;
    let mass_flow_rate = config.thrust_n / exhaust_velocity;
    let propellant_mass = mass_flow_rate * config.burn_time_s;

    let final_mass = config.dry_mass_kg + config.payload_mass_kg;
    let total_initial_mass = final_mass + propellant_mass;

    let dry_mass_percent = config.dry_mass_kg / total_initial_mass * 100.0;
    let payload_percent = config.payload_mass_kg / total_initial_mass * 100.0;
    let propellant_percent = propellant_mass / total_initial_mass * 100.0;

    let delta_v = exhaust_velocity * (total_initial_mass / final_mass).ln();

    let initial_twr = config.thrust_n / (total_initial_mass * g0);
    let final_twr = config.thrust_n / (final_mass * g0);

    let tank_volume = propellant_mass / config.propellant.density_kg_m3();

    debug!(
        "Derived parameters: ve={:.1} m/s, mdot={:.1} kg/s, m0={:.0} kg, dv={:.0} m/s",
        exhaust_velocity, mass_flow_rate, total_initial_mass, delta_v
    );

    Ok(DerivedParameters {
        thrust_n: config.thrust_n,
        specific_impulse_s: config.specific_impulse_s,
        burn_time_s: config.burn_time_s,
        dry_mass_kg: config.dry_mass_kg,
        payload_mass_kg: config.payload_mass_kg,
        propellant: config.propellant,
        exhaust_velocity,
        mass_flow_rate,
        propellant_mass,
        total_initial_mass,
        final_mass,
        dry_mass_percent,
        payload_percent,
        propellant_percent,
        delta_v,
        initial_twr,
        final_twr,
        tank_volume,
    })
}
