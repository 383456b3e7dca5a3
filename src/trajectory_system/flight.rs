use log::{debug, warn};

use crate::config::SimulationConstants;
use crate::constants::{MAX_FLIGHT_STEPS, STEP_COUNT_TOLERANCE};
use crate::control::environment::Environment;
use crate::control::propulsion::DerivedParameters;
use crate::control::rocket::RocketConfig;
use crate::errors::SimulationError;

use super::aerodynamics::Aerodynamics;
use super::kinematics::{FlightPhase, FlightState, Kinematics, TrajectorySample};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Height reached zero during unpowered flight.
    GroundImpact,
    /// `max_simulation_time` elapsed before ground contact.
    Timeout,
}

/// Ordered samples of one flight, powered phase first.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub samples: Vec<TrajectorySample>,
    /// Number of leading samples recorded while the engine was burning.
    pub burn_samples: usize,
    pub burn_time_s: f64,
    pub termination: Termination,
}

impl Trajectory {
    pub fn powered(&self) -> &[TrajectorySample] {
        &self.samples[..self.burn_samples]
    }

    pub fn unpowered(&self) -> &[TrajectorySample] {
        &self.samples[self.burn_samples..]
    }

    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }

    pub fn lifted_off(&self) -> bool {
        self.samples.iter().any(|sample| sample.height_m > 0.0)
    }

    pub fn is_degenerate(&self) -> bool {
        self.termination == Termination::Timeout || !self.lifted_off()
    }

    /// Turns the advisory degenerate flag into an error for callers that need a real landing.
    pub fn ensure_landed(self) -> Result<Self, SimulationError> {
        if self.termination == Termination::Timeout {
            let time = self.last().map_or(0.0, |sample| sample.time_s);
            return Err(SimulationError::DegenerateTrajectory(format!(
                "no ground contact before the time cap (last sample at t={:.1}s)",
                time
            )));
        }
        if !self.lifted_off() {
            return Err(SimulationError::DegenerateTrajectory(
                "rocket never left the ground".to_string(),
            ));
        }
        Ok(self)
    }
}

pub struct FlightIntegrator {
    kinematics: Kinematics,
    burn_steps: usize,
    burn_time_s: f64,
    initial_mass: f64,
    final_mass: f64,
    max_simulation_time: f64,
}

impl FlightIntegrator {
    pub fn new(
        config: &RocketConfig,
        derived: &DerivedParameters,
        constants: &SimulationConstants,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        constants.validate()?;
        Self::check_derived(config, derived, constants)?;
        let burn_steps = Self::count_burn_steps(config, constants)?;

        let kinematics = Kinematics::new(
            Environment::new(constants),
            Aerodynamics::from_constants(constants),
            config.thrust_n,
            derived.mass_flow_rate,
            constants.time_step,
        );

        Ok(FlightIntegrator {
            kinematics,
            burn_steps,
            burn_time_s: config.burn_time_s,
            initial_mass: derived.total_initial_mass,
            final_mass: derived.final_mass,
            max_simulation_time: constants.max_simulation_time,
        })
    }

    fn check_derived(
        config: &RocketConfig,
        derived: &DerivedParameters,
        constants: &SimulationConstants,
    ) -> Result<(), SimulationError> {
        if derived.thrust_n != config.thrust_n || derived.burn_time_s != config.burn_time_s {
            return Err(SimulationError::InvalidInput(
                "derived parameters were computed for a different rocket".to_string(),
            ));
        }
        let implied_thrust =
            derived.mass_flow_rate * config.specific_impulse_s * constants.gravity;
        if (implied_thrust - config.thrust_n).abs() > config.thrust_n * 1e-9 {
            return Err(SimulationError::InvalidInput(format!(
                "derived mass flow rate {:.3} kg/s does not match gravity {} m/s²",
                derived.mass_flow_rate, constants.gravity
            )));
        }
        Ok(())
    }

    fn count_burn_steps(
        config: &RocketConfig,
        constants: &SimulationConstants,
    ) -> Result<usize, SimulationError> {
        let burn_steps =
            (config.burn_time_s / constants.time_step + STEP_COUNT_TOLERANCE).floor();
        if burn_steps >= MAX_FLIGHT_STEPS as f64 {
            return Err(SimulationError::InvalidInput(format!(
                "burn time {}s needs more than {} steps of {}s",
                config.burn_time_s, MAX_FLIGHT_STEPS, constants.time_step
            )));
        }
        let coast_steps = constants.max_simulation_time / constants.time_step;
        if burn_steps + coast_steps >= MAX_FLIGHT_STEPS as f64 {
            return Err(SimulationError::InvalidConstants(format!(
                "time cap {}s needs more than {} steps of {}s",
                constants.max_simulation_time, MAX_FLIGHT_STEPS, constants.time_step
            )));
        }
        Ok(burn_steps as usize)
    }

    /// Moves a state forward by at most one step.
    ///
    /// Returns `Ok(next)` to keep going or `Err(termination)` once the flight is over. A burning
    /// state whose step index passes the burn is converted to a falling one without advancing.
    pub fn transition(&self, state: &FlightState) -> Result<FlightState, Termination> {
        match state.phase {
            FlightPhase::Burning if state.step > self.burn_steps => {
                debug!("Burnout at t={:.1}s, h={:.1}m", state.time, state.height);
                Ok(state.burnout(self.final_mass))
            }
            FlightPhase::Burning => Ok(self.kinematics.advance(state)),
            FlightPhase::Falling => {
                if state.is_on_ground() {
                    return Err(Termination::GroundImpact);
                }
                let next = self.kinematics.advance(state);
                if next.time > self.max_simulation_time {
                    return Err(Termination::Timeout);
                }
                Ok(next)
            }
        }
    }

    fn should_record(&self, state: &FlightState) -> bool {
        match state.phase {
            FlightPhase::Burning => state.step <= self.burn_steps,
            FlightPhase::Falling => true,
        }
    }

    pub fn run(&self) -> Trajectory {
        let mut samples = Vec::new();
        let mut burn_samples = 0;
        let mut state = FlightState::on_pad(self.initial_mass);

        let termination = loop {
            if self.should_record(&state) {
                samples.push(TrajectorySample::from(&state));
                if state.phase == FlightPhase::Burning {
                    burn_samples += 1;
                }
            }
            match self.transition(&state) {
                Ok(next) => state = next,
                Err(termination) => break termination,
            }
        };

        match termination {
            Termination::GroundImpact => {
                debug!("Ground impact at t={:.1}s", state.time)
            }
            Termination::Timeout => warn!(
                "Simulation reached the {:.0}s cap without ground contact",
                self.max_simulation_time
            ),
        }

        Trajectory {
            samples,
            burn_samples,
            burn_time_s: self.burn_time_s,
            termination,
        }
    }
}

pub fn simulate(
    config: &RocketConfig,
    derived: &DerivedParameters,
    constants: &SimulationConstants,
) -> Result<Trajectory, SimulationError> {
    Ok(FlightIntegrator::new(config, derived, constants)?.run())
}
