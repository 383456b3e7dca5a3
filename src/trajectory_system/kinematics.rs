use crate::control::environment::Environment;

use super::aerodynamics::Aerodynamics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPhase {
    Burning,
    Falling,
}

/// Integrator state. `height` is not clamped and may dip below zero for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    pub step: usize,
    pub time: f64,
    pub height: f64,
    pub velocity: f64,
    pub mass: f64,
    pub phase: FlightPhase,
}

impl FlightState {
    pub fn on_pad(initial_mass: f64) -> Self {
        FlightState {
            step: 0,
            time: 0.0,
            height: 0.0,
            velocity: 0.0,
            mass: initial_mass,
            phase: FlightPhase::Burning,
        }
    }

    pub fn is_on_ground(&self) -> bool {
        self.height <= 0.0
    }

    /// Burnout: the remaining propellant is dropped at once and mass snaps to `final_mass`.
    pub fn burnout(self, final_mass: f64) -> Self {
        FlightState {
            mass: final_mass,
            phase: FlightPhase::Falling,
            ..self
        }
    }
}

/// One reported point of the trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub time_s: f64,
    pub height_m: f64,
    pub velocity_m_s: f64,
    pub mass_kg: f64,
}

impl From<&FlightState> for TrajectorySample {
    fn from(state: &FlightState) -> Self {
        TrajectorySample {
            time_s: state.time,
            height_m: state.height.max(0.0),
            velocity_m_s: state.velocity,
            mass_kg: state.mass,
        }
    }
}

/// Vertical point-mass force model with a fixed time step.
#[derive(Debug, Clone, Copy)]
pub struct Kinematics {
    pub environment: Environment,
    pub aerodynamics: Aerodynamics,
    pub thrust: f64,
    pub mass_flow_rate: f64,
    pub time_step: f64,
}

impl Kinematics {
    pub fn new(
        environment: Environment,
        aerodynamics: Aerodynamics,
        thrust: f64,
        mass_flow_rate: f64,
        time_step: f64,
    ) -> Self {
        Kinematics {
            environment,
            aerodynamics,
            thrust,
            mass_flow_rate,
            time_step,
        }
    }

    pub fn net_force(&self, state: &FlightState) -> f64 {
        let weight = self.environment.weight(state.mass);
        let air_density = self.environment.air_density(state.height);

        match state.phase {
            FlightPhase::Burning => {
                let drag = self.aerodynamics.calculate_drag(state.velocity, air_density);
                self.thrust - weight - drag
            }
            // Drag magnitude, subtracted while climbing and added back while falling.
            FlightPhase::Falling => {
                let drag = self
                    .aerodynamics
                    .calculate_drag_magnitude(state.velocity, air_density);
                if state.velocity > 0.0 {
                    -weight - drag
                } else {
                    -weight + drag
                }
            }
        }
    }

    pub fn calculate_acceleration(&self, state: &FlightState) -> f64 {
        self.net_force(state) / state.mass
    }

    /// Semi-implicit Euler: the height update uses the already-updated velocity.
    pub fn advance(&self, state: &FlightState) -> FlightState {
        let dt = self.time_step;
        let acceleration = self.calculate_acceleration(state);

        let velocity = state.velocity + acceleration * dt;
        let height = state.height + velocity * dt;
        let mass = match state.phase {
            FlightPhase::Burning => state.mass - self.mass_flow_rate * dt,
            FlightPhase::Falling => state.mass,
        };
        let step = state.step + 1;

        FlightState {
            step,
            time: step as f64 * dt,
            height,
            velocity,
            mass,
            phase: state.phase,
        }
    }
}
