pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use config::{load_scenario, Scenario, SimulationConstants};
pub use constants::*;
pub use control::environment::Environment;
pub use control::propellant::PropellantType;
pub use control::propulsion::{compute, DerivedParameters};
pub use control::rocket::{RocketConfig, RocketInput};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::flight::{simulate, FlightIntegrator, Termination, Trajectory};
pub use trajectory_system::kinematics::{FlightPhase, FlightState, TrajectorySample};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::{render_parameters, FlightSummary};
