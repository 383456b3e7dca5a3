// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s² (standard gravity, g0)

// Aerodynamic Constants
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
pub const ATMOSPHERE_SCALE_HEIGHT: f64 = 8_400.0; // m
pub const ROCKET_DRAG_COEFFICIENT: f64 = 0.3;
pub const ROCKET_REFERENCE_AREA: f64 = 10.0; // m²

// Simulation Parameters
pub const TIME_STEP: f64 = 0.1; // s
pub const MAX_SIMULATION_TIME: f64 = 1_000.0; // s

// Absorbs representation error when counting whole steps in a burn.
pub const STEP_COUNT_TOLERANCE: f64 = 1e-9;

// Upper bound on integrator steps for one flight (burn plus coast).
pub const MAX_FLIGHT_STEPS: usize = 10_000_000;

// Default rocket inputs (a Falcon-9-ish first stage)
pub const DEFAULT_THRUST_KN: f64 = 7_500.0; // kN
pub const DEFAULT_SPECIFIC_IMPULSE: f64 = 340.0; // s
pub const DEFAULT_BURN_TIME: f64 = 150.0; // s
pub const DEFAULT_DRY_MASS: f64 = 22_200.0; // kg
pub const DEFAULT_PAYLOAD_MASS: f64 = 22_800.0; // kg
