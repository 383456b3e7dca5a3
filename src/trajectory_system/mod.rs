pub mod aerodynamics;
pub mod flight;
pub mod kinematics;
