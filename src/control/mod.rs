pub mod environment;
pub mod propellant;
pub mod propulsion;
pub mod rocket;
