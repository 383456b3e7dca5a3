use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid simulation constants: {0}")]
    InvalidConstants(String),

    #[error("Degenerate trajectory: {0}")]
    DegenerateTrajectory(String),

    #[error("Failed to read scenario: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("Failed to parse scenario: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
