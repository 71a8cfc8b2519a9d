//! Error types for the simulator surface

use thiserror::Error;

/// Simulator error type
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias
pub type SimResult<T> = Result<T, SimError>;
