use thiserror::Error;

/// Errors raised by the simulations before any work is done
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid road state: {0}")]
    InvalidRoadState(String),
}
