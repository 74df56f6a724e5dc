//! Error types and handling
//!
//! This module contains error types for the simulation. Operational misuse
//! such as boarding a closed car is a silent no-op and never reaches here;
//! these errors cover contract violations and I/O at the edges.

use thiserror::Error;

use crate::types::{ConfigError, ConfigValidationError, SimulationStatus};

/// Errors that can occur during simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    InvalidConfiguration(#[from] ConfigValidationError),

    /// Configuration could not be loaded
    #[error("Configuration loading failed: {0}")]
    ConfigurationLoad(#[from] ConfigError),

    /// Reconfiguration attempted while a run is in progress
    #[error("Configuration is locked while the simulation is {0}")]
    ConfigurationLocked(SimulationStatus),

    /// A scripted passenger request was rejected
    #[error("Invalid passenger request: {0}")]
    InvalidPassenger(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl SimulationError {
    /// Create an invalid passenger error
    pub fn invalid_passenger(msg: impl Into<String>) -> Self {
        Self::InvalidPassenger(msg.into())
    }

    /// Check if this is a recoverable error
    ///
    /// Recoverable errors leave the engine untouched so the caller can retry
    /// with different input.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SimulationError::InvalidConfiguration(_) => true,
            SimulationError::ConfigurationLoad(_) => false,
            SimulationError::ConfigurationLocked(_) => true,
            SimulationError::InvalidPassenger(_) => true,
            SimulationError::IoError(_) => false,
            SimulationError::SerializationError(_) => false,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::InvalidConfiguration(_)
            | SimulationError::ConfigurationLoad(_)
            | SimulationError::ConfigurationLocked(_) => "Configuration",
            SimulationError::InvalidPassenger(_) => "Passenger",
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
