//! Core types and identifiers for the elevator simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation.
//!
//! # Overview
//!
//! - **Identifiers**: monotonic passenger and elevator ids plus UUID run ids
//! - **Enums**: elevator status, travel direction, and run status
//! - **Configuration**: simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use elevator_dispatch_simulator::types::*;
//!
//! let mut ids = IdAllocator::new();
//! assert_eq!(ids.next_passenger_id(), PassengerId(1));
//! assert_eq!(ids.next_elevator_id(), ElevatorId(0));
//!
//! assert_eq!(Direction::between(2, 7), Direction::Up);
//! assert!(ElevatorStatus::Up.is_moving(Direction::Up));
//!
//! let config = SimulationConfig {
//!     floor_count: 12,
//!     elevator_count: 3,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
