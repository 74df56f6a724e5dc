//! Passenger modeling and demand generation
//!
//! This module contains the passenger record and the generator that creates
//! random demand for the simulation.
//!
//! # Overview
//!
//! - **Passenger**: An immutable trip request from one floor to another
//! - **PassengerGenerator**: Creates batches of passengers with random trips,
//!   never exceeding the run's target ridership
//!
//! # Usage Example
//!
//! ```rust
//! use elevator_dispatch_simulator::passenger::*;
//! use elevator_dispatch_simulator::simulation::SimulationState;
//! use elevator_dispatch_simulator::types::*;
//!
//! let config = SimulationConfig { people_per_batch: 3, ..Default::default() };
//! let mut state = SimulationState::new(config);
//! let mut ids = IdAllocator::new();
//!
//! let mut generator = PassengerGenerator::with_seed(7);
//! let created = generator.generate_batch(&mut state, &mut ids);
//!
//! assert_eq!(created, 3);
//! assert!(state.waitings.iter().all(|p| p.from_floor != p.to_floor));
//! ```

pub mod generator;
#[allow(clippy::module_inception)]
pub mod passenger;

// Re-export all public types for convenience
pub use generator::PassengerGenerator;
pub use passenger::Passenger;
