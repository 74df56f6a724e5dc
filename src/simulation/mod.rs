//! Simulation state, lifecycle, and drivers
//!
//! This module holds the state aggregate and everything that operates on it
//! as a whole.
//!
//! # Overview
//!
//! - **SimulationState**: the single mutable aggregate and read model
//! - **SimulationClock**: run start, elapsed seconds, and completion
//! - **SimulationEngine**: the driver-facing facade over state, ids, and generator
//! - **SimulationRunner**: cadenced and lockstep drivers producing a [`RunReport`]
//! - **RunStatistics**: per-run counters
//! - **SimulationError**: errors for contract violations and I/O
//! - **LoggingConfig**: tracing subscriber setup
//!
//! # Usage Example
//!
//! ```rust
//! use elevator_dispatch_simulator::simulation::*;
//! use elevator_dispatch_simulator::types::*;
//!
//! let config = SimulationConfig {
//!     floor_count: 5,
//!     elevator_count: 1,
//!     target_people: 1,
//!     ..Default::default()
//! };
//!
//! let mut engine = SimulationEngine::new(config).unwrap();
//! engine.start();
//! engine.enqueue_passenger(1, 5).unwrap();
//!
//! while engine.status() == SimulationStatus::Running {
//!     engine.tick();
//!     if let Some(id) = engine.next_pickup() {
//!         engine.board_at(id);
//!     }
//!     engine.advance_clock();
//! }
//! assert_eq!(engine.state().current_people, 1);
//! ```

pub mod clock;
pub mod engine;
pub mod error;
pub mod logging;
pub mod runner;
pub mod state;
pub mod statistics;

// Re-export all public types for convenience
pub use clock::*;
pub use engine::*;
pub use error::*;
pub use logging::*;
pub use runner::*;
pub use state::*;
pub use statistics::*;
