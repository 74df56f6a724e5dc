//! Dispatch, door, movement, and boarding logic
//!
//! This module contains the per-tick engine that moves the fleet.
//!
//! # Overview
//!
//! - **DispatchPlanner**: Matches each waiting passenger to the best-positioned
//!   car and sets that car's direction
//! - **DoorController**: Opens a car's door for arrivals or boardable passengers
//! - **MovementEngine**: Moves cars with closed doors one floor
//! - **BoardingController**: Unloads and loads a car whose door is open
//! - **run_step**: The combined dispatch, door, and movement step
//!
//! # Usage Example
//!
//! ```rust
//! use elevator_dispatch_simulator::dispatch::*;
//! use elevator_dispatch_simulator::elevator::Elevator;
//! use elevator_dispatch_simulator::passenger::Passenger;
//! use elevator_dispatch_simulator::types::*;
//!
//! let config = SimulationConfig { floor_count: 10, ..Default::default() };
//! let mut fleet = vec![
//!     Elevator::parked_at(ElevatorId(0), 1),
//!     Elevator::parked_at(ElevatorId(1), 10),
//! ];
//! let waitings = vec![Passenger::new(PassengerId(1), 5, 8)];
//!
//! let summary = run_step(&config, &mut fleet, &waitings);
//! assert_eq!(summary.assignments[0].elevator, ElevatorId(0));
//! assert_eq!(fleet[0].status, ElevatorStatus::Up);
//! ```

pub mod boarding;
pub mod door;
pub mod movement;
pub mod planner;
pub mod step;

// Re-export all public types for convenience
pub use boarding::{BoardingController, BoardingOutcome};
pub use door::DoorController;
pub use movement::{MovementEngine, MovementSummary};
pub use planner::{Assignment, DispatchPlanner};
pub use step::{run_step, StepSummary};
