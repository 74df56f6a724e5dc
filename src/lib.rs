//! Elevator Dispatch Simulator
//!
//! A tick-driven simulation of a multi-elevator building: passengers appear on
//! random floors, a fleet of cars is dispatched to collect them, and the run
//! ends once a target number of passengers has been delivered.
//!
//! # Overview
//!
//! The engine is an in-process library driven by an external caller. Each
//! tick generates passengers, runs the dispatch planner and door evaluation,
//! and moves the cars. Boarding is a separate operation the driver invokes for
//! a car it observes with an open door.
//!
//! ## Key Features
//!
//! - **Nearest-car dispatch**: en-route cars first, then idle cars, ties to the earliest car
//! - **Deterministic runs**: seedable passenger generation
//! - **Cadenced driver**: replays the per-floor, pickup, and batch timers in simulated seconds
//! - **Run statistics**: fleet-wide and per-car counters
//!
//! ## Quick Start
//!
//! ```rust
//! use elevator_dispatch_simulator::*;
//!
//! let config = SimulationConfig {
//!     floor_count: 8,
//!     elevator_count: 2,
//!     target_people: 6,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut runner = SimulationRunner::from_config(config)?;
//! let report = runner.run_lockstep(10_000);
//! assert!(report.completed);
//! println!("{}", report.statistics);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, enums, and configuration
//! - [`passenger`]: passenger records and random demand
//! - [`elevator`]: elevator cars
//! - [`dispatch`]: planner, doors, movement, and boarding
//! - [`simulation`]: state, clock, engine facade, runners, statistics, logging
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │  Passenger  │    │  Elevator   │
//! │             │◄───┤             │◄───┤             │
//! │ Identifiers │    │ Generator   │    │ Car state   │
//! │ Config      │    │             │    │             │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        ▲                   ▲                   ▲
//!        │                   │                   │
//! ┌─────────────┐    ┌─────────────┐
//! │  Dispatch   │    │ Simulation  │
//! │             │◄───┤             │
//! │ Planner     │    │ Engine      │
//! │ Doors       │    │ Runner      │
//! │ Boarding    │    │ Statistics  │
//! └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod dispatch;
pub mod elevator;
pub mod passenger;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{
    CliArgs, ConfigError, ConfigUpdate, ConfigValidationError, Direction, ElevatorId,
    ElevatorStatus, IdAllocator, PassengerId, RunId, SimulationConfig, SimulationStatus,
};

// Domain records
pub use elevator::Elevator;
pub use passenger::{Passenger, PassengerGenerator};

// Dispatch components
pub use dispatch::{
    run_step, Assignment, BoardingController, BoardingOutcome, DispatchPlanner, DoorController,
    MovementEngine, StepSummary,
};

// Simulation types and functionality
pub use simulation::{
    ElevatorStats, LoggingConfig, RunReport, RunStatistics, SimulationClock, SimulationEngine,
    SimulationError, SimulationResult, SimulationRunner, SimulationState,
};
