//! Drivers that run an engine to completion
//!
//! The cadenced runner replays the building's three timers in simulated
//! seconds: passenger batches, elevator steps, and delayed pickups. The
//! lockstep runner applies the plain tick, board, advance order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::run_span;
use crate::simulation::{RunStatistics, SimulationEngine, SimulationResult};
use crate::types::{ElevatorId, RunId, SimulationConfig, SimulationStatus};

/// Outcome of a driven run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Identifier of the run
    pub run_id: RunId,
    /// Whether every target passenger was delivered
    pub completed: bool,
    /// Simulated seconds elapsed
    pub simulated_seconds: u64,
    /// Counters collected during the run
    pub statistics: RunStatistics,
}

/// Drives a [`SimulationEngine`] from start to finish
#[derive(Debug)]
pub struct SimulationRunner {
    engine: SimulationEngine,
}

impl SimulationRunner {
    /// Wrap an existing engine
    pub fn new(engine: SimulationEngine) -> Self {
        Self { engine }
    }

    /// Build an engine for `config` and wrap it
    pub fn from_config(config: SimulationConfig) -> SimulationResult<Self> {
        Ok(Self::new(SimulationEngine::new(config)?))
    }

    /// The driven engine
    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    /// Mutable access to the driven engine
    pub fn engine_mut(&mut self) -> &mut SimulationEngine {
        &mut self.engine
    }

    /// Give back the engine
    pub fn into_engine(self) -> SimulationEngine {
        self.engine
    }

    /// Start a run and drive it on the configured timers
    ///
    /// Each simulated second advances the clock, then boards any car whose
    /// pickup is due, then generates a batch every
    /// `seconds_per_passenger_batch` seconds and steps the fleet every
    /// `seconds_per_floor` seconds. A car seen with its door open is boarded
    /// `seconds_per_pickup` seconds later. Stops when every target passenger
    /// is delivered or after `max_simulated_seconds`.
    pub fn run(&mut self) -> RunReport {
        let run_id = self.engine.start();
        let config = self.engine.config().clone();
        let (per_floor, per_pickup, per_batch) = config.timing();

        let span = run_span!(
            "cadenced_run",
            run_id = tracing::field::display(run_id),
            max_seconds = config.max_simulated_seconds,
        );
        let _enter = span.enter();

        // Due second for each car's pending pickup
        let mut pickups: BTreeMap<ElevatorId, u64> = BTreeMap::new();

        while self.engine.status() == SimulationStatus::Running
            && self.engine.state().total_seconds < config.max_simulated_seconds
        {
            self.engine.advance_clock();
            let now = self.engine.state().total_seconds;

            let due: Vec<ElevatorId> =
                pickups.iter().filter(|(_, &at)| at <= now).map(|(&id, _)| id).collect();
            for id in due {
                pickups.remove(&id);
                self.engine.board_at(id);
            }
            if self.engine.status() != SimulationStatus::Running {
                break;
            }

            if now % per_batch == 0 {
                self.engine.generate_passengers();
            }
            if now % per_floor == 0 {
                self.engine.step_elevators();
            }

            for id in self.engine.door_open_elevator_ids() {
                pickups.entry(id).or_insert(now + per_pickup);
            }
        }

        self.report(run_id)
    }

    /// Start a run and drive it one tick at a time
    ///
    /// Each iteration ticks, boards every car with an open door in fleet
    /// order, then advances the clock. Stops when every target passenger is
    /// delivered or after `max_ticks` iterations.
    pub fn run_lockstep(&mut self, max_ticks: u64) -> RunReport {
        let run_id = self.engine.start();

        let span = run_span!(
            "lockstep_run",
            run_id = tracing::field::display(run_id),
            max_ticks = max_ticks,
        );
        let _enter = span.enter();

        for _ in 0..max_ticks {
            if self.engine.status() != SimulationStatus::Running {
                break;
            }
            self.engine.tick();
            for id in self.engine.door_open_elevator_ids() {
                self.engine.board_at(id);
            }
            self.engine.advance_clock();
        }

        self.report(run_id)
    }

    fn report(&self, run_id: RunId) -> RunReport {
        let state = self.engine.state();
        let completed = state.status == SimulationStatus::Ending;
        if completed {
            info!(
                "Run {} delivered {} passengers in {} simulated seconds",
                run_id, state.current_people, state.total_seconds
            );
        } else {
            warn!(
                "Run {} stopped after {} simulated seconds with {} of {} delivered",
                run_id, state.total_seconds, state.current_people, state.config.target_people
            );
        }

        RunReport {
            run_id,
            completed,
            simulated_seconds: state.total_seconds,
            statistics: self.engine.statistics().clone(),
        }
    }
}
