//! The simulation engine facade
//!
//! [`SimulationEngine`] owns the state aggregate together with the id
//! allocator, the passenger generator, and the run statistics, and exposes
//! the operations an external driver invokes. Every operation runs to
//! completion synchronously.

use tracing::{debug, info, instrument, warn};

use crate::dispatch::{run_step, BoardingController, BoardingOutcome, StepSummary};
use crate::passenger::{Passenger, PassengerGenerator};
use crate::sim_event;
use crate::simulation::{RunStatistics, SimulationClock, SimulationError, SimulationResult, SimulationState};
use crate::types::{
    ConfigUpdate, ElevatorId, IdAllocator, PassengerId, RunId, SimulationConfig, SimulationStatus,
};

/// Elevator dispatch engine driven by an external caller
#[derive(Debug)]
pub struct SimulationEngine {
    state: SimulationState,
    ids: IdAllocator,
    generator: PassengerGenerator,
    statistics: RunStatistics,
}

impl SimulationEngine {
    /// Create an engine for a validated configuration
    ///
    /// The passenger generator is seeded from `config.seed` when present.
    #[instrument(skip(config), fields(floors = config.floor_count, elevators = config.elevator_count))]
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        let generator = match config.seed {
            Some(seed) => {
                info!("Using deterministic seed: {}", seed);
                PassengerGenerator::with_seed(seed)
            }
            None => {
                debug!("Using entropy-based random seed");
                PassengerGenerator::new()
            }
        };
        Self::with_generator(config, generator)
    }

    /// Create an engine with an explicit passenger generator
    pub fn with_generator(
        config: SimulationConfig,
        generator: PassengerGenerator,
    ) -> SimulationResult<Self> {
        config.validate()?;
        Ok(Self {
            state: SimulationState::new(config),
            ids: IdAllocator::new(),
            generator,
            statistics: RunStatistics::default(),
        })
    }

    /// Apply a partial configuration
    ///
    /// The merged configuration is validated as a whole and nothing changes
    /// when validation fails. Rejected while a run is in progress. Cars above
    /// a lowered top floor are brought down to it, and a finished run goes
    /// back to initialization until the next start.
    #[instrument(skip(self, update))]
    pub fn configure(&mut self, update: ConfigUpdate) -> SimulationResult<()> {
        if self.state.is_running() {
            warn!("Rejected reconfiguration while running");
            return Err(SimulationError::ConfigurationLocked(self.state.status));
        }

        let merged = self.state.config.merged(&update);
        if let Err(error) = merged.validate() {
            warn!("Rejected configuration update: {}", error);
            return Err(error.into());
        }

        if let Some(seed) = update.seed {
            self.generator = PassengerGenerator::with_seed(seed);
        }
        debug!("Configuration updated: {:?}", merged);
        self.state.config = merged;
        self.state.fit_fleet_to_building();
        // A finished run no longer matches the new target; the next one is pending
        if self.state.status == SimulationStatus::Ending {
            self.state.status = SimulationStatus::Initialization;
        }
        Ok(())
    }

    /// Begin a new run with the current configuration
    pub fn start(&mut self) -> RunId {
        let run_id = SimulationClock::start(&mut self.state, &mut self.ids);
        self.statistics = RunStatistics::for_fleet(self.state.elevators.iter().map(|e| e.id));
        sim_event!(
            info,
            "Run started",
            run_id = tracing::field::display(run_id),
            target_people = self.state.config.target_people,
        );
        run_id
    }

    /// Generate a batch of passengers, then run one elevator step
    ///
    /// Returns `None` without touching anything unless the run is in progress.
    pub fn tick(&mut self) -> Option<StepSummary> {
        if !self.state.is_running() {
            return None;
        }
        self.generate_passengers();
        self.step_elevators()
    }

    /// Append one batch of random passengers to the waiting queue
    pub fn generate_passengers(&mut self) -> usize {
        if !self.state.is_running() {
            return 0;
        }
        let created = self.generator.generate_batch(&mut self.state, &mut self.ids);
        self.statistics.record_generated(created, self.state.waitings.len());
        created
    }

    /// Run dispatch, door evaluation, and movement over the fleet
    pub fn step_elevators(&mut self) -> Option<StepSummary> {
        if !self.state.is_running() {
            return None;
        }

        let before: Vec<(usize, bool)> =
            self.state.elevators.iter().map(|e| (e.floor, e.is_door_open)).collect();

        let summary = run_step(&self.state.config, &mut self.state.elevators, &self.state.waitings);

        for (elevator, (floor, was_open)) in self.state.elevators.iter().zip(before) {
            let travelled = elevator.floor.abs_diff(floor) as u64;
            if travelled > 0 {
                self.statistics.record_travel(elevator.id, travelled);
            }
            if elevator.is_door_open && !was_open {
                self.statistics.record_door_opening(elevator.id);
            }
        }
        self.statistics.record_step(summary.dwelled);

        sim_event!(
            debug,
            "Elevator step",
            second = self.state.total_seconds,
            assignments = summary.assignments.len(),
            doors_open = summary.doors_open,
            moved = summary.moved,
        );
        Some(summary)
    }

    /// Advance simulated time by one second
    pub fn advance_clock(&mut self) {
        SimulationClock::advance(&mut self.state);
        self.statistics.record_clock(self.state.total_seconds);
    }

    /// Run the door cycle for one car
    ///
    /// Unknown cars and closed doors are silent no-ops.
    pub fn board_at(&mut self, elevator_id: ElevatorId) -> BoardingOutcome {
        let controller = BoardingController::new(self.state.config.capacity);
        let outcome = match self.state.elevators.iter_mut().find(|e| e.id == elevator_id) {
            Some(elevator) => controller.serve(elevator, &mut self.state.waitings),
            None => BoardingOutcome::NoOp,
        };

        if outcome.is_noop() {
            self.statistics.record_noop_boarding();
            return outcome;
        }

        self.state.current_people += outcome.delivered();
        self.statistics.record_boarding(elevator_id, outcome.delivered(), outcome.boarded());

        if SimulationClock::settle(&mut self.state) {
            sim_event!(
                info,
                "Run complete",
                delivered = self.state.current_people,
                seconds = self.state.total_seconds,
            );
        }
        outcome
    }

    /// Add a scripted passenger to the waiting queue
    ///
    /// Rejected unless the run is in progress, both floors exist and differ,
    /// and the target still has room for another passenger.
    pub fn enqueue_passenger(&mut self, from_floor: usize, to_floor: usize) -> SimulationResult<PassengerId> {
        let floor_count = self.state.config.floor_count;

        if !self.state.is_running() {
            return Err(SimulationError::invalid_passenger(format!(
                "simulation is {}, not running",
                self.state.status
            )));
        }
        for floor in [from_floor, to_floor] {
            if floor < 1 || floor > floor_count {
                return Err(SimulationError::invalid_passenger(format!(
                    "floor {} is outside 1..={}",
                    floor, floor_count
                )));
            }
        }
        if from_floor == to_floor {
            return Err(SimulationError::invalid_passenger(format!(
                "origin and destination are both floor {}",
                from_floor
            )));
        }
        if self.state.remaining_to_create() == 0 {
            return Err(SimulationError::invalid_passenger(format!(
                "target of {} passengers already created",
                self.state.config.target_people
            )));
        }

        let passenger = Passenger::new(self.ids.next_passenger_id(), from_floor, to_floor);
        let id = passenger.id;
        debug!("Enqueued passenger {} from floor {} to floor {}", id, from_floor, to_floor);
        self.state.waitings.push(passenger);
        self.statistics.record_generated(1, self.state.waitings.len());
        Ok(id)
    }

    /// Snapshot of the full state
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Current configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.state.config
    }

    /// Lifecycle status
    pub fn status(&self) -> SimulationStatus {
        self.state.status
    }

    /// Ids of every car with an open door, in fleet order
    pub fn door_open_elevator_ids(&self) -> Vec<ElevatorId> {
        self.state.door_open_elevator_ids()
    }

    /// The first car with an open door
    pub fn next_pickup(&self) -> Option<ElevatorId> {
        self.state.next_pickup()
    }

    /// Counters for the current run
    pub fn statistics(&self) -> &RunStatistics {
        &self.statistics
    }
}
