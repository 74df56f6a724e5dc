//! The simulation state aggregate
//!
//! This is the single mutable aggregate every engine operation transforms and
//! the read model the display layer observes.

use serde::{Deserialize, Serialize};

use crate::elevator::Elevator;
use crate::passenger::Passenger;
use crate::types::{ElevatorId, RunId, SimulationConfig, SimulationStatus};

/// Complete state of one simulated building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Building and run parameters
    pub config: SimulationConfig,
    /// Passengers delivered to their destination in this run
    pub current_people: usize,
    /// Simulated seconds elapsed in this run
    pub total_seconds: u64,
    /// Lifecycle status
    pub status: SimulationStatus,
    /// Passengers waiting for a car, in arrival order
    pub waitings: Vec<Passenger>,
    /// The fleet, in creation order
    pub elevators: Vec<Elevator>,
    /// Identifier of the current run, set by `start`
    pub run_id: Option<RunId>,
}

impl SimulationState {
    /// Fresh state awaiting `start`
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            current_people: 0,
            total_seconds: 0,
            status: SimulationStatus::Initialization,
            waitings: Vec::new(),
            elevators: Vec::new(),
            run_id: None,
        }
    }

    /// Passengers currently riding any car
    pub fn passengers_aboard(&self) -> usize {
        self.elevators.iter().map(Elevator::load).sum()
    }

    /// Passengers created so far in this run: delivered, waiting, or riding
    pub fn has_created_count(&self) -> usize {
        self.current_people + self.waitings.len() + self.passengers_aboard()
    }

    /// Passengers that may still be created before the target is reached
    pub fn remaining_to_create(&self) -> usize {
        self.config.target_people.saturating_sub(self.has_created_count())
    }

    /// Whether the run is in progress
    pub fn is_running(&self) -> bool {
        self.status == SimulationStatus::Running
    }

    /// Whether every target passenger has been delivered
    pub fn is_complete(&self) -> bool {
        self.status == SimulationStatus::Ending
    }

    /// Look up a car by id
    pub fn elevator(&self, id: ElevatorId) -> Option<&Elevator> {
        self.elevators.iter().find(|e| e.id == id)
    }

    /// Look up a car by id for mutation
    pub fn elevator_mut(&mut self, id: ElevatorId) -> Option<&mut Elevator> {
        self.elevators.iter_mut().find(|e| e.id == id)
    }

    /// Ids of every car with an open door, in fleet order
    pub fn door_open_elevator_ids(&self) -> Vec<ElevatorId> {
        self.elevators.iter().filter(|e| e.is_door_open).map(|e| e.id).collect()
    }

    /// The first car with an open door
    ///
    /// For drivers that board at most one car per observation.
    pub fn next_pickup(&self) -> Option<ElevatorId> {
        self.elevators.iter().find(|e| e.is_door_open).map(|e| e.id)
    }

    /// Waiting passengers on a given floor
    pub fn waiting_on_floor(&self, floor: usize) -> impl Iterator<Item = &Passenger> {
        self.waitings.iter().filter(move |p| p.from_floor == floor)
    }

    /// Bring any car above the configured top floor down to it
    ///
    /// Returns how many cars were moved.
    pub fn fit_fleet_to_building(&mut self) -> usize {
        let top_floor = self.config.top_floor();
        let mut moved = 0;
        for elevator in self.elevators.iter_mut().filter(|e| e.floor > top_floor) {
            elevator.floor = top_floor;
            moved += 1;
        }
        moved
    }

    /// Check the structural invariants that must hold between operations
    ///
    /// Returns a description of the first violation found.
    pub fn check_invariants(&self) -> Result<(), String> {
        let capacity = self.config.capacity;
        for elevator in &self.elevators {
            if elevator.load() > capacity {
                return Err(format!(
                    "elevator {} carries {} passengers over capacity {}",
                    elevator.id,
                    elevator.load(),
                    capacity
                ));
            }
            if elevator.floor < 1 || elevator.floor > self.config.floor_count {
                return Err(format!("elevator {} is outside the shaft at floor {}", elevator.id, elevator.floor));
            }
        }

        if self.has_created_count() > self.config.target_people {
            return Err(format!(
                "{} passengers created, above the target of {}",
                self.has_created_count(),
                self.config.target_people
            ));
        }

        if self.is_complete() != (self.current_people == self.config.target_people)
            && self.status != SimulationStatus::Initialization
        {
            return Err(format!(
                "status {} does not match {} of {} delivered",
                self.status, self.current_people, self.config.target_people
            ));
        }

        Ok(())
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
