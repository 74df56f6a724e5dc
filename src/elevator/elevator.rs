//! Core elevator struct and methods

use serde::{Deserialize, Serialize};

use crate::passenger::Passenger;
use crate::types::{ElevatorId, ElevatorStatus};

/// Floor every car starts on
pub const GROUND_FLOOR: usize = 1;

/// A single elevator car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Elevator {
    /// Unique identifier
    pub id: ElevatorId,
    /// Current floor, between 1 and the building's floor count
    pub floor: usize,
    /// Passengers on board, in boarding order
    pub passengers: Vec<Passenger>,
    /// Direction the car is travelling, or idle
    pub status: ElevatorStatus,
    /// Whether the door is open this tick
    pub is_door_open: bool,
}

impl Elevator {
    /// Create an idle car on the ground floor with its door closed
    pub fn new(id: ElevatorId) -> Self {
        Self::parked_at(id, GROUND_FLOOR)
    }

    /// Create an idle, empty car on a given floor
    pub fn parked_at(id: ElevatorId, floor: usize) -> Self {
        Self { id, floor, passengers: Vec::new(), status: ElevatorStatus::Idle, is_door_open: false }
    }

    /// Builder-style status override
    pub fn with_status(mut self, status: ElevatorStatus) -> Self {
        self.status = status;
        self
    }

    /// Number of passengers on board
    pub fn load(&self) -> usize {
        self.passengers.len()
    }

    /// Whether the car has no passengers
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Whether another passenger fits under `capacity`
    pub fn has_room(&self, capacity: usize) -> bool {
        self.passengers.len() < capacity
    }

    /// Whether the car is unassigned
    pub fn is_idle(&self) -> bool {
        self.status == ElevatorStatus::Idle
    }

    /// Whether any passenger on board wants to get off at the current floor
    pub fn has_arrivals(&self) -> bool {
        self.passengers.iter().any(|p| p.to_floor == self.floor)
    }

    /// Distance in floors to `floor`
    pub fn distance_to(&self, floor: usize) -> usize {
        self.floor.abs_diff(floor)
    }

    /// Remove every passenger whose destination is the current floor
    ///
    /// Returns the passengers that alighted, in boarding order.
    pub fn unload_arrivals(&mut self) -> Vec<Passenger> {
        let floor = self.floor;
        let (arrived, staying): (Vec<_>, Vec<_>) =
            self.passengers.drain(..).partition(|p| p.to_floor == floor);
        self.passengers = staying;
        arrived
    }

    /// Reset the car for a new run, keeping its id and floor
    pub fn reset(&mut self) {
        self.passengers.clear();
        self.status = ElevatorStatus::Idle;
        self.is_door_open = false;
    }
}
