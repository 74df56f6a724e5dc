//! Boarding and alighting
//!
//! Runs when the driver observes a car with its door open. Passengers who have
//! arrived get off, then waiting passengers on the floor who are heading the
//! car's way get on in queue order until the car is full. The door closes
//! afterwards and stays closed until the next door evaluation.

use tracing::debug;

use crate::elevator::Elevator;
use crate::passenger::Passenger;
use crate::types::{ElevatorStatus, PassengerId};

/// Result of one boarding call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardingOutcome {
    /// Unknown car or closed door, nothing changed
    NoOp,
    /// The door cycle ran
    Served {
        /// Passengers who got off at this floor
        alighted: Vec<Passenger>,
        /// Passengers who got on, in boarding order
        boarded: Vec<PassengerId>,
    },
}

impl BoardingOutcome {
    /// Whether the call changed nothing
    pub fn is_noop(&self) -> bool {
        matches!(self, BoardingOutcome::NoOp)
    }

    /// Number of passengers delivered by this call
    pub fn delivered(&self) -> usize {
        match self {
            BoardingOutcome::NoOp => 0,
            BoardingOutcome::Served { alighted, .. } => alighted.len(),
        }
    }

    /// Number of passengers who boarded
    pub fn boarded(&self) -> usize {
        match self {
            BoardingOutcome::NoOp => 0,
            BoardingOutcome::Served { boarded, .. } => boarded.len(),
        }
    }
}

/// Moves passengers between the waiting queue and a car
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardingController {
    capacity: usize,
}

impl BoardingController {
    /// Create a boarding controller for cars of `capacity`
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Run the door cycle for one car
    ///
    /// The car's direction is read once at the start. Boarding passengers do
    /// not change which waiting passengers match during the same call.
    pub fn serve(&self, elevator: &mut Elevator, waitings: &mut Vec<Passenger>) -> BoardingOutcome {
        if !elevator.is_door_open {
            return BoardingOutcome::NoOp;
        }

        let alighted = elevator.unload_arrivals();

        let floor = elevator.floor;
        let direction = elevator.status;
        let mut boarded = Vec::new();
        while elevator.has_room(self.capacity) {
            let Some(position) = waitings.iter().position(|p| p.is_boardable(floor, direction)) else {
                break;
            };
            let passenger = waitings.remove(position);
            boarded.push(passenger.id);
            elevator.passengers.push(passenger);
        }

        if elevator.is_empty() {
            elevator.status = ElevatorStatus::Idle;
        }
        elevator.is_door_open = false;

        debug!(
            "Elevator {} at floor {}: {} off, {} on, load {}/{}",
            elevator.id,
            floor,
            alighted.len(),
            boarded.len(),
            elevator.load(),
            self.capacity
        );

        BoardingOutcome::Served { alighted, boarded }
    }
}
