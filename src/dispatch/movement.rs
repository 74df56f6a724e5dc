//! Car movement
//!
//! Cars with a closed door move one floor in their direction per step. Cars
//! with an open door dwell. There is no clamping here: boundary reversal in
//! the planner keeps cars inside the shaft.

use crate::elevator::Elevator;
use crate::types::ElevatorStatus;

/// Floors moved and dwell ticks from one movement step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementSummary {
    /// Cars that changed floor
    pub moved: usize,
    /// Cars held at their floor by an open door
    pub dwelled: usize,
}

/// Advances cars between floors
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementEngine;

impl MovementEngine {
    /// Move a single car. Returns whether its floor changed.
    pub fn advance_one(elevator: &mut Elevator) -> bool {
        if elevator.is_door_open {
            return false;
        }

        match elevator.status {
            ElevatorStatus::Up => {
                elevator.floor += 1;
                true
            }
            ElevatorStatus::Down => {
                elevator.floor -= 1;
                true
            }
            ElevatorStatus::Idle => false,
        }
    }

    /// Move every car in the fleet
    pub fn advance(elevators: &mut [Elevator]) -> MovementSummary {
        let mut summary = MovementSummary::default();
        for elevator in elevators.iter_mut() {
            if elevator.is_door_open {
                summary.dwelled += 1;
            } else if Self::advance_one(elevator) {
                summary.moved += 1;
            }
        }
        summary
    }
}
