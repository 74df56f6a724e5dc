//! Dispatch planning
//!
//! Assigns waiting passengers to elevators by setting each chosen car's
//! direction. The planner never boards anyone; boarding happens later when the
//! driver triggers it for a car whose door is open.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::elevator::{Elevator, GROUND_FLOOR};
use crate::passenger::Passenger;
use crate::types::{Direction, ElevatorId, ElevatorStatus, PassengerId, SimulationConfig};

/// A passenger matched to an elevator during one planning pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The waiting passenger
    pub passenger: PassengerId,
    /// The car chosen for them
    pub elevator: ElevatorId,
    /// The car's status after the match
    pub status: ElevatorStatus,
    /// Whether the car was idle before being claimed
    pub claimed_idle: bool,
    /// Whether the match turned the car around at the top or bottom floor
    pub reversed: bool,
}

/// Chooses the best-positioned elevator for each waiting passenger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchPlanner {
    capacity: usize,
    floor_count: usize,
}

impl DispatchPlanner {
    /// Create a planner for cars of `capacity` in a building of `floor_count` floors
    pub fn new(capacity: usize, floor_count: usize) -> Self {
        Self { capacity, floor_count }
    }

    /// Create a planner from a simulation configuration
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.capacity, config.top_floor())
    }

    /// Run one planning pass over the waiting queue
    ///
    /// Passengers are visited in arrival order. A car claimed for an earlier
    /// passenger keeps its new status for every later passenger in the same
    /// pass, so it can be picked up as an en-route match further down the
    /// queue. Returns one assignment per matched passenger.
    pub fn plan(&self, elevators: &mut [Elevator], waitings: &[Passenger]) -> Vec<Assignment> {
        let mut assignments = Vec::new();

        for passenger in waitings {
            let Some(index) = self.select(elevators, passenger) else {
                trace!("No elevator available for passenger {}", passenger.id);
                continue;
            };

            let elevator = &mut elevators[index];
            let claimed_idle = elevator.is_idle();
            let mut reversed = false;
            if claimed_idle {
                elevator.status = Self::heading_for(elevator.floor, passenger);
                debug!(
                    "Elevator {} at floor {} claimed for passenger {} at floor {}, now {}",
                    elevator.id, elevator.floor, passenger.id, passenger.from_floor, elevator.status
                );
            } else {
                // A matched car at the top or bottom turns around now, so later
                // passengers in this pass see its new direction
                reversed = self.reverse_if_at_boundary(elevator);
            }

            assignments.push(Assignment {
                passenger: passenger.id,
                elevator: elevator.id,
                status: elevator.status,
                claimed_idle,
                reversed,
            });
        }

        assignments
    }

    /// Index of the preferred car for `passenger`, if any
    ///
    /// The nearest en-route compatible car wins; failing that the nearest idle
    /// car. Ties go to the car earlier in the fleet.
    pub fn select(&self, elevators: &[Elevator], passenger: &Passenger) -> Option<usize> {
        Self::nearest(elevators, passenger.from_floor, |e| self.is_en_route_compatible(e, passenger))
            .or_else(|| Self::nearest(elevators, passenger.from_floor, Elevator::is_idle))
    }

    /// Whether a moving car can still reach `passenger` without reversing
    pub fn is_en_route_compatible(&self, elevator: &Elevator, passenger: &Passenger) -> bool {
        if !elevator.has_room(self.capacity) {
            return false;
        }

        let from_floor = passenger.from_floor;
        match (passenger.direction(), elevator.status) {
            (Direction::Up, ElevatorStatus::Up) => elevator.floor <= from_floor,
            (Direction::Down, ElevatorStatus::Down) => elevator.floor >= from_floor,
            // Cars parked at a boundary will reverse there on this tick
            (Direction::Up, ElevatorStatus::Down) => {
                from_floor == GROUND_FLOOR && elevator.floor == GROUND_FLOOR
            }
            (Direction::Down, ElevatorStatus::Up) => {
                from_floor == self.floor_count && elevator.floor == self.floor_count
            }
            (_, ElevatorStatus::Idle) => false,
        }
    }

    /// Flip every car moving into the top or bottom of the shaft
    ///
    /// Applied to the whole fleet each tick whether or not any passenger was
    /// matched. Returns the number of cars reversed.
    pub fn reverse_at_boundaries(&self, elevators: &mut [Elevator]) -> usize {
        let mut reversed = 0;
        for elevator in elevators.iter_mut() {
            if self.reverse_if_at_boundary(elevator) {
                reversed += 1;
            }
        }
        reversed
    }

    /// Flip one car if it is moving into the top or bottom of the shaft
    ///
    /// Returns whether the car was reversed.
    pub fn reverse_if_at_boundary(&self, elevator: &mut Elevator) -> bool {
        let at_boundary = match elevator.status {
            ElevatorStatus::Up => elevator.floor == self.floor_count,
            ElevatorStatus::Down => elevator.floor == GROUND_FLOOR,
            ElevatorStatus::Idle => false,
        };
        if at_boundary {
            elevator.status = elevator.status.reversed();
            debug!("Elevator {} reversed to {} at floor {}", elevator.id, elevator.status, elevator.floor);
        }
        at_boundary
    }

    /// Status an idle car at `floor` takes on when claimed for `passenger`
    fn heading_for(floor: usize, passenger: &Passenger) -> ElevatorStatus {
        use std::cmp::Ordering;

        match floor.cmp(&passenger.from_floor) {
            Ordering::Less => ElevatorStatus::Up,
            Ordering::Greater => ElevatorStatus::Down,
            Ordering::Equal => match passenger.to_floor.cmp(&passenger.from_floor) {
                Ordering::Greater => ElevatorStatus::Up,
                Ordering::Less => ElevatorStatus::Down,
                Ordering::Equal => ElevatorStatus::Idle,
            },
        }
    }

    /// Index of the closest car to `floor` among those matching `filter`
    fn nearest<F>(elevators: &[Elevator], floor: usize, filter: F) -> Option<usize>
    where
        F: Fn(&Elevator) -> bool,
    {
        elevators
            .iter()
            .enumerate()
            .filter(|(_, elevator)| filter(elevator))
            // Index in the key keeps the earliest car on ties
            .min_by_key(|(index, elevator)| (elevator.distance_to(floor), *index))
            .map(|(index, _)| index)
    }
}
