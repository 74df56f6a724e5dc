//! Door control
//!
//! Decides, per car and per tick, whether the door is open. A door opens when
//! someone on board has arrived or when someone waiting on the car's floor can
//! board in the car's direction and there is room for them.

use crate::elevator::Elevator;
use crate::passenger::Passenger;
use crate::types::ElevatorStatus;

/// Opens and closes elevator doors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorController {
    capacity: usize,
}

impl DoorController {
    /// Create a door controller for cars of `capacity`
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Set every empty car back to idle
    ///
    /// Returns the number of cars released.
    pub fn release_empty(elevators: &mut [Elevator]) -> usize {
        let mut released = 0;
        for elevator in elevators.iter_mut().filter(|e| e.is_empty() && !e.is_idle()) {
            elevator.status = ElevatorStatus::Idle;
            released += 1;
        }
        released
    }

    /// Whether `elevator` should have its door open this tick
    pub fn should_open(&self, elevator: &Elevator, waitings: &[Passenger]) -> bool {
        elevator.has_arrivals()
            || (elevator.has_room(self.capacity)
                && waitings.iter().any(|p| p.is_boardable(elevator.floor, elevator.status)))
    }

    /// Evaluate every door in the fleet
    ///
    /// Returns the number of cars whose door is open afterwards.
    pub fn evaluate(&self, elevators: &mut [Elevator], waitings: &[Passenger]) -> usize {
        let mut open = 0;
        for elevator in elevators.iter_mut() {
            elevator.is_door_open = self.should_open(elevator, waitings);
            if elevator.is_door_open {
                open += 1;
            }
        }
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ElevatorId, PassengerId};

    fn trip(id: u64, from: usize, to: usize) -> Passenger {
        Passenger::new(PassengerId(id), from, to)
    }

    #[test]
    fn test_release_empty_only_touches_empty_cars() {
        let mut loaded = Elevator::parked_at(ElevatorId(0), 3).with_status(ElevatorStatus::Up);
        loaded.passengers.push(trip(1, 3, 6));
        let mut fleet = vec![
            loaded,
            Elevator::parked_at(ElevatorId(1), 5).with_status(ElevatorStatus::Down),
            Elevator::parked_at(ElevatorId(2), 1),
        ];

        assert_eq!(DoorController::release_empty(&mut fleet), 1);
        assert_eq!(fleet[0].status, ElevatorStatus::Up);
        assert_eq!(fleet[1].status, ElevatorStatus::Idle);
    }

    #[test]
    fn test_door_opens_for_arrivals() {
        let doors = DoorController::new(1);
        let mut elevator = Elevator::parked_at(ElevatorId(0), 6).with_status(ElevatorStatus::Up);
        elevator.passengers.push(trip(1, 2, 6));

        // Full car still opens to let someone off
        assert!(doors.should_open(&elevator, &[]));
    }

    #[test]
    fn test_door_opens_for_boardable_waiting_passenger() {
        let doors = DoorController::new(5);
        let elevator = Elevator::parked_at(ElevatorId(0), 4).with_status(ElevatorStatus::Down);

        assert!(doors.should_open(&elevator, &[trip(1, 4, 2)]));
        assert!(!doors.should_open(&elevator, &[trip(1, 4, 8)]));
        assert!(!doors.should_open(&elevator, &[trip(1, 5, 2)]));
    }

    #[test]
    fn test_idle_car_keeps_door_closed() {
        let doors = DoorController::new(5);
        let elevator = Elevator::parked_at(ElevatorId(0), 4);

        assert!(!doors.should_open(&elevator, &[trip(1, 4, 2), trip(2, 4, 9)]));
    }

    #[test]
    fn test_full_car_does_not_open_for_boarding() {
        let doors = DoorController::new(1);
        let mut elevator = Elevator::parked_at(ElevatorId(0), 4).with_status(ElevatorStatus::Up);
        elevator.passengers.push(trip(1, 1, 9));

        assert!(!doors.should_open(&elevator, &[trip(2, 4, 7)]));
    }

    #[test]
    fn test_evaluate_closes_previously_open_doors() {
        let doors = DoorController::new(5);
        let mut elevator = Elevator::parked_at(ElevatorId(0), 4).with_status(ElevatorStatus::Up);
        elevator.is_door_open = true;
        let mut fleet = vec![elevator];

        assert_eq!(doors.evaluate(&mut fleet, &[]), 0);
        assert!(!fleet[0].is_door_open);
    }
}
