//! The combined dispatch, door, and movement step
//!
//! One call runs, in order: release of empty cars back to idle, the planning
//! pass over the waiting queue, boundary reversal across the fleet, door
//! evaluation, and movement.

use serde::{Deserialize, Serialize};

use crate::dispatch::{Assignment, DispatchPlanner, DoorController, MovementEngine};
use crate::elevator::Elevator;
use crate::passenger::Passenger;
use crate::types::SimulationConfig;

/// What happened during one elevator step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepSummary {
    /// Passenger-to-car matches from the planning pass
    pub assignments: Vec<Assignment>,
    /// Empty cars set back to idle before planning
    pub released: usize,
    /// Cars reversed at the top or bottom floor, during planning or after it
    pub reversed: usize,
    /// Cars with an open door after evaluation
    pub doors_open: usize,
    /// Cars that changed floor
    pub moved: usize,
    /// Cars held by an open door
    pub dwelled: usize,
}

/// Run one elevator step over the fleet
pub fn run_step(
    config: &SimulationConfig,
    elevators: &mut [Elevator],
    waitings: &[Passenger],
) -> StepSummary {
    let planner = DispatchPlanner::from_config(config);
    let doors = DoorController::new(config.capacity);

    let released = DoorController::release_empty(elevators);
    let assignments = planner.plan(elevators, waitings);
    let reversed = assignments.iter().filter(|a| a.reversed).count()
        + planner.reverse_at_boundaries(elevators);
    let doors_open = doors.evaluate(elevators, waitings);
    let movement = MovementEngine::advance(elevators);

    StepSummary {
        assignments,
        released,
        reversed,
        doors_open,
        moved: movement.moved,
        dwelled: movement.dwelled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ElevatorId, ElevatorStatus, PassengerId};

    fn config(floor_count: usize, capacity: usize) -> SimulationConfig {
        SimulationConfig { floor_count, capacity, ..SimulationConfig::default() }
    }

    #[test]
    fn test_claimed_car_on_passenger_floor_opens_instead_of_moving() {
        let mut fleet = vec![Elevator::new(ElevatorId(0))];
        let waitings = vec![Passenger::new(PassengerId(1), 1, 5)];

        let summary = run_step(&config(5, 5), &mut fleet, &waitings);

        assert_eq!(fleet[0].status, ElevatorStatus::Up);
        assert!(fleet[0].is_door_open);
        assert_eq!(fleet[0].floor, 1);
        assert_eq!(summary.doors_open, 1);
        assert_eq!(summary.dwelled, 1);
    }

    #[test]
    fn test_claimed_car_moves_towards_passenger() {
        let mut fleet = vec![Elevator::new(ElevatorId(0))];
        let waitings = vec![Passenger::new(PassengerId(1), 4, 2)];

        let summary = run_step(&config(5, 5), &mut fleet, &waitings);

        assert_eq!(fleet[0].status, ElevatorStatus::Up);
        assert_eq!(fleet[0].floor, 2);
        assert_eq!(summary.moved, 1);
    }

    #[test]
    fn test_empty_moving_car_is_released_then_reclaimed() {
        let mut fleet = vec![Elevator::parked_at(ElevatorId(0), 4).with_status(ElevatorStatus::Up)];
        let waitings = vec![Passenger::new(PassengerId(1), 4, 2)];

        let summary = run_step(&config(5, 5), &mut fleet, &waitings);

        assert_eq!(summary.released, 1);
        assert_eq!(fleet[0].status, ElevatorStatus::Down);
        assert!(fleet[0].is_door_open);
        assert_eq!(fleet[0].floor, 4);
    }

    #[test]
    fn test_loaded_car_reverses_at_top_and_heads_down() {
        let mut car = Elevator::parked_at(ElevatorId(0), 10).with_status(ElevatorStatus::Up);
        car.passengers.push(Passenger::new(PassengerId(1), 10, 3));
        let mut fleet = vec![car];

        let summary = run_step(&config(10, 5), &mut fleet, &[]);

        assert_eq!(summary.reversed, 1);
        assert_eq!(fleet[0].status, ElevatorStatus::Down);
        assert_eq!(fleet[0].floor, 9);
    }

    #[test]
    fn test_reversal_during_planning_is_counted_once() {
        let mut car = Elevator::parked_at(ElevatorId(0), 10).with_status(ElevatorStatus::Up);
        car.passengers.push(Passenger::new(PassengerId(1), 5, 10));
        let mut fleet = vec![car, Elevator::new(ElevatorId(1))];
        let waitings = vec![
            Passenger::new(PassengerId(2), 10, 3),
            Passenger::new(PassengerId(3), 8, 2),
        ];

        let summary = run_step(&config(10, 5), &mut fleet, &waitings);

        assert_eq!(summary.reversed, 1);
        assert_eq!(summary.assignments.len(), 2);
        assert!(summary.assignments.iter().all(|a| a.elevator == ElevatorId(0)));
        assert_eq!(fleet[0].status, ElevatorStatus::Down);
        assert!(fleet[0].is_door_open);
        assert_eq!(fleet[0].floor, 10);
        assert!(fleet[1].is_idle());
    }

    #[test]
    fn test_empty_fleet_and_queue() {
        let mut fleet: Vec<Elevator> = Vec::new();
        let summary = run_step(&config(10, 5), &mut fleet, &[]);
        assert_eq!(summary, StepSummary::default());
    }
}
