//! Simulation clock and run lifecycle
//!
//! Tracks elapsed simulated seconds and moves the run status forward. Time is
//! purely simulated: nothing here reads the wall clock.

use tracing::{debug, info, instrument};

use crate::elevator::Elevator;
use crate::simulation::SimulationState;
use crate::types::{IdAllocator, RunId, SimulationStatus};

/// Clock and lifecycle operations over a [`SimulationState`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulationClock;

impl SimulationClock {
    /// Begin a new run
    ///
    /// Resizes the fleet to the configured elevator count. Existing cars keep
    /// their id and floor but are emptied, set idle, and closed; a car above
    /// the configured top floor is brought down to it. New cars are
    /// appended idle on the ground floor. Elapsed time, the waiting queue, and
    /// the delivered count are reset and the status becomes running.
    #[instrument(skip(state, ids), fields(elevators = state.config.elevator_count))]
    pub fn start(state: &mut SimulationState, ids: &mut IdAllocator) -> RunId {
        let elevator_count = state.config.elevator_count;

        state.elevators.truncate(elevator_count);
        for elevator in state.elevators.iter_mut() {
            elevator.reset();
        }
        let lowered = state.fit_fleet_to_building();
        if lowered > 0 {
            debug!("Lowered {} elevators to top floor {}", lowered, state.config.top_floor());
        }
        while state.elevators.len() < elevator_count {
            state.elevators.push(Elevator::new(ids.next_elevator_id()));
        }

        let run_id = RunId::new();
        state.run_id = Some(run_id);
        state.total_seconds = 0;
        state.waitings.clear();
        state.current_people = 0;
        state.status = SimulationStatus::Running;

        info!(
            "Started run {} with {} elevators over {} floors, target {} passengers",
            run_id, elevator_count, state.config.floor_count, state.config.target_people
        );
        run_id
    }

    /// Advance simulated time by one second
    pub fn advance(state: &mut SimulationState) {
        state.total_seconds += 1;
    }

    /// Move to ending once the delivered count reaches the target
    ///
    /// Returns true when this call changed the status.
    pub fn settle(state: &mut SimulationState) -> bool {
        if state.status == SimulationStatus::Running
            && state.current_people == state.config.target_people
        {
            state.status = SimulationStatus::Ending;
            debug!("Run reached its target after {} seconds", state.total_seconds);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passenger::Passenger;
    use crate::types::{ElevatorId, ElevatorStatus, PassengerId, SimulationConfig};

    #[test]
    fn test_start_builds_fleet() {
        let mut state = SimulationState::new(SimulationConfig {
            elevator_count: 3,
            ..SimulationConfig::default()
        });
        let mut ids = IdAllocator::new();

        SimulationClock::start(&mut state, &mut ids);

        assert_eq!(state.status, SimulationStatus::Running);
        assert!(state.run_id.is_some());
        let fleet_ids: Vec<_> = state.elevators.iter().map(|e| e.id).collect();
        assert_eq!(fleet_ids, vec![ElevatorId(0), ElevatorId(1), ElevatorId(2)]);
        assert!(state.elevators.iter().all(|e| e.floor == 1 && e.is_idle() && !e.is_door_open));
    }

    #[test]
    fn test_restart_preserves_cars_and_resets_counters() {
        let mut state = SimulationState::new(SimulationConfig {
            elevator_count: 1,
            ..SimulationConfig::default()
        });
        let mut ids = IdAllocator::new();
        let first_run = SimulationClock::start(&mut state, &mut ids);

        state.elevators[0].floor = 6;
        state.elevators[0].status = ElevatorStatus::Down;
        state.elevators[0].passengers.push(Passenger::new(PassengerId(1), 8, 2));
        state.waitings.push(Passenger::new(PassengerId(2), 3, 4));
        state.current_people = 4;
        state.total_seconds = 99;
        state.config.elevator_count = 2;

        let second_run = SimulationClock::start(&mut state, &mut ids);

        assert_ne!(first_run, second_run);
        assert_eq!(state.elevators.len(), 2);
        assert_eq!(state.elevators[0].id, ElevatorId(0));
        assert_eq!(state.elevators[0].floor, 6);
        assert!(state.elevators[0].is_empty());
        assert!(state.elevators[0].is_idle());
        assert_eq!(state.elevators[1].id, ElevatorId(1));
        assert_eq!(state.total_seconds, 0);
        assert_eq!(state.current_people, 0);
        assert!(state.waitings.is_empty());
    }

    #[test]
    fn test_start_shrinks_fleet() {
        let mut state = SimulationState::new(SimulationConfig {
            elevator_count: 4,
            ..SimulationConfig::default()
        });
        let mut ids = IdAllocator::new();
        SimulationClock::start(&mut state, &mut ids);

        state.config.elevator_count = 2;
        SimulationClock::start(&mut state, &mut ids);
        assert_eq!(state.elevators.len(), 2);
    }

    #[test]
    fn test_restart_brings_cars_within_smaller_building() {
        let mut state = SimulationState::new(SimulationConfig {
            floor_count: 10,
            elevator_count: 2,
            ..SimulationConfig::default()
        });
        let mut ids = IdAllocator::new();
        SimulationClock::start(&mut state, &mut ids);
        state.elevators[0].floor = 10;
        state.elevators[1].floor = 2;

        state.config.floor_count = 3;
        SimulationClock::start(&mut state, &mut ids);

        assert_eq!(state.elevators[0].floor, 3);
        assert_eq!(state.elevators[1].floor, 2);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_advance_and_settle() {
        let mut state = SimulationState::new(SimulationConfig {
            target_people: 2,
            ..SimulationConfig::default()
        });
        state.status = SimulationStatus::Running;

        SimulationClock::advance(&mut state);
        SimulationClock::advance(&mut state);
        assert_eq!(state.total_seconds, 2);

        state.current_people = 1;
        assert!(!SimulationClock::settle(&mut state));
        state.current_people = 2;
        assert!(SimulationClock::settle(&mut state));
        assert_eq!(state.status, SimulationStatus::Ending);
        assert!(!SimulationClock::settle(&mut state));
    }
}
