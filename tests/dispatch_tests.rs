//! Integration tests for the dispatch components working together

use elevator_dispatch_simulator::*;

fn passenger(id: u64, from_floor: usize, to_floor: usize) -> Passenger {
    Passenger::new(PassengerId(id), from_floor, to_floor)
}

#[test]
fn test_en_route_car_preferred_over_closer_idle_car() {
    let planner = DispatchPlanner::new(5, 10);
    let mut moving = Elevator::parked_at(ElevatorId(0), 2).with_status(ElevatorStatus::Up);
    moving.passengers.push(passenger(1, 2, 9));
    let mut fleet = vec![moving, Elevator::parked_at(ElevatorId(1), 6)];

    let assignments = planner.plan(&mut fleet, &[passenger(2, 6, 8)]);

    assert_eq!(assignments[0].elevator, ElevatorId(0));
    assert!(!assignments[0].claimed_idle);
    assert!(fleet[1].is_idle());
}

#[test]
fn test_full_car_is_not_en_route_compatible() {
    let planner = DispatchPlanner::new(1, 10);
    let mut full = Elevator::parked_at(ElevatorId(0), 2).with_status(ElevatorStatus::Up);
    full.passengers.push(passenger(1, 2, 9));
    let mut fleet = vec![full, Elevator::parked_at(ElevatorId(1), 9)];

    let assignments = planner.plan(&mut fleet, &[passenger(2, 4, 8)]);

    assert_eq!(assignments[0].elevator, ElevatorId(1));
    assert_eq!(fleet[1].status, ElevatorStatus::Down);
}

#[test]
fn test_car_that_passed_the_floor_is_not_compatible() {
    let planner = DispatchPlanner::new(5, 10);
    let mut passed = Elevator::parked_at(ElevatorId(0), 5).with_status(ElevatorStatus::Up);
    passed.passengers.push(passenger(1, 1, 9));

    assert!(!planner.is_en_route_compatible(&passed, &passenger(2, 3, 7)));
    assert!(planner.is_en_route_compatible(&passed, &passenger(3, 5, 7)));
    assert!(!planner.is_en_route_compatible(&passed, &passenger(4, 8, 2)));
}

#[test]
fn test_boundary_cars_match_boundary_passengers() {
    let planner = DispatchPlanner::new(5, 10);
    let bottom = Elevator::parked_at(ElevatorId(0), 1).with_status(ElevatorStatus::Down);
    let top = Elevator::parked_at(ElevatorId(1), 10).with_status(ElevatorStatus::Up);

    assert!(planner.is_en_route_compatible(&bottom, &passenger(1, 1, 4)));
    assert!(!planner.is_en_route_compatible(&bottom, &passenger(2, 2, 4)));
    assert!(planner.is_en_route_compatible(&top, &passenger(3, 10, 2)));
    assert!(!planner.is_en_route_compatible(&top, &passenger(4, 9, 2)));
}

#[test]
fn test_equal_distance_goes_to_earlier_car() {
    let planner = DispatchPlanner::new(5, 10);
    let mut fleet = vec![
        Elevator::parked_at(ElevatorId(0), 3),
        Elevator::parked_at(ElevatorId(1), 7),
    ];

    let assignments = planner.plan(&mut fleet, &[passenger(1, 5, 1)]);

    assert_eq!(assignments[0].elevator, ElevatorId(0));
    assert_eq!(fleet[0].status, ElevatorStatus::Up);
    assert!(fleet[1].is_idle());
}

#[test]
fn test_no_car_available_leaves_passenger_unassigned() {
    let planner = DispatchPlanner::new(1, 10);
    let mut full = Elevator::parked_at(ElevatorId(0), 5).with_status(ElevatorStatus::Down);
    full.passengers.push(passenger(1, 5, 1));
    let mut fleet = vec![full];

    let assignments = planner.plan(&mut fleet, &[passenger(2, 3, 1)]);
    assert!(assignments.is_empty());
    assert_eq!(fleet[0].status, ElevatorStatus::Down);
}

#[test]
fn test_boarding_respects_capacity_and_arrival_order() {
    let controller = BoardingController::new(2);
    let mut car = Elevator::parked_at(ElevatorId(0), 4).with_status(ElevatorStatus::Up);
    car.is_door_open = true;
    let mut waitings = vec![
        passenger(1, 4, 2),
        passenger(2, 4, 6),
        passenger(3, 4, 9),
        passenger(4, 4, 7),
    ];

    let outcome = controller.serve(&mut car, &mut waitings);

    match outcome {
        BoardingOutcome::Served { alighted, boarded } => {
            assert!(alighted.is_empty());
            assert_eq!(boarded, vec![PassengerId(2), PassengerId(3)]);
        }
        BoardingOutcome::NoOp => panic!("door was open"),
    }
    assert_eq!(car.load(), 2);
    let remaining: Vec<_> = waitings.iter().map(|p| p.id).collect();
    assert_eq!(remaining, vec![PassengerId(1), PassengerId(4)]);
}

#[test]
fn test_boarding_unloads_before_loading() {
    let controller = BoardingController::new(1);
    let mut car = Elevator::parked_at(ElevatorId(0), 6).with_status(ElevatorStatus::Down);
    car.passengers.push(passenger(1, 9, 6));
    car.is_door_open = true;
    let mut waitings = vec![passenger(2, 6, 1)];

    let outcome = controller.serve(&mut car, &mut waitings);

    assert_eq!(outcome.delivered(), 1);
    assert_eq!(outcome.boarded(), 1);
    assert_eq!(car.passengers[0].id, PassengerId(2));
    assert_eq!(car.status, ElevatorStatus::Down);
    assert!(!car.is_door_open);
}

#[test]
fn test_emptied_car_goes_idle() {
    let controller = BoardingController::new(5);
    let mut car = Elevator::parked_at(ElevatorId(0), 3).with_status(ElevatorStatus::Up);
    car.passengers.push(passenger(1, 1, 3));
    car.is_door_open = true;
    let mut waitings = vec![passenger(2, 3, 1)];

    let outcome = controller.serve(&mut car, &mut waitings);

    assert_eq!(outcome.delivered(), 1);
    assert_eq!(outcome.boarded(), 0);
    assert!(car.is_idle());
    assert_eq!(waitings.len(), 1);
}

#[test]
fn test_door_stays_shut_for_full_car_without_arrivals() {
    let doors = DoorController::new(1);
    let mut car = Elevator::parked_at(ElevatorId(0), 4).with_status(ElevatorStatus::Up);
    car.passengers.push(passenger(1, 1, 8));

    assert!(!doors.should_open(&car, &[passenger(2, 4, 9)]));

    car.floor = 8;
    assert!(doors.should_open(&car, &[]));
}

#[test]
fn test_open_door_holds_car_in_place() {
    let mut car = Elevator::parked_at(ElevatorId(0), 4).with_status(ElevatorStatus::Down);
    car.is_door_open = true;
    assert!(!MovementEngine::advance_one(&mut car));
    assert_eq!(car.floor, 4);

    car.is_door_open = false;
    assert!(MovementEngine::advance_one(&mut car));
    assert_eq!(car.floor, 3);
}
