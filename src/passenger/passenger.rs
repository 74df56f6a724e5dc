//! Core passenger struct and methods

use serde::{Deserialize, Serialize};

use crate::types::{Direction, ElevatorStatus, PassengerId};

/// Display names handed out round-robin by passenger id
const NAME_POOL: [&str; 24] = [
    "Ada Holloway",
    "Bram Ostrowski",
    "Celia Marchetti",
    "Dov Feldman",
    "Elin Sandberg",
    "Farid Haddad",
    "Greta Lindqvist",
    "Hugo Varga",
    "Ines Carvalho",
    "Jonas Brandt",
    "Kira Novak",
    "Leon Dubois",
    "Maya Okafor",
    "Nils Eriksen",
    "Olga Petrova",
    "Pavel Horak",
    "Quinn Gallagher",
    "Rosa Jimenez",
    "Sami Laine",
    "Tove Berg",
    "Umar Siddiqui",
    "Vera Kowalski",
    "Wim de Jong",
    "Yara Nasser",
];

/// A trip request from one floor to another
///
/// Passengers are immutable once created. They move from the waiting queue
/// into one elevator and are dropped when they alight at `to_floor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    /// Unique identifier
    pub id: PassengerId,
    /// Floor where the passenger waits
    pub from_floor: usize,
    /// Floor the passenger wants to reach, never equal to `from_floor`
    pub to_floor: usize,
    /// Display name
    pub name: String,
}

impl Passenger {
    /// Create a passenger with a name drawn from the fixed pool
    pub fn new(id: PassengerId, from_floor: usize, to_floor: usize) -> Self {
        debug_assert_ne!(from_floor, to_floor, "a trip must change floors");
        Self { id, from_floor, to_floor, name: Self::pool_name(id).to_string() }
    }

    /// Name assigned to a given passenger id
    pub fn pool_name(id: PassengerId) -> &'static str {
        NAME_POOL[(id.0 % NAME_POOL.len() as u64) as usize]
    }

    /// Direction this passenger needs to travel
    pub fn direction(&self) -> Direction {
        Direction::between(self.from_floor, self.to_floor)
    }

    /// Whether an elevator at `floor` with `status` can pick this passenger up
    ///
    /// The car must be on the passenger's floor and already heading the way
    /// the passenger wants to go. Idle cars never match.
    pub fn is_boardable(&self, floor: usize, status: ElevatorStatus) -> bool {
        self.from_floor == floor && status.is_moving(self.direction())
    }

    /// Number of floors between origin and destination
    pub fn trip_length(&self) -> usize {
        self.from_floor.abs_diff(self.to_floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passenger_direction() {
        let up = Passenger::new(PassengerId(1), 2, 7);
        assert_eq!(up.direction(), Direction::Up);
        assert_eq!(up.trip_length(), 5);

        let down = Passenger::new(PassengerId(2), 9, 1);
        assert_eq!(down.direction(), Direction::Down);
    }

    #[test]
    fn test_boardable_requires_floor_and_direction() {
        let passenger = Passenger::new(PassengerId(1), 3, 8);

        assert!(passenger.is_boardable(3, ElevatorStatus::Up));
        assert!(!passenger.is_boardable(3, ElevatorStatus::Down));
        assert!(!passenger.is_boardable(3, ElevatorStatus::Idle));
        assert!(!passenger.is_boardable(4, ElevatorStatus::Up));
    }

    #[test]
    fn test_names_come_from_pool() {
        let a = Passenger::new(PassengerId(1), 1, 2);
        let b = Passenger::new(PassengerId(1 + NAME_POOL.len() as u64), 1, 2);
        assert_eq!(a.name, b.name);
        assert!(!a.name.is_empty());
    }
}
