//! Unique identifier types for the elevator simulator
//!
//! Passengers and elevators carry monotonic numeric ids handed out by an
//! [`IdAllocator`]. A run of the simulation is tagged with a UUID-based
//! [`RunId`] so log lines from different runs can be told apart.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a passenger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassengerId(pub u64);

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PAX_{}", self.0)
    }
}

/// Unique identifier for an elevator car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElevatorId(pub u64);

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CAR_{}", self.0)
    }
}

/// Unique identifier for one started run of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(pub Uuid);

impl RunId {
    /// Create a new random run ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RUN_{}", self.0.simple())
    }
}

impl Serialize for RunId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("RUN_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for RunId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let raw = s.strip_prefix("RUN_").unwrap_or(&s);
        let uuid = Uuid::parse_str(raw).map_err(serde::de::Error::custom)?;
        Ok(RunId(uuid))
    }
}

/// Monotonic allocator for passenger and elevator ids
///
/// Ids are never reused for the lifetime of the allocator, including across
/// restarts of the simulation it belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdAllocator {
    next_passenger: u64,
    next_elevator: u64,
}

impl IdAllocator {
    /// Create an allocator whose first passenger id is 1 and first elevator id is 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next passenger id
    pub fn next_passenger_id(&mut self) -> PassengerId {
        self.next_passenger += 1;
        PassengerId(self.next_passenger)
    }

    /// Allocate the next elevator id
    pub fn next_elevator_id(&mut self) -> ElevatorId {
        let id = ElevatorId(self.next_elevator);
        self.next_elevator += 1;
        id
    }

    /// Number of passenger ids handed out so far
    pub fn passengers_allocated(&self) -> u64 {
        self.next_passenger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ids = IdAllocator::new();
        let first = ids.next_passenger_id();
        let second = ids.next_passenger_id();
        assert_eq!(first, PassengerId(1));
        assert_eq!(second, PassengerId(2));
        assert_eq!(ids.passengers_allocated(), 2);

        assert_eq!(ids.next_elevator_id(), ElevatorId(0));
        assert_eq!(ids.next_elevator_id(), ElevatorId(1));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(PassengerId(7).to_string(), "PAX_7");
        assert_eq!(ElevatorId(0).to_string(), "CAR_0");
        assert!(RunId::new().to_string().starts_with("RUN_"));
    }

    #[test]
    fn test_run_id_serialization() {
        let run_id = RunId::new();
        let json = serde_json::to_string(&run_id).unwrap();
        assert!(json.contains("RUN_"));

        let parsed: RunId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, run_id);
    }

    #[test]
    fn test_numeric_ids_serialize_transparently() {
        assert_eq!(serde_json::to_string(&PassengerId(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&ElevatorId(1)).unwrap(), "1");
    }
}
