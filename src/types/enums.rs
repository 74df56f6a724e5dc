//! Enumeration types for the elevator simulator
//!
//! This module contains the enumerations shared across the engine: the movement
//! status of an elevator, the direction a passenger needs to travel, and the
//! lifecycle status of a simulation run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Movement status of a single elevator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ElevatorStatus {
    /// Parked and unassigned
    #[default]
    Idle,
    /// Travelling towards higher floors
    Up,
    /// Travelling towards lower floors
    Down,
}

impl ElevatorStatus {
    /// The opposite travel status. Idle stays idle.
    pub fn reversed(self) -> Self {
        match self {
            ElevatorStatus::Idle => ElevatorStatus::Idle,
            ElevatorStatus::Up => ElevatorStatus::Down,
            ElevatorStatus::Down => ElevatorStatus::Up,
        }
    }

    /// Whether this status moves the car in the given direction
    pub fn is_moving(self, direction: Direction) -> bool {
        matches!(
            (self, direction),
            (ElevatorStatus::Up, Direction::Up) | (ElevatorStatus::Down, Direction::Down)
        )
    }
}

impl From<Direction> for ElevatorStatus {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => ElevatorStatus::Up,
            Direction::Down => ElevatorStatus::Down,
        }
    }
}

impl fmt::Display for ElevatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElevatorStatus::Idle => write!(f, "idle"),
            ElevatorStatus::Up => write!(f, "up"),
            ElevatorStatus::Down => write!(f, "down"),
        }
    }
}

impl FromStr for ElevatorStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(ElevatorStatus::Idle),
            "up" => Ok(ElevatorStatus::Up),
            "down" => Ok(ElevatorStatus::Down),
            _ => Err(format!("Unknown elevator status: {}", s)),
        }
    }
}

/// Direction a passenger needs to travel from their origin floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Destination is above the origin
    Up,
    /// Destination is below the origin
    Down,
}

impl Direction {
    /// Direction of travel between two floors. Equal floors count as down.
    pub fn between(from_floor: usize, to_floor: usize) -> Self {
        if to_floor > from_floor {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Lifecycle status of a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SimulationStatus {
    /// Configured but not yet started
    #[default]
    Initialization,
    /// Started, target ridership not yet met
    Running,
    /// Every target passenger has been delivered
    Ending,
}

impl fmt::Display for SimulationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationStatus::Initialization => write!(f, "initialization"),
            SimulationStatus::Running => write!(f, "running"),
            SimulationStatus::Ending => write!(f, "ending"),
        }
    }
}

impl FromStr for SimulationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "initialization" | "init" => Ok(SimulationStatus::Initialization),
            "running" => Ok(SimulationStatus::Running),
            "ending" | "ended" => Ok(SimulationStatus::Ending),
            _ => Err(format!("Unknown simulation status: {}", s)),
        }
    }
}
