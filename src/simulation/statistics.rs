//! Statistics collection and reporting
//!
//! Counters for one run, updated by the engine as it operates and rendered
//! by the CLI at the end.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::ElevatorId;

/// Per-car counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElevatorStats {
    /// The car these counters belong to
    pub elevator: ElevatorId,
    /// Floors moved
    pub floors_travelled: u64,
    /// Passengers delivered by this car
    pub deliveries: usize,
    /// Times this car's door went from closed to open
    pub door_openings: u64,
}

impl ElevatorStats {
    /// Zeroed counters for one car
    pub fn new(elevator: ElevatorId) -> Self {
        Self { elevator, floors_travelled: 0, deliveries: 0, door_openings: 0 }
    }
}

/// Counters for a whole run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Elevator steps executed while running
    pub ticks: u64,
    /// Simulated seconds elapsed
    pub simulated_seconds: u64,
    /// Passengers created, randomly or scripted
    pub passengers_generated: usize,
    /// Passengers that boarded a car
    pub passengers_boarded: usize,
    /// Passengers delivered to their destination
    pub passengers_delivered: usize,
    /// Door openings across the fleet
    pub door_openings: u64,
    /// Floors moved across the fleet
    pub floors_travelled: u64,
    /// Car-steps spent holding at a floor with the door open
    pub dwell_ticks: u64,
    /// Longest waiting queue observed
    pub peak_waiting: usize,
    /// Boarding calls that changed nothing
    pub noop_boardings: u64,
    /// Per-car counters, in fleet order
    pub elevators: Vec<ElevatorStats>,
}

impl RunStatistics {
    /// Fresh counters for a fleet
    pub fn for_fleet(ids: impl IntoIterator<Item = ElevatorId>) -> Self {
        Self { elevators: ids.into_iter().map(ElevatorStats::new).collect(), ..Self::default() }
    }

    fn elevator_mut(&mut self, id: ElevatorId) -> Option<&mut ElevatorStats> {
        self.elevators.iter_mut().find(|stats| stats.elevator == id)
    }

    /// Counters for one car
    pub fn elevator(&self, id: ElevatorId) -> Option<&ElevatorStats> {
        self.elevators.iter().find(|stats| stats.elevator == id)
    }

    /// Record newly created passengers and the resulting queue length
    pub fn record_generated(&mut self, count: usize, waiting: usize) {
        self.passengers_generated += count;
        self.observe_waiting(waiting);
    }

    /// Track the peak waiting queue length
    pub fn observe_waiting(&mut self, waiting: usize) {
        self.peak_waiting = self.peak_waiting.max(waiting);
    }

    /// Record one elevator step
    pub fn record_step(&mut self, dwelled: usize) {
        self.ticks += 1;
        self.dwell_ticks += dwelled as u64;
    }

    /// Record a car changing floor
    pub fn record_travel(&mut self, id: ElevatorId, floors: u64) {
        self.floors_travelled += floors;
        if let Some(stats) = self.elevator_mut(id) {
            stats.floors_travelled += floors;
        }
    }

    /// Record a car's door opening
    pub fn record_door_opening(&mut self, id: ElevatorId) {
        self.door_openings += 1;
        if let Some(stats) = self.elevator_mut(id) {
            stats.door_openings += 1;
        }
    }

    /// Record one boarding call
    pub fn record_boarding(&mut self, id: ElevatorId, delivered: usize, boarded: usize) {
        self.passengers_delivered += delivered;
        self.passengers_boarded += boarded;
        if let Some(stats) = self.elevator_mut(id) {
            stats.deliveries += delivered;
        }
    }

    /// Record a boarding call that changed nothing
    pub fn record_noop_boarding(&mut self) {
        self.noop_boardings += 1;
    }

    /// Set the elapsed simulated time
    pub fn record_clock(&mut self, total_seconds: u64) {
        self.simulated_seconds = total_seconds;
    }

    /// Average deliveries per car
    pub fn average_deliveries_per_elevator(&self) -> f64 {
        if self.elevators.is_empty() {
            0.0
        } else {
            self.passengers_delivered as f64 / self.elevators.len() as f64
        }
    }

    /// Deliveries per simulated second
    pub fn throughput_per_second(&self) -> f64 {
        if self.simulated_seconds == 0 {
            0.0
        } else {
            self.passengers_delivered as f64 / self.simulated_seconds as f64
        }
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Statistics:")?;
        writeln!(f, "  Simulated seconds: {}", self.simulated_seconds)?;
        writeln!(f, "  Elevator steps: {}", self.ticks)?;
        writeln!(f, "  Passengers generated: {}", self.passengers_generated)?;
        writeln!(f, "  Passengers boarded: {}", self.passengers_boarded)?;
        writeln!(f, "  Passengers delivered: {}", self.passengers_delivered)?;
        writeln!(f, "  Peak waiting queue: {}", self.peak_waiting)?;
        writeln!(f, "  Door openings: {}", self.door_openings)?;
        writeln!(f, "  Floors travelled: {}", self.floors_travelled)?;
        writeln!(f, "  Dwell steps: {}", self.dwell_ticks)?;
        writeln!(
            f,
            "  Average deliveries per elevator: {:.2}",
            self.average_deliveries_per_elevator()
        )?;
        writeln!(f, "  Throughput: {:.3} passengers/second", self.throughput_per_second())?;

        if !self.elevators.is_empty() {
            writeln!(f)?;
            writeln!(f, "Per Elevator:")?;
            for stats in &self.elevators {
                writeln!(
                    f,
                    "  {}: {} floors, {} deliveries, {} door openings",
                    stats.elevator, stats.floors_travelled, stats.deliveries, stats.door_openings
                )?;
            }
        }
        Ok(())
    }
}
