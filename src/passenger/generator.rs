//! Passenger demand generation
//!
//! This module contains the generator that appends random trips to the waiting
//! queue, capped so that the run never creates more passengers than its target.

use rand::Rng;
use std::fmt;
use tracing::{debug, warn};

use crate::passenger::Passenger;
use crate::simulation::SimulationState;
use crate::types::IdAllocator;

/// Generator for passengers with uniformly random origin and destination
pub struct PassengerGenerator {
    rng: Box<dyn rand::RngCore>,
}

impl fmt::Debug for PassengerGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassengerGenerator").finish()
    }
}

impl Default for PassengerGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PassengerGenerator {
    /// Create a new passenger generator backed by the thread RNG
    pub fn new() -> Self {
        Self { rng: Box::new(rand::thread_rng()) }
    }

    /// Create a new passenger generator with a specific seed for reproducible results
    pub fn with_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self { rng: Box::new(rand::rngs::StdRng::seed_from_u64(seed)) }
    }

    /// Create a passenger generator from any random source
    pub fn with_rng<R: rand::RngCore + 'static>(rng: R) -> Self {
        Self { rng: Box::new(rng) }
    }

    /// Number of passengers a batch may create
    ///
    /// `min(quota, target - has_created)`, saturating at zero once the target
    /// has been reached.
    pub fn batch_size(has_created: usize, quota: usize, target: usize) -> usize {
        quota.min(target.saturating_sub(has_created))
    }

    /// Pick a random trip in a building with `floor_count` floors
    ///
    /// The origin is uniform over every floor. The destination is drawn from
    /// one fewer floor and bumped up by one when it lands on the origin, so the
    /// two are always distinct.
    pub fn random_trip(&mut self, floor_count: usize) -> (usize, usize) {
        let from_floor = self.rng.gen_range(1..=floor_count);
        let mut to_floor = self.rng.gen_range(1..=floor_count - 1);
        if to_floor == from_floor {
            to_floor += 1;
        }
        (from_floor, to_floor)
    }

    /// Append one batch of passengers to the waiting queue
    ///
    /// Returns the number of passengers created. A batch is empty when the
    /// target has already been reached.
    pub fn generate_batch(&mut self, state: &mut SimulationState, ids: &mut IdAllocator) -> usize {
        let floor_count = state.config.floor_count;
        if floor_count < 2 {
            warn!("Cannot generate passengers in a building with {} floor(s)", floor_count);
            return 0;
        }

        let count = Self::batch_size(
            state.has_created_count(),
            state.config.people_per_batch,
            state.config.target_people,
        );

        state.waitings.reserve(count);
        for _ in 0..count {
            let (from_floor, to_floor) = self.random_trip(floor_count);
            let passenger = Passenger::new(ids.next_passenger_id(), from_floor, to_floor);
            debug!(
                "Generated passenger {} ({}) from floor {} to floor {}",
                passenger.id, passenger.name, from_floor, to_floor
            );
            state.waitings.push(passenger);
        }

        count
    }
}
