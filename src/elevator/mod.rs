//! Elevator cars
//!
//! This module contains the elevator record that the dispatch components
//! mutate each tick: its floor, direction status, door state, and the ordered
//! list of passengers on board.

#[allow(clippy::module_inception)]
pub mod elevator;

pub use elevator::{Elevator, GROUND_FLOOR};
