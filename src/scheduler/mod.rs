//! Parcel schedulers and outcome statistics.
//!
//! A [`Scheduler`] packs parcels onto trucks and hands back whatever it
//! could not place. Every scheduler guarantees that each input parcel ends
//! up either on exactly one truck or in the returned list, and that no
//! truck exceeds its capacity.
//!
//! # Algorithms
//!
//! - [`GreedyScheduler`]: drains parcels in configured priority order and
//!   places each on the best-ranked truck that has room, preferring a truck
//!   whose route already ends at the parcel's destination.
//! - [`RandomScheduler`]: shuffled parcels onto shuffled trucks, first fit.
//!   A baseline for comparison.
//!
//! [`FleetStats`] summarizes the result.
//!
//! # References
//!
//! - Martello & Toth (1990), "Knapsack Problems", Ch. 8: Bin-packing heuristics
//! - Johnson (1974), "Fast algorithms for bin packing"

mod config;
mod greedy;
mod random;
mod stats;

pub use config::GreedyConfig;
pub use greedy::GreedyScheduler;
pub use random::RandomScheduler;
pub use stats::FleetStats;

use std::fmt::Debug;

use crate::models::{Parcel, Truck};

/// A parcel-to-truck assignment strategy.
pub trait Scheduler: Debug {
    /// Strategy name (e.g., "greedy").
    fn name(&self) -> &'static str;

    /// Packs `parcels` onto `trucks`, returning the parcels left unscheduled.
    fn schedule(&mut self, parcels: Vec<Parcel>, trucks: &mut [Truck]) -> Vec<Parcel>;
}
