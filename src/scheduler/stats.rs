//! Scheduling outcome statistics.
//!
//! Summarizes a packed fleet and the parcels left over.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Fleet | Number of trucks |
//! | Unused Trucks | Trucks carrying no parcels |
//! | Avg Distance | Mean route length over used trucks |
//! | Avg Fullness | Mean percent of capacity filled over used trucks |
//! | Unused Space | Free capacity summed over used trucks |
//! | Unscheduled | Parcels no truck could take |
//!
//! Averages are 0 when no truck was used.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{DistanceMap, Fleet, Parcel};

/// Statistics of one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetStats {
    /// Number of trucks in the fleet.
    pub fleet: usize,
    /// Trucks with no parcels.
    pub unused_trucks: usize,
    /// Mean route distance of used trucks.
    pub avg_distance: f64,
    /// Mean fullness (0..=100) of used trucks.
    pub avg_fullness: f64,
    /// Free capacity summed over used trucks.
    pub unused_space: u64,
    /// Number of parcels left unscheduled.
    pub unscheduled: usize,
}

impl FleetStats {
    /// Computes statistics for a packed fleet.
    ///
    /// # Errors
    /// Fails when a used truck's route has a leg missing from `map`.
    pub fn calculate(fleet: &Fleet, unscheduled: &[Parcel], map: &DistanceMap) -> Result<Self> {
        Ok(Self {
            fleet: fleet.num_trucks(),
            unused_trucks: fleet.num_trucks() - fleet.num_nonempty_trucks(),
            avg_distance: fleet.average_distance_travelled(map)?,
            avg_fullness: fleet.average_fullness(),
            unused_space: fleet.total_unused_space(),
            unscheduled: unscheduled.len(),
        })
    }
}
