//! Truck model.
//!
//! A truck starts at a depot with a fixed volume capacity. Packing a parcel
//! appends it to the load and extends the route with the parcel's
//! destination, unless the route already ends there. The route always
//! returns to the depot when its distance is measured.
//!
//! # Invariants
//! - Total packed volume never exceeds capacity.
//! - The route starts at the depot and never repeats a stop twice in a row.
//! - Load and route only grow; the only mutator is [`Truck::pack`].

use serde::Serialize;
use std::fmt;

use super::{DistanceMap, Parcel};
use crate::error::{Error, Result};

/// Truck identifier.
pub type TruckId = u32;

/// A capacity-bounded delivery vehicle.
///
/// Serializable for reporting only; trucks are always built empty and filled via `pack`.
#[derive(Debug, Clone, Serialize)]
pub struct Truck {
    id: TruckId,
    capacity: u32,
    depot: String,
    parcels: Vec<Parcel>,
    route: Vec<String>,
    load: u32,
}

impl Truck {
    /// Creates an empty truck parked at `depot`.
    pub fn new(id: TruckId, capacity: u32, depot: impl Into<String>) -> Self {
        let depot = depot.into();
        Self {
            id,
            capacity,
            route: vec![depot.clone()],
            depot,
            parcels: Vec::new(),
            load: 0,
        }
    }

    pub fn id(&self) -> TruckId {
        self.id
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn depot(&self) -> &str {
        &self.depot
    }

    /// Packed parcels in pack order.
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// Stops in visiting order, starting with the depot.
    pub fn route(&self) -> &[String] {
        &self.route
    }

    /// Last stop on the route (the depot for an empty truck).
    pub fn last_stop(&self) -> &str {
        self.route.last().map(String::as_str).unwrap_or(self.depot.as_str())
    }

    /// Sum of packed parcel volumes.
    #[inline]
    pub fn total_volume(&self) -> u32 {
        self.load
    }

    /// Capacity minus packed volume.
    #[inline]
    pub fn available_capacity(&self) -> u32 {
        self.capacity - self.load
    }

    /// Whether `parcel` would fit on top of the current load.
    #[inline]
    pub fn can_fit(&self, parcel: &Parcel) -> bool {
        u64::from(self.load) + u64::from(parcel.volume) <= u64::from(self.capacity)
    }

    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Packs `parcel` if it fits.
    ///
    /// On rejection the parcel is handed back unchanged and the truck is not
    /// modified. The caller must not pack two parcels with the same id onto
    /// one truck; this is not checked.
    pub fn try_pack(&mut self, parcel: Parcel) -> Result<(), Parcel> {
        if !self.can_fit(&parcel) {
            return Err(parcel);
        }
        if self.last_stop() != parcel.destination {
            self.route.push(parcel.destination.clone());
        }
        self.load += parcel.volume;
        self.parcels.push(parcel);
        Ok(())
    }

    /// Packs `parcel` if it fits, returning whether it was packed.
    ///
    /// # Example
    ///
    /// ```
    /// use u_fleet::models::{Parcel, Truck};
    ///
    /// let mut truck = Truck::new(1, 10, "Toronto");
    /// assert!(truck.pack(Parcel::new(1, 5, "Buffalo", "Hamilton")));
    /// assert!(truck.pack(Parcel::new(2, 4, "Toronto", "Hamilton")));
    /// assert!(!truck.pack(Parcel::new(3, 2, "Toronto", "Windsor")));
    /// assert_eq!(truck.route(), ["Toronto", "Hamilton"]);
    /// assert_eq!(truck.fullness(), 90.0);
    /// ```
    pub fn pack(&mut self, parcel: Parcel) -> bool {
        self.try_pack(parcel).is_ok()
    }

    /// Percentage of capacity in use (0.0..=100.0).
    pub fn fullness(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        100.0 * f64::from(self.load) / f64::from(self.capacity)
    }

    /// Length of the route, including the leg from the last stop back to the depot.
    ///
    /// An unused truck never leaves the depot, so its distance is
    /// the depot-to-depot distance (0 unless explicitly recorded).
    pub fn route_distance(&self, map: &DistanceMap) -> Result<u64> {
        let legs = self
            .route
            .windows(2)
            .map(|leg| (leg[0].as_str(), leg[1].as_str()))
            .chain(std::iter::once((self.last_stop(), self.depot.as_str())));

        let mut total = 0u64;
        for (from, to) in legs {
            let d = map.get(from, to).ok_or_else(|| Error::MissingDistance {
                from: from.to_string(),
                to: to.to_string(),
            })?;
            total += u64::from(d);
        }
        Ok(total)
    }
}

impl fmt::Display for Truck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "truck #{} ({}/{} cc from {}, route {})",
            self.id,
            self.load,
            self.capacity,
            self.depot,
            self.route.join(" -> ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parcel(id: u32, volume: u32, destination: &str) -> Parcel {
        Parcel::new(id, volume, "Toronto", destination)
    }

    #[test]
    fn test_new_truck() {
        let t = Truck::new(1423, 1000, "Toronto");
        assert_eq!(t.id(), 1423);
        assert_eq!(t.capacity(), 1000);
        assert_eq!(t.depot(), "Toronto");
        assert_eq!(t.route(), ["Toronto"]);
        assert_eq!(t.last_stop(), "Toronto");
        assert!(t.is_empty());
        assert_eq!(t.total_volume(), 0);
        assert_eq!(t.available_capacity(), 1000);
    }

    #[test]
    fn test_pack_rejects_overflow() {
        let mut t = Truck::new(1, 3, "Toronto");
        assert!(t.pack(parcel(1, 2, "a")));
        assert!(!t.pack(parcel(2, 2, "b")));
        assert_eq!(t.total_volume(), 2);
        assert_eq!(t.parcels().len(), 1);
        assert_eq!(t.route(), ["Toronto", "a"]);
        // Exactly fills
        assert!(t.pack(parcel(3, 1, "c")));
        assert_eq!(t.available_capacity(), 0);
    }

    #[test]
    fn test_try_pack_returns_parcel() {
        let mut t = Truck::new(1, 1, "Toronto");
        let rejected = t.try_pack(parcel(9, 5, "a")).unwrap_err();
        assert_eq!(rejected.id, 9);
        assert!(t.is_empty());
    }

    #[test]
    fn test_route_collapses_consecutive_stops() {
        let mut t = Truck::new(1, 100, "Toronto");
        t.pack(parcel(1, 1, "a"));
        t.pack(parcel(2, 1, "a"));
        t.pack(parcel(3, 1, "b"));
        t.pack(parcel(4, 1, "a"));
        assert_eq!(t.route(), ["Toronto", "a", "b", "a"]);
        let ids: Vec<u32> = t.parcels().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_fullness() {
        let mut t = Truck::new(1, 3, "Toronto");
        assert_eq!(t.fullness(), 0.0);
        t.pack(parcel(1, 2, "a"));
        assert!((t.fullness() - 200.0 / 3.0).abs() < 1e-10);
        t.pack(parcel(2, 1, "a"));
        assert!((t.fullness() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_route_distance() {
        let mut m = DistanceMap::new();
        m.add_distance("Toronto", "a", 10);
        m.add_asymmetric_distance("a", "b", 5, 7);
        m.add_asymmetric_distance("Toronto", "b", 20, 30);

        let mut t = Truck::new(1, 10, "Toronto");
        t.pack(parcel(1, 1, "a"));
        t.pack(parcel(2, 1, "b"));
        // Toronto -> a -> b -> Toronto
        assert_eq!(t.route_distance(&m).unwrap(), 10 + 5 + 30);
    }

    #[test]
    fn test_route_distance_unused_truck() {
        let t = Truck::new(1, 10, "Toronto");
        assert_eq!(t.route_distance(&DistanceMap::new()).unwrap(), 0);
    }

    #[test]
    fn test_route_distance_missing_leg() {
        let mut t = Truck::new(1, 10, "Toronto");
        t.pack(parcel(1, 1, "nowhere"));
        let err = t.route_distance(&DistanceMap::new()).unwrap_err();
        match err {
            Error::MissingDistance { from, to } => {
                assert_eq!(from, "Toronto");
                assert_eq!(to, "nowhere");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
