//! Fleet model.
//!
//! The set of trucks available to a scheduling run, unique by id and kept in
//! insertion order. Aggregate queries only count non-empty trucks: a truck
//! that never left the depot contributes neither unused space nor distance.

use serde::Serialize;
use std::collections::HashMap;

use super::{DistanceMap, ParcelId, Truck, TruckId};
use crate::error::{Error, Result};

/// A collection of trucks.
///
/// # Example
///
/// ```
/// use u_fleet::models::{DistanceMap, Fleet, Parcel, Truck};
///
/// let mut fleet = Fleet::new();
/// fleet.add_truck(Truck::new(1423, 10, "Toronto")).unwrap();
/// fleet.add_truck(Truck::new(1333, 10, "Toronto")).unwrap();
///
/// fleet.trucks_mut()[0].pack(Parcel::new(1, 5, "Toronto", "Hamilton"));
///
/// let map = DistanceMap::new().with_distance("Toronto", "Hamilton", 9);
/// assert_eq!(fleet.num_nonempty_trucks(), 1);
/// assert_eq!(fleet.total_unused_space(), 5);
/// assert_eq!(fleet.total_distance_travelled(&map).unwrap(), 18);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Fleet {
    trucks: Vec<Truck>,
}

impl Fleet {
    /// Creates an empty fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a truck. Fails if a truck with the same id is already present.
    pub fn add_truck(&mut self, truck: Truck) -> Result<()> {
        if self.truck(truck.id()).is_some() {
            return Err(Error::DuplicateTruck(truck.id()));
        }
        self.trucks.push(truck);
        Ok(())
    }

    /// Builder: adds a truck and returns self.
    pub fn with_truck(mut self, truck: Truck) -> Result<Self> {
        self.add_truck(truck)?;
        Ok(self)
    }

    /// Trucks in insertion order.
    pub fn trucks(&self) -> &[Truck] {
        &self.trucks
    }

    /// Mutable access for schedulers. Trucks can be packed but not added or removed.
    pub fn trucks_mut(&mut self) -> &mut [Truck] {
        &mut self.trucks
    }

    /// Finds a truck by id.
    pub fn truck(&self, id: TruckId) -> Option<&Truck> {
        self.trucks.iter().find(|t| t.id() == id)
    }

    pub fn num_trucks(&self) -> usize {
        self.trucks.len()
    }

    /// Number of trucks carrying at least one parcel.
    pub fn num_nonempty_trucks(&self) -> usize {
        self.nonempty().count()
    }

    /// Parcel ids per truck, in the order they were packed.
    pub fn parcel_allocations(&self) -> HashMap<TruckId, Vec<ParcelId>> {
        self.trucks
            .iter()
            .map(|t| (t.id(), t.parcels().iter().map(|p| p.id).collect()))
            .collect()
    }

    /// Unused capacity summed over non-empty trucks.
    pub fn total_unused_space(&self) -> u64 {
        self.nonempty()
            .map(|t| u64::from(t.available_capacity()))
            .sum()
    }

    /// Mean fullness (percent) of non-empty trucks; 0.0 if all are empty.
    pub fn average_fullness(&self) -> f64 {
        let used = self.num_nonempty_trucks();
        if used == 0 {
            return 0.0;
        }
        self.nonempty().map(Truck::fullness).sum::<f64>() / used as f64
    }

    /// Route distance summed over non-empty trucks.
    pub fn total_distance_travelled(&self, map: &DistanceMap) -> Result<u64> {
        self.nonempty().map(|t| t.route_distance(map)).sum()
    }

    /// Mean route distance of non-empty trucks; 0.0 if all are empty.
    pub fn average_distance_travelled(&self, map: &DistanceMap) -> Result<f64> {
        let used = self.num_nonempty_trucks();
        if used == 0 {
            return Ok(0.0);
        }
        Ok(self.total_distance_travelled(map)? as f64 / used as f64)
    }

    fn nonempty(&self) -> impl Iterator<Item = &Truck> {
        self.trucks.iter().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Parcel;

    fn parcel(id: u32, volume: u32, destination: &str) -> Parcel {
        Parcel::new(id, volume, "Toronto", destination)
    }

    fn map() -> DistanceMap {
        let mut m = DistanceMap::new();
        m.add_distance("Toronto", "Hamilton", 50);
        m.add_distance("Toronto", "Windsor", 100);
        m.add_distance("Hamilton", "Windsor", 75);
        m
    }

    #[test]
    fn test_add_truck() {
        let mut f = Fleet::new();
        assert_eq!(f.num_trucks(), 0);
        for i in 0..3 {
            f.add_truck(Truck::new(i, 10, "Toronto")).unwrap();
            assert_eq!(f.num_trucks(), i as usize + 1);
        }
        assert_eq!(f.truck(2).map(Truck::capacity), Some(10));
    }

    #[test]
    fn test_duplicate_truck_rejected() {
        let mut f = Fleet::new();
        f.add_truck(Truck::new(1, 10, "Toronto")).unwrap();
        let err = f.add_truck(Truck::new(1, 20, "Toronto")).unwrap_err();
        assert!(matches!(err, Error::DuplicateTruck(1)));
        assert_eq!(f.num_trucks(), 1);
    }

    #[test]
    fn test_num_nonempty_trucks() {
        let mut f = Fleet::new()
            .with_truck(Truck::new(1, 10, "Toronto"))
            .and_then(|f| f.with_truck(Truck::new(2, 10, "Toronto")))
            .unwrap();
        assert_eq!(f.num_nonempty_trucks(), 0);
        f.trucks_mut()[1].pack(parcel(1, 3, "Hamilton"));
        assert_eq!(f.num_nonempty_trucks(), 1);
    }

    #[test]
    fn test_parcel_allocations() {
        let mut f = Fleet::new();
        f.add_truck(Truck::new(1, 10, "Toronto")).unwrap();
        f.add_truck(Truck::new(2, 10, "Toronto")).unwrap();
        assert_eq!(f.parcel_allocations()[&1], Vec::<u32>::new());

        f.trucks_mut()[0].pack(parcel(3, 1, "Hamilton"));
        f.trucks_mut()[0].pack(parcel(2, 1, "Hamilton"));
        let alloc = f.parcel_allocations();
        assert_eq!(alloc[&1], vec![3, 2]);
        assert!(alloc[&2].is_empty());
        assert_eq!(alloc.len(), 2);
    }

    #[test]
    fn test_total_unused_space() {
        let mut f = Fleet::new();
        assert_eq!(f.total_unused_space(), 0);
        f.add_truck(Truck::new(1, 10, "Toronto")).unwrap();
        f.add_truck(Truck::new(2, 3, "Toronto")).unwrap();
        // Empty trucks do not count
        assert_eq!(f.total_unused_space(), 0);
        f.trucks_mut()[0].pack(parcel(1, 5, "Hamilton"));
        assert_eq!(f.total_unused_space(), 5);
        f.trucks_mut()[1].pack(parcel(2, 1, "Hamilton"));
        assert_eq!(f.total_unused_space(), 7);
    }

    #[test]
    fn test_average_fullness() {
        let mut f = Fleet::new();
        assert_eq!(f.average_fullness(), 0.0);
        f.add_truck(Truck::new(1, 3, "Toronto")).unwrap();
        f.add_truck(Truck::new(2, 3, "Toronto")).unwrap();
        f.add_truck(Truck::new(3, 3, "Toronto")).unwrap();
        f.trucks_mut()[0].pack(parcel(1, 2, "Hamilton"));
        assert!((f.average_fullness() - 200.0 / 3.0).abs() < 1e-10);
        f.trucks_mut()[1].pack(parcel(2, 3, "Hamilton"));
        assert!((f.average_fullness() - 500.0 / 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_total_distance_travelled() {
        let mut f = Fleet::new();
        f.add_truck(Truck::new(1, 10, "Toronto")).unwrap();
        f.add_truck(Truck::new(2, 10, "Toronto")).unwrap();
        f.add_truck(Truck::new(3, 10, "Toronto")).unwrap();
        f.trucks_mut()[0].pack(parcel(1, 1, "Hamilton"));
        f.trucks_mut()[0].pack(parcel(2, 1, "Windsor"));
        f.trucks_mut()[1].pack(parcel(3, 1, "Hamilton"));
        // 50 + 75 + 100, then 50 + 50; truck 3 unused
        assert_eq!(f.total_distance_travelled(&map()).unwrap(), 325);
        assert!((f.average_distance_travelled(&map()).unwrap() - 162.5).abs() < 1e-10);
    }

    #[test]
    fn test_average_distance_no_used_trucks() {
        let mut f = Fleet::new();
        f.add_truck(Truck::new(1, 10, "Toronto")).unwrap();
        assert_eq!(f.average_distance_travelled(&map()).unwrap(), 0.0);
    }

    #[test]
    fn test_distance_missing_leg() {
        let mut f = Fleet::new();
        f.add_truck(Truck::new(1, 10, "Toronto")).unwrap();
        f.trucks_mut()[0].pack(parcel(1, 1, "Ottawa"));
        assert!(f.total_distance_travelled(&map()).is_err());
    }
}
