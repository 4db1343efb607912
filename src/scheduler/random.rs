//! Random baseline scheduler.
//!
//! Shuffles the parcels and the trucks, then packs each parcel onto the
//! first truck (in shuffled order) that has room. Useful as a reference
//! point when comparing greedy configurations.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt::Debug;
use tracing::{debug, instrument};

use super::Scheduler;
use crate::models::{Parcel, Truck};

/// Scheduler that places parcels in random order on random trucks.
///
/// Reproducible when built from a seed:
///
/// ```
/// use u_fleet::models::{Parcel, Truck};
/// use u_fleet::scheduler::RandomScheduler;
///
/// let run = |seed| {
///     let mut trucks = vec![Truck::new(1, 5, "depot"), Truck::new(2, 5, "depot")];
///     let parcels = (1..=4).map(|id| Parcel::new(id, 3, "depot", "x")).collect();
///     let unscheduled = RandomScheduler::with_seed(seed).schedule(parcels, &mut trucks);
///     assert_eq!(unscheduled.len(), 2);
///     unscheduled.iter().map(|p| p.id).collect::<Vec<_>>()
/// };
/// assert_eq!(run(7), run(7));
/// ```
#[derive(Debug, Clone)]
pub struct RandomScheduler<R = StdRng> {
    rng: R,
}

impl RandomScheduler<StdRng> {
    /// Creates a scheduler seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a scheduler with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomScheduler<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomScheduler<R> {
    /// Creates a scheduler drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Schedules `parcels` onto `trucks` in random order.
    ///
    /// Returns the parcels that fit on no truck.
    #[instrument(skip_all, fields(parcels = parcels.len(), trucks = trucks.len()))]
    pub fn schedule(&mut self, mut parcels: Vec<Parcel>, trucks: &mut [Truck]) -> Vec<Parcel> {
        parcels.shuffle(&mut self.rng);
        let mut order: Vec<usize> = (0..trucks.len()).collect();
        order.shuffle(&mut self.rng);

        let mut unscheduled = Vec::new();
        'parcels: for mut parcel in parcels {
            for &index in &order {
                match trucks[index].try_pack(parcel) {
                    Ok(()) => continue 'parcels,
                    Err(rejected) => parcel = rejected,
                }
            }
            unscheduled.push(parcel);
        }

        debug!(unscheduled = unscheduled.len(), "random scheduling finished");
        unscheduled
    }
}

impl<R: Rng + Debug> Scheduler for RandomScheduler<R> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn schedule(&mut self, parcels: Vec<Parcel>, trucks: &mut [Truck]) -> Vec<Parcel> {
        RandomScheduler::schedule(self, parcels, trucks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn make_parcels(volumes: &[u32]) -> Vec<Parcel> {
        volumes
            .iter()
            .enumerate()
            .map(|(i, &v)| Parcel::new(i as u32 + 1, v, "depot", format!("d{}", i % 3)))
            .collect()
    }

    #[test]
    fn test_everything_fits() {
        let mut trucks = vec![Truck::new(1, 100, "depot")];
        let unscheduled = RandomScheduler::with_seed(1).schedule(make_parcels(&[5, 10, 20]), &mut trucks);
        assert!(unscheduled.is_empty());
        assert_eq!(trucks[0].total_volume(), 35);
    }

    #[test]
    fn test_nothing_fits() {
        let mut trucks = vec![Truck::new(1, 2, "depot"), Truck::new(2, 3, "depot")];
        let unscheduled = RandomScheduler::with_seed(3).schedule(make_parcels(&[5, 6]), &mut trucks);
        assert_eq!(unscheduled.len(), 2);
        assert!(trucks.iter().all(Truck::is_empty));
    }

    #[test]
    fn test_conservation_and_capacity() {
        let volumes = [7, 3, 9, 1, 4, 4, 6, 2, 8, 5, 3, 1, 10, 2];
        for seed in 0..20 {
            let mut trucks = vec![
                Truck::new(1, 10, "depot"),
                Truck::new(2, 8, "depot"),
                Truck::new(3, 12, "depot"),
            ];
            let unscheduled = RandomScheduler::with_seed(seed).schedule(make_parcels(&volumes), &mut trucks);

            let mut seen = HashSet::new();
            for p in &unscheduled {
                assert!(seen.insert(p.id));
                // Loads only grow, so a rejected parcel still fits nowhere.
                assert!(trucks.iter().all(|t| !t.can_fit(p)));
            }
            for t in &trucks {
                assert!(t.total_volume() <= t.capacity());
                for p in t.parcels() {
                    assert!(seen.insert(p.id), "parcel {} placed twice", p.id);
                }
            }
            assert_eq!(seen.len(), volumes.len());
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let run = |seed: u64| {
            let mut trucks = vec![Truck::new(1, 6, "depot"), Truck::new(2, 6, "depot")];
            let unscheduled = RandomScheduler::with_seed(seed).schedule(make_parcels(&[3, 3, 4, 2, 5]), &mut trucks);
            let loads: Vec<Vec<u32>> = trucks
                .iter()
                .map(|t| t.parcels().iter().map(|p| p.id).collect())
                .collect();
            (loads, unscheduled.iter().map(|p| p.id).collect::<Vec<_>>())
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_trait_object() {
        let mut s: Box<dyn Scheduler> = Box::new(RandomScheduler::with_seed(9));
        let mut trucks = vec![Truck::new(1, 4, "depot")];
        let unscheduled = s.schedule(make_parcels(&[4, 4]), &mut trucks);
        assert_eq!(s.name(), "random");
        assert_eq!(unscheduled.len(), 1);
        assert_eq!(trucks[0].parcels().len(), 1);
    }
}
