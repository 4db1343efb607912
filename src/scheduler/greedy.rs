//! Greedy parcel-to-truck scheduler.
//!
//! # Algorithm
//!
//! 1. Queue parcels by the configured parcel rule (FIFO among ties).
//! 2. For each parcel, queue the trucks that can still fit it by the
//!    configured truck rule (FIFO among ties, i.e. fleet order).
//! 3. Drain that queue looking for a truck whose route already ends at the
//!    parcel's destination; the first such truck wins.
//! 4. Otherwise the first truck drained (the rule's top choice) wins.
//! 5. No truck fits: the parcel is unscheduled.
//!
//! Decisions are never revisited, so an early placement can crowd out a
//! later parcel. Route distance is never consulted directly.
//!
//! # Complexity
//! O(n * m log m) comparisons for n parcels and m trucks.

use tracing::{debug, instrument, trace};

use super::{GreedyConfig, Scheduler};
use crate::dispatching::{OrderedSelector, ParcelRule, Precedence, TruckRule};
use crate::error::ConfigError;
use crate::models::{Parcel, Truck};

/// Greedy scheduler with destination affinity.
///
/// # Example
///
/// ```
/// use u_fleet::dispatching::{ParcelPriority, SortOrder};
/// use u_fleet::models::{Parcel, Truck};
/// use u_fleet::scheduler::{GreedyConfig, GreedyScheduler};
///
/// let scheduler = GreedyScheduler::new(GreedyConfig::new(
///     ParcelPriority::Volume,
///     SortOrder::NonIncreasing,
///     SortOrder::NonDecreasing,
/// ));
///
/// let parcels = vec![
///     Parcel::new(1, 5, "Toronto", "Hamilton"),
///     Parcel::new(2, 6, "Toronto", "Windsor"),
///     Parcel::new(3, 9, "Toronto", "Ottawa"),
/// ];
/// let mut trucks = vec![Truck::new(1, 10, "Toronto"), Truck::new(2, 10, "Toronto")];
///
/// let unscheduled = scheduler.schedule(parcels, &mut trucks);
/// assert_eq!(unscheduled.len(), 1);
/// assert_eq!(unscheduled[0].id, 1);
/// assert_eq!(trucks[0].route(), ["Toronto", "Ottawa"]);
/// assert_eq!(trucks[1].route(), ["Toronto", "Windsor"]);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyScheduler {
    config: GreedyConfig,
    parcel_rule: ParcelRule,
    truck_rule: TruckRule,
}

impl GreedyScheduler {
    /// Creates a scheduler from typed options.
    pub fn new(config: GreedyConfig) -> Self {
        Self {
            parcel_rule: config.parcel_rule(),
            truck_rule: config.truck_rule(),
            config,
        }
    }

    /// Creates a scheduler from option names.
    ///
    /// Fails if any value is unrecognized.
    pub fn from_options(
        parcel_priority: &str,
        parcel_order: &str,
        truck_order: &str,
    ) -> Result<Self, ConfigError> {
        GreedyConfig::from_options(parcel_priority, parcel_order, truck_order).map(Self::new)
    }

    pub fn config(&self) -> &GreedyConfig {
        &self.config
    }

    /// Schedules `parcels` onto `trucks`.
    ///
    /// Placed parcels move into their trucks. Returns the parcels no truck
    /// could take, in the order they were considered.
    #[instrument(skip_all, fields(parcels = parcels.len(), trucks = trucks.len(), rule = self.parcel_rule.name()))]
    pub fn schedule(&self, parcels: Vec<Parcel>, trucks: &mut [Truck]) -> Vec<Parcel> {
        let mut queue = OrderedSelector::new(self.parcel_rule);
        queue.extend(parcels);

        let mut unscheduled = Vec::new();
        while !queue.is_empty() {
            let parcel = queue.remove();
            let Some(index) = self.select_truck(&parcel, trucks) else {
                self.log_decision(&parcel, None);
                unscheduled.push(parcel);
                continue;
            };

            self.log_decision(&parcel, Some(&trucks[index]));
            if let Err(parcel) = trucks[index].try_pack(parcel) {
                unscheduled.push(parcel);
            }
        }

        debug!(unscheduled = unscheduled.len(), "greedy scheduling finished");
        unscheduled
    }

    /// Picks the truck for `parcel` given the current fleet state.
    ///
    /// Returns an index into `trucks`, or `None` if no truck has room.
    /// Does not modify any truck.
    pub fn select_truck(&self, parcel: &Parcel, trucks: &[Truck]) -> Option<usize> {
        let rule = self.truck_rule;
        let mut eligible =
            OrderedSelector::new(|a: &usize, b: &usize| rule.outranks(&trucks[*a], &trucks[*b]));
        eligible.extend((0..trucks.len()).filter(|&i| trucks[i].can_fit(parcel)));

        if eligible.is_empty() {
            return None;
        }

        let first = eligible.remove();
        let mut candidate = first;
        loop {
            if trucks[candidate].last_stop() == parcel.destination {
                return Some(candidate);
            }
            if eligible.is_empty() {
                return Some(first);
            }
            candidate = eligible.remove();
        }
    }

    fn log_decision(&self, parcel: &Parcel, truck: Option<&Truck>) {
        match (truck, self.config.verbose) {
            (Some(truck), true) => debug!(parcel = parcel.id, truck = truck.id(), "placing parcel"),
            (Some(truck), false) => trace!(parcel = parcel.id, truck = truck.id(), "placing parcel"),
            (None, true) => debug!(parcel = parcel.id, volume = parcel.volume, "no truck has room"),
            (None, false) => trace!(parcel = parcel.id, volume = parcel.volume, "no truck has room"),
        }
    }
}

impl Scheduler for GreedyScheduler {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn schedule(&mut self, parcels: Vec<Parcel>, trucks: &mut [Truck]) -> Vec<Parcel> {
        GreedyScheduler::schedule(self, parcels, trucks)
    }
}
