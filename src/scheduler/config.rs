//! Greedy scheduler configuration.

use serde::{Deserialize, Serialize};

use crate::dispatching::{ParcelPriority, ParcelRule, SortOrder, TruckRule};
use crate::error::ConfigError;

/// Options recognized by [`GreedyScheduler`](super::GreedyScheduler).
///
/// Deserializes from the option names used in experiment files:
///
/// ```
/// use u_fleet::scheduler::GreedyConfig;
/// use u_fleet::dispatching::{ParcelPriority, SortOrder};
///
/// let config: GreedyConfig = serde_json::from_str(r#"{
///     "parcel_priority": "volume",
///     "parcel_order": "non-increasing",
///     "truck_order": "non-decreasing"
/// }"#).unwrap();
/// assert_eq!(config.parcel_priority, ParcelPriority::Volume);
/// assert_eq!(config.truck_order, SortOrder::NonDecreasing);
/// assert!(!config.verbose);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreedyConfig {
    /// Parcel attribute used for ordering.
    pub parcel_priority: ParcelPriority,
    /// Direction parcels are drained in.
    pub parcel_order: SortOrder,
    /// Direction trucks are drained in, by available capacity.
    pub truck_order: SortOrder,
    /// Log every placement decision at debug level.
    #[serde(default)]
    pub verbose: bool,
}

impl GreedyConfig {
    /// Creates a configuration.
    pub fn new(parcel_priority: ParcelPriority, parcel_order: SortOrder, truck_order: SortOrder) -> Self {
        Self {
            parcel_priority,
            parcel_order,
            truck_order,
            verbose: false,
        }
    }

    /// Parses the three option values by name.
    ///
    /// Fails on the first unrecognized value.
    pub fn from_options(
        parcel_priority: &str,
        parcel_order: &str,
        truck_order: &str,
    ) -> Result<Self, ConfigError> {
        let priority: ParcelPriority = parcel_priority.parse()?;
        let parcel_order = parcel_order
            .parse::<SortOrder>()
            .map_err(|_| ConfigError::unknown("parcel_order", parcel_order))?;
        let truck_order = truck_order
            .parse::<SortOrder>()
            .map_err(|_| ConfigError::unknown("truck_order", truck_order))?;
        Ok(Self::new(priority, parcel_order, truck_order))
    }

    /// Enables per-decision logging.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The parcel ordering these options select.
    pub fn parcel_rule(&self) -> ParcelRule {
        ParcelRule::new(self.parcel_priority, self.parcel_order)
    }

    /// The truck ordering these options select.
    pub fn truck_rule(&self) -> TruckRule {
        TruckRule::new(self.truck_order)
    }
}
