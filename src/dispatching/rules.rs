//! Built-in ordering rules for parcels and trucks.
//!
//! # Parcels
//! Keyed by volume or by destination name, in either direction.
//!
//! # Trucks
//! Always keyed by available capacity (capacity minus packed volume):
//! - **BestFit** (`non-decreasing`): least available capacity first
//! - **WorstFit** (`non-increasing`): most available capacity first
//!
//! All rules are strict: equal keys never outrank each other, so the
//! selector falls back to insertion order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Precedence;
use crate::error::ConfigError;
use crate::models::{Parcel, Truck};

/// Parcel attribute used as the ordering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParcelPriority {
    Volume,
    Destination,
}

/// Direction in which keys are drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Smallest key first.
    NonDecreasing,
    /// Largest key first.
    NonIncreasing,
}

impl ParcelPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Volume => "volume",
            Self::Destination => "destination",
        }
    }
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NonDecreasing => "non-decreasing",
            Self::NonIncreasing => "non-increasing",
        }
    }
}

impl FromStr for ParcelPriority {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "volume" => Ok(Self::Volume),
            "destination" => Ok(Self::Destination),
            other => Err(ConfigError::unknown("parcel_priority", other)),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "non-decreasing" => Ok(Self::NonDecreasing),
            "non-increasing" => Ok(Self::NonIncreasing),
            other => Err(ConfigError::unknown("sort order", other)),
        }
    }
}

impl fmt::Display for ParcelPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order in which parcels are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParcelRule {
    /// Smallest volume first.
    SmallestVolume,
    /// Largest volume first.
    LargestVolume,
    /// Destination name, lexicographically ascending.
    DestinationAscending,
    /// Destination name, lexicographically descending.
    DestinationDescending,
}

impl ParcelRule {
    /// Selects the rule for a key and direction.
    pub fn new(priority: ParcelPriority, order: SortOrder) -> Self {
        match (priority, order) {
            (ParcelPriority::Volume, SortOrder::NonDecreasing) => Self::SmallestVolume,
            (ParcelPriority::Volume, SortOrder::NonIncreasing) => Self::LargestVolume,
            (ParcelPriority::Destination, SortOrder::NonDecreasing) => Self::DestinationAscending,
            (ParcelPriority::Destination, SortOrder::NonIncreasing) => Self::DestinationDescending,
        }
    }

    /// Rule name (e.g., "volume/non-decreasing").
    pub fn name(&self) -> &'static str {
        match self {
            Self::SmallestVolume => "volume/non-decreasing",
            Self::LargestVolume => "volume/non-increasing",
            Self::DestinationAscending => "destination/non-decreasing",
            Self::DestinationDescending => "destination/non-increasing",
        }
    }
}

impl Precedence<Parcel> for ParcelRule {
    fn outranks(&self, a: &Parcel, b: &Parcel) -> bool {
        match self {
            Self::SmallestVolume => a.volume < b.volume,
            Self::LargestVolume => a.volume > b.volume,
            Self::DestinationAscending => a.destination < b.destination,
            Self::DestinationDescending => a.destination > b.destination,
        }
    }
}

/// Order in which capacity-eligible trucks are considered for a parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TruckRule {
    /// Least available capacity first.
    BestFit,
    /// Most available capacity first.
    WorstFit,
}

impl TruckRule {
    /// Selects the rule for a direction over available capacity.
    pub fn new(order: SortOrder) -> Self {
        match order {
            SortOrder::NonDecreasing => Self::BestFit,
            SortOrder::NonIncreasing => Self::WorstFit,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BestFit => "available-capacity/non-decreasing",
            Self::WorstFit => "available-capacity/non-increasing",
        }
    }
}

impl Precedence<Truck> for TruckRule {
    fn outranks(&self, a: &Truck, b: &Truck) -> bool {
        match self {
            Self::BestFit => a.available_capacity() < b.available_capacity(),
            Self::WorstFit => a.available_capacity() > b.available_capacity(),
        }
    }
}
