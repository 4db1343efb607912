//! Scheduling experiments.
//!
//! An experiment reads parcels, trucks and a distance map from record
//! files, validates them, runs one scheduler, and reports [`FleetStats`].
//!
//! # Configuration
//!
//! Experiments are described in JSON:
//!
//! ```json
//! {
//!     "depot_location": "Toronto",
//!     "parcel_file": "data/parcels.txt",
//!     "truck_file": "data/trucks.txt",
//!     "map_file": "data/map.txt",
//!     "algorithm": "greedy",
//!     "parcel_priority": "volume",
//!     "parcel_order": "non-increasing",
//!     "truck_order": "non-decreasing",
//!     "verbose": false
//! }
//! ```
//!
//! The three greedy options are required only for `"greedy"`. A `"random"`
//! experiment may carry an optional integer `seed`.

mod records;

pub use records::{
    parse_distance_map, parse_parcels, parse_trucks, read_distance_map, read_parcels,
    read_trucks,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, instrument};

use crate::dispatching::{ParcelPriority, SortOrder};
use crate::error::{ConfigError, Error, Result};
use crate::models::{DistanceMap, Fleet, Parcel, Truck};
use crate::scheduler::{FleetStats, GreedyConfig, GreedyScheduler, RandomScheduler, Scheduler};
use crate::validation::validate_input;

/// Scheduling algorithm of an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Greedy,
    Random,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Random => "random",
        }
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greedy" => Ok(Self::Greedy),
            "random" => Ok(Self::Random),
            other => Err(ConfigError::unknown("algorithm", other)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Experiment description, as read from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// The single depot every truck starts from.
    pub depot_location: String,
    pub parcel_file: PathBuf,
    pub truck_file: PathBuf,
    pub map_file: PathBuf,
    pub algorithm: Algorithm,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parcel_priority: Option<ParcelPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parcel_order: Option<SortOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truck_order: Option<SortOrder>,
    /// Log every scheduling decision at debug level.
    #[serde(default)]
    pub verbose: bool,
    /// Seed for the random scheduler; OS entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ExperimentConfig {
    /// Reads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// The greedy options, or the first one missing.
    pub fn greedy_config(&self) -> Result<GreedyConfig, ConfigError> {
        let missing = |option| ConfigError::MissingValue { option };
        let config = GreedyConfig::new(
            self.parcel_priority.ok_or_else(|| missing("parcel_priority"))?,
            self.parcel_order.ok_or_else(|| missing("parcel_order"))?,
            self.truck_order.ok_or_else(|| missing("truck_order"))?,
        );
        Ok(config.with_verbose(self.verbose))
    }

    /// Builds the scheduler this configuration names.
    pub fn build_scheduler(&self) -> Result<Box<dyn Scheduler>, ConfigError> {
        let scheduler: Box<dyn Scheduler> = match self.algorithm {
            Algorithm::Greedy => Box::new(GreedyScheduler::new(self.greedy_config()?)),
            Algorithm::Random => match self.seed {
                Some(seed) => Box::new(RandomScheduler::with_seed(seed)),
                None => Box::new(RandomScheduler::new()),
            },
        };
        Ok(scheduler)
    }
}

/// Outcome of a finished experiment.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    pub stats: FleetStats,
    /// The fleet with parcels packed.
    pub fleet: Fleet,
    /// Parcels no truck could take.
    pub unscheduled: Vec<Parcel>,
}

/// A validated scheduling problem bound to one scheduler.
///
/// # Example
///
/// ```
/// use u_fleet::experiment::SchedulingExperiment;
/// use u_fleet::models::{DistanceMap, Parcel, Truck};
/// use u_fleet::scheduler::GreedyScheduler;
///
/// let scheduler = GreedyScheduler::from_options("volume", "non-increasing", "non-decreasing").unwrap();
/// let experiment = SchedulingExperiment::new(
///     Box::new(scheduler),
///     vec![Parcel::new(1, 4, "Toronto", "Hamilton"), Parcel::new(2, 8, "Toronto", "Hamilton")],
///     vec![Truck::new(1, 10, "Toronto")],
///     DistanceMap::new().with_distance("Toronto", "Hamilton", 9),
///     "Toronto",
/// ).unwrap();
///
/// let report = experiment.run().unwrap();
/// assert_eq!(report.stats.unscheduled, 1);
/// assert_eq!(report.stats.avg_distance, 18.0);
/// assert_eq!(report.stats.avg_fullness, 80.0);
/// ```
#[derive(Debug)]
pub struct SchedulingExperiment {
    scheduler: Box<dyn Scheduler>,
    parcels: Vec<Parcel>,
    fleet: Fleet,
    map: DistanceMap,
}

impl SchedulingExperiment {
    /// Creates an experiment from in-memory input.
    ///
    /// # Errors
    /// [`Error::Validation`] listing every problem found in the input.
    pub fn new(
        scheduler: Box<dyn Scheduler>,
        parcels: Vec<Parcel>,
        trucks: Vec<Truck>,
        map: DistanceMap,
        depot: &str,
    ) -> Result<Self> {
        validate_input(&parcels, &trucks, depot).map_err(Error::Validation)?;

        let mut fleet = Fleet::new();
        for truck in trucks {
            fleet.add_truck(truck)?;
        }

        Ok(Self {
            scheduler,
            parcels,
            fleet,
            map,
        })
    }

    /// Creates an experiment by reading the files a configuration names.
    pub fn from_config(config: &ExperimentConfig) -> Result<Self> {
        let scheduler = config.build_scheduler()?;
        let parcels = read_parcels(&config.parcel_file)?;
        let trucks = read_trucks(&config.truck_file, &config.depot_location)?;
        let map = read_distance_map(&config.map_file)?;
        Self::new(scheduler, parcels, trucks, map, &config.depot_location)
    }

    /// Creates an experiment from a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_config(&ExperimentConfig::from_json_file(path)?)
    }

    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn scheduler_name(&self) -> &'static str {
        self.scheduler.name()
    }

    /// Runs the scheduler and computes statistics.
    ///
    /// # Errors
    /// [`Error::MissingDistance`] if a resulting route has a leg the map lacks.
    #[instrument(skip_all, fields(scheduler = self.scheduler.name()))]
    pub fn run(mut self) -> Result<ExperimentReport> {
        let unscheduled = self
            .scheduler
            .schedule(self.parcels, self.fleet.trucks_mut());
        let stats = FleetStats::calculate(&self.fleet, &unscheduled, &self.map)?;

        info!(
            fleet = stats.fleet,
            unused_trucks = stats.unused_trucks,
            avg_distance = stats.avg_distance,
            avg_fullness = stats.avg_fullness,
            unused_space = stats.unused_space,
            unscheduled = stats.unscheduled,
            "experiment finished"
        );

        Ok(ExperimentReport {
            stats,
            fleet: self.fleet,
            unscheduled,
        })
    }
}
