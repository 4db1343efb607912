//! Parcel-to-truck assignment for single-depot delivery fleets.
//!
//! Assigns parcels to capacity-bounded trucks, each with a route that
//! starts at a shared depot, and reports how well the fleet was used.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Parcel`, `Truck`, `Fleet`, `DistanceMap`
//! - **`dispatching`**: Ordering rules and the stable `OrderedSelector`
//! - **`scheduler`**: `GreedyScheduler`, `RandomScheduler`, `FleetStats`
//! - **`experiment`**: Record files, JSON experiment configs, end-to-end runs
//! - **`validation`**: Input integrity checks (duplicate IDs, depot mismatches)
//! - **`error`**: Error types
//!
//! # Example
//!
//! ```
//! use u_fleet::models::{Fleet, Parcel, Truck};
//! use u_fleet::scheduler::GreedyScheduler;
//!
//! let scheduler = GreedyScheduler::from_options("destination", "non-decreasing", "non-increasing").unwrap();
//! let mut fleet = Fleet::new().with_truck(Truck::new(1, 20, "Toronto")).unwrap();
//!
//! let parcels = vec![
//!     Parcel::new(1, 5, "Toronto", "London"),
//!     Parcel::new(2, 5, "Toronto", "Barrie"),
//! ];
//! let unscheduled = scheduler.schedule(parcels, fleet.trucks_mut());
//! assert!(unscheduled.is_empty());
//! assert_eq!(fleet.trucks()[0].route(), ["Toronto", "Barrie", "London"]);
//! ```
//!
//! # References
//!
//! - Martello & Toth (1990), "Knapsack Problems: Algorithms and Computer Implementations"
//! - Coffman et al. (1996), "Approximation Algorithms for Bin Packing: A Survey"

pub mod dispatching;
pub mod error;
pub mod experiment;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
