//! Delivery domain models.
//!
//! Passive records and packing logic for the parcel assignment problem.
//!
//! | Type | Role |
//! |------|------|
//! | `Parcel` | Immutable shipment unit: volume + destination |
//! | `Truck` | Capacity-bounded vehicle; owns its load and route |
//! | `Fleet` | Trucks of one scheduling run, unique by id |
//! | `DistanceMap` | Directed distances between locations |

mod distance;
mod fleet;
mod parcel;
mod truck;

pub use distance::DistanceMap;
pub use fleet::Fleet;
pub use parcel::{Parcel, ParcelId};
pub use truck::{Truck, TruckId};
