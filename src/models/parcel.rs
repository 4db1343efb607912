//! Parcel model.
//!
//! A parcel is the unit of shipment: it occupies some volume in a truck and
//! must be delivered to a destination. Parcels are passive records; they are
//! moved between trucks and the unscheduled list but never modified.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Parcel identifier.
pub type ParcelId = u32;

/// A parcel to be delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Unique parcel identifier.
    pub id: ParcelId,
    /// Volume occupied in a truck (positive).
    pub volume: u32,
    /// Location the parcel was shipped from.
    pub source: String,
    /// Delivery location.
    pub destination: String,
}

impl Parcel {
    /// Creates a new parcel.
    pub fn new(
        id: ParcelId,
        volume: u32,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            id,
            volume,
            source: source.into(),
            destination: destination.into(),
        }
    }
}

impl fmt::Display for Parcel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parcel #{} ({} cc, {} -> {})",
            self.id, self.volume, self.source, self.destination
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parcel_new() {
        let p = Parcel::new(7, 12, "Buffalo", "Hamilton");
        assert_eq!(p.id, 7);
        assert_eq!(p.volume, 12);
        assert_eq!(p.source, "Buffalo");
        assert_eq!(p.destination, "Hamilton");
    }

    #[test]
    fn test_parcel_display() {
        let p = Parcel::new(1, 5, "Toronto", "Windsor");
        assert_eq!(p.to_string(), "parcel #1 (5 cc, Toronto -> Windsor)");
    }
}
