//! Input validation for scheduling experiments.
//!
//! Record files are hand-edited, and a run packs trucks irreversibly, so an
//! experiment checks its whole input up front and reports every problem in
//! one pass instead of stopping at the first. Detects:
//! - Duplicate parcel or truck IDs (the fleet and allocation reports key on them)
//! - Parcels with no volume
//! - Trucks with no capacity
//! - Trucks based at a depot other than the experiment's
//!
//! A parcel addressed to the depot is accepted: packing it leaves the route
//! unchanged when the truck is still at the depot.

use std::collections::HashSet;

use crate::models::{Parcel, Truck};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two parcels or two trucks share the same ID.
    DuplicateId,
    /// A parcel has zero volume.
    ZeroVolume,
    /// A truck has zero capacity.
    ZeroCapacity,
    /// A truck starts from a different depot.
    ForeignDepot,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of a single-depot scheduling run.
///
/// Checks:
/// 1. No duplicate parcel IDs
/// 2. No duplicate truck IDs
/// 3. Every parcel has a positive volume
/// 4. Every truck has a positive capacity
/// 5. Every truck is based at `depot`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(parcels: &[Parcel], trucks: &[Truck], depot: &str) -> ValidationResult {
    let mut errors = Vec::new();

    let mut parcel_ids = HashSet::new();
    for p in parcels {
        if !parcel_ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate parcel ID: {}", p.id),
            ));
        }
        if p.volume == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroVolume,
                format!("Parcel {} has zero volume", p.id),
            ));
        }
    }

    let mut truck_ids = HashSet::new();
    for t in trucks {
        if !truck_ids.insert(t.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate truck ID: {}", t.id()),
            ));
        }
        if t.capacity() == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCapacity,
                format!("Truck {} has zero capacity", t.id()),
            ));
        }
        if t.depot() != depot {
            errors.push(ValidationError::new(
                ValidationErrorKind::ForeignDepot,
                format!(
                    "Truck {} is based at '{}', expected '{}'",
                    t.id(),
                    t.depot(),
                    depot
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
