//! Ordering rules and stable priority selection.
//!
//! A [`Precedence`] says whether one element strictly outranks another.
//! [`OrderedSelector`] drains elements best-first under a precedence, and
//! the built-in [`rules`] cover every parcel and truck ordering a scheduler
//! can be configured with. Closures `Fn(&T, &T) -> bool` are precedences too.
//!
//! # Usage
//!
//! ```
//! use u_fleet::dispatching::{OrderedSelector, rules::ParcelRule};
//! use u_fleet::models::Parcel;
//!
//! let mut selector = OrderedSelector::new(ParcelRule::LargestVolume);
//! selector.add(Parcel::new(1, 2, "Toronto", "Ajax"));
//! selector.add(Parcel::new(2, 9, "Toronto", "Barrie"));
//! assert_eq!(selector.remove().id, 2);
//! ```

pub mod rules;
mod selector;

pub use rules::{ParcelPriority, ParcelRule, SortOrder, TruckRule};
pub use selector::OrderedSelector;

/// A strict "ranks higher than" predicate over `T`.
///
/// Must be irreflexive and transitive, and incomparability must be
/// transitive (a strict weak order). Elements neither of which outranks
/// the other are treated as equal priority.
pub trait Precedence<T: ?Sized> {
    /// Whether `a` strictly outranks `b`.
    fn outranks(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Precedence<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn outranks(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
