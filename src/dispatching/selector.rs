//! Stable priority selection.
//!
//! `OrderedSelector` always yields the highest-priority element it holds.
//! Elements that do not outrank one another come out in insertion order.
//!
//! # Representation
//! Elements are kept sorted best-first. A new element is inserted after
//! every element it does not outrank, which places it behind its equals.
//! Removal pops the front.
//!
//! # Complexity
//! `add` is O(log n) comparisons plus O(n) moves; `remove` is O(1).

use std::collections::VecDeque;
use std::fmt;

use super::Precedence;

/// A priority container with FIFO tie-breaking.
///
/// Held elements must not change their priority-relevant state while inside
/// the selector; the sorted order is established on insertion only.
///
/// # Example
///
/// ```
/// use u_fleet::dispatching::OrderedSelector;
///
/// let mut selector = OrderedSelector::new(|a: &Vec<i32>, b: &Vec<i32>| a.len() > b.len());
/// for item in [vec![1], vec![1, 2], vec![2], vec![2, 3]] {
///     selector.add(item);
/// }
///
/// let mut drained = Vec::new();
/// while !selector.is_empty() {
///     drained.push(selector.remove());
/// }
/// assert_eq!(drained, vec![vec![1, 2], vec![2, 3], vec![1], vec![2]]);
/// ```
pub struct OrderedSelector<T, P> {
    items: VecDeque<T>,
    precedence: P,
}

impl<T, P: Precedence<T>> OrderedSelector<T, P> {
    /// Creates an empty selector ordered by `precedence`.
    pub fn new(precedence: P) -> Self {
        Self {
            items: VecDeque::new(),
            precedence,
        }
    }

    /// Inserts an element behind all elements it does not outrank.
    pub fn add(&mut self, item: T) {
        let precedence = &self.precedence;
        let pos = self
            .items
            .partition_point(|held| !precedence.outranks(&item, held));
        self.items.insert(pos, item);
    }

    /// Removes and returns the highest-priority element.
    ///
    /// # Panics
    /// If the selector is empty. Check [`is_empty`](Self::is_empty) first.
    pub fn remove(&mut self) -> T {
        match self.items.pop_front() {
            Some(item) => item,
            None => panic!("remove() called on an empty OrderedSelector"),
        }
    }

    /// Whether no elements remain.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T, P: Precedence<T>> Extend<T> for OrderedSelector<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: fmt::Debug, P> fmt::Debug for OrderedSelector<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedSelector")
            .field("items", &self.items)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T, P: Precedence<T>>(mut selector: OrderedSelector<T, P>) -> Vec<T> {
        let mut out = Vec::new();
        while !selector.is_empty() {
            out.push(selector.remove());
        }
        out
    }

    #[test]
    fn test_largest_first() {
        let mut s = OrderedSelector::new(|a: &i32, b: &i32| a > b);
        s.add(1);
        s.add(3);
        s.add(2);
        assert_eq!(drain(s), vec![3, 2, 1]);
    }

    #[test]
    fn test_ties_in_insertion_order() {
        let mut s = OrderedSelector::new(|a: &Vec<i32>, b: &Vec<i32>| a.len() > b.len());
        s.extend([vec![1], vec![1, 2], vec![2], vec![2, 3]]);
        assert_eq!(drain(s), vec![vec![1, 2], vec![2, 3], vec![1], vec![2]]);
    }

    #[test]
    fn test_all_equal_is_fifo() {
        let mut s = OrderedSelector::new(|_: &(u8, char), _: &(u8, char)| false);
        s.extend([(0, 'a'), (0, 'b'), (0, 'c'), (0, 'd')]);
        let order: Vec<char> = drain(s).into_iter().map(|(_, c)| c).collect();
        assert_eq!(order, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_stable_on_keyed_ties() {
        // Key = first field, smaller first; second field records arrival.
        let mut s = OrderedSelector::new(|a: &(u32, u32), b: &(u32, u32)| a.0 < b.0);
        s.extend([(2, 0), (1, 1), (2, 2), (1, 3), (3, 4), (1, 5)]);
        assert_eq!(
            drain(s),
            vec![(1, 1), (1, 3), (1, 5), (2, 0), (2, 2), (3, 4)]
        );
    }

    #[test]
    fn test_interleaved_add_remove() {
        let mut s = OrderedSelector::new(|a: &i32, b: &i32| a > b);
        s.add(5);
        s.add(1);
        assert_eq!(s.remove(), 5);
        s.add(3);
        s.add(1);
        assert_eq!(s.remove(), 3);
        assert_eq!(s.remove(), 1);
        assert_eq!(s.remove(), 1);
        assert!(s.is_empty());
    }

    #[test]
    fn test_empty() {
        let s = OrderedSelector::new(|a: &i32, b: &i32| a > b);
        assert!(s.is_empty());
    }

    #[test]
    #[should_panic(expected = "empty OrderedSelector")]
    fn test_remove_from_empty_panics() {
        let mut s = OrderedSelector::new(|a: &i32, b: &i32| a > b);
        s.remove();
    }
}
