//! A sequence that keeps itself sorted.

use super::Sequence;

/// An array-backed sequence that maintains ascending order on every
/// insertion.
///
/// Elements are placed by binary search, so [`add`](Sequence::add) is
/// `O(log n)` to find the slot plus `O(n)` to shift, and
/// [`contains`](Sequence::contains) is `O(log n)`.
///
/// Because order is an invariant, [`insert`](Sequence::insert) validates the
/// caller's index against the usual contract but then ignores it — the
/// element still goes to its sorted position. Likewise
/// [`set`](Sequence::set) removes the element at the index and re-inserts
/// the replacement where the ordering puts it.
///
/// # Examples
///
/// ```
/// use adt::list::{Sequence, SortedSequence};
///
/// let mut list = SortedSequence::new();
/// list.add(5);
/// list.add(1);
/// list.add(3);
///
/// assert_eq!(*list.get(0), 1);
/// assert_eq!(*list.get(1), 3);
/// assert_eq!(*list.get(2), 5);
/// ```
#[derive(Clone, Debug)]
pub struct SortedSequence<T> {
    items: Vec<T>,
}

impl<T> Default for SortedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SortedSequence<T> {
    /// Generates a new, empty `SortedSequence`.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Ord> Sequence<T> for SortedSequence<T> {
    fn add(&mut self, element: T) {
        let index = match self.items.binary_search(&element) {
            Ok(index) | Err(index) => index,
        };
        self.items.insert(index, element);
    }

    /// Validates `index` per the [`Sequence`] contract, then inserts the
    /// element at its sorted position regardless of the index.
    fn insert(&mut self, index: usize, element: T) {
        assert!(
            index <= self.items.len(),
            "insertion index {} out of range for length {}",
            index,
            self.items.len()
        );
        self.add(element);
    }

    fn get(&self, index: usize) -> &T {
        assert!(
            index < self.items.len(),
            "index {} out of range for length {}",
            index,
            self.items.len()
        );
        &self.items[index]
    }

    /// Removes the element at `index` and re-inserts `element` at its sorted
    /// position, which may differ from `index`.
    fn set(&mut self, index: usize, element: T) {
        assert!(
            index < self.items.len(),
            "index {} out of range for length {}",
            index,
            self.items.len()
        );
        self.items.remove(index);
        self.add(element);
    }

    fn remove_at(&mut self, index: usize) -> T {
        assert!(
            index < self.items.len(),
            "index {} out of range for length {}",
            index,
            self.items.len()
        );
        self.items.remove(index)
    }

    fn remove(&mut self, element: &T) -> bool {
        match self.items.binary_search(element) {
            Ok(index) => {
                self.items.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn contains(&self, element: &T) -> bool {
        self.items.binary_search(element).is_ok()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
