//! Sequence types: a growable array, a singly linked list, and a list that
//! keeps itself sorted, all behind the [`Sequence`] trait.
//!
//! These are deliberately textbook implementations. They share one contract:
//! positional operations check their index up front and panic when it is out
//! of range, while value lookups report absence with a plain `bool`.

mod array;
mod linked;
mod sorted;

pub use self::array::DynamicArray;
pub use self::linked::SinglyLinkedList;
pub use self::sorted::SortedSequence;

/// The uniform contract shared by every sequence type in this module.
///
/// Valid indexes are `0..=len()` for [`insert`](Sequence::insert) and
/// `0..len()` for the positional accessors. An out-of-range index panics
/// before anything is mutated.
pub trait Sequence<T: Ord> {
    /// Appends an element to the sequence. Types with their own placement
    /// rules (see [`SortedSequence`]) may store it elsewhere.
    fn add(&mut self, element: T);

    /// Inserts an element at `index`, shifting everything after it.
    ///
    /// # Panics
    ///
    /// If `index > len()`.
    fn insert(&mut self, index: usize, element: T);

    /// A reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// If `index >= len()`.
    fn get(&self, index: usize) -> &T;

    /// Replaces the element at `index`.
    ///
    /// # Panics
    ///
    /// If `index >= len()`.
    fn set(&mut self, index: usize, element: T);

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    ///
    /// If `index >= len()`.
    fn remove_at(&mut self, index: usize) -> T;

    /// Removes one element equal to `element`, reporting whether anything
    /// was removed.
    fn remove(&mut self, element: &T) -> bool;

    /// The number of stored elements.
    fn len(&self) -> usize;

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether any stored element equals `element`.
    fn contains(&self, element: &T) -> bool;

    /// Removes every element.
    fn clear(&mut self);
}
