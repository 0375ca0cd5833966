//! A growable array sequence.

use super::Sequence;

/// An array-backed sequence with amortized `O(1)` append.
///
/// Storage grows geometrically as elements are added; positional operations
/// shift the tail of the array, so `insert` and `remove_at` are `O(n)` in the
/// worst case.
///
/// # Examples
///
/// ```
/// use adt::list::{DynamicArray, Sequence};
///
/// let mut list = DynamicArray::new();
/// list.add("a");
/// list.add("c");
/// list.insert(1, "b");
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(*list.get(1), "b");
/// ```
#[derive(Clone, Debug)]
pub struct DynamicArray<T> {
    elements: Vec<T>,
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynamicArray<T> {
    /// Generates a new, empty `DynamicArray`.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<T: Ord> Sequence<T> for DynamicArray<T> {
    fn add(&mut self, element: T) {
        self.elements.push(element);
    }

    fn insert(&mut self, index: usize, element: T) {
        assert!(
            index <= self.elements.len(),
            "insertion index {} out of range for length {}",
            index,
            self.elements.len()
        );
        self.elements.insert(index, element);
    }

    fn get(&self, index: usize) -> &T {
        assert!(
            index < self.elements.len(),
            "index {} out of range for length {}",
            index,
            self.elements.len()
        );
        &self.elements[index]
    }

    fn set(&mut self, index: usize, element: T) {
        assert!(
            index < self.elements.len(),
            "index {} out of range for length {}",
            index,
            self.elements.len()
        );
        self.elements[index] = element;
    }

    fn remove_at(&mut self, index: usize) -> T {
        assert!(
            index < self.elements.len(),
            "index {} out of range for length {}",
            index,
            self.elements.len()
        );
        self.elements.remove(index)
    }

    fn remove(&mut self, element: &T) -> bool {
        match self.elements.iter().position(|e| e == element) {
            Some(index) => {
                self.elements.remove(index);
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    fn clear(&mut self) {
        self.elements.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_get_and_remove() {
        let mut list = DynamicArray::new();
        list.add(1);
        list.add(2);
        list.add(3);

        assert_eq!(list.len(), 3);
        assert_eq!(*list.get(0), 1);
        assert_eq!(*list.get(1), 2);
        assert_eq!(*list.get(2), 3);

        assert!(list.remove(&2));
        assert!(!list.remove(&4));
        assert_eq!(list.len(), 2);
        assert_eq!(*list.get(1), 3);
    }

    #[test]
    fn insert_set_and_remove_at() {
        let mut list = DynamicArray::new();
        list.add("a");
        list.add("c");
        list.insert(1, "b");

        assert_eq!(*list.get(1), "b");

        list.set(1, "bb");
        assert_eq!(*list.get(1), "bb");

        assert_eq!(list.remove_at(1), "bb");
        assert_eq!(list.len(), 2);
        assert_eq!(*list.get(1), "c");

        list.clear();
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn insert_at_the_ends() {
        let mut list = DynamicArray::new();
        list.insert(0, 2);
        list.insert(0, 1);
        list.insert(2, 3);

        assert_eq!(*list.get(0), 1);
        assert_eq!(*list.get(2), 3);
    }

    #[test]
    fn removes_the_first_match_only() {
        let mut list = DynamicArray::new();
        list.add(7);
        list.add(8);
        list.add(7);

        assert!(list.remove(&7));
        assert_eq!(list.len(), 2);
        assert_eq!(*list.get(0), 8);
        assert_eq!(*list.get(1), 7);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_past_the_end_panics() {
        let list: DynamicArray<i32> = DynamicArray::new();
        list.get(0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn insert_past_the_end_panics() {
        let mut list = DynamicArray::new();
        list.add(1);
        list.insert(2, 2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn remove_at_past_the_end_panics() {
        let mut list = DynamicArray::new();
        list.add(1);
        list.remove_at(1);
    }
}
