//! An ordered multiset backed by an unbalanced Binary Search Tree.
//!
//! Duplicate values are supported: every value that compares equal to a
//! node's key is stored on that node, so the tree's shape only depends on the
//! distinct keys. Removing a value removes exactly one stored occurrence;
//! the node itself is only cut out of the tree when its last occurrence goes.
//!
//! The tree never rebalances. Inserting already-sorted input produces a
//! degenerate, linked-list-shaped tree and the usual `O(log n)` operations
//! degrade to `O(n)`. That is a known property of the data structure, not a
//! bug.
//!
//! # Examples
//!
//! ```
//! use adt::multiset::OrderedMultiSet;
//!
//! let mut set = OrderedMultiSet::new();
//!
//! // Nothing in here yet.
//! assert!(!set.contains(&1));
//!
//! set.insert(1);
//! set.insert(1);
//! set.insert(0);
//! assert_eq!(set.len(), 3);
//!
//! // Removing drops a single occurrence, not every `1`.
//! assert!(set.remove(&1));
//! assert!(set.contains(&1));
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), [0, 1]);
//! ```

use std::cmp::Ordering;
use std::iter::FusedIterator;

type Link<T> = Option<Box<Node<T>>>;

/// A multiset of totally-ordered values, stored as an unbalanced BST.
///
/// Values only need to implement [`Ord`]; cloning and hashing are never
/// required. Iteration yields the stored values in ascending order, with
/// duplicates grouped together.
#[derive(Clone, Debug)]
pub struct OrderedMultiSet<T> {
    root: Link<T>,
    /// Total number of stored occurrences, counting duplicates. Kept in sync
    /// by `insert` and `remove` so `len` is an `O(1)` read.
    len: usize,
}

impl<T> Default for OrderedMultiSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedMultiSet<T> {
    fn drop(&mut self) {
        teardown(self.root.take());
    }
}

impl<T> OrderedMultiSet<T> {
    /// Generates a new, empty `OrderedMultiSet`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The total number of stored occurrences, counting duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt::multiset::OrderedMultiSet;
    ///
    /// let mut set = OrderedMultiSet::new();
    /// set.insert("a");
    /// set.insert("a");
    ///
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the multiset stores no values at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Discards every stored value.
    ///
    /// The tree is torn down iteratively, so clearing a degenerate
    /// (sorted-insert) tree cannot overflow the stack.
    pub fn clear(&mut self) {
        teardown(self.root.take());
        self.len = 0;
    }

    /// Visits the stored values in ascending order. Duplicates are yielded
    /// consecutively, in the order they were inserted.
    ///
    /// The iterator walks the live tree; the borrow it holds prevents the
    /// multiset from being mutated until it is dropped. Calling `iter` again
    /// after a mutation reflects the current contents.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt::multiset::OrderedMultiSet;
    ///
    /// let set: OrderedMultiSet<i32> = [3, 1, 2, 1].iter().copied().collect();
    ///
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T: Ord> OrderedMultiSet<T> {
    /// Inserts a value. Duplicates are kept: inserting a value equal to one
    /// already stored grows that key's multiplicity instead of overwriting.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt::multiset::OrderedMultiSet;
    ///
    /// let mut set = OrderedMultiSet::new();
    /// set.insert(5);
    /// set.insert(5);
    ///
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) {
        match &mut self.root {
            Some(root) => root.insert(value),
            None => self.root = Some(Node::new(value)),
        }
        self.len += 1;
    }

    /// Whether at least one occurrence of `value` is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt::multiset::OrderedMultiSet;
    ///
    /// let mut set = OrderedMultiSet::new();
    /// set.insert(1);
    ///
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.root.as_deref().map_or(false, |n| n.contains(value))
    }

    /// Removes exactly one occurrence of `value`, reporting whether a removal
    /// happened. Absence is an ordinary `false`, never an error.
    ///
    /// If the matched key holds several occurrences, the most recently
    /// inserted one is dropped and the tree's shape is untouched. Removing
    /// the last occurrence cuts the node out of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt::multiset::OrderedMultiSet;
    ///
    /// let mut set = OrderedMultiSet::new();
    /// set.insert(7);
    ///
    /// assert!(set.remove(&7));
    /// assert!(!set.remove(&7));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        if remove_from(&mut self.root, value) {
            // A successful removal always drops exactly one occurrence, even
            // on the successor-promotion path where a whole node moves.
            self.len -= 1;
            true
        } else {
            false
        }
    }
}

impl<T: Ord> Extend<T> for OrderedMultiSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> std::iter::FromIterator<T> for OrderedMultiSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, T> IntoIterator for &'a OrderedMultiSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Drops a whole subtree without recursing: children are unlinked onto an
/// explicit stack before each node drops, so even a degenerate tree tears
/// down in constant stack space.
fn teardown<T>(root: Link<T>) {
    let mut stack = Vec::new();
    stack.extend(root);
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

#[derive(Clone, Debug)]
struct Node<T> {
    /// Every value stored on this node, all comparing equal to each other.
    /// Never empty while the node is in the tree; `occurrences[0]` serves as
    /// the node's key.
    occurrences: Vec<T>,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Box<Self> {
        Box::new(Node {
            occurrences: vec![value],
            left: None,
            right: None,
        })
    }

    fn key(&self) -> &T {
        &self.occurrences[0]
    }
}

impl<T: Ord> Node<T> {
    fn insert(&mut self, value: T) {
        match value.cmp(self.key()) {
            Ordering::Less => match &mut self.left {
                Some(left) => left.insert(value),
                None => self.left = Some(Node::new(value)),
            },
            Ordering::Equal => self.occurrences.push(value),
            Ordering::Greater => match &mut self.right {
                Some(right) => right.insert(value),
                None => self.right = Some(Node::new(value)),
            },
        }
    }

    fn contains(&self, value: &T) -> bool {
        match value.cmp(self.key()) {
            Ordering::Less => self.left.as_deref().map_or(false, |n| n.contains(value)),
            Ordering::Equal => true,
            Ordering::Greater => self.right.as_deref().map_or(false, |n| n.contains(value)),
        }
    }
}

/// Removes one occurrence of `value` from the subtree owned by `link`.
///
/// Working on the owning link (the parent's edge) means the key-equal node
/// can be rewritten in place without parent pointers or a retraced path.
fn remove_from<T: Ord>(link: &mut Link<T>, value: &T) -> bool {
    let node = match link {
        Some(node) => node,
        None => return false,
    };
    match value.cmp(node.key()) {
        Ordering::Less => remove_from(&mut node.left, value),
        Ordering::Greater => remove_from(&mut node.right, value),
        Ordering::Equal => {
            if node.occurrences.len() > 1 {
                node.occurrences.pop();
            } else {
                excise(link);
            }
            true
        }
    }
}

/// Cuts the node owned by `link` out of the tree. The node's last occurrence
/// goes with it; the caller has already accounted for it in the length.
fn excise<T>(link: &mut Link<T>) {
    let mut node = link.take().expect("excising a node requires a node");
    *link = match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (None, Some(child)) | (Some(child), None) => Some(child),
        (Some(left), Some(right)) => {
            // Two children: promote the in-order successor, the leftmost node
            // of the right subtree. It owns no left child, so detaching it
            // only splices its right child upward. The successor node moves
            // wholesale - its entire occurrence sequence comes with it.
            let mut right = Some(right);
            let mut successor = take_leftmost(&mut right);
            successor.left = Some(left);
            successor.right = right;
            Some(successor)
        }
    };
}

/// Detaches the leftmost node of the subtree owned by `link`, splicing that
/// node's right child into its place.
fn take_leftmost<T>(link: &mut Link<T>) -> Box<Node<T>> {
    let node = link.as_mut().expect("leftmost of a non-empty subtree");
    if node.left.is_some() {
        take_leftmost(&mut node.left)
    } else {
        let mut leftmost = link.take().expect("checked non-empty above");
        *link = leftmost.right.take();
        leftmost
    }
}

/// An in-order iterator over an [`OrderedMultiSet`].
///
/// Yields values in ascending order, duplicates grouped in insertion order.
/// The walk keeps an explicit stack of the unvisited ancestors instead of
/// recursing, so iterating a degenerate tree is safe. The length is known
/// exactly up front.
pub struct Iter<'a, T> {
    /// Nodes whose occurrences (and right subtrees) are still pending, deepest
    /// (smallest) last.
    stack: Vec<&'a Node<T>>,
    /// Occurrences of the node currently being yielded.
    occurrences: std::slice::Iter<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(set: &'a OrderedMultiSet<T>) -> Self {
        let mut iter = Iter {
            stack: Vec::new(),
            occurrences: [].iter(),
            remaining: set.len,
        };
        iter.descend_left(set.root.as_deref());
        iter
    }

    fn descend_left(&mut self, mut subtree: Option<&'a Node<T>>) {
        while let Some(node) = subtree {
            self.stack.push(node);
            subtree = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(value) = self.occurrences.next() {
                self.remaining -= 1;
                return Some(value);
            }
            let node = self.stack.pop()?;
            self.occurrences = node.occurrences.iter();
            self.descend_left(node.right.as_deref());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(set: &OrderedMultiSet<i32>) -> Vec<i32> {
        set.iter().copied().collect()
    }

    #[test]
    fn insert_then_contains() {
        let mut set = OrderedMultiSet::new();
        assert!(!set.contains(&10));

        set.insert(10);
        set.insert(5);
        set.insert(15);

        assert_eq!(set.len(), 3);
        assert!(set.contains(&10));
        assert!(set.contains(&5));
        assert!(set.contains(&15));
        assert!(!set.contains(&100));
    }

    #[test]
    fn in_order_iteration_is_sorted() {
        let set: OrderedMultiSet<i32> = [5, 3, 7, 2, 4, 6, 8].iter().copied().collect();
        assert_eq!(collect(&set), [2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn duplicates_drain_one_at_a_time() {
        let mut set: OrderedMultiSet<i32> = [5, 5, 5].iter().copied().collect();
        assert_eq!(set.len(), 3);
        assert_eq!(collect(&set), [5, 5, 5]);

        assert!(set.remove(&5));
        assert_eq!(set.len(), 2);
        assert_eq!(collect(&set), [5, 5]);
        assert!(set.contains(&5));

        assert!(set.remove(&5));
        assert!(set.remove(&5));
        assert_eq!(set.len(), 0);
        assert!(!set.contains(&5));

        // A fourth removal finds nothing.
        assert!(!set.remove(&5));
    }

    #[test]
    fn deleting_the_root_with_two_children() {
        let values = [50, 30, 70, 20, 40, 60, 80];
        let mut set: OrderedMultiSet<i32> = values.iter().copied().collect();
        assert_eq!(set.len(), 7);

        assert!(set.remove(&50));

        assert_eq!(set.len(), 6);
        assert!(!set.contains(&50));
        assert_eq!(collect(&set), [20, 30, 40, 60, 70, 80]);
    }

    #[test]
    fn delete_with_no_children() {
        let mut set: OrderedMultiSet<i32> = [5, 3, 7].iter().copied().collect();

        assert!(set.remove(&7));

        assert!(!set.contains(&7));
        assert_eq!(collect(&set), [3, 5]);
    }

    #[test]
    fn delete_with_only_a_right_child() {
        let mut set: OrderedMultiSet<i32> = [5, 3, 7, 9].iter().copied().collect();

        assert!(set.remove(&7));

        assert_eq!(collect(&set), [3, 5, 9]);
    }

    #[test]
    fn delete_with_only_a_left_child() {
        let mut set: OrderedMultiSet<i32> = [5, 3, 7, 6].iter().copied().collect();

        assert!(set.remove(&7));

        assert_eq!(collect(&set), [3, 5, 6]);
    }

    #[test]
    fn delete_with_a_deeper_successor() {
        // The successor of 50 is 55, two levels down in the right subtree,
        // and it drags its own right child (57) up when detached.
        let mut set: OrderedMultiSet<i32> =
            [50, 30, 70, 60, 80, 55, 65, 57].iter().copied().collect();

        assert!(set.remove(&50));

        assert_eq!(collect(&set), [30, 55, 57, 60, 65, 70, 80]);
    }

    #[test]
    fn promoted_successor_keeps_its_duplicates() {
        // 60 is the successor of 50 and holds two occurrences; both must
        // survive the promotion and the count must only drop by one.
        let mut set: OrderedMultiSet<i32> = [50, 30, 70, 60, 60, 80].iter().copied().collect();

        assert!(set.remove(&50));

        assert_eq!(set.len(), 5);
        assert_eq!(collect(&set), [30, 60, 60, 70, 80]);

        assert!(set.remove(&60));
        assert!(set.remove(&60));
        assert!(!set.contains(&60));
        assert_eq!(collect(&set), [30, 70, 80]);
    }

    #[test]
    fn node_with_duplicates_is_not_excised() {
        let mut set: OrderedMultiSet<i32> = [50, 30, 60, 60, 80].iter().copied().collect();

        // 60 has a left-less parent position and a duplicate; removing one
        // occurrence must leave the subtree (and 80) reachable.
        assert!(set.remove(&60));
        assert_eq!(collect(&set), [30, 50, 60, 80]);
    }

    #[test]
    fn removing_an_absent_value_changes_nothing() {
        let mut set: OrderedMultiSet<i32> = [2, 1, 3].iter().copied().collect();

        assert!(!set.remove(&42));

        assert_eq!(set.len(), 3);
        assert_eq!(collect(&set), [1, 2, 3]);
    }

    #[test]
    fn clear_empties_the_tree() {
        let mut set: OrderedMultiSet<i32> = [1, 2, 3].iter().copied().collect();
        assert_eq!(set.len(), 3);

        set.clear();

        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert!(collect(&set).is_empty());

        // The cleared set is still usable.
        set.insert(9);
        assert_eq!(collect(&set), [9]);
    }

    #[test]
    fn empty_set_operations_are_no_ops() {
        let mut set: OrderedMultiSet<i32> = OrderedMultiSet::new();

        assert!(!set.contains(&1));
        assert!(!set.remove(&1));
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().next(), None);
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn iteration_restarts_from_current_state() {
        let mut set: OrderedMultiSet<i32> = [4, 2, 6].iter().copied().collect();
        assert_eq!(collect(&set), [2, 4, 6]);

        set.remove(&4);
        set.insert(5);

        assert_eq!(collect(&set), [2, 5, 6]);
    }

    #[test]
    fn iterator_length_is_exact() {
        let set: OrderedMultiSet<i32> = [3, 1, 1, 2].iter().copied().collect();
        let mut iter = set.iter();

        assert_eq!(iter.len(), 4);
        assert_eq!(iter.size_hint(), (4, Some(4)));

        iter.next();
        assert_eq!(iter.len(), 3);

        assert_eq!(iter.by_ref().count(), 3);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn degenerate_insert_order_still_works() {
        // Sorted input produces a right-leaning spine; everything must still
        // behave, just slower.
        let mut set = OrderedMultiSet::new();
        for i in 0..100 {
            set.insert(i);
        }

        assert_eq!(set.len(), 100);
        assert!(set.iter().zip(0..100).all(|(got, want)| *got == want));

        assert!(set.remove(&0));
        assert!(set.remove(&99));
        assert!(set.remove(&50));
        assert_eq!(set.len(), 97);
        assert!(!set.contains(&50));
    }

    #[test]
    fn clone_is_independent() {
        let mut set: OrderedMultiSet<i32> = [2, 1, 3].iter().copied().collect();
        let snapshot = set.clone();

        set.remove(&2);

        assert_eq!(collect(&set), [1, 3]);
        assert_eq!(collect(&snapshot), [1, 2, 3]);
    }
}
