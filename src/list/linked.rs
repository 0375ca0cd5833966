//! A singly linked sequence.

use super::Sequence;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A singly linked sequence. The list owns its head node; each node owns the
/// next, so there are no shared or cyclic references.
///
/// Every positional operation walks from the head, so indexed access is
/// `O(n)`. The length is cached for an `O(1)` [`len`](Sequence::len).
///
/// # Examples
///
/// ```
/// use adt::list::{Sequence, SinglyLinkedList};
///
/// let mut list = SinglyLinkedList::new();
/// list.add(10);
/// list.add(20);
/// list.insert(1, 15);
///
/// assert_eq!(*list.get(1), 15);
/// assert!(list.remove(&15));
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.unlink_all();
    }
}

impl<T> SinglyLinkedList<T> {
    /// Generates a new, empty `SinglyLinkedList`.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Detaches every node iteratively so a long list cannot overflow the
    /// stack with recursive drops.
    fn unlink_all(&mut self) {
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
        }
        self.len = 0;
    }

    /// The link owning the node at `index`, found by walking `index` steps
    /// from the head. The caller has already validated the index.
    fn link_at(&mut self, index: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut().expect("index validated by the caller").next;
        }
        link
    }

    fn node_at(&self, index: usize) -> &Node<T> {
        let mut node = self.head.as_deref().expect("index validated by the caller");
        for _ in 0..index {
            node = node.next.as_deref().expect("index validated by the caller");
        }
        node
    }
}

impl<T: Ord> Sequence<T> for SinglyLinkedList<T> {
    fn add(&mut self, element: T) {
        self.insert(self.len, element);
    }

    fn insert(&mut self, index: usize, element: T) {
        assert!(
            index <= self.len,
            "insertion index {} out of range for length {}",
            index,
            self.len
        );
        let link = self.link_at(index);
        let next = link.take();
        *link = Some(Box::new(Node {
            value: element,
            next,
        }));
        self.len += 1;
    }

    fn get(&self, index: usize) -> &T {
        assert!(
            index < self.len,
            "index {} out of range for length {}",
            index,
            self.len
        );
        &self.node_at(index).value
    }

    fn set(&mut self, index: usize, element: T) {
        assert!(
            index < self.len,
            "index {} out of range for length {}",
            index,
            self.len
        );
        let node = self
            .link_at(index)
            .as_mut()
            .expect("index is within the length");
        node.value = element;
    }

    fn remove_at(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "index {} out of range for length {}",
            index,
            self.len
        );
        let link = self.link_at(index);
        let node = *link.take().expect("index is within the length");
        *link = node.next;
        self.len -= 1;
        node.value
    }

    fn remove(&mut self, element: &T) -> bool {
        let mut link = &mut self.head;
        while link.as_ref().map_or(false, |node| node.value != *element) {
            link = &mut link.as_mut().expect("just checked the node exists").next;
        }
        match link.take() {
            Some(node) => {
                *link = node.next;
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn contains(&self, element: &T) -> bool {
        let mut node = self.head.as_deref();
        while let Some(n) = node {
            if n.value == *element {
                return true;
            }
            node = n.next.as_deref();
        }
        false
    }

    fn clear(&mut self) {
        self.unlink_all();
    }
}
