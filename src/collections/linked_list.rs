//! Singly linked list
//!
//! Backs the book catalog. Front insertion is O(1); back insertion walks the
//! chain because no tail pointer is kept.

use std::fmt;

use super::{drop_chain, Iter, IterMut, Link, Node};

/// Ordered sequence of owned nodes
pub struct SinglyLinkedList<T> {
    /// First node, owning the rest of the chain
    head: Link<T>,

    /// Number of nodes reachable from `head`
    size: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self { head: None, size: 0 }
    }

    /// Link a new node before the current head
    pub fn insert_front(&mut self, value: T) {
        let node = Node::new(value, self.head.take());
        self.head = Some(node);
        self.size += 1;
    }

    /// Walk to the last node and link a new node after it
    pub fn insert_back(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Node::new(value, None));
        self.size += 1;
    }

    /// All values satisfying `predicate`, front to back
    pub fn find_all<P>(&self, mut predicate: P) -> Vec<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|value| predicate(value)).collect()
    }

    /// First value satisfying `predicate`
    pub fn find_first<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|value| predicate(value))
    }

    /// Mutable access to the first value satisfying `predicate`
    pub fn find_first_mut<P>(&mut self, mut predicate: P) -> Option<&mut T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter_mut().find(|value| predicate(value))
    }

    /// Unlink the first node whose value satisfies `predicate`
    ///
    /// Returns `true` if a node was removed. At most one node is removed per
    /// call.
    pub fn remove_first_matching<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut cursor = &mut self.head;
        loop {
            match cursor {
                None => return false,
                Some(node) if predicate(&node.value) => {
                    // Re-point the predecessor (or head) past the removed node
                    *cursor = node.next.take();
                    self.size -= 1;
                    return true;
                }
                Some(node) => cursor = &mut node.next,
            }
        }
    }

    /// All values, front to back
    pub fn to_sequence(&self) -> Vec<&T> {
        self.iter().collect()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.head)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.head)
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn len(&self) -> usize {
        self.size
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        drop_chain(self.head.take());
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
