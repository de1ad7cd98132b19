//! Collections Module
//!
//! Linear containers built from first principles: manual node chaining for
//! the list, stack and queue, manual capacity doubling for the array.
//!
//! ## Responsibilities
//! - `SinglyLinkedList`: ordered sequence, O(1) front insert, predicate search/removal
//! - `Stack`: LIFO over a node chain
//! - `Queue`: FIFO with front/back pointers
//! - `DynamicArray`: indexed storage that doubles when full
//!
//! ## Ownership Model
//! ```text
//!   head ──► ┌───────┬──────┐   ┌───────┬──────┐   ┌───────┬──────┐
//!            │ value │ next ├──►│ value │ next ├──►│ value │ None │
//!            └───────┴──────┘   └───────┴──────┘   └───────┴──────┘
//! ```
//! The structure owns its first node and every node owns its successor.
//! No chain is ever shared between two structures and no cycle is formed.
//!
//! None of these types lock internally. Wrap an instance in a mutex if it has
//! to be shared across threads.

mod linked_list;
mod stack;
mod queue;
mod dynamic_array;

pub use linked_list::SinglyLinkedList;
pub use stack::Stack;
pub use queue::{Queue, QueueIter};
pub use dynamic_array::{ArrayIter, DynamicArray, DEFAULT_CAPACITY};

// =============================================================================
// Shared Node Chain
// =============================================================================

/// Owning link to the next node in a chain
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single storage cell: one value and the link to its successor
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }
}

/// Release a chain node by node.
///
/// The default drop of `Box<Node<T>>` recurses once per node, which overflows
/// the stack on long chains.
pub(crate) fn drop_chain<T>(mut link: Link<T>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

/// Borrowing iterator over a node chain, front to back
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: &'a Link<T>) -> Self {
        Self {
            next: head.as_deref(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

/// Mutable iterator over a node chain, front to back
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(head: &'a mut Link<T>) -> Self {
        Self {
            next: head.as_deref_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.value
        })
    }
}
