//! FIFO queue with front and back pointers
//!
//! Backs the pending loan requests, processed in arrival order.
//!
//! Nodes are heap cells addressed by raw pointers: the queue needs to reach
//! the back node for O(1) enqueue while the front owns the chain, and a
//! `Box` chain cannot be aliased that way. Every node is allocated in
//! `enqueue` and freed exactly once, in `dequeue` (which `Drop` drives).

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

type NodePtr<T> = NonNull<QueueNode<T>>;

struct QueueNode<T> {
    value: T,
    next: Option<NodePtr<T>>,
}

/// First-in, first-out queue
///
/// Invariant: `front` and `back` are both `None` iff `size == 0`; otherwise
/// following `next` from `front` reaches `back` in `size - 1` steps and
/// `back.next` is `None`.
pub struct Queue<T> {
    /// Oldest unconsumed node
    front: Option<NodePtr<T>>,

    /// Newest node
    back: Option<NodePtr<T>>,

    size: usize,

    /// The queue owns its nodes
    _owns: PhantomData<Box<QueueNode<T>>>,
}

// SAFETY: the node chain is reachable only through this queue, so moving or
// sharing the queue is exactly as safe as moving or sharing its values.
unsafe impl<T: Send> Send for Queue<T> {}
unsafe impl<T: Sync> Sync for Queue<T> {}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            front: None,
            back: None,
            size: 0,
            _owns: PhantomData,
        }
    }

    /// Append a value at the back
    pub fn enqueue(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(QueueNode { value, next: None })));

        match self.back {
            // SAFETY: `back` points to a live node owned by this queue and no
            // other reference to it exists while `&mut self` is held.
            Some(back) => unsafe { (*back.as_ptr()).next = Some(node) },
            None => self.front = Some(node),
        }

        self.back = Some(node);
        self.size += 1;
    }

    /// Detach and return the front value, or `None` when empty
    pub fn dequeue(&mut self) -> Option<T> {
        self.front.map(|front| {
            // SAFETY: `front` was leaked from a Box in `enqueue` and is
            // unlinked here, so it is reclaimed exactly once.
            let node = unsafe { Box::from_raw(front.as_ptr()) };
            let QueueNode { value, next } = *node;

            self.front = next;
            if self.front.is_none() {
                self.back = None;
            }
            self.size -= 1;
            value
        })
    }

    /// Borrow the front value without detaching it
    pub fn peek_front(&self) -> Option<&T> {
        // SAFETY: the node stays alive for as long as `&self` is borrowed.
        self.front.map(|front| unsafe { &(*front.as_ptr()).value })
    }

    /// Values front to back (oldest to newest)
    pub fn to_sequence(&self) -> Vec<&T> {
        self.iter().collect()
    }

    pub fn iter(&self) -> QueueIter<'_, T> {
        QueueIter {
            next: self.front,
            _queue: PhantomData,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn len(&self) -> usize {
        self.size
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        while self.dequeue().is_some() {}
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = QueueIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a queue, front to back
pub struct QueueIter<'a, T> {
    next: Option<NodePtr<T>>,
    _queue: PhantomData<&'a Queue<T>>,
}

impl<'a, T> Iterator for QueueIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: the iterator borrows the queue, so no node is freed
            // while it is alive.
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            &node.value
        })
    }
}
