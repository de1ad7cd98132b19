//! LIFO stack over a node chain
//!
//! Backs the recent-loan history, read most recent first.

use std::fmt;

use super::{drop_chain, Iter, IterMut, Link, Node};

/// Last-in, first-out stack
pub struct Stack<T> {
    /// Most recently pushed node
    top: Link<T>,
    size: usize,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { top: None, size: 0 }
    }

    /// Push a value; it becomes the new top
    pub fn push(&mut self, value: T) {
        let node = Node::new(value, self.top.take());
        self.top = Some(node);
        self.size += 1;
    }

    /// Detach and return the top value, or `None` when empty
    pub fn pop(&mut self) -> Option<T> {
        self.top.take().map(|node| {
            let Node { value, next } = *node;
            self.top = next;
            self.size -= 1;
            value
        })
    }

    /// Borrow the top value without detaching it
    pub fn peek(&self) -> Option<&T> {
        self.top.as_deref().map(|node| &node.value)
    }

    /// Values top to bottom (reverse push order)
    pub fn to_sequence(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Iterate top to bottom
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.top)
    }

    /// Iterate top to bottom with mutable access to each value
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.top)
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn len(&self) -> usize {
        self.size
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        drop_chain(self.top.take());
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
