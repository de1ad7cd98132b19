//! Growable array
//!
//! Backs the user registry. Slots live in a boxed slice whose length is the
//! capacity; logical indices `[0, size)` are occupied, the rest are `None`.
//!
//! ## Growth
//! ```text
//! push into full array (size == capacity == 4)
//!
//!   old: [a][b][c][d]
//!   new: [a][b][c][d][ ][ ][ ][ ]      capacity * 2, live slots moved in order
//!   new: [a][b][c][d][e][ ][ ][ ]      then the pending push lands at `size`
//! ```
//! Capacity never shrinks.

use std::fmt;
use std::slice;

use crate::error::{BiblioError, Result};

/// Initial capacity used by `DynamicArray::new`
pub const DEFAULT_CAPACITY: usize = 10;

/// Contiguous, index-addressable storage that doubles when full
pub struct DynamicArray<T> {
    /// Backing store; its length is the capacity
    slots: Box<[Option<T>]>,

    /// Number of occupied slots, always <= capacity
    size: usize,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with `DEFAULT_CAPACITY` slots
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty array with `capacity` slots
    ///
    /// A zero capacity is allowed; the first push grows it to one slot.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity),
            size: 0,
        }
    }

    /// Append a value, doubling the capacity first if the array is full
    pub fn push(&mut self, value: T) {
        if self.size == self.capacity() {
            self.grow();
        }
        self.slots[self.size] = Some(value);
        self.size += 1;
    }

    /// Borrow the element at `index`
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        self.slots[index]
            .as_ref()
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Overwrite the element at `index`
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        self.slots[index] = Some(value);
        Ok(())
    }

    /// Remove the element at `index`, shifting later elements left by one
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;

        let removed = self.slots[index].take();
        // The emptied slot travels to position size - 1
        self.slots[index..self.size].rotate_left(1);
        self.size -= 1;

        removed.ok_or_else(|| self.out_of_range(index))
    }

    /// All elements satisfying `predicate`, in index order
    pub fn find_all<P>(&self, mut predicate: P) -> Vec<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|value| predicate(value)).collect()
    }

    /// Index of the first element satisfying `predicate`
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    /// All elements in index order
    pub fn to_sequence(&self) -> Vec<&T> {
        self.iter().collect()
    }

    pub fn iter(&self) -> ArrayIter<'_, T> {
        ArrayIter {
            slots: self.slots[..self.size].iter(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn len(&self) -> usize {
        self.size
    }

    /// Number of allocated slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Reallocate with twice the capacity and move the live elements over
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = if old_capacity == 0 { 1 } else { old_capacity * 2 };

        let mut slots = empty_slots(new_capacity);
        for (dst, src) in slots.iter_mut().zip(self.slots[..self.size].iter_mut()) {
            *dst = src.take();
        }
        self.slots = slots;

        tracing::trace!(old_capacity, new_capacity, "dynamic array grown");
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.size {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> BiblioError {
        BiblioError::IndexOutOfRange {
            index,
            len: self.size,
        }
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    (0..capacity).map(|_| None).collect()
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = ArrayIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over the occupied slots, in index order
pub struct ArrayIter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for ArrayIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().find_map(Option::as_ref)
    }
}
