//! Stack Tests
//!
//! Tests verify:
//! - LIFO ordering
//! - Empty pop/peek return None
//! - Top-to-bottom sequence order

use biblio::collections::Stack;

// =============================================================================
// Empty Stack Tests
// =============================================================================

#[test]
fn test_new_stack_is_empty() {
    let stack: Stack<i32> = Stack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
}

#[test]
fn test_pop_empty_returns_none() {
    let mut stack: Stack<i32> = Stack::new();
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.len(), 0);
}

#[test]
fn test_peek_empty_returns_none() {
    let stack: Stack<i32> = Stack::new();
    assert_eq!(stack.peek(), None);
}

// =============================================================================
// LIFO Tests
// =============================================================================

#[test]
fn test_push_pop_is_lifo() {
    let mut stack = Stack::new();
    stack.push("first");
    stack.push("second");
    stack.push("third");

    assert_eq!(stack.len(), 3);
    assert_eq!(stack.pop(), Some("third"));
    assert_eq!(stack.pop(), Some("second"));
    assert_eq!(stack.pop(), Some("first"));
    assert_eq!(stack.pop(), None);
    assert!(stack.is_empty());
}

#[test]
fn test_peek_does_not_remove() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);

    assert_eq!(stack.peek(), Some(&2));
    assert_eq!(stack.peek(), Some(&2));
    assert_eq!(stack.len(), 2);
}

#[test]
fn test_to_sequence_is_most_recent_first() {
    let mut stack = Stack::new();
    for i in 1..=4 {
        stack.push(i);
    }
    assert_eq!(stack.to_sequence(), vec![&4, &3, &2, &1]);
}

#[test]
fn test_interleaved_push_pop() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.pop(), Some(2));
    stack.push(3);
    assert_eq!(stack.to_sequence(), vec![&3, &1]);
    assert_eq!(stack.len(), 2);
}

#[test]
fn test_iter_mut_updates_entries() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    for v in stack.iter_mut() {
        *v *= 10;
    }
    assert_eq!(stack.pop(), Some(20));
    assert_eq!(stack.pop(), Some(10));
}

#[test]
fn test_long_stack_drops_without_overflow() {
    let mut stack = Stack::new();
    for i in 0..200_000 {
        stack.push(i);
    }
    assert_eq!(stack.len(), 200_000);
    drop(stack);
}
