//! SinglyLinkedList Tests
//!
//! Tests verify:
//! - Front/back insertion order
//! - Predicate search
//! - Removal of head, interior and tail nodes
//! - Size tracking
//! - Long chains drop without recursion

use biblio::collections::SinglyLinkedList;

// =============================================================================
// Helper Functions
// =============================================================================

fn list_of(values: &[i32]) -> SinglyLinkedList<i32> {
    let mut list = SinglyLinkedList::new();
    for v in values {
        list.insert_back(*v);
    }
    list
}

fn contents(list: &SinglyLinkedList<i32>) -> Vec<i32> {
    list.to_sequence().into_iter().copied().collect()
}

// =============================================================================
// Insertion Tests
// =============================================================================

#[test]
fn test_new_list_is_empty() {
    let list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert!(list.to_sequence().is_empty());
}

#[test]
fn test_insert_back_preserves_order() {
    let list = list_of(&[1, 2, 3]);
    assert_eq!(contents(&list), vec![1, 2, 3]);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_insert_front_prepends() {
    let mut list = list_of(&[1, 2, 3]);
    list.insert_front(0);
    assert_eq!(contents(&list), vec![0, 1, 2, 3]);
    assert_eq!(list.len(), 4);
}

#[test]
fn test_insert_back_on_empty_becomes_sole_node() {
    let mut list = SinglyLinkedList::new();
    list.insert_back("only");
    assert_eq!(list.to_sequence(), vec![&"only"]);
    assert_eq!(list.len(), 1);
}

#[test]
fn test_mixed_front_and_back_inserts() {
    let mut list = SinglyLinkedList::new();
    list.insert_back(2);
    list.insert_front(1);
    list.insert_back(3);
    list.insert_front(0);
    assert_eq!(contents(&list), vec![0, 1, 2, 3]);
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_find_all_returns_matches_in_order() {
    let list = list_of(&[1, 2, 3, 4, 5, 6]);
    let evens: Vec<i32> = list.find_all(|v| v % 2 == 0).into_iter().copied().collect();
    assert_eq!(evens, vec![2, 4, 6]);
}

#[test]
fn test_find_all_no_match_is_empty() {
    let list = list_of(&[1, 3, 5]);
    assert!(list.find_all(|v| *v > 10).is_empty());
}

#[test]
fn test_find_all_on_empty_list() {
    let list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    assert!(list.find_all(|_| true).is_empty());
}

#[test]
fn test_find_all_references_storage() {
    let mut list = SinglyLinkedList::new();
    list.insert_back(String::from("alpha"));

    let found = list.find_all(|s| s.starts_with('a'));
    let stored = list.to_sequence();
    assert!(std::ptr::eq(found[0], stored[0]));
}

#[test]
fn test_find_first_mut_updates_in_place() {
    let mut list = list_of(&[1, 2, 3]);
    if let Some(v) = list.find_first_mut(|v| *v == 2) {
        *v = 20;
    }
    assert_eq!(contents(&list), vec![1, 20, 3]);
    assert_eq!(list.find_first(|v| *v == 20), Some(&20));
}

// =============================================================================
// Removal Tests
// =============================================================================

#[test]
fn test_remove_head() {
    let mut list = list_of(&[1, 2, 3]);
    assert!(list.remove_first_matching(|v| *v == 1));
    assert_eq!(contents(&list), vec![2, 3]);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_remove_interior() {
    let mut list = list_of(&[1, 2, 3]);
    assert!(list.remove_first_matching(|v| *v == 2));
    assert_eq!(contents(&list), vec![1, 3]);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_remove_tail() {
    let mut list = list_of(&[1, 2, 3]);
    assert!(list.remove_first_matching(|v| *v == 3));
    assert_eq!(contents(&list), vec![1, 2]);
    assert_eq!(list.len(), 2);

    // Tail is re-linked correctly
    list.insert_back(4);
    assert_eq!(contents(&list), vec![1, 2, 4]);
}

#[test]
fn test_remove_no_match_leaves_list_unchanged() {
    let mut list = list_of(&[1, 2, 3]);
    assert!(!list.remove_first_matching(|v| *v == 42));
    assert_eq!(contents(&list), vec![1, 2, 3]);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_remove_only_first_match() {
    let mut list = list_of(&[7, 1, 7, 7]);
    assert!(list.remove_first_matching(|v| *v == 7));
    assert_eq!(contents(&list), vec![1, 7, 7]);
}

#[test]
fn test_remove_from_empty_list() {
    let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    assert!(!list.remove_first_matching(|_| true));
    assert!(list.is_empty());
}

#[test]
fn test_remove_until_empty() {
    let mut list = list_of(&[1, 2]);
    assert!(list.remove_first_matching(|_| true));
    assert!(list.remove_first_matching(|_| true));
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);

    list.insert_back(9);
    assert_eq!(contents(&list), vec![9]);
}

// =============================================================================
// Size / Drop Tests
// =============================================================================

#[test]
fn test_len_matches_reachable_nodes() {
    let mut list = SinglyLinkedList::new();
    for i in 0..50 {
        if i % 3 == 0 {
            list.insert_front(i);
        } else {
            list.insert_back(i);
        }
    }
    list.remove_first_matching(|v| *v == 10);
    list.remove_first_matching(|v| *v == 999);

    assert_eq!(list.len(), list.iter().count());
    assert_eq!(list.is_empty(), list.len() == 0);
}

#[test]
fn test_long_list_drops_without_overflow() {
    let mut list = SinglyLinkedList::new();
    for i in 0..200_000 {
        list.insert_front(i);
    }
    assert_eq!(list.len(), 200_000);
    drop(list);
}

#[test]
fn test_debug_lists_values() {
    let list = list_of(&[1, 2]);
    assert_eq!(format!("{:?}", list), "[1, 2]");
}
