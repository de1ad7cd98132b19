//! Collection Tests
//!
//! One module per structure.

mod linked_list_tests;
mod stack_tests;
