//! Library Tests
//!
//! Business operations on top of the collections.
