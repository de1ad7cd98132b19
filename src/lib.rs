//! # Biblio
//!
//! A library-management core built on hand-rolled linear data structures:
//! - Singly linked list for the book catalog
//! - Dynamic array for the user registry
//! - Stack for the recent-loan history
//! - Queue for pending loan requests
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Library                              │
//! │           (register / search / checkout / return)            │
//! └──────┬──────────────┬──────────────┬──────────────┬─────────┘
//!        │              │              │              │
//!        ▼              ▼              ▼              ▼
//! ┌─────────────┐┌─────────────┐┌─────────────┐┌─────────────┐
//! │ LinkedList  ││DynamicArray ││    Stack    ││    Queue    │
//! │   (books)   ││   (users)   ││  (history)  ││ (requests)  │
//! └─────────────┘└─────────────┘└─────────────┘└─────────────┘
//! ```
//!
//! Everything is in memory and single-threaded.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod collections;
pub mod catalog;
pub mod library;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BiblioError, Result};
pub use config::Config;
pub use library::{Library, LibraryStats};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Biblio
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
