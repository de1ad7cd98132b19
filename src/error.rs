//! Error types for Biblio
//!
//! Provides a unified error type for all operations.
//!
//! Empty-container reads (`Stack::pop`, `Queue::dequeue`, ...) are not errors;
//! they return `None`.

use thiserror::Error;

/// Result type alias using BiblioError
pub type Result<T> = std::result::Result<T, BiblioError>;

/// Unified error type for Biblio operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BiblioError {
    // -------------------------------------------------------------------------
    // Collection Errors
    // -------------------------------------------------------------------------
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    // -------------------------------------------------------------------------
    // Catalog Errors
    // -------------------------------------------------------------------------
    #[error("A book with ISBN {0} is already registered")]
    DuplicateIsbn(String),

    #[error("A user with email {0} is already registered")]
    DuplicateEmail(String),

    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    // -------------------------------------------------------------------------
    // Loan Errors
    // -------------------------------------------------------------------------
    #[error("Book {0} is not available for loan")]
    BookUnavailable(String),

    #[error("Active loan not found: {0}")]
    LoanNotFound(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
