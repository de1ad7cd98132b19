//! Catalog Module
//!
//! Domain records stored as payloads inside the collections.
//!
//! ## Records
//! - `Book`: catalog entry, lives in a `SinglyLinkedList`
//! - `User`: patron, lives in a `DynamicArray`
//! - `Loan`: checkout record, lives in the history `Stack` and the active index
//! - `LoanRequest`: pending checkout, lives in a `Queue`
//!
//! Timestamps are unix milliseconds.

mod book;
mod user;
mod loan;
mod request;

use std::time::{SystemTime, UNIX_EPOCH};

pub use book::{Book, BookField};
pub use user::{User, UserField, UserId};
pub use loan::{Loan, LoanId, LoanStatus, MILLIS_PER_DAY};
pub use request::{LoanRequest, RequestOutcome};

/// Current wall-clock time in unix milliseconds
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

/// Case-insensitive substring match used by the search operations
pub(crate) fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
