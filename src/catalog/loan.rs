//! Loan record

use std::fmt;

use serde::{Deserialize, Serialize};

use super::UserId;

/// Loan identifier, formatted `P001`, `P002`, ...
pub type LoanId = String;

pub const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Lifecycle of a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    /// Out and not yet due
    Active,
    /// Out past its due date
    Overdue,
    /// Book has come back
    Returned,
}

/// A book checked out to a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub isbn: String,
    pub user_id: UserId,
    pub loaned_at_ms: u64,
    pub due_at_ms: u64,
    /// `None` until the book is returned
    pub returned_at_ms: Option<u64>,
    pub status: LoanStatus,
}

impl Loan {
    /// Create an active loan due `period_days` after `loaned_at_ms`
    pub fn new(
        id: impl Into<LoanId>,
        isbn: impl Into<String>,
        user_id: impl Into<UserId>,
        loaned_at_ms: u64,
        period_days: u32,
    ) -> Self {
        Self {
            id: id.into(),
            isbn: isbn.into(),
            user_id: user_id.into(),
            loaned_at_ms,
            due_at_ms: loaned_at_ms.saturating_add(u64::from(period_days) * MILLIS_PER_DAY),
            returned_at_ms: None,
            status: LoanStatus::Active,
        }
    }

    pub fn mark_returned(&mut self, now_ms: u64) {
        self.returned_at_ms = Some(now_ms);
        self.status = LoanStatus::Returned;
    }

    /// Status as of `now_ms`, without touching the stored status
    pub fn status_at(&self, now_ms: u64) -> LoanStatus {
        match self.status {
            LoanStatus::Active if now_ms > self.due_at_ms => LoanStatus::Overdue,
            status => status,
        }
    }

    /// Store the status as of `now_ms` and return it
    pub fn refresh_status(&mut self, now_ms: u64) -> LoanStatus {
        self.status = self.status_at(now_ms);
        self.status
    }

    pub fn is_returned(&self) -> bool {
        self.status == LoanStatus::Returned
    }

    /// Whole days left before the due date; 0 unless the loan is still active
    pub fn days_remaining_at(&self, now_ms: u64) -> u64 {
        match self.status_at(now_ms) {
            LoanStatus::Active => (self.due_at_ms - now_ms) / MILLIS_PER_DAY,
            LoanStatus::Overdue | LoanStatus::Returned => 0,
        }
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loan #{} | Book: {} | User: {} | Status: {:?}",
            self.id, self.isbn, self.user_id, self.status
        )
    }
}
