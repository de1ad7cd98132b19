//! Pending loan requests

use serde::{Deserialize, Serialize};

use crate::error::BiblioError;

use super::{LoanId, UserId};

/// A checkout waiting in the request queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub isbn: String,
    pub user_id: UserId,
    pub requested_at_ms: u64,
}

impl LoanRequest {
    pub fn new(isbn: impl Into<String>, user_id: impl Into<UserId>, requested_at_ms: u64) -> Self {
        Self {
            isbn: isbn.into(),
            user_id: user_id.into(),
            requested_at_ms,
        }
    }
}

/// Result of processing the oldest pending request
#[derive(Debug)]
pub struct RequestOutcome {
    /// The request taken off the queue
    pub request: LoanRequest,

    /// The new loan, or why the checkout was refused
    pub loan: Result<LoanId, BiblioError>,
}

impl RequestOutcome {
    pub fn succeeded(&self) -> bool {
        self.loan.is_ok()
    }
}
