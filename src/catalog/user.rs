//! User record

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{contains_ignore_case, LoanId};

/// Registry identifier, formatted `U001`, `U002`, ...
pub type UserId = String;

/// A registered library patron
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Unique across the registry
    pub email: String,
    pub phone: String,
    pub registered_at_ms: u64,
    /// Loans currently out
    pub active_loans: u32,
    /// Every loan ever issued to this user, oldest first
    pub loan_history: Vec<LoanId>,
}

impl User {
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        registered_at_ms: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            registered_at_ms,
            active_loans: 0,
            loan_history: Vec::new(),
        }
    }

    /// Case-insensitive substring match on one field
    ///
    /// `query_lower` must already be lowercase.
    pub fn matches(&self, field: UserField, query_lower: &str) -> bool {
        let value = match field {
            UserField::Name => &self.name,
            UserField::Email => &self.email,
            UserField::Id => &self.id,
        };
        contains_ignore_case(value, query_lower)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | {} | {} | Active loans: {}",
            self.id, self.name, self.email, self.active_loans
        )
    }
}

/// Searchable user fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserField {
    Name,
    Email,
    Id,
}
