//! Book record

use std::fmt;

use serde::{Deserialize, Serialize};

use super::contains_ignore_case;

/// A book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique ISBN
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub category: String,
    /// Year of publication
    pub year: i32,
    /// False while the book is on loan
    pub available: bool,
    /// When the book entered the catalog (unix millis)
    pub registered_at_ms: u64,
}

impl Book {
    /// Create an available book
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        year: i32,
        registered_at_ms: u64,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            category: category.into(),
            year,
            available: true,
            registered_at_ms,
        }
    }

    /// Case-insensitive substring match on one field
    ///
    /// `query_lower` must already be lowercase.
    pub fn matches(&self, field: BookField, query_lower: &str) -> bool {
        let value = match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Category => &self.category,
            BookField::Isbn => &self.isbn,
        };
        contains_ignore_case(value, query_lower)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.available { "Available" } else { "On loan" };
        write!(
            f,
            "ISBN: {} | {} by {} ({}) - {}",
            self.isbn, self.title, self.author, self.year, state
        )
    }
}

/// Searchable book fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookField {
    Title,
    Author,
    Category,
    Isbn,
}
