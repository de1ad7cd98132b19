//! Library Module
//!
//! The library manager that coordinates the collections.
//!
//! ## Responsibilities
//! - Book catalog on a `SinglyLinkedList`
//! - User registry on a `DynamicArray`
//! - Recent-loan history on a `Stack`
//! - Pending loan requests on a `Queue`
//! - Direct lookup of active loans by id

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{
    now_millis, Book, BookField, Loan, LoanId, LoanRequest, LoanStatus, RequestOutcome, User,
    UserField, UserId,
};
use crate::collections::{DynamicArray, Queue, SinglyLinkedList, Stack};
use crate::config::Config;
use crate::error::{BiblioError, Result};

/// Counters reported by `Library::stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryStats {
    pub total_books: usize,
    pub available_books: usize,
    pub loaned_books: usize,
    pub total_users: usize,
    pub active_loans: usize,
    pub pending_requests: usize,
}

/// The library manager
///
/// ## Ownership
/// The library exclusively owns each collection. Callers receive shared
/// references to records; every mutation goes through a method here.
///
/// ## Concurrency
/// None. Operations run to completion on the caller's thread. Wrap the
/// library in a mutex to share it.
#[derive(Debug)]
pub struct Library {
    /// Library configuration
    config: Config,

    /// Book catalog, in registration order
    books: SinglyLinkedList<Book>,

    /// User registry, addressed by index
    users: DynamicArray<User>,

    /// Every loan issued, most recent on top
    history: Stack<Loan>,

    /// Checkouts waiting to be processed, oldest first
    requests: Queue<LoanRequest>,

    /// Loans not yet returned, keyed by loan id
    active_loans: HashMap<LoanId, Loan>,

    /// Sequence for `U###` ids
    next_user_seq: u32,

    /// Sequence for `P###` ids
    next_loan_seq: u32,
}

impl Library {
    /// Open a library with the given config
    ///
    /// On startup:
    /// 1. Validate the config
    /// 2. Create empty collections
    /// 3. Seed sample records if configured
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        let mut library = Self {
            users: DynamicArray::with_capacity(config.user_capacity),
            config,
            books: SinglyLinkedList::new(),
            history: Stack::new(),
            requests: Queue::new(),
            active_loans: HashMap::new(),
            next_user_seq: 1,
            next_loan_seq: 1,
        };

        if library.config.seed_sample_data {
            library.seed_sample_data()?;
        }

        tracing::info!(
            books = library.books.len(),
            users = library.users.len(),
            "library opened"
        );

        Ok(library)
    }

    // =========================================================================
    // Books
    // =========================================================================

    /// Add a book to the end of the catalog
    pub fn register_book(
        &mut self,
        isbn: &str,
        title: &str,
        author: &str,
        category: &str,
        year: i32,
    ) -> Result<()> {
        if self.book(isbn).is_some() {
            tracing::warn!(isbn, "rejected duplicate book");
            return Err(BiblioError::DuplicateIsbn(isbn.to_string()));
        }

        self.books
            .insert_back(Book::new(isbn, title, author, category, year, now_millis()));
        tracing::info!(isbn, title, "book registered");
        Ok(())
    }

    /// Books whose `field` contains `query`, ignoring case
    ///
    /// An empty query returns the whole catalog.
    pub fn search_books(&self, field: BookField, query: &str) -> Vec<&Book> {
        if query.is_empty() {
            return self.books.to_sequence();
        }

        let query_lower = query.to_lowercase();
        let found = self.books.find_all(|book| book.matches(field, &query_lower));
        tracing::debug!(?field, query, matches = found.len(), "book search");
        found
    }

    /// Look up a book by exact ISBN
    pub fn book(&self, isbn: &str) -> Option<&Book> {
        self.books.find_first(|book| book.isbn == isbn)
    }

    /// Every book, in catalog order
    pub fn books(&self) -> Vec<&Book> {
        self.books.to_sequence()
    }

    /// Remove a book from the catalog
    ///
    /// Returns `false` if no book has that ISBN.
    pub fn remove_book(&mut self, isbn: &str) -> bool {
        let removed = self.books.remove_first_matching(|book| book.isbn == isbn);
        if removed {
            tracing::info!(isbn, "book removed");
        }
        removed
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Register a user and return the new id
    ///
    /// Emails are unique across the registry.
    pub fn register_user(&mut self, name: &str, email: &str, phone: &str) -> Result<UserId> {
        if self.users.position(|user| user.email == email).is_some() {
            tracing::warn!(email, "rejected duplicate user");
            return Err(BiblioError::DuplicateEmail(email.to_string()));
        }

        let id = format!("U{:03}", self.next_user_seq);
        self.users
            .push(User::new(id.clone(), name, email, phone, now_millis()));
        self.next_user_seq += 1;

        tracing::info!(user_id = %id, name, "user registered");
        Ok(id)
    }

    /// Users whose `field` contains `query`, ignoring case
    ///
    /// An empty query returns the whole registry.
    pub fn search_users(&self, field: UserField, query: &str) -> Vec<&User> {
        if query.is_empty() {
            return self.users.to_sequence();
        }

        let query_lower = query.to_lowercase();
        let found = self.users.find_all(|user| user.matches(field, &query_lower));
        tracing::debug!(?field, query, matches = found.len(), "user search");
        found
    }

    /// Look up a user by exact id
    pub fn user(&self, user_id: &str) -> Option<&User> {
        let index = self.users.position(|user| user.id == user_id)?;
        self.users.get(index).ok()
    }

    /// Every user, in registration order
    pub fn users(&self) -> Vec<&User> {
        self.users.to_sequence()
    }

    // =========================================================================
    // Loans
    // =========================================================================

    /// Check a book out to a user and return the loan id
    ///
    /// Steps:
    /// 1. Book must exist and be available
    /// 2. User must exist
    /// 3. Mark book on loan, bump the user's counters
    /// 4. Push onto history, index as active
    pub fn checkout(&mut self, isbn: &str, user_id: &str) -> Result<LoanId> {
        self.checkout_at(isbn, user_id, now_millis())
            .inspect_err(|e| tracing::warn!(isbn, user_id, error = %e, "checkout refused"))
    }

    fn checkout_at(&mut self, isbn: &str, user_id: &str, now_ms: u64) -> Result<LoanId> {
        // Step 1: Book must be on the shelf
        let book = self
            .books
            .find_first_mut(|book| book.isbn == isbn)
            .ok_or_else(|| BiblioError::BookNotFound(isbn.to_string()))?;
        if !book.available {
            return Err(BiblioError::BookUnavailable(isbn.to_string()));
        }

        // Step 2: User must be registered
        let user_index = self
            .users
            .position(|user| user.id == user_id)
            .ok_or_else(|| BiblioError::UserNotFound(user_id.to_string()))?;

        let loan_id = format!("P{:03}", self.next_loan_seq);
        let loan = Loan::new(
            loan_id.clone(),
            isbn,
            user_id,
            now_ms,
            self.config.loan_period_days,
        );

        // Step 3: Update book and user records
        book.available = false;

        let mut user = self.users.get(user_index)?.clone();
        user.active_loans += 1;
        user.loan_history.push(loan_id.clone());
        self.users.set(user_index, user)?;

        // Step 4: Record the loan
        self.history.push(loan.clone());
        self.active_loans.insert(loan_id.clone(), loan);
        self.next_loan_seq += 1;

        tracing::info!(loan_id = %loan_id, isbn, user_id, "book checked out");
        Ok(loan_id)
    }

    /// Return the book of an active loan
    pub fn return_loan(&mut self, loan_id: &str) -> Result<()> {
        let Some(mut loan) = self.active_loans.remove(loan_id) else {
            tracing::warn!(loan_id, "return of unknown loan");
            return Err(BiblioError::LoanNotFound(loan_id.to_string()));
        };

        loan.mark_returned(now_millis());

        if let Some(book) = self.books.find_first_mut(|book| book.isbn == loan.isbn) {
            book.available = true;
        }

        if let Some(index) = self.users.position(|user| user.id == loan.user_id) {
            let mut user = self.users.get(index)?.clone();
            user.active_loans = user.active_loans.saturating_sub(1);
            self.users.set(index, user)?;
        }

        if let Some(entry) = self.history.iter_mut().find(|entry| entry.id == loan.id) {
            *entry = loan.clone();
        }

        tracing::info!(loan_id, isbn = %loan.isbn, "book returned");
        Ok(())
    }

    /// Look up an active loan by id
    pub fn active_loan(&self, loan_id: &str) -> Option<&Loan> {
        self.active_loans.get(loan_id)
    }

    /// Every active loan, ordered by id
    pub fn active_loans(&self) -> Vec<&Loan> {
        let mut loans: Vec<&Loan> = self.active_loans.values().collect();
        loans.sort_by(|a, b| a.id.len().cmp(&b.id.len()).then_with(|| a.id.cmp(&b.id)));
        loans
    }

    /// Active loans held by one user, ordered by id
    pub fn loans_for_user(&self, user_id: &str) -> Vec<&Loan> {
        self.active_loans()
            .into_iter()
            .filter(|loan| loan.user_id == user_id)
            .collect()
    }

    /// Most recent loans first
    ///
    /// `None` uses the configured `history_limit`.
    pub fn loan_history(&self, limit: Option<usize>) -> Vec<&Loan> {
        let limit = limit.unwrap_or(self.config.history_limit);
        self.history.iter().take(limit).collect()
    }

    /// Store the status of every outstanding loan as of `now_ms`
    ///
    /// Returns how many are overdue.
    pub fn refresh_overdue(&mut self, now_ms: u64) -> usize {
        for entry in self.history.iter_mut().filter(|entry| !entry.is_returned()) {
            entry.refresh_status(now_ms);
        }

        self.active_loans
            .values_mut()
            .map(|loan| loan.refresh_status(now_ms))
            .filter(|status| *status == LoanStatus::Overdue)
            .count()
    }

    // =========================================================================
    // Requests
    // =========================================================================

    /// Queue a checkout request and return the queue length
    pub fn submit_request(&mut self, isbn: &str, user_id: &str) -> usize {
        self.requests
            .enqueue(LoanRequest::new(isbn, user_id, now_millis()));
        tracing::debug!(isbn, user_id, pending = self.requests.len(), "request queued");
        self.requests.len()
    }

    /// Take the oldest request off the queue and attempt its checkout
    ///
    /// Returns `None` when no request is pending.
    pub fn process_next_request(&mut self) -> Option<RequestOutcome> {
        let request = self.requests.dequeue()?;
        let loan = self.checkout(&request.isbn, &request.user_id);
        Some(RequestOutcome { request, loan })
    }

    /// Pending requests, oldest first
    pub fn pending_requests(&self) -> Vec<&LoanRequest> {
        self.requests.to_sequence()
    }

    // =========================================================================
    // Reporting
    // =========================================================================

    pub fn stats(&self) -> LibraryStats {
        let total_books = self.books.len();
        let available_books = self.books.iter().filter(|book| book.available).count();

        LibraryStats {
            total_books,
            available_books,
            loaned_books: total_books - available_books,
            total_users: self.users.len(),
            active_loans: self.active_loans.len(),
            pending_requests: self.requests.len(),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Allocated slots in the user registry
    pub fn user_capacity(&self) -> usize {
        self.users.capacity()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn seed_sample_data(&mut self) -> Result<()> {
        const BOOKS: [(&str, &str, &str, &str, i32); 5] = [
            ("978-84-376-0494-7", "Cien años de soledad", "Gabriel García Márquez", "Magical Realism", 1967),
            ("978-84-663-0016-6", "Don Quijote de la Mancha", "Miguel de Cervantes", "Classic", 1605),
            ("978-84-376-0485-5", "1984", "George Orwell", "Dystopia", 1949),
            ("978-84-206-6764-4", "El principito", "Antoine de Saint-Exupéry", "Philosophy", 1943),
            ("978-84-663-2946-4", "Crónica de una muerte anunciada", "Gabriel García Márquez", "Magical Realism", 1981),
        ];
        const USERS: [(&str, &str, &str); 3] = [
            ("Juan Pérez", "juan.perez@email.com", "123-456-7890"),
            ("María García", "maria.garcia@email.com", "098-765-4321"),
            ("Carlos López", "carlos.lopez@email.com", "555-123-4567"),
        ];

        for (isbn, title, author, category, year) in BOOKS {
            self.register_book(isbn, title, author, category, year)?;
        }
        for (name, email, phone) in USERS {
            self.register_user(name, email, phone)?;
        }
        Ok(())
    }
}
