//! Configuration for Biblio
//!
//! Centralized configuration with sensible defaults.

use crate::collections::DEFAULT_CAPACITY;
use crate::error::{BiblioError, Result};

/// Main configuration for a Library instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Registry Configuration
    // -------------------------------------------------------------------------
    /// Initial capacity of the user registry's dynamic array
    pub user_capacity: usize,

    // -------------------------------------------------------------------------
    // Loan Configuration
    // -------------------------------------------------------------------------
    /// Days until a new loan falls due
    pub loan_period_days: u32,

    /// Default number of entries returned by `Library::loan_history`
    pub history_limit: usize,

    // -------------------------------------------------------------------------
    // Startup Configuration
    // -------------------------------------------------------------------------
    /// Populate the catalog and registry with sample records on open
    pub seed_sample_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_capacity: DEFAULT_CAPACITY,
            loan_period_days: 14,
            history_limit: 10,
            seed_sample_data: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject settings the library cannot operate with
    pub fn validate(&self) -> Result<()> {
        if self.loan_period_days == 0 {
            return Err(BiblioError::Config(
                "loan_period_days must be at least 1".to_string(),
            ));
        }
        if self.history_limit == 0 {
            return Err(BiblioError::Config(
                "history_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the initial capacity of the user registry
    pub fn user_capacity(mut self, capacity: usize) -> Self {
        self.config.user_capacity = capacity;
        self
    }

    /// Set the loan period (in days)
    pub fn loan_period_days(mut self, days: u32) -> Self {
        self.config.loan_period_days = days;
        self
    }

    /// Set the default loan history limit
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Enable or disable sample data on open
    pub fn seed_sample_data(mut self, seed: bool) -> Self {
        self.config.seed_sample_data = seed;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
