//! Catalog configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Database file used when no path is given.
pub const DEFAULT_DB_PATH: &str = "hipster_cookbooks.db";

/// Catalog configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
    /// Turn on `PRAGMA foreign_keys` for the connection.
    ///
    /// SQLite leaves foreign keys declared but unenforced unless this is set,
    /// so a loan may reference a cookbook id that does not exist.
    pub enforce_foreign_keys: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            enforce_foreign_keys: false,
        }
    }
}

impl CatalogConfig {
    /// Create a new config pointing at the given database file
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }

    pub fn with_foreign_keys(mut self, enforce: bool) -> Self {
        self.enforce_foreign_keys = enforce;
        self
    }
}
