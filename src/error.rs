//! Error types for catalog operations.
//!
//! Library functions return [`CatalogError`]; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The underlying SQLite call failed
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// A required field was empty
    #[error("Missing required field '{field}' in {context}")]
    MissingField {
        field: &'static str,
        context: &'static str,
    },

    /// Tag names must contain at least one non-whitespace character
    #[error("Invalid tag name {name:?}")]
    InvalidTag { name: String },

    /// The database could not be opened at the configured path
    #[error("Cannot open catalog at {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub fn missing_field(field: &'static str, context: &'static str) -> Self {
        Self::MissingField { field, context }
    }

    pub fn invalid_tag(name: impl Into<String>) -> Self {
        Self::InvalidTag { name: name.into() }
    }

    pub fn open(path: impl Into<PathBuf>, source: rusqlite::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}

/// Reject empty or whitespace-only values for required text columns.
pub(crate) fn require_text(
    value: &str,
    field: &'static str,
    context: &'static str,
) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::missing_field(field, context));
    }
    Ok(())
}
