//! A small SQLite-backed catalog for cookbooks, loans and tags.
//!
//! # Intention
//!
//! - Keep a personal list of cookbooks in one local SQLite file.
//! - Track which cookbooks are lent out and to whom.
//! - Attach free-text tags to cookbooks (many-to-many).
//!
//! # Architectural Boundaries
//!
//! - [`ops`] holds the parameterized statements and propagates [`CatalogError`].
//! - [`Catalog`] owns the single connection and logs failures instead of
//!   returning them.
//! - Single writer, single thread, no async runtime.

pub mod catalog;
pub mod config;
pub mod display;
pub mod driver;
pub mod error;
pub mod logging;
pub mod models;
pub mod ops;
pub mod sample;
pub mod sqlite;

pub use catalog::Catalog;
pub use config::{CatalogConfig, DEFAULT_DB_PATH};
pub use error::{CatalogError, Result};
pub use models::{Cookbook, Loan, NewCookbook, NewLoan, Tag};
