//! The catalog handle: one open connection plus the log-and-fallback
//! operations used by the driver.
//!
//! Every operation here catches the storage error, logs it, and hands back a
//! fallback (`None`, `false`, an empty vector, or nothing) instead of failing.
//! Use [`crate::ops`] directly when the error itself is needed.

use std::io::{self, Write};

use rusqlite::Connection;
use tracing::{error, info};

use crate::config::CatalogConfig;
use crate::display::CookbookCard;
use crate::error::{CatalogError, Result};
use crate::models::{Cookbook, Loan, NewCookbook, NewLoan, Tag};
use crate::{ops, sqlite};

#[derive(Debug)]
pub struct Catalog {
    connection: Connection,
}

impl Catalog {
    /// Open (creating if absent) the database file named by the config.
    pub fn open(config: CatalogConfig) -> Result<Self> {
        let connection = Connection::open(&config.db_path)
            .map_err(|source| CatalogError::open(&config.db_path, source))?;
        info!(
            path = %config.db_path.display(),
            "Successfully connected to SQLite {}",
            rusqlite::version()
        );
        Self::with_connection(&config, connection)
    }

    /// Open a throwaway in-memory catalog.
    pub fn open_in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory()?;
        Self::with_connection(&CatalogConfig::new(":memory:"), connection)
    }

    fn with_connection(config: &CatalogConfig, connection: Connection) -> Result<Self> {
        if config.enforce_foreign_keys {
            connection.pragma_update(None, "foreign_keys", true)?;
        }
        Ok(Self { connection })
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Close the connection, reporting any failure to release it.
    pub fn close(self) -> Result<()> {
        self.connection.close().map_err(|(_, source)| CatalogError::from(source))?;
        info!("Database connection closed");
        Ok(())
    }

    /// Ensure the catalog tables exist. Failures are logged and the
    /// connection stays open.
    pub fn initialize_schema(&self) {
        match sqlite::initialize_schema(&self.connection) {
            Ok(()) => info!("Successfully created a database structure"),
            Err(e) => error!("Error creating table: {e}"),
        }
    }

    /// Add a cookbook to the shelf. Returns `None` when the insert failed.
    pub fn add_cookbook(&self, cookbook: &NewCookbook) -> Option<i64> {
        match ops::insert_cookbook(&self.connection, cookbook) {
            Ok(id) => {
                info!("Successfully curated cookbook with the id: {id}");
                Some(id)
            }
            Err(e) => {
                error!("Error adding to collection: {e}");
                None
            }
        }
    }

    /// Print every cookbook to stdout and return them.
    pub fn list_cookbooks(&self) -> Vec<Cookbook> {
        self.list_cookbooks_to(&mut io::stdout().lock())
    }

    /// Print every cookbook to `out` and return them. Empty on failure.
    pub fn list_cookbooks_to<W: Write>(&self, out: &mut W) -> Vec<Cookbook> {
        let books = match ops::get_all_cookbooks(&self.connection) {
            Ok(books) => books,
            Err(e) => {
                error!("Error retrieving collection: {e}");
                return Vec::new();
            }
        };
        for book in &books {
            if let Err(e) = writeln!(out, "{}", CookbookCard(book)) {
                error!("Error printing cookbook {}: {e}", book.id);
                break;
            }
        }
        books
    }

    /// Record who borrowed a cookbook and when.
    pub fn track_loan(&self, loan: &NewLoan) {
        match ops::insert_loan(&self.connection, loan) {
            Ok(_) => info!(
                "{} is currently borrowing cookbook ID: {}",
                loan.borrower_name, loan.cookbook_id
            ),
            Err(e) => error!("Error occurred: {e}"),
        }
    }

    /// Attach tags (gluten-free, organic, ...) to a cookbook.
    pub fn add_tags<S: AsRef<str>>(&self, cookbook_id: i64, tags: &[S]) -> bool {
        match ops::attach_tags(&self.connection, cookbook_id, tags) {
            Ok(()) => {
                info!("Successfully added tags to cookbook ID: {cookbook_id}");
                true
            }
            Err(e) => {
                error!("Error adding recipe tags: {e}");
                false
            }
        }
    }

    pub fn loans_for_cookbook(&self, cookbook_id: i64) -> Vec<Loan> {
        ops::get_loans_for_cookbook(&self.connection, cookbook_id).unwrap_or_else(|e| {
            error!("Error retrieving loans for cookbook {cookbook_id}: {e}");
            Vec::new()
        })
    }

    pub fn tags_for_cookbook(&self, cookbook_id: i64) -> Vec<Tag> {
        ops::get_tags_for_cookbook(&self.connection, cookbook_id).unwrap_or_else(|e| {
            error!("Error retrieving tags for cookbook {cookbook_id}: {e}");
            Vec::new()
        })
    }

    pub fn all_tags(&self) -> Vec<Tag> {
        ops::get_all_tags(&self.connection).unwrap_or_else(|e| {
            error!("Error retrieving tags: {e}");
            Vec::new()
        })
    }
}
