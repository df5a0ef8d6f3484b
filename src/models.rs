//! Catalog models. These map directly to the SQLite tables.

use chrono::NaiveDate;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// Cookbook fields in insert order: title, author, year, rating, instagram flag, cover color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCookbook {
    pub title: String,
    pub author: String,
    pub year_published: Option<i64>,
    /// Display-only, rendered as repeated sparkles
    pub aesthetic_rating: Option<i64>,
    pub instagram_worthy: Option<bool>,
    pub cover_color: Option<String>,
}

impl NewCookbook {
    /// Build a fully populated cookbook from the fixed-order tuple.
    pub fn new(
        title: &str,
        author: &str,
        year_published: i64,
        aesthetic_rating: i64,
        instagram_worthy: bool,
        cover_color: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year_published: Some(year_published),
            aesthetic_rating: Some(aesthetic_rating),
            instagram_worthy: Some(instagram_worthy),
            cover_color: Some(cover_color.to_string()),
        }
    }

    /// Only the required fields; everything else stays NULL.
    pub fn minimal(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year_published: None,
            aesthetic_rating: None,
            instagram_worthy: None,
            cover_color: None,
        }
    }
}

/// Cookbook stored in the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookbook {
    /// Unique identifier (auto-increment)
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Decoded as plain SQLite integers so rows written by other tools
    /// with out-of-range values still load.
    pub year_published: Option<i64>,
    pub aesthetic_rating: Option<i64>,
    pub instagram_worthy: Option<bool>,
    pub cover_color: Option<String>,
}

impl Cookbook {
    pub(crate) const COLUMNS: &'static str =
        "id, title, author, year_published, aesthetic_rating, instagram_worthy, cover_color";

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            author: row.get(2)?,
            year_published: row.get(3)?,
            aesthetic_rating: row.get(4)?,
            instagram_worthy: row.get(5)?,
            cover_color: row.get(6)?,
        })
    }
}

/// A borrowing event to record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLoan {
    pub cookbook_id: i64,
    pub borrower_name: String,
    pub date_borrowed: NaiveDate,
    /// `None` while the book is still out
    pub return_date: Option<NaiveDate>,
}

impl NewLoan {
    pub fn new(cookbook_id: i64, borrower_name: &str, date_borrowed: NaiveDate) -> Self {
        Self {
            cookbook_id,
            borrower_name: borrower_name.to_string(),
            date_borrowed,
            return_date: None,
        }
    }

    pub fn returned_on(mut self, date: NaiveDate) -> Self {
        self.return_date = Some(date);
        self
    }
}

/// Row from `borrowed_books`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub id: i64,
    pub cookbook_id: i64,
    pub borrower_name: String,
    pub date_borrowed: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl Loan {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            cookbook_id: row.get(1)?,
            borrower_name: row.get(2)?,
            date_borrowed: row.get(3)?,
            return_date: row.get(4)?,
        })
    }

    pub fn is_out(&self) -> bool {
        self.return_date.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

impl Tag {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    }
}
