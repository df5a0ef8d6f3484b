//! Cookbook insert and listing

use rusqlite::{params, Connection};

use crate::error::{require_text, Result};
use crate::models::{Cookbook, NewCookbook};

/// Insert a cookbook and return its generated id
pub fn insert_cookbook(conn: &Connection, cookbook: &NewCookbook) -> Result<i64> {
    require_text(&cookbook.title, "title", "cookbook")?;
    require_text(&cookbook.author, "author", "cookbook")?;

    conn.execute(
        "INSERT INTO cookbooks (title, author, year_published, aesthetic_rating, instagram_worthy, cover_color) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            cookbook.title,
            cookbook.author,
            cookbook.year_published,
            cookbook.aesthetic_rating,
            cookbook.instagram_worthy,
            cookbook.cover_color,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Get all cookbooks in storage scan order
pub fn get_all_cookbooks(conn: &Connection) -> Result<Vec<Cookbook>> {
    let mut stmt = conn.prepare(&format!("SELECT {} FROM cookbooks", Cookbook::COLUMNS))?;
    let books = stmt
        .query_map([], Cookbook::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(books)
}
