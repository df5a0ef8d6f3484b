//! Tag upserts and the cookbook/tag association

use rusqlite::{params, Connection};

use crate::error::{CatalogError, Result};
use crate::models::Tag;

/// Attach tags to a cookbook, creating any tag names that do not exist yet.
///
/// Runs in a single transaction: either every tag and association is written
/// or none are. Already-attached pairs and repeated names are ignored.
pub fn attach_tags<S: AsRef<str>>(conn: &Connection, cookbook_id: i64, tags: &[S]) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    {
        let mut upsert_tag = tx.prepare_cached("INSERT OR IGNORE INTO tags (name) VALUES (?1)")?;
        let mut tag_id = tx.prepare_cached("SELECT id FROM tags WHERE name = ?1")?;
        let mut link = tx.prepare_cached(
            "INSERT OR IGNORE INTO cookbook_tags (cookbook_id, tag_id) VALUES (?1, ?2)",
        )?;

        for name in tags {
            let name = name.as_ref();
            if name.trim().is_empty() {
                return Err(CatalogError::invalid_tag(name));
            }
            upsert_tag.execute([name])?;
            let id: i64 = tag_id.query_row([name], |row| row.get(0))?;
            link.execute(params![cookbook_id, id])?;
        }
    }
    tx.commit()?;
    Ok(())
}

/// Get the tags attached to a cookbook, sorted by name
pub fn get_tags_for_cookbook(conn: &Connection, cookbook_id: i64) -> Result<Vec<Tag>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT t.id, t.name FROM tags t
        INNER JOIN cookbook_tags ct ON t.id = ct.tag_id
        WHERE ct.cookbook_id = ?1
        ORDER BY t.name
        "#,
    )?;
    let tags = stmt
        .query_map([cookbook_id], Tag::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(tags)
}

/// Get every known tag, sorted by name
pub fn get_all_tags(conn: &Connection) -> Result<Vec<Tag>> {
    let mut stmt = conn.prepare("SELECT id, name FROM tags ORDER BY name")?;
    let tags = stmt
        .query_map([], Tag::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(tags)
}
