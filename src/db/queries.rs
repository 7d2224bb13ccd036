use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::item::{Item, from_db_timestamp, to_db_timestamp};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// All items: open ones first, then completed ones, each group oldest first.
pub fn load_items(pool: &mut DbPool) -> AppResult<Vec<Item>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM items
         ORDER BY done ASC, created_at ASC, id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<Item> {
    let created_str: String = row.get("created_at")?;
    let created_at = from_db_timestamp(&created_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(created_str.clone())),
        )
    })?;

    let done_at = match row.get::<_, Option<String>>("done_at")? {
        Some(s) => Some(from_db_timestamp(&s).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTimestamp(s.clone())),
            )
        })?),
        None => None,
    };

    Ok(Item {
        id: row.get("id")?,
        text: row.get("text")?,
        added_by: row.get("added_by")?,
        created_at,
        done: row.get::<_, i32>("done")? == 1,
        done_by: row.get("done_by")?,
        done_at,
    })
}

/// Insert a new item and return its assigned id.
pub fn insert_item(conn: &Connection, item: &Item) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO items (text, added_by, created_at, done, done_by, done_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            item.text,
            item.added_by,
            to_db_timestamp(&item.created_at),
            if item.done { 1 } else { 0 },
            item.done_by,
            item.done_at.as_ref().map(to_db_timestamp),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_item(conn: &Connection, id: i64) -> AppResult<Option<Item>> {
    let item = conn
        .query_row("SELECT * FROM items WHERE id = ?1", [id], map_row)
        .optional()?;
    Ok(item)
}

/// Persist the done state of an item (the only mutable part of a row).
pub fn update_done_state(conn: &Connection, item: &Item) -> AppResult<()> {
    conn.execute(
        "UPDATE items
         SET done = ?1, done_by = ?2, done_at = ?3
         WHERE id = ?4",
        params![
            if item.done { 1 } else { 0 },
            item.done_by,
            item.done_at.as_ref().map(to_db_timestamp),
            item.id,
        ],
    )?;
    Ok(())
}

/// Delete every completed item; returns how many rows went away.
pub fn delete_done_items(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM items WHERE done = 1", [])?;
    Ok(n)
}

pub fn count_items(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))?;
    Ok(n)
}
