use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// The schema is a single table, created on first start.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            text       TEXT    NOT NULL,
            added_by   TEXT    NOT NULL,
            created_at TEXT    NOT NULL,
            done       INTEGER NOT NULL DEFAULT 0,
            done_by    TEXT,
            done_at    TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_items_done_created
            ON items(done, created_at);
        "#,
    )?;
    Ok(())
}

/// True if the `items` table exists.
pub fn is_initialized(conn: &Connection) -> AppResult<bool> {
    let mut stmt =
        conn.prepare("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'items'")?;
    Ok(stmt.exists([])?)
}
