use crate::errors::AppResult;
use rusqlite::Connection;

/// Key/value blob store: one JSON document per key.
fn ensure_kv_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
}

/// Internal audit trail.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

/// Initialize the database schema. Safe to call on every open.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    ensure_kv_table(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}
