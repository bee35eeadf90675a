//! Flat key/value persistence.
//!
//! Values are JSON documents stored verbatim under a string key; reads
//! never fail on bad JSON, they come back as `None` like a missing key after
//! the raw text is copied to `<key>.bak`.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub fn get_raw(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;
    Ok(value)
}

pub fn backup_key(key: &str) -> String {
    format!("{key}.bak")
}

/// Read and decode the value stored under `key`.
pub fn get_item<T: DeserializeOwned>(conn: &Connection, key: &str) -> AppResult<Option<T>> {
    let Some(raw) = get_raw(conn, key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(v) => Ok(Some(v)),
        Err(e) => {
            let bak = backup_key(key);
            set_raw(conn, &bak, &raw)?;
            warning(format!(
                "Error parsing stored value for '{key}' (copied to '{bak}'): {e}"
            ));
            Ok(None)
        }
    }
}

pub fn set_raw(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

/// Encode `value` as JSON and overwrite whatever is stored under `key`.
pub fn set_item<T: Serialize + ?Sized>(conn: &Connection, key: &str, value: &T) -> AppResult<()> {
    let json = serde_json::to_string(value)?;
    set_raw(conn, key, &json)
}

pub fn remove_item(conn: &Connection, key: &str) -> AppResult<()> {
    conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
    Ok(())
}
