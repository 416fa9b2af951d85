//! SQLite-backed key-value store.
//!
//! # Invariants
//! - Only accepts connections whose migrations are fully applied.
//! - `set` is an upsert; one row per key.

use super::{KeyValueStore, PersistError, PersistResult};
use crate::db::migrations::{latest_version, schema_version};
use rusqlite::{params, Connection, OptionalExtension};

const KV_TABLE: &str = "kv_entries";

pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Wraps a connection opened through `db::open_db*`.
    ///
    /// # Errors
    /// - `Storage` when the schema version is behind or the table is missing.
    pub fn try_new(conn: &'conn Connection) -> PersistResult<Self> {
        let actual = schema_version(conn)?;
        let expected = latest_version();
        if actual < expected {
            return Err(PersistError::Storage(format!(
                "connection schema version {actual} is behind required {expected}; open it via db::open_db"
            )));
        }

        let has_table: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
            [KV_TABLE],
            |row| row.get(0),
        )?;
        if !has_table {
            return Err(PersistError::Storage(format!(
                "required table `{KV_TABLE}` is missing"
            )));
        }

        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get(&self, key: &str) -> PersistResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> PersistResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}
