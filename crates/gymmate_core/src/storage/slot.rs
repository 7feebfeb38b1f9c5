//! Key-value slot access over the migrated `slots` table.
//!
//! # Responsibility
//! - Provide the minimal get/set contract the persistence adapter needs.
//! - Keep SQL details inside the storage boundary.
//!
//! # Invariants
//! - `set` overwrites the whole slot value in one statement; readers never
//!   observe a partial write.

use crate::storage::StorageResult;
use rusqlite::{params, Connection};

/// Durable key-value facility consumed by the persistence adapter.
///
/// The trait seam exists so the booking store can run against alternative
/// backends (and so tests can inject failing ones).
pub trait SlotStore {
    /// Reads the value stored under `key`, or `None` when the slot is absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    /// Overwrites the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// SQLite-backed slot store.
pub struct SqliteSlotStore {
    conn: Connection,
}

impl SqliteSlotStore {
    /// Wraps a connection whose migrations have already been applied.
    ///
    /// Use `open_slots` / `open_slots_in_memory` instead of calling this
    /// with a raw connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl SlotStore for SqliteSlotStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM slots WHERE key = ?1;")?;

        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }

        Ok(None)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;

        Ok(())
    }
}
