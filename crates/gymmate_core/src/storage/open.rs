//! Connection bootstrap for slot storage.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Trigger schema migrations before returning a usable store.
//!
//! # Invariants
//! - Returned stores have migrations fully applied.

use super::migrations::apply_migrations;
use super::slot::SqliteSlotStore;
use super::StorageResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::Instant;

/// Opens a file-backed slot store and applies all pending migrations.
///
/// # Side effects
/// - Emits `storage_open` logging events with duration and status.
pub fn open_slots(path: impl AsRef<Path>) -> StorageResult<SqliteSlotStore> {
    let started_at = Instant::now();
    info!("event=storage_open module=storage status=start mode=file");

    let conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=storage_open module=storage status=error mode=file duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    bootstrap(conn, "file", started_at)
}

/// Opens an in-memory slot store and applies all pending migrations.
///
/// Used by tests and the smoke CLI; state is lost when the store is dropped.
pub fn open_slots_in_memory() -> StorageResult<SqliteSlotStore> {
    let started_at = Instant::now();
    info!("event=storage_open module=storage status=start mode=memory");

    let conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=storage_open module=storage status=error mode=memory duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    bootstrap(conn, "memory", started_at)
}

fn bootstrap(
    mut conn: Connection,
    mode: &'static str,
    started_at: Instant,
) -> StorageResult<SqliteSlotStore> {
    match apply_migrations(&mut conn) {
        Ok(()) => {
            info!(
                "event=storage_open module=storage status=ok mode={} duration_ms={}",
                mode,
                started_at.elapsed().as_millis()
            );
            Ok(SqliteSlotStore::new(conn))
        }
        Err(err) => {
            error!(
                "event=storage_open module=storage status=error mode={} duration_ms={} error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}
