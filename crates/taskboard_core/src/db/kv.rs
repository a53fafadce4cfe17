//! Key-value persistence port and its SQLite implementation.
//!
//! # Responsibility
//! - Define the `StateStore` contract repositories persist through.
//! - Keep SQL details inside the storage boundary.
//!
//! # Invariants
//! - Keys are opaque strings; values are full JSON snapshots.
//! - `write` replaces the previous value for a key atomically.

use super::DbResult;
use rusqlite::{params, Connection, OptionalExtension};

/// Storage keys shared by the identity and board repositories.
///
/// These four keys and their JSON value shapes are the only wire
/// format; reload compatibility depends on them staying stable.
pub mod keys {
    /// All registered users, passwords included.
    pub const USERS: &str = "users";
    /// The active session, password stripped. Absent when logged out.
    pub const CURRENT_USER: &str = "currentUser";
    /// All projects across all users.
    pub const PROJECTS: &str = "projects";
    /// All tasks across all projects.
    pub const TASKS: &str = "tasks";
}

/// Injected persistence port: read-all/write-all per storage key.
pub trait StateStore {
    /// Returns the stored value for `key`, or `None` when absent.
    fn read(&self, key: &str) -> DbResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> DbResult<()>;
    /// Removes `key` if present. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> DbResult<()>;
}

/// SQLite-backed state store over the `kv_store` table.
#[derive(Debug)]
pub struct SqliteStateStore {
    conn: Connection,
}

impl SqliteStateStore {
    /// Wraps a migrated/ready connection. Use `open_store` /
    /// `open_store_in_memory` instead of calling this directly.
    pub(crate) fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl StateStore for SqliteStateStore {
    fn read(&self, key: &str) -> DbResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> DbResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1;", [key])?;
        Ok(())
    }
}
