// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Persistent preferences backed by SQLite.
//
// The shell persists exactly two string-keyed entries: the cold-start open
// counter and a historical contacts-permission flag. The table is a plain
// key-value map so future flags need no migration.

use chrono::Utc;
use rusqlite::{Connection, params};
use tracing::{debug, info, instrument};

use kmp_core::error::{KmpError, Result};

/// Open counter key. Incremented by exactly one on every cold start.
pub const OPEN_COUNT_KEY: &str = "@numberOfOpenings";

/// Historical "never ask again" flag for the contacts rationale. The current
/// shell reads it but no code path writes it any more.
pub const CONTACTS_PERMISSION_KEY: &str = "contactsPermission";

/// SQLite schema for the prefs table.
const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS prefs (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
"#;

/// Persistent key-value preferences store.
///
/// All methods are synchronous because `rusqlite` does not support async
/// natively. In an async context, wrap calls in `tokio::task::spawn_blocking`.
pub struct PrefsStore {
    /// The open SQLite connection.
    conn: Connection,
}

impl PrefsStore {
    /// Open (or create) the preferences database at the given path.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .map_err(|e| KmpError::Store(format!("open: {e}")))?;

        // WAL survives unclean shutdowns more gracefully on mobile devices.
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| KmpError::Store(format!("WAL pragma: {e}")))?;

        conn.execute_batch(CREATE_TABLE_SQL)
            .map_err(|e| KmpError::Store(format!("create table: {e}")))?;

        info!("preferences database opened");
        Ok(Self { conn })
    }

    /// Open an in-memory database (useful for tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| KmpError::Store(format!("open in-memory: {e}")))?;

        conn.execute_batch(CREATE_TABLE_SQL)
            .map_err(|e| KmpError::Store(format!("create table: {e}")))?;

        debug!("in-memory preferences database opened");
        Ok(Self { conn })
    }

    /// Read a value by key. Returns `None` if the key was never written.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM prefs WHERE key = ?1")
            .map_err(|e| KmpError::Store(format!("prepare get: {e}")))?;

        let mut rows = stmt
            .query_map(params![key], |row| row.get::<_, String>(0))
            .map_err(|e| KmpError::Store(format!("query get: {e}")))?;

        match rows.next() {
            Some(Ok(value)) => Ok(Some(value)),
            Some(Err(e)) => Err(KmpError::Store(format!("row parse: {e}"))),
            None => Ok(None),
        }
    }

    /// Write a value, replacing any previous one.
    #[instrument(skip(self, value))]
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        self.conn
            .execute(
                "INSERT INTO prefs (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
                params![key, value, now],
            )
            .map_err(|e| KmpError::Store(format!("set: {e}")))?;

        debug!(key, "preference written");
        Ok(())
    }

    /// Current open counter. A missing or unparseable value reads as zero.
    pub fn open_count(&self) -> u32 {
        match self.get(OPEN_COUNT_KEY) {
            Ok(Some(value)) => value.parse().unwrap_or(0),
            _ => 0,
        }
    }

    /// Increment the open counter by exactly one and return the new value.
    ///
    /// Called once per cold start. The read-then-write is not guarded against
    /// a concurrent increment in another process; the shell is single-process.
    #[instrument(skip(self))]
    pub fn record_opening(&self) -> Result<u32> {
        let next = self.open_count() + 1;
        self.set(OPEN_COUNT_KEY, &next.to_string())?;
        info!(openings = next, "cold start recorded");
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_missing_key_returns_none() {
        let store = PrefsStore::open_in_memory().expect("open in-memory db");
        assert!(store.get("no-such-key").expect("get").is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = PrefsStore::open_in_memory().expect("open in-memory db");
        store.set("alpha", "1").expect("set");
        assert_eq!(store.get("alpha").expect("get").as_deref(), Some("1"));

        store.set("alpha", "2").expect("overwrite");
        assert_eq!(store.get("alpha").expect("get").as_deref(), Some("2"));
    }

    #[test]
    fn open_count_starts_at_zero() {
        let store = PrefsStore::open_in_memory().expect("open in-memory db");
        assert_eq!(store.open_count(), 0);
    }

    #[test]
    fn record_opening_increments_by_one() {
        let store = PrefsStore::open_in_memory().expect("open in-memory db");
        assert_eq!(store.record_opening().expect("first"), 1);
        assert_eq!(store.record_opening().expect("second"), 2);
        assert_eq!(store.open_count(), 2);
    }

    #[test]
    fn garbage_counter_reads_as_zero() {
        let store = PrefsStore::open_in_memory().expect("open in-memory db");
        store.set(OPEN_COUNT_KEY, "not-a-number").expect("set");
        assert_eq!(store.open_count(), 0);
        // And recovers on the next opening.
        assert_eq!(store.record_opening().expect("record"), 1);
    }

    #[test]
    fn persists_across_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.db");

        {
            let store = PrefsStore::open(&path).expect("open");
            store.record_opening().expect("record");
        }

        let store = PrefsStore::open(&path).expect("reopen");
        assert_eq!(store.open_count(), 1);
    }
}
