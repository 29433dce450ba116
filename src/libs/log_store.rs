//! The ordered work history and its persistence.
//!
//! [`LogStore`] owns the in-memory collection of [`WorkLog`]s and a
//! [`KeyValueStore`] it persists to. The collection is kept most-recent-first
//! and written as one JSON array under [`STORAGE_KEY`] after every change.
//!
//! ## Loading
//!
//! A missing key yields an empty history. A payload that cannot be parsed is
//! reported and ignored, leaving the history empty; it is replaced on the
//! next save. Failures of the store itself are returned to the caller.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use worklogger::db::kv::MemoryStore;
//! use worklogger::libs::log_store::LogStore;
//! use worklogger::libs::work_log::{Tag, WorkLog};
//!
//! let mut store = LogStore::load(MemoryStore::new())?;
//! let end = Utc::now();
//! let log = WorkLog::new(end - Duration::minutes(30), end, 1_800_000, "Fixed bug", vec![Tag::Development]);
//! store.append(log)?;
//! assert_eq!(store.len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::messages::Message;
use super::work_log::WorkLog;
use crate::db::kv::KeyValueStore;
use crate::msg_error;
use anyhow::Result;

/// Key the whole collection is stored under.
pub const STORAGE_KEY: &str = "worklogger_logs";

pub struct LogStore<S: KeyValueStore> {
    store: S,
    logs: Vec<WorkLog>,
}

impl<S: KeyValueStore> LogStore<S> {
    /// Reads the persisted history from `store`.
    pub fn load(store: S) -> Result<Self> {
        let logs = match store.get(STORAGE_KEY)? {
            None => Vec::new(),
            Some(payload) => match serde_json::from_str::<Vec<WorkLog>>(&payload) {
                Ok(logs) => logs,
                Err(e) => {
                    msg_error!(Message::StoredLogsUnreadable(e.to_string()));
                    Vec::new()
                }
            },
        };

        tracing::debug!(count = logs.len(), "work logs loaded");
        Ok(Self { store, logs })
    }

    /// Logs in storage order, most recent first.
    pub fn logs(&self) -> &[WorkLog] {
        &self.logs
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&WorkLog> {
        self.logs.iter().find(|log| log.id == id)
    }

    /// Puts `log` at the head of the history and saves. The history is left
    /// unchanged when the save fails.
    pub fn append(&mut self, log: WorkLog) -> Result<()> {
        tracing::debug!(id = %log.id, duration_ms = log.duration, "appending work log");
        self.logs.insert(0, log);

        if let Err(e) = self.save() {
            self.logs.remove(0);
            return Err(e);
        }
        Ok(())
    }

    /// Removes the log with `id` and saves. Returns `false`, without saving,
    /// when no such log exists. The log is put back when the save fails.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let Some(position) = self.logs.iter().position(|log| log.id == id) else {
            return Ok(false);
        };
        let removed = self.logs.remove(position);

        if let Err(e) = self.save() {
            self.logs.insert(position, removed);
            return Err(e);
        }

        tracing::debug!(id, "deleted work log");
        Ok(true)
    }

    /// Writes the full collection to the store.
    pub fn save(&mut self) -> Result<()> {
        let payload = serde_json::to_string(&self.logs)?;
        self.store.set(STORAGE_KEY, &payload)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
