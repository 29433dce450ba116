//! Persistence layer for the worklogger application.
//!
//! The whole work history is stored as a single JSON document under a fixed
//! key, so the database is used as a plain key-value store:
//!
//! ```text
//! kv
//! ┌──────────────────┬──────────────────────────────┐
//! │ key TEXT (PK)    │ value TEXT                   │
//! ├──────────────────┼──────────────────────────────┤
//! │ worklogger_logs  │ [{"id":"…","startTime":…}]   │
//! └──────────────────┴──────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worklogger::db::kv::{KeyValueStore, SqliteStore};
//!
//! let mut store = SqliteStore::new()?;
//! store.set("greeting", "hello")?;
//! assert_eq!(store.get("greeting")?.as_deref(), Some("hello"));
//! # Ok::<(), anyhow::Error>(())
//! ```

/// SQLite connection management.
pub mod db;

/// Key-value storage trait with SQLite and in-memory implementations.
pub mod kv;
