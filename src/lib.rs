//! # Worklogger - stopwatch and work journal
//!
//! A command-line utility for timing work intervals, describing and tagging
//! them, and keeping a day-grouped history that can be exported to CSV.
//!
//! ## Features
//!
//! - **Stopwatch**: start, pause, resume and reset with a live display
//! - **Work Logs**: description plus tags from a fixed vocabulary
//! - **History**: persisted locally, listed newest day first
//! - **Export**: CSV file named after the export date
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worklogger::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
