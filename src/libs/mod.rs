//! Core library modules for the worklogger application.
//!
//! ## Features
//!
//! - **Timing**: stopwatch state machine with periodic sampling (`timer`)
//! - **Capture**: work log record, tag vocabulary and capture form (`work_log`, `work_form`)
//! - **History**: persisted collection and day grouping (`log_store`, `log_list`)
//! - **Output**: CSV export, formatting and terminal tables (`export`, `formatter`, `view`)
//! - **Infrastructure**: configuration, data directory, messages and logging
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Utc;
//! use worklogger::libs::timer::TimerStatus;
//! use worklogger::libs::work_form::WorkForm;
//! use worklogger::libs::work_log::Tag;
//!
//! let mut form = WorkForm::new(90_000, Utc::now());
//! form.set_description("Code review", TimerStatus::Paused);
//! form.toggle_tag(Tag::Development);
//! let log = form.submit(90_000, TimerStatus::Paused, Utc::now()).unwrap();
//! assert_eq!(log.tags, vec![Tag::Development]);
//! ```

pub mod config;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod log_list;
pub mod log_store;
pub mod logging;
pub mod messages;
pub mod timer;
pub mod view;
pub mod work_form;
pub mod work_log;
