//! Convenient macros for application messaging and logging.
//!
//! Every macro hands its message to [`emit`] together with a [`Category`].
//! The category picks the prefix and the output stream. In debug mode the
//! line becomes a `tracing` event at the matching level, so it interleaves
//! with the library's own structured events.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is on when either environment variable is set:
//! - **`WORKLOGGER_DEBUG`**: application-specific debug flag
//! - **`RUST_LOG`**: standard Rust logging configuration
//!
//! The check is cached on first use.
//!
//! ## Macro Categories
//!
//! | Macro            | Prefix | Normal mode | Debug mode        |
//! |------------------|--------|-------------|-------------------|
//! | `msg_print!`     |        | stdout      | `tracing::info!`  |
//! | `msg_success!`   | ✅     | stdout      | `tracing::info!`  |
//! | `msg_info!`      | ℹ️     | stdout      | `tracing::info!`  |
//! | `msg_warning!`   | ⚠️     | stdout      | `tracing::warn!`  |
//! | `msg_error!`     | ❌     | stderr      | `tracing::error!` |
//! | `msg_debug!`     | 🔍     | silent      | `tracing::debug!` |
//!
//! `msg_bail_anyhow!` returns an `anyhow::Error` carrying the ❌ prefix
//! instead of printing.
//!
//! Passing `true` as a second argument surrounds the line with blank lines.
//!
//! ## Usage
//!
//! ```rust
//! use worklogger::{msg_info, msg_success};
//! use worklogger::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_info!(Message::NoWorkLogs, true);
//! ```

use std::fmt::Display;
use std::sync::OnceLock;

/// Environment variable that turns on debug mode.
pub const DEBUG_ENV: &str = "WORKLOGGER_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether messages should be routed through `tracing`. Cached after the first call.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Plain,
    Success,
    Info,
    Warning,
    Error,
    Debug,
}

impl Category {
    fn prefix(self) -> &'static str {
        match self {
            Category::Plain => "",
            Category::Success => "✅ ",
            Category::Info => "ℹ️ ",
            Category::Warning => "⚠️ ",
            Category::Error => "❌ ",
            Category::Debug => "🔍 ",
        }
    }
}

/// Writes one message line. Used by the `msg_*` macros.
#[doc(hidden)]
pub fn emit(category: Category, message: &dyn Display, padded: bool) {
    let prefix = category.prefix();
    let line = if padded {
        format!("\n{}{}\n", prefix, message)
    } else {
        format!("{}{}", prefix, message)
    };

    if is_debug_mode() {
        match category {
            Category::Warning => tracing::warn!("{}", line),
            Category::Error => tracing::error!("{}", line),
            Category::Debug => tracing::debug!("{}", line),
            Category::Plain | Category::Success | Category::Info => tracing::info!("{}", line),
        }
        return;
    }

    match category {
        Category::Debug => {}
        Category::Error => eprintln!("{}", line),
        _ => println!("{}", line),
    }
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::libs::messages::macros::emit($crate::libs::messages::macros::Category::Plain, &$msg, false)
    };
    ($msg:expr, true) => {
        $crate::libs::messages::macros::emit($crate::libs::messages::macros::Category::Plain, &$msg, true)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::libs::messages::macros::emit($crate::libs::messages::macros::Category::Success, &$msg, false)
    };
    ($msg:expr, true) => {
        $crate::libs::messages::macros::emit($crate::libs::messages::macros::Category::Success, &$msg, true)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::libs::messages::macros::emit($crate::libs::messages::macros::Category::Info, &$msg, false)
    };
    ($msg:expr, true) => {
        $crate::libs::messages::macros::emit($crate::libs::messages::macros::Category::Info, &$msg, true)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::libs::messages::macros::emit($crate::libs::messages::macros::Category::Warning, &$msg, false)
    };
    ($msg:expr, true) => {
        $crate::libs::messages::macros::emit($crate::libs::messages::macros::Category::Warning, &$msg, true)
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::libs::messages::macros::emit($crate::libs::messages::macros::Category::Error, &$msg, false)
    };
    ($msg:expr, true) => {
        $crate::libs::messages::macros::emit($crate::libs::messages::macros::Category::Error, &$msg, true)
    };
}

/// Debug-only output; silent unless debug mode is on.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        $crate::libs::messages::macros::emit($crate::libs::messages::macros::Category::Debug, &$msg, false)
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
