//! User-facing messages.
//!
//! Every piece of text shown to the user is a [`Message`] variant rendered
//! through its `Display` implementation in [`display`]. The macros in
//! [`macros`] print messages with a category prefix and route them to
//! `tracing` when debug mode is enabled.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
