//! The work log record and its tag vocabulary.
//!
//! A [`WorkLog`] is the persisted record of one completed, annotated work
//! interval. Records are immutable once built; the only way to change the
//! history is to append a new record or delete one by id.
//!
//! ## Serialized Shape
//!
//! Records are stored as JSON objects with camelCase keys and RFC 3339
//! timestamps:
//!
//! ```json
//! {
//!   "id": "1760518800000",
//!   "startTime": "2026-10-15T08:30:00Z",
//!   "endTime": "2026-10-15T09:00:00Z",
//!   "duration": 1800000,
//!   "description": "Fixed bug",
//!   "tags": ["Development"]
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed tag vocabulary a work log can be labelled with.
///
/// Serialized by display name, so `Tag::Development` is stored as
/// `"Development"`. Names outside the vocabulary are rejected on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Development,
    Design,
    Meeting,
    Planning,
    Research,
    Writing,
    Testing,
    Learning,
    Other,
}

impl Tag {
    /// Every tag in picker order.
    pub const ALL: [Tag; 9] = [
        Tag::Development,
        Tag::Design,
        Tag::Meeting,
        Tag::Planning,
        Tag::Research,
        Tag::Writing,
        Tag::Testing,
        Tag::Learning,
        Tag::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Development => "Development",
            Tag::Design => "Design",
            Tag::Meeting => "Meeting",
            Tag::Planning => "Planning",
            Tag::Research => "Research",
            Tag::Writing => "Writing",
            Tag::Testing => "Testing",
            Tag::Learning => "Learning",
            Tag::Other => "Other",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Joins tags with `", "` in their stored order.
pub fn join_tags(tags: &[Tag]) -> String {
    tags.iter().map(Tag::as_str).collect::<Vec<_>>().join(", ")
}

/// A persisted record of one completed, user-annotated work interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLog {
    /// Creation instant in epoch milliseconds; primary key.
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Milliseconds captured from the timer. Kept as recorded even when it
    /// drifts from `end_time - start_time`.
    pub duration: u64,
    pub description: String,
    pub tags: Vec<Tag>,
}

impl WorkLog {
    /// Builds a record whose id is derived from `end_time`.
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>, duration: u64, description: &str, tags: Vec<Tag>) -> Self {
        Self {
            id: end_time.timestamp_millis().to_string(),
            start_time,
            end_time,
            duration,
            description: description.trim().to_string(),
            tags,
        }
    }
}
