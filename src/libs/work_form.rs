//! Capture form for annotating a timed interval.
//!
//! A [`WorkForm`] is opened once the timer has recorded time. It pins the
//! interval start at creation (`now - elapsed`), collects a description and an
//! ordered tag selection, and turns them into a [`WorkLog`] on submit.
//!
//! The form is read-only while the timer is running, and submit is inert
//! until the trimmed description is non-empty and some time has elapsed.

use super::formatter::{format_clock, format_time_with_labels};
use super::timer::TimerStatus;
use super::work_log::{Tag, WorkLog};
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone)]
pub struct WorkForm {
    started_at: DateTime<Utc>,
    description: String,
    selected_tags: Vec<Tag>,
    tag_picker_open: bool,
}

impl WorkForm {
    /// Opens a form for an interval that has been running for `elapsed_ms`
    /// as of `now`. The interval start is fixed here and never re-derived.
    pub fn new(elapsed_ms: u64, now: DateTime<Utc>) -> Self {
        let elapsed = Duration::milliseconds(i64::try_from(elapsed_ms).unwrap_or(i64::MAX));
        let started_at = now.checked_sub_signed(elapsed).unwrap_or(now);

        Self {
            started_at,
            description: String::new(),
            selected_tags: Vec::new(),
            tag_picker_open: false,
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn selected_tags(&self) -> &[Tag] {
        &self.selected_tags
    }

    /// Inputs are read-only while the timer runs.
    pub fn is_disabled(status: TimerStatus) -> bool {
        status == TimerStatus::Running
    }

    pub fn can_submit(&self, elapsed_ms: u64, status: TimerStatus) -> bool {
        !Self::is_disabled(status) && elapsed_ms > 0 && !self.description.trim().is_empty()
    }

    /// Replaces the description. Ignored while the timer is running.
    pub fn set_description(&mut self, description: &str, status: TimerStatus) {
        if Self::is_disabled(status) {
            return;
        }
        self.description = description.to_string();
    }

    /// Adds the tag if absent, removes it if present. New tags go last.
    pub fn toggle_tag(&mut self, tag: Tag) {
        if let Some(position) = self.selected_tags.iter().position(|t| *t == tag) {
            self.selected_tags.remove(position);
        } else {
            self.selected_tags.push(tag);
        }
    }

    pub fn is_tag_picker_open(&self) -> bool {
        self.tag_picker_open
    }

    pub fn open_tag_picker(&mut self) {
        self.tag_picker_open = true;
    }

    pub fn close_tag_picker(&mut self) {
        self.tag_picker_open = false;
    }

    /// `"Started 9:05 AM"` once the timer has left idle, `"Ready to work"` before.
    pub fn status_line(&self, status: TimerStatus) -> String {
        match status {
            TimerStatus::Idle => "Ready to work".to_string(),
            _ => format!("Started {}", format_clock(&self.started_at)),
        }
    }

    pub fn elapsed_line(elapsed_ms: u64) -> String {
        if elapsed_ms > 0 {
            format_time_with_labels(elapsed_ms)
        } else {
            "No time recorded".to_string()
        }
    }

    /// Builds the work log and clears the inputs.
    ///
    /// Returns `None` without touching the form when submitting is not
    /// allowed. `duration` is the `elapsed_ms` given here, not recomputed
    /// from the two timestamps.
    pub fn submit(&mut self, elapsed_ms: u64, status: TimerStatus, now: DateTime<Utc>) -> Option<WorkLog> {
        if !self.can_submit(elapsed_ms, status) {
            return None;
        }

        let log = WorkLog::new(self.started_at, now, elapsed_ms, &self.description, self.selected_tags.clone());

        self.description.clear();
        self.selected_tags.clear();

        Some(log)
    }

    /// Discards the in-progress entry.
    pub fn cancel(self) {
        tracing::debug!("work form cancelled");
    }
}
