//! Day grouping of the work history.
//!
//! Logs are grouped by the local calendar day of their start time. Groups
//! are ordered newest day first; inside a group, logs keep the order of the
//! source collection.

use super::formatter::format_day;
use super::work_log::WorkLog;
use chrono::{Local, NaiveDate};
use std::collections::HashMap;

pub const EMPTY_HISTORY: &str = "No work logs yet. Start the timer and log your work!";

/// Logs sharing one local calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup<'a> {
    /// Display label and grouping key, e.g. `Oct 15, 2026`.
    pub label: String,
    pub date: NaiveDate,
    pub logs: Vec<&'a WorkLog>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogList<'a> {
    Empty,
    Days(Vec<DayGroup<'a>>),
}

impl<'a> LogList<'a> {
    pub fn is_empty(&self) -> bool {
        matches!(self, LogList::Empty)
    }

    pub fn days(&self) -> &[DayGroup<'a>] {
        match self {
            LogList::Empty => &[],
            LogList::Days(days) => days,
        }
    }
}

pub fn group_by_day(logs: &[WorkLog]) -> LogList<'_> {
    if logs.is_empty() {
        return LogList::Empty;
    }

    let mut groups: Vec<DayGroup<'_>> = Vec::new();
    let mut index_by_label: HashMap<String, usize> = HashMap::new();

    for log in logs {
        let label = format_day(&log.start_time);
        match index_by_label.get(&label) {
            Some(&index) => groups[index].logs.push(log),
            None => {
                index_by_label.insert(label.clone(), groups.len());
                groups.push(DayGroup {
                    label,
                    date: log.start_time.with_timezone(&Local).date_naive(),
                    logs: vec![log],
                });
            }
        }
    }

    groups.sort_by(|a, b| b.date.cmp(&a.date));
    LogList::Days(groups)
}

/// `"1 entry"` or `"N entries"`.
pub fn entry_count(count: usize) -> String {
    if count == 1 {
        "1 entry".to_string()
    } else {
        format!("{} entries", count)
    }
}
