use super::formatter::{format_date, format_time_with_labels};
use super::log_list::DayGroup;
use super::work_log::join_tags;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints one day of the work history as a table.
    pub fn day_group(group: &DayGroup<'_>) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DURATION", "STARTED", "TAGS", "DESCRIPTION"]);
        for log in &group.logs {
            table.add_row(row![
                log.id,
                format_time_with_labels(log.duration),
                format_date(&log.start_time),
                join_tags(&log.tags),
                log.description
            ]);
        }
        table.printstd();
    }
}
