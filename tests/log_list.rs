#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Local, TimeZone, Utc};
    use worklogger::libs::log_list::{entry_count, group_by_day, LogList, EMPTY_HISTORY};
    use worklogger::libs::work_log::WorkLog;

    fn local(day: u32, hour: u32) -> DateTime<Utc> {
        Local.with_ymd_and_hms(2026, 10, day, hour, 0, 0).unwrap().with_timezone(&Utc)
    }

    fn log(day: u32, hour: u32, description: &str) -> WorkLog {
        let start = local(day, hour);
        WorkLog::new(start, start + Duration::minutes(45), 2_700_000, description, vec![])
    }

    #[test]
    fn test_empty_history() {
        let list = group_by_day(&[]);
        assert_eq!(list, LogList::Empty);
        assert!(list.is_empty());
        assert!(list.days().is_empty());
        assert_eq!(EMPTY_HISTORY, "No work logs yet. Start the timer and log your work!");
    }

    #[test]
    fn test_groups_newest_day_first() {
        // Storage order is most recent first, but the groups must not rely on it.
        let logs = vec![
            log(14, 16, "b"),
            log(15, 10, "c"),
            log(13, 9, "a"),
            log(15, 8, "d"),
        ];

        let list = group_by_day(&logs);
        let days = list.days();

        assert_eq!(days.len(), 3);
        assert_eq!(days[0].label, "Oct 15, 2026");
        assert_eq!(days[1].label, "Oct 14, 2026");
        assert_eq!(days[2].label, "Oct 13, 2026");
        assert!(days.windows(2).all(|pair| pair[0].date > pair[1].date));
    }

    #[test]
    fn test_group_keeps_source_order() {
        let logs = vec![log(15, 14, "later"), log(15, 9, "earlier")];

        let list = group_by_day(&logs);
        let descriptions: Vec<&str> = list.days()[0].logs.iter().map(|log| log.description.as_str()).collect();

        assert_eq!(descriptions, vec!["later", "earlier"]);
    }

    #[test]
    fn test_every_log_lands_in_one_group() {
        let logs: Vec<WorkLog> = (1..=5).map(|day| log(day, 12, "x")).collect();

        let list = group_by_day(&logs);
        let total: usize = list.days().iter().map(|day| day.logs.len()).sum();

        assert_eq!(list.days().len(), 5);
        assert_eq!(total, logs.len());
    }

    #[test]
    fn test_entry_count() {
        assert_eq!(entry_count(0), "0 entries");
        assert_eq!(entry_count(1), "1 entry");
        assert_eq!(entry_count(7), "7 entries");
    }
}
