#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, TimeZone, Utc};
    use worklogger::libs::formatter::{
        format_clock, format_date, format_day, format_locale_date, format_locale_time, format_minutes, format_time,
        format_time_with_labels,
    };

    fn local_instant(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_format_time_zero() {
        assert_eq!(format_time(0), "00:00:00");
    }

    #[test]
    fn test_format_time_truncates_partial_seconds() {
        assert_eq!(format_time(999), "00:00:00");
        assert_eq!(format_time(59_999), "00:00:59");
        assert_eq!(format_time(61_500), "00:01:01");
    }

    #[test]
    fn test_format_time_hours() {
        assert_eq!(format_time(3_723_000), "01:02:03");
        assert_eq!(format_time(36_000_000), "10:00:00");
    }

    #[test]
    fn test_format_time_does_not_wrap_days() {
        assert_eq!(format_time(100 * 3_600_000), "100:00:00");
    }

    #[test]
    fn test_format_time_with_labels_seconds_only() {
        assert_eq!(format_time_with_labels(0), "0s");
        assert_eq!(format_time_with_labels(5_000), "5s");
    }

    #[test]
    fn test_format_time_with_labels_minutes() {
        assert_eq!(format_time_with_labels(125_000), "2m 5s");
        assert_eq!(format_time_with_labels(60_000), "1m 0s");
    }

    #[test]
    fn test_format_time_with_labels_keeps_zero_minutes_under_hours() {
        assert_eq!(format_time_with_labels(3_603_000), "1h 0m 3s");
        assert_eq!(format_time_with_labels(3_723_000), "1h 2m 3s");
    }

    #[test]
    fn test_format_minutes_floors() {
        assert_eq!(format_minutes(0), "0 minutes");
        assert_eq!(format_minutes(59_999), "0 minutes");
        assert_eq!(format_minutes(1_800_000), "30 minutes");
        assert_eq!(format_minutes(1_859_000), "30 minutes");
    }

    #[test]
    fn test_date_formats_use_local_time() {
        let instant = local_instant(2026, 10, 15, 9, 5, 3);

        assert_eq!(format_date(&instant), "Oct 15, 2026, 09:05 AM");
        assert_eq!(format_day(&instant), "Oct 15, 2026");
        assert_eq!(format_locale_date(&instant), "10/15/2026");
        assert_eq!(format_locale_time(&instant), "9:05:03 AM");
        assert_eq!(format_clock(&instant), "9:05 AM");
    }

    #[test]
    fn test_locale_time_afternoon() {
        let instant = local_instant(2026, 1, 2, 14, 30, 0);

        assert_eq!(format_locale_date(&instant), "1/2/2026");
        assert_eq!(format_locale_time(&instant), "2:30:00 PM");
        assert_eq!(format_day(&instant), "Jan 2, 2026");
    }
}
