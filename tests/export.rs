#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Local, TimeZone, Utc};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use worklogger::libs::export::{
        build_document, export_file_name, quote_description, to_csv, ExportError, Exporter, CSV_MIME_TYPE,
    };
    use worklogger::libs::work_log::{Tag, WorkLog};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn local(hour: u32, min: u32) -> DateTime<Utc> {
        Local.with_ymd_and_hms(2026, 10, 15, hour, min, 0).unwrap().with_timezone(&Utc)
    }

    fn sample_log(description: &str, tags: Vec<Tag>, duration: u64) -> WorkLog {
        WorkLog::new(local(8, 30), local(9, 0), duration, description, tags)
    }

    fn export_day() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_quote_description_doubles_quotes() {
        assert_eq!(quote_description("He said \"hi\""), "\"He said \"\"hi\"\"\"");
        assert_eq!(quote_description("plain"), "\"plain\"");
        assert_eq!(quote_description(""), "\"\"");
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(export_day()), "work-logs-2026-10-15.csv");
    }

    #[test]
    fn test_csv_rows() {
        let logs = vec![sample_log("Fixed bug", vec![Tag::Development, Tag::Testing], 1_859_000)];
        let csv = to_csv(&logs).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Date,Start Time,End Time,Duration,Tags,Description");
        assert_eq!(lines[1], "10/15/2026,8:30:00 AM,9:00:00 AM,30 minutes,Development, Testing,\"Fixed bug\"");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_csv_quotes_description_with_inner_quotes() {
        let logs = vec![sample_log("He said \"hi\"", vec![], 60_000)];
        let csv = to_csv(&logs).unwrap();

        assert!(csv.lines().nth(1).unwrap().ends_with(",1 minutes,,\"He said \"\"hi\"\"\""));
    }

    #[test]
    fn test_csv_keeps_collection_order() {
        let logs = vec![sample_log("newest", vec![], 60_000), sample_log("oldest", vec![], 60_000)];
        let csv = to_csv(&logs).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert!(lines[1].ends_with("\"newest\""));
        assert!(lines[2].ends_with("\"oldest\""));
    }

    #[test]
    fn test_build_document_empty_is_rejected() {
        let result = build_document(&[], export_day());
        assert!(matches!(result, Err(ExportError::Empty)));
    }

    #[test]
    fn test_build_document_metadata() {
        let logs = vec![sample_log("Planning", vec![Tag::Planning], 600_000)];
        let document = build_document(&logs, export_day()).unwrap();

        assert_eq!(document.file_name, "work-logs-2026-10-15.csv");
        assert_eq!(document.mime_type, CSV_MIME_TYPE);
        assert!(document.content.starts_with("Date,"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_writes_file(ctx: &mut ExportTestContext) {
        let exporter = Exporter::new(Some(ctx.temp_dir.path().to_path_buf()), None);
        let logs = vec![sample_log("Fixed bug", vec![Tag::Development], 1_800_000)];

        let path = exporter.export(&logs, export_day()).unwrap();

        assert_eq!(path, ctx.temp_dir.path().join("work-logs-2026-10-15.csv"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("30 minutes,Development,\"Fixed bug\""));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_to_explicit_path(ctx: &mut ExportTestContext) {
        let target = ctx.temp_dir.path().join("nested").join("history.csv");
        let exporter = Exporter::new(None, Some(target.clone()));
        let logs = vec![sample_log("Writing", vec![Tag::Writing], 120_000)];

        let path = exporter.export(&logs, export_day()).unwrap();

        assert_eq!(path, target);
        assert!(target.exists());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_empty_writes_nothing(ctx: &mut ExportTestContext) {
        let exporter = Exporter::new(Some(ctx.temp_dir.path().to_path_buf()), None);

        let result = exporter.export(&[], export_day());

        assert!(matches!(result, Err(ExportError::Empty)));
        assert_eq!(fs::read_dir(ctx.temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_empty_error_message() {
        assert_eq!(ExportError::Empty.to_string(), "No work logs to export");
    }

    #[test]
    fn test_duration_column_ignores_timestamps() {
        let start = local(8, 0);
        let log = WorkLog::new(start, start + Duration::hours(2), 90_000, "drift", vec![]);
        let csv = to_csv(&[log]).unwrap();

        assert!(csv.contains(",1 minutes,"));
    }
}
