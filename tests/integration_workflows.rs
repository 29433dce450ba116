//! End-to-end workflows across the timer, form, store, grouping and export.

#[cfg(test)]
mod tests {
    use chrono::{Duration as ChronoDuration, Local, Utc};
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};
    use worklogger::db::kv::SqliteStore;
    use worklogger::libs::export::Exporter;
    use worklogger::libs::formatter::format_day;
    use worklogger::libs::log_list::group_by_day;
    use worklogger::libs::log_store::LogStore;
    use worklogger::libs::timer::{Timer, TimerStatus};
    use worklogger::libs::work_form::WorkForm;
    use worklogger::libs::work_log::Tag;

    struct WorkflowContext {
        temp_dir: TempDir,
        timer: Timer,
    }

    impl AsyncTestContext for WorkflowContext {
        async fn setup() -> Self {
            WorkflowContext {
                temp_dir: tempfile::tempdir().unwrap(),
                timer: Timer::default(),
            }
        }

        async fn teardown(self) {
            self.timer.reset();
        }
    }

    impl WorkflowContext {
        fn store(&self) -> LogStore<SqliteStore> {
            let kv = SqliteStore::open(&self.temp_dir.path().join("worklogger.db")).unwrap();
            LogStore::load(kv).unwrap()
        }
    }

    #[test_context(WorkflowContext)]
    #[tokio::test(start_paused = true)]
    async fn test_time_annotate_and_save(ctx: &mut WorkflowContext) {
        let timer = &ctx.timer;

        timer.start();
        let mut form = WorkForm::new(timer.elapsed_ms(), Utc::now());
        tokio::time::sleep(Duration::from_millis(2_050)).await;
        timer.pause();

        let elapsed = timer.elapsed_ms();
        assert!(elapsed > 0);

        form.set_description("Fixed bug", timer.status());
        form.toggle_tag(Tag::Development);
        let log = form.submit(elapsed, timer.status(), Utc::now()).unwrap();
        assert_eq!(log.duration, elapsed);

        let mut store = ctx.store();
        store.append(log.clone()).unwrap();
        timer.reset();
        assert_eq!(timer.status(), TimerStatus::Idle);
        assert_eq!(timer.elapsed_ms(), 0);

        let reopened = ctx.store();
        let list = group_by_day(reopened.logs());
        let today = &list.days()[0];

        assert_eq!(today.date, Local::now().date_naive());
        assert_eq!(today.label, format_day(&Utc::now()));
        assert_eq!(today.logs[0].description, "Fixed bug");
        assert_eq!(today.logs[0].tags, vec![Tag::Development]);
    }

    #[test_context(WorkflowContext)]
    #[tokio::test(start_paused = true)]
    async fn test_form_is_locked_while_running(ctx: &mut WorkflowContext) {
        let timer = &ctx.timer;

        timer.start();
        let mut form = WorkForm::new(timer.elapsed_ms(), Utc::now());
        tokio::time::sleep(Duration::from_millis(500)).await;

        form.set_description("too early", timer.status());
        assert_eq!(form.description(), "");
        assert!(form.submit(timer.elapsed_ms(), timer.status(), Utc::now()).is_none());

        timer.pause();
        form.set_description("on time", timer.status());
        assert!(form.can_submit(timer.elapsed_ms(), timer.status()));
    }

    #[test_context(WorkflowContext)]
    #[tokio::test(start_paused = true)]
    async fn test_discard_leaves_history_untouched(ctx: &mut WorkflowContext) {
        let timer = &ctx.timer;
        let mut store = ctx.store();

        timer.start();
        let form = WorkForm::new(timer.elapsed_ms(), Utc::now());
        tokio::time::sleep(Duration::from_millis(300)).await;
        timer.pause();

        form.cancel();
        timer.reset();

        assert_eq!(timer.elapsed_ms(), 0);
        assert!(store.is_empty());
        store.save().unwrap();
        assert!(ctx.store().is_empty());
    }

    #[test_context(WorkflowContext)]
    #[tokio::test]
    async fn test_save_delete_and_export(ctx: &mut WorkflowContext) {
        let mut store = ctx.store();
        let end = Utc::now();

        for (offset, description) in [(2, "older"), (1, "newer")] {
            let start = end - ChronoDuration::hours(offset);
            let mut form = WorkForm::new(0, start);
            form.set_description(description, TimerStatus::Paused);
            let log = form
                .submit(600_000, TimerStatus::Paused, start + ChronoDuration::minutes(10))
                .unwrap();
            store.append(log).unwrap();
        }

        let older_id = store.logs()[1].id.clone();
        assert!(store.delete(&older_id).unwrap());

        let out_dir = ctx.temp_dir.path().join("exports");
        let exporter = Exporter::new(Some(out_dir.clone()), None);
        let path = exporter.export(ctx.store().logs(), end).unwrap();

        assert!(path.starts_with(&out_dir));
        let content = fs::read_to_string(path).unwrap();
        let rows: Vec<&str> = content.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[1].ends_with(",10 minutes,,\"newer\""));
    }
}
