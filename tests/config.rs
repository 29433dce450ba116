#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use worklogger::libs::config::{Config, ExportConfig, TimerConfig, CONFIG_FILE_NAME};
    use worklogger::libs::data_storage::DataStorage;

    /// Points the data directory at a fresh temporary directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base(temp_dir.path().join("worklogger"));
            ConfigTestContext {
                _temp_dir: temp_dir,
                storage,
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.timer.tick_interval_ms, 100);
        assert_eq!(config.timer.tick_interval(), Duration::from_millis(100));
        assert!(config.export.output_dir.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            timer: TimerConfig { tick_interval_ms: 250 },
            export: ExportConfig {
                output_dir: Some(PathBuf::from("/tmp/exports")),
            },
        };

        config.save_to(&ctx.storage).unwrap();
        let read_config = Config::read_from(&ctx.storage).unwrap();

        assert_eq!(read_config, config);
        assert!(ctx.storage.base_path().join(CONFIG_FILE_NAME).exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_uses_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(&path, r#"{ "export": { "output_dir": "out" } }"#).unwrap();

        let config = Config::read_from(&ctx.storage).unwrap();

        assert_eq!(config.timer, TimerConfig::default());
        assert_eq!(config.export.output_dir, Some(PathBuf::from("out")));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_config_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(&path, "not json").unwrap();

        assert!(Config::read_from(&ctx.storage).is_err());
    }

    #[test]
    fn test_zero_tick_interval_is_clamped() {
        let timer = TimerConfig { tick_interval_ms: 0 };
        assert_eq!(timer.tick_interval(), Duration::from_millis(1));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_storage_creates_base_directory(ctx: &mut ConfigTestContext) {
        assert!(!ctx.storage.base_path().exists());
        let path = ctx.storage.get_path("probe").unwrap();
        assert!(ctx.storage.base_path().is_dir());
        assert_eq!(path, ctx.storage.base_path().join("probe"));
    }
}
