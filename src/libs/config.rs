//! Configuration management for the worklogger application.
//!
//! Settings live in `config.json` inside the application data directory and
//! are read with defaults when the file is absent. `worklogger init` walks the
//! user through an interactive wizard and saves the result.
//!
//! ```json
//! {
//!   "timer": { "tick_interval_ms": 100 },
//!   "export": { "output_dir": "/home/me/Documents" }
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worklogger::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("timer ticks every {} ms", config.timer.tick_interval_ms);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::timer::DEFAULT_TICK_INTERVAL;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Live timer settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimerConfig {
    /// Sampling cadence of the running timer in milliseconds.
    pub tick_interval_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        TimerConfig {
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
        }
    }
}

impl TimerConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

/// CSV export settings.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ExportConfig {
    /// Directory exported files are written to. The current directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Reads the configuration from the application data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        // Missing file means defaults
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard seeded with the current configuration.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();

        msg_print!(Message::ConfigModuleTimer);
        let tick_interval_ms = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTickInterval.to_string())
            .default(current.timer.tick_interval_ms)
            .validate_with(|value: &u64| if *value > 0 { Ok(()) } else { Err(Message::InvalidTickInterval.to_string()) })
            .interact_text()?;

        msg_print!(Message::ConfigModuleExport);
        let output_dir: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptExportDir.to_string())
            .default(
                current
                    .export
                    .output_dir
                    .as_ref()
                    .map(|dir| dir.display().to_string())
                    .unwrap_or_default(),
            )
            .allow_empty(true)
            .interact_text()?;

        Ok(Config {
            timer: TimerConfig { tick_interval_ms },
            export: ExportConfig {
                output_dir: if output_dir.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(output_dir.trim()))
                },
            },
        })
    }
}
