//! CSV export of the work history.
//!
//! Produces a document with one row per work log, in collection order:
//!
//! ```text
//! Date,Start Time,End Time,Duration,Tags,Description
//! 10/15/2026,8:30:00 AM,9:00:00 AM,30 minutes,Development, Testing,"Fixed ""the"" bug"
//! ```
//!
//! The description is always quoted with inner quotes doubled. The remaining
//! fields are written as-is.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use worklogger::libs::export::Exporter;
//! # let logs = Vec::new();
//!
//! let exporter = Exporter::new(None, None);
//! let path = exporter.export(&logs, Utc::now())?;
//! println!("written to {}", path.display());
//! # Ok::<(), worklogger::libs::export::ExportError>(())
//! ```

use super::formatter::{format_locale_date, format_locale_time, format_minutes};
use super::work_log::{join_tags, WorkLog};
use chrono::{DateTime, Utc};
use csv::{QuoteStyle, WriterBuilder};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

pub const CSV_HEADERS: [&str; 6] = ["Date", "Start Time", "End Time", "Duration", "Tags", "Description"];
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No work logs to export")]
    Empty,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A CSV file ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDocument {
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
}

/// Wraps a description in double quotes, doubling any quotes inside it.
pub fn quote_description(description: &str) -> String {
    format!("\"{}\"", description.replace('"', "\"\""))
}

/// `work-logs-YYYY-MM-DD.csv`, dated in UTC.
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("work-logs-{}.csv", now.format("%Y-%m-%d"))
}

/// Serializes logs to CSV text, header first.
pub fn to_csv(logs: &[WorkLog]) -> Result<String, ExportError> {
    let mut wtr = WriterBuilder::new().quote_style(QuoteStyle::Never).from_writer(Vec::new());

    wtr.write_record(CSV_HEADERS)?;
    for log in logs {
        wtr.write_record([
            format_locale_date(&log.start_time),
            format_locale_time(&log.start_time),
            format_locale_time(&log.end_time),
            format_minutes(log.duration),
            join_tags(&log.tags),
            quote_description(&log.description),
        ])?;
    }

    let bytes = wtr.into_inner().map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Builds the export document, or [`ExportError::Empty`] when there is nothing to export.
pub fn build_document(logs: &[WorkLog], now: DateTime<Utc>) -> Result<CsvDocument, ExportError> {
    if logs.is_empty() {
        return Err(ExportError::Empty);
    }

    Ok(CsvDocument {
        file_name: export_file_name(now),
        mime_type: CSV_MIME_TYPE,
        content: to_csv(logs)?,
    })
}

/// Writes export documents to disk.
pub struct Exporter {
    /// Directory for generated file names.
    output_dir: PathBuf,
    /// Exact destination, overriding `output_dir` and the generated name.
    output_path: Option<PathBuf>,
}

impl Exporter {
    /// `output_dir` defaults to the current directory.
    pub fn new(output_dir: Option<PathBuf>, output_path: Option<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.unwrap_or_else(|| PathBuf::from(".")),
            output_path,
        }
    }

    pub fn destination(&self, document: &CsvDocument) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| self.output_dir.join(&document.file_name))
    }

    /// Builds the document and writes it, returning the written path.
    pub fn export(&self, logs: &[WorkLog], now: DateTime<Utc>) -> Result<PathBuf, ExportError> {
        let document = build_document(logs, now)?;
        let path = self.destination(&document);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&path, document.content.as_bytes())?;

        tracing::debug!(path = %path.display(), rows = logs.len(), mime = document.mime_type, "csv export written");
        Ok(path)
    }
}
