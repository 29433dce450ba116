//! CSV export of the work history.
//!
//! Writes every work log, newest first, to `work-logs-<YYYY-MM-DD>.csv` in
//! the configured export directory, or to the path given with `--output`.

use crate::{
    db::kv::SqliteStore,
    libs::{
        config::Config,
        export::{ExportError, Exporter},
        log_store::LogStore,
        messages::Message,
    },
    msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Custom output file path
    ///
    /// Overrides the configured export directory and the generated
    /// `work-logs-<YYYY-MM-DD>.csv` file name.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let store = LogStore::load(SqliteStore::new()?)?;
    let exporter = Exporter::new(config.export.output_dir, args.output);

    match exporter.export(store.logs(), Utc::now()) {
        Ok(path) => {
            msg_success!(Message::ExportCompleted(path.display().to_string()));
            Ok(())
        }
        Err(ExportError::Empty) => {
            msg_warning!(Message::NothingToExport);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
