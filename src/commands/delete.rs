use crate::{
    db::kv::SqliteStore,
    libs::{log_store::LogStore, messages::Message},
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the work log, as shown by `worklogger list`
    #[arg(required = true)]
    id: String,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut store = LogStore::load(SqliteStore::new()?)?;

    if !store.delete(&args.id)? {
        msg_bail_anyhow!(Message::WorkLogNotFound(args.id));
    }

    msg_success!(Message::WorkLogDeleted(args.id));
    Ok(())
}
