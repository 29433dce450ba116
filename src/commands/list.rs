//! Work history listing, grouped by day.

use crate::{
    db::kv::SqliteStore,
    libs::{
        log_list::{entry_count, group_by_day, LogList},
        log_store::LogStore,
        messages::Message,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let store = LogStore::load(SqliteStore::new()?)?;

    msg_print!(Message::HistoryHeader(entry_count(store.len())), true);

    match group_by_day(store.logs()) {
        LogList::Empty => {
            msg_info!(Message::NoWorkLogs);
        }
        LogList::Days(days) => {
            for day in &days {
                msg_print!(Message::DayHeader(day.label.clone()));
                View::day_group(day);
            }
        }
    }

    Ok(())
}
