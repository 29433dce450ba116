//! Display implementation for worklogger messages.
//!
//! All message text is defined here so wording stays consistent across
//! commands. Messages with parameters interpolate them directly.

use super::types::Message;
use crate::libs::log_list::EMPTY_HISTORY;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TIMER SESSION MESSAGES ===
            Message::SessionStarted => "WorkLogger: time your work, then describe it.".to_string(),
            Message::SessionEnded => "Session ended.".to_string(),
            Message::PressEnterToPause => "Timer running. Press Enter to pause.".to_string(),
            Message::TimerPausedAt(elapsed) => format!("Timer paused at {}", elapsed),
            Message::TimerLine(elapsed) => format!("⏱  {}", elapsed),
            Message::PromptTimerAction => "What next?".to_string(),
            Message::ActionStart => "Start timer".to_string(),
            Message::ActionResume => "Resume timer".to_string(),
            Message::ActionSaveEntry => "Save entry".to_string(),
            Message::ActionDiscardEntry => "Discard entry".to_string(),
            Message::ActionQuit => "Quit".to_string(),
            Message::ConfirmQuitUnsaved(elapsed) => format!("{} of tracked time has not been saved. Quit anyway?", elapsed),

            // === WORK FORM MESSAGES ===
            Message::PromptDescription => "What did you work on?".to_string(),
            Message::PromptAddTags => "Add tags?".to_string(),
            Message::PromptSelectTag => "Toggle a tag".to_string(),
            Message::TagPickerClose => "Close".to_string(),
            Message::SelectedTags(tags) => format!("Tags: {}", tags),
            Message::EntryIncomplete => "A description and some tracked time are required to save an entry.".to_string(),
            Message::EntryDiscarded => "Entry discarded, timer reset.".to_string(),
            Message::WorkLogSaved(duration) => format!("Logged {} of work", duration),

            // === HISTORY MESSAGES ===
            Message::HistoryHeader(count) => format!("Work History ({})", count),
            Message::NoWorkLogs => EMPTY_HISTORY.to_string(),
            Message::DayHeader(day) => day.to_string(),
            Message::WorkLogDeleted(id) => format!("Work log {} deleted", id),
            Message::WorkLogNotFound(id) => format!("Work log {} not found", id),
            Message::StoredLogsUnreadable(error) => format!("Error parsing saved logs: {}", error),

            // === EXPORT MESSAGES ===
            Message::NothingToExport => "No work logs to export".to_string(),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults will be used".to_string(),
            Message::ConfigModuleTimer => "Timer".to_string(),
            Message::ConfigModuleExport => "Export".to_string(),
            Message::PromptTickInterval => "Enter timer refresh interval (milliseconds)".to_string(),
            Message::PromptExportDir => "Enter export directory (empty for current directory)".to_string(),
            Message::InvalidTickInterval => "The refresh interval must be greater than zero".to_string(),
        };

        write!(f, "{}", text)
    }
}
