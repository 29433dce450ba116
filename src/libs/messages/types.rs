#[derive(Debug, Clone)]
pub enum Message {
    // === TIMER SESSION MESSAGES ===
    SessionStarted,
    SessionEnded,
    PressEnterToPause,
    TimerPausedAt(String), // formatted elapsed
    TimerLine(String),     // formatted elapsed
    PromptTimerAction,
    ActionStart,
    ActionResume,
    ActionSaveEntry,
    ActionDiscardEntry,
    ActionQuit,
    ConfirmQuitUnsaved(String), // formatted elapsed

    // === WORK FORM MESSAGES ===
    PromptDescription,
    PromptAddTags,
    PromptSelectTag,
    TagPickerClose,
    SelectedTags(String),
    EntryIncomplete,
    EntryDiscarded,
    WorkLogSaved(String), // formatted duration

    // === HISTORY MESSAGES ===
    HistoryHeader(String), // entry count
    NoWorkLogs,
    DayHeader(String), // day label
    WorkLogDeleted(String),
    WorkLogNotFound(String),
    StoredLogsUnreadable(String), // parse error

    // === EXPORT MESSAGES ===
    NothingToExport,
    ExportCompleted(String), // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleTimer,
    ConfigModuleExport,
    PromptTickInterval,
    PromptExportDir,
    InvalidTickInterval,
}
