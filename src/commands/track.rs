//! Interactive timing session.
//!
//! Runs the stopwatch with a live `HH:MM:SS` display. While the timer runs,
//! Enter pauses it; while it is paused or idle, a menu offers to resume,
//! save the interval as a work log, discard it, or quit.
//!
//! ## Session Flow
//!
//! ```text
//! Idle ──start──▶ Running ──Enter──▶ Paused ──save──▶ form ──▶ log appended, timer reset
//!                    ▲                  │
//!                    └──────resume──────┤
//!                                       └──discard──▶ timer reset
//! ```
//!
//! The work form is opened when the timer first starts, which pins the
//! interval start. It stays open across pauses until the entry is saved or
//! discarded.

use crate::{
    db::kv::SqliteStore,
    libs::{
        config::Config,
        formatter::{format_time, format_time_with_labels},
        log_store::LogStore,
        messages::Message,
        timer::{Timer, TimerEvent, TimerStatus},
        work_form::WorkForm,
        work_log::{join_tags, Tag, WorkLog},
    },
    msg_debug, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Utc;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::io::Write;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Start,
    Resume,
    SaveEntry,
    DiscardEntry,
    Quit,
}

impl Action {
    fn available(status: TimerStatus) -> Vec<Action> {
        match status {
            TimerStatus::Idle => vec![Action::Start, Action::Quit],
            TimerStatus::Paused => vec![Action::Resume, Action::SaveEntry, Action::DiscardEntry, Action::Quit],
            TimerStatus::Running => Vec::new(),
        }
    }

    fn label(&self) -> Message {
        match self {
            Action::Start => Message::ActionStart,
            Action::Resume => Message::ActionResume,
            Action::SaveEntry => Message::ActionSaveEntry,
            Action::DiscardEntry => Message::ActionDiscardEntry,
            Action::Quit => Message::ActionQuit,
        }
    }
}

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let mut store = LogStore::load(SqliteStore::new()?)?;

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let mut timer = Timer::new(config.timer.tick_interval());
    timer.subscribe(Arc::new(events_tx));
    let display = tokio::spawn(render_timer(events_rx));

    msg_print!(Message::SessionStarted, true);
    let mut form: Option<WorkForm> = None;

    loop {
        let status = timer.status();

        if status == TimerStatus::Running {
            wait_for_enter().await?;
            timer.pause();
            msg_print!(Message::TimerPausedAt(format_time_with_labels(timer.elapsed_ms())));
            continue;
        }

        if let Some(current) = &form {
            msg_print!(current.status_line(status));
        }

        match prompt_action(&Action::available(status))? {
            Action::Start | Action::Resume => {
                if form.is_none() {
                    form = Some(WorkForm::new(timer.elapsed_ms(), Utc::now()));
                }
                msg_info!(Message::PressEnterToPause);
                timer.start();
            }
            Action::SaveEntry => {
                let Some(current) = form.as_mut() else {
                    continue;
                };
                match fill_form(current, timer.elapsed_ms(), status)? {
                    Some(log) => {
                        let duration = log.duration;
                        store.append(log)?;
                        timer.reset();
                        form = None;
                        msg_success!(Message::WorkLogSaved(format_time_with_labels(duration)));
                    }
                    None => {
                        msg_warning!(Message::EntryIncomplete);
                    }
                }
            }
            Action::DiscardEntry => {
                if let Some(current) = form.take() {
                    current.cancel();
                }
                timer.reset();
                msg_info!(Message::EntryDiscarded);
            }
            Action::Quit => {
                let elapsed = timer.elapsed_ms();
                if elapsed > 0 && !confirm_quit(elapsed)? {
                    continue;
                }
                break;
            }
        }
    }

    timer.reset();
    display.abort();
    msg_print!(Message::SessionEnded);
    Ok(())
}

/// Redraws the live timer line while the timer runs.
async fn render_timer(mut events: UnboundedReceiver<TimerEvent>) {
    let mut status = TimerStatus::Idle;
    let mut elapsed = 0;

    while let Some(event) = events.recv().await {
        match event {
            TimerEvent::Elapsed(ms) => elapsed = ms,
            TimerEvent::Status(next) => status = next,
        }

        if status == TimerStatus::Running {
            print!("\r{}", Message::TimerLine(format_time(elapsed)));
            let _ = std::io::stdout().flush();
        }
    }
}

async fn wait_for_enter() -> Result<()> {
    tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        std::io::stdin().read_line(&mut line).map(|_| ())
    })
    .await??;
    Ok(())
}

fn prompt_action(actions: &[Action]) -> Result<Action> {
    let labels: Vec<String> = actions.iter().map(|action| action.label().to_string()).collect();

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTimerAction.to_string())
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions[choice])
}

/// Collects the description and tags, then submits. `None` when the entry is incomplete.
fn fill_form(form: &mut WorkForm, elapsed_ms: u64, status: TimerStatus) -> Result<Option<WorkLog>> {
    msg_print!(WorkForm::elapsed_line(elapsed_ms));

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDescription.to_string())
        .with_initial_text(form.description())
        .allow_empty(true)
        .interact_text()?;
    form.set_description(&description, status);

    let add_tags = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptAddTags.to_string())
        .default(!form.selected_tags().is_empty())
        .interact()?;
    if add_tags {
        form.open_tag_picker();
        pick_tags(form)?;
    }

    Ok(form.submit(elapsed_ms, status, Utc::now()))
}

/// Toggles tags until the picker is closed.
fn pick_tags(form: &mut WorkForm) -> Result<()> {
    while form.is_tag_picker_open() {
        let mut items: Vec<String> = Tag::ALL
            .iter()
            .map(|tag| {
                let mark = if form.selected_tags().contains(tag) { "[x]" } else { "[ ]" };
                format!("{} {}", mark, tag)
            })
            .collect();
        items.push(Message::TagPickerClose.to_string());

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectTag.to_string())
            .items(&items)
            .default(0)
            .interact()?;

        match Tag::ALL.get(choice) {
            Some(tag) => {
                form.toggle_tag(*tag);
                msg_debug!(format!("toggled tag {}", tag));
            }
            None => form.close_tag_picker(),
        }
    }

    if !form.selected_tags().is_empty() {
        msg_print!(Message::SelectedTags(join_tags(form.selected_tags())));
    }
    Ok(())
}

fn confirm_quit(elapsed_ms: u64) -> Result<bool> {
    let quit = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmQuitUnsaved(format_time_with_labels(elapsed_ms)).to_string())
        .default(false)
        .interact()?;
    Ok(quit)
}
