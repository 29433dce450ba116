//! Stopwatch with start/pause/reset semantics and periodic sampling.
//!
//! The timer is a three-state machine:
//!
//! ```text
//!            start              pause
//!   ┌──────┐ ─────▶ ┌─────────┐ ─────▶ ┌────────┐
//!   │ Idle │        │ Running │        │ Paused │
//!   └──────┘ ◀───── └─────────┘ ◀───── └────────┘
//!       ▲    reset                start      │
//!       └────────────────────────────────────┘
//!                        reset
//! ```
//!
//! While running, a background task samples the clock on a fixed cadence
//! (100 ms by default) and reports the elapsed time to every registered
//! [`TimerObserver`]. Pausing keeps the last sampled value as the baseline,
//! so resuming continues from where the display stopped.
//!
//! Elapsed time is measured with [`tokio::time::Instant`], which lets tests
//! drive the timer with tokio's paused clock.

use parking_lot::Mutex;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Default sampling cadence of the running timer.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TimerStatus {
    #[default]
    Idle,
    Running,
    Paused,
}

impl fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TimerStatus::Idle => "idle",
            TimerStatus::Running => "running",
            TimerStatus::Paused => "paused",
        };
        f.write_str(text)
    }
}

/// Receives timer notifications.
///
/// Both callbacks are invoked synchronously, from the transition call or from
/// the sampling task. Calls are serialized, and no tick is delivered after the
/// notifications of a later transition. Callbacks must not call back into the
/// timer.
pub trait TimerObserver: Send + Sync {
    fn on_time_update(&self, elapsed_ms: u64);
    fn on_status_change(&self, status: TimerStatus);
}

/// Notification forwarded by the channel observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Elapsed(u64),
    Status(TimerStatus),
}

/// Forwards notifications into an unbounded channel. A closed receiver is ignored.
impl TimerObserver for UnboundedSender<TimerEvent> {
    fn on_time_update(&self, elapsed_ms: u64) {
        let _ = self.send(TimerEvent::Elapsed(elapsed_ms));
    }

    fn on_status_change(&self, status: TimerStatus) {
        let _ = self.send(TimerEvent::Status(status));
    }
}

#[derive(Debug, Default)]
struct TimerState {
    status: TimerStatus,
    /// Last sampled elapsed time.
    elapsed_ms: u64,
    /// Elapsed time accumulated before the current running window.
    baseline_ms: u64,
    /// Start of the current running window. `baseline_ms` before this instant
    /// is the virtual start of the whole measurement.
    running_anchor: Option<Instant>,
    /// Bumped by every transition. A sampling task only reports while the
    /// generation it was spawned with is current.
    generation: u64,
}

impl TimerState {
    fn sample(&mut self, now: Instant) -> u64 {
        if let (TimerStatus::Running, Some(anchor)) = (self.status, self.running_anchor) {
            let window = now.saturating_duration_since(anchor).as_millis() as u64;
            self.elapsed_ms = self.baseline_ms.saturating_add(window);
        }
        self.elapsed_ms
    }
}

type Observers = Arc<Vec<Arc<dyn TimerObserver>>>;

pub struct Timer {
    state: Arc<Mutex<TimerState>>,
    observers: Observers,
    /// Held while observers are called, by transitions and ticks alike.
    /// Taken before `state` whenever both are needed.
    notify_lock: Arc<Mutex<()>>,
    ticker: Mutex<Option<JoinHandle<()>>>,
    tick_interval: Duration,
}

impl Timer {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(TimerState::default())),
            observers: Arc::new(Vec::new()),
            notify_lock: Arc::new(Mutex::new(())),
            ticker: Mutex::new(None),
            tick_interval: tick_interval.max(Duration::from_millis(1)),
        }
    }

    /// Registers an observer. Observers added while the timer is running
    /// start receiving ticks after the next `start`.
    pub fn subscribe(&mut self, observer: Arc<dyn TimerObserver>) {
        let mut observers: Vec<_> = self.observers.iter().cloned().collect();
        observers.push(observer);
        self.observers = Arc::new(observers);
    }

    pub fn status(&self) -> TimerStatus {
        self.state.lock().status
    }

    /// Last sampled elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.state.lock().elapsed_ms
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Starts or resumes the timer. No-op while already running.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(&self) {
        let _notifying = self.notify_lock.lock();
        let (elapsed, generation) = {
            let mut state = self.state.lock();
            if state.status == TimerStatus::Running {
                return;
            }
            state.status = TimerStatus::Running;
            state.baseline_ms = state.elapsed_ms;
            state.running_anchor = Some(Instant::now());
            state.generation += 1;
            (state.elapsed_ms, state.generation)
        };

        tracing::debug!(elapsed_ms = elapsed, "timer started");
        self.notify(TimerStatus::Running, elapsed);
        self.spawn_ticker(elapsed, generation);
    }

    /// Pauses a running timer, keeping the last sampled value. No-op otherwise.
    pub fn pause(&self) {
        let _notifying = self.notify_lock.lock();
        let elapsed = {
            let mut state = self.state.lock();
            if state.status != TimerStatus::Running {
                return;
            }
            state.status = TimerStatus::Paused;
            state.baseline_ms = state.elapsed_ms;
            state.running_anchor = None;
            state.generation += 1;
            state.elapsed_ms
        };

        self.cancel_ticker();
        tracing::debug!(elapsed_ms = elapsed, "timer paused");
        self.notify(TimerStatus::Paused, elapsed);
    }

    /// Stops sampling and returns to idle with zero elapsed time.
    pub fn reset(&self) {
        let _notifying = self.notify_lock.lock();
        {
            let mut state = self.state.lock();
            let generation = state.generation + 1;
            *state = TimerState {
                generation,
                ..TimerState::default()
            };
        }

        self.cancel_ticker();
        tracing::debug!("timer reset");
        self.notify(TimerStatus::Idle, 0);
    }

    /// Caller holds `notify_lock`.
    fn notify(&self, status: TimerStatus, elapsed_ms: u64) {
        for observer in self.observers.iter() {
            observer.on_time_update(elapsed_ms);
            observer.on_status_change(status);
        }
    }

    fn spawn_ticker(&self, initial_ms: u64, generation: u64) {
        let mut ticker_guard = self.ticker.lock();
        if let Some(handle) = ticker_guard.take() {
            handle.abort();
        }

        let state = self.state.clone();
        let observers = self.observers.clone();
        let notify_lock = self.notify_lock.clone();
        let tick_interval = self.tick_interval;

        let handle = tokio::spawn(async move {
            let mut interval = time::interval(tick_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut last_reported = initial_ms;

            loop {
                interval.tick().await;

                let _notifying = notify_lock.lock();
                let elapsed = {
                    let mut guard = state.lock();
                    if guard.generation != generation || guard.status != TimerStatus::Running {
                        break;
                    }
                    guard.sample(Instant::now())
                };

                if elapsed != last_reported {
                    last_reported = elapsed;
                    for observer in observers.iter() {
                        observer.on_time_update(elapsed);
                    }
                }
            }
        });

        *ticker_guard = Some(handle);
    }

    fn cancel_ticker(&self) {
        if let Some(handle) = self.ticker.lock().take() {
            handle.abort();
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.cancel_ticker();
    }
}
