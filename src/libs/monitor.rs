//! Input monitoring and the live session loop.
//!
//! The monitor has two halves. [`InputTracker`] wraps the global input hooks
//! and exposes a single fact: the wall-clock timestamp of the most recent
//! user input. The hook listener runs on its own native thread and only ever
//! writes that one scalar; the ledger reads it on each tick, so staleness by
//! one poll interval is harmless and no further synchronization is needed.
//!
//! [`Tracker`] drives a live session: it ticks the ledger on a fixed
//! interval, applies break toggles and the end command from stdin or Ctrl-C,
//! and persists the session record every time a period closes.

use crate::db::records::SessionStore;
use crate::libs::config::MonitorConfig;
use crate::libs::formatter::{format_seconds, format_time};
use crate::libs::ledger::{LedgerState, PeriodLedger};
use crate::libs::messages::Message;
use crate::libs::period::PeriodOrigin;
use crate::{msg_bail_anyhow, msg_debug, msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use parking_lot::Mutex;
use rdev::{listen, Event, EventType};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{self, Duration};

/// Current wall-clock time as epoch seconds.
pub fn now_ts() -> f64 {
    Local::now().timestamp_millis() as f64 / 1000.0
}

/// Shared "timestamp of last user input" value.
///
/// Cloning shares the underlying value; the listener thread is the single
/// writer, every reader just samples the latest timestamp.
#[derive(Clone)]
pub struct InputTracker {
    last_input: Arc<Mutex<f64>>,
}

impl InputTracker {
    /// Creates a tracker seeded with `now`, without any OS hooks. The ledger
    /// treats the seed as "input happened at session start".
    pub fn new(now: f64) -> Self {
        InputTracker {
            last_input: Arc::new(Mutex::new(now)),
        }
    }

    /// Spawns the global input listener thread.
    ///
    /// Keyboard presses, mouse button presses, wheel scrolls, and pointer
    /// moves all count as input. The listener is restarted after errors to
    /// keep monitoring continuous.
    pub fn spawn_listener(&self) {
        let shared_last_input = self.last_input.clone();
        std::thread::spawn(move || loop {
            let last_input_for_listener = shared_last_input.clone();
            if let Err(e) = listen(move |event: Event| match event.event_type {
                EventType::KeyPress(_) | EventType::ButtonPress(_) | EventType::Wheel { .. } | EventType::MouseMove { .. } => {
                    *last_input_for_listener.lock() = now_ts();
                }
                _ => {}
            }) {
                msg_debug!(format!("input listener failed: {:?}, retrying in 1 second", e));
                std::thread::sleep(std::time::Duration::from_secs(1));
            } else {
                break;
            }
        });
    }

    /// The most recent input timestamp, epoch seconds.
    pub fn last_input_ts(&self) -> f64 {
        *self.last_input.lock()
    }

    /// Records input at `ts`. Used by tests to inject synthetic activity.
    pub fn touch(&self, ts: f64) {
        *self.last_input.lock() = ts;
    }
}

/// Runs one live session from start to end.
pub struct Tracker {
    ledger: PeriodLedger,
    input: InputTracker,
    store: SessionStore,
    config: MonitorConfig,
    persisted_periods: usize,
}

impl Tracker {
    /// Starts a session now.
    ///
    /// Rejected if the store still holds a session without an end timestamp:
    /// only one session may be live at a time.
    pub fn start(config: &MonitorConfig, store: SessionStore, sphere: Option<String>) -> Result<Self> {
        if let Some(open_start) = store.open_session()? {
            msg_bail_anyhow!(Message::SessionAlreadyActive(format_time(open_start)));
        }

        let now = now_ts();
        let mut ledger = PeriodLedger::start(now, config);
        ledger.session_mut().sphere = sphere;
        store.save(ledger.session())?;

        Ok(Tracker {
            ledger,
            input: InputTracker::new(now),
            store,
            config: config.clone(),
            persisted_periods: 0,
        })
    }

    /// The main loop: poll ticks, stdin commands, Ctrl-C.
    ///
    /// `b` toggles a break, `q` (or closing stdin, or Ctrl-C) ends the
    /// session. Every period close triggers a save, so a crash loses at most
    /// the open period.
    pub async fn run(mut self) -> Result<()> {
        msg_info!(Message::TrackerStarted {
            idle_threshold: self.config.idle_threshold,
            idle_break_threshold: self.config.idle_break_threshold,
            poll_interval: self.config.poll_interval,
        });
        msg_print!(Message::TrackerHint);
        msg_success!(Message::SessionStarted(format_time(self.ledger.session().start_ts)));

        self.input.spawn_listener();

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::oneshot::channel();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    msg_info!(Message::TrackerReceivedCtrlC);
                }
                Err(e) => {
                    msg_error!(Message::TrackerCtrlCListenFailed(e.to_string()));
                }
            }
            let _ = shutdown_tx.send(());
        });

        let mut poll = time::interval(Duration::from_millis(self.config.poll_interval));
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            tokio::select! {
                _ = poll.tick() => {
                    let state_before = self.ledger.state();
                    self.ledger.tick(now_ts(), self.input.last_input_ts());
                    self.report_transition(state_before);
                    self.persist_closed()?;
                }
                line = lines.next_line() => {
                    match line?.as_deref().map(str::trim) {
                        Some("b") => {
                            let state_before = self.ledger.state();
                            self.ledger.toggle_break(now_ts());
                            self.report_transition(state_before);
                            self.persist_closed()?;
                        }
                        Some("q") | None => break,
                        Some(_) => {}
                    }
                }
                _ = &mut shutdown_rx => break,
            }
        }

        self.finish()
    }

    /// Ends the session and writes the final record.
    fn finish(mut self) -> Result<()> {
        let now = now_ts();
        self.ledger.end_session(now);
        let session = self.ledger.session();
        if let Err(e) = self.store.save(session) {
            msg_error!(Message::SessionSaveFailed(e.to_string()));
            return Err(e);
        }
        msg_success!(Message::SessionEnded(format_time(now), format_seconds(session.elapsed(now))));
        msg_info!(Message::TrackerStopped);
        Ok(())
    }

    fn report_transition(&self, before: LedgerState) {
        let after = self.ledger.state();
        if before == after {
            return;
        }
        // The open period starts where the last committed one ended.
        let boundary = self.ledger.session().periods.last().map_or(self.ledger.session().start_ts, |p| p.end_ts);
        match after {
            LedgerState::OnBreak => {
                if self.ledger.open_origin() == PeriodOrigin::IdleTimeout {
                    msg_info!(Message::AutoBreakStarted(format_time(boundary)));
                } else {
                    msg_info!(Message::BreakStarted(format_time(boundary)));
                }
            }
            LedgerState::Active if before == LedgerState::OnBreak => {
                msg_info!(Message::BreakEnded(format_time(boundary)));
            }
            _ => {}
        }
    }

    /// Saves the session whenever new periods were committed.
    fn persist_closed(&mut self) -> Result<()> {
        let committed = self.ledger.session().periods.len();
        if committed != self.persisted_periods {
            self.store.save(self.ledger.session())?;
            self.persisted_periods = committed;
        }
        Ok(())
    }
}
