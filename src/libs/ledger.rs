//! The period ledger: the state machine that partitions a live session's
//! wall-clock time into Active, Break, and Idle periods.
//!
//! The ledger advances on a fixed poll tick and on explicit user commands
//! (break toggle, session end). It maintains four invariants over the
//! committed period list at every step:
//!
//! 1. Periods are strictly ordered by start, with no overlaps.
//! 2. Consecutive periods share a boundary: every instant of the session
//!    belongs to exactly one period.
//! 3. Period durations sum to the session's elapsed time.
//! 4. No committed period has zero or negative duration.
//!
//! Gaplessness falls out of the construction: the open period always starts
//! where the previous one closed, and a close that would commit a
//! zero-duration period is discarded with its start reused for the next one.

use crate::libs::config::MonitorConfig;
use crate::libs::messages::Message;
use crate::libs::period::{Assignment, Period, PeriodKind, PeriodOrigin};
use crate::libs::session::Session;
use crate::{msg_debug, msg_warning};

/// The state the open period is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerState {
    Active,
    OnBreak,
    Idle,
}

impl LedgerState {
    fn kind(self) -> PeriodKind {
        match self {
            LedgerState::Active => PeriodKind::Active,
            LedgerState::OnBreak => PeriodKind::Break,
            LedgerState::Idle => PeriodKind::Idle,
        }
    }
}

/// State machine owning the current session's closed periods plus exactly
/// one open period.
///
/// The ledger never reads the clock or the input hooks itself: `now` and
/// `last_input_ts` are injected on every call, which keeps it deterministic
/// under test.
#[derive(Debug)]
pub struct PeriodLedger {
    session: Session,
    state: LedgerState,
    /// Start of the open period. Always equals the last committed period's
    /// end (or the session start).
    open_start: f64,
    /// Origin recorded for the open period when it closes.
    open_origin: PeriodOrigin,
    idle_threshold: f64,
    idle_break_threshold: f64,
    ended: bool,
}

impl PeriodLedger {
    /// Starts a session at `now` with an open Active period.
    pub fn start(now: f64, config: &MonitorConfig) -> Self {
        PeriodLedger {
            session: Session::new(now),
            state: LedgerState::Active,
            open_start: now,
            open_origin: PeriodOrigin::User,
            idle_threshold: config.idle_threshold as f64,
            idle_break_threshold: config.idle_break_threshold as f64,
            ended: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn state(&self) -> LedgerState {
        self.state
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Origin the currently open period was created with.
    pub fn open_origin(&self) -> PeriodOrigin {
        self.open_origin
    }

    /// Advances the machine by one poll tick.
    ///
    /// `now` is the current wall clock; `last_input_ts` is the most recent
    /// input timestamp reported by the monitor. Either an Active period goes
    /// Idle (closed at the moment input actually stopped, not at detection
    /// time), an Idle period resumes into a fresh Active period on new input,
    /// or an Idle period that outlasted the auto-break threshold converts
    /// into a Break.
    pub fn tick(&mut self, now: f64, last_input_ts: f64) {
        if self.ended {
            return;
        }
        let last_input = self.clamp_input(last_input_ts);

        match self.state {
            LedgerState::Active => {
                if now - last_input >= self.idle_threshold {
                    self.transition(last_input, LedgerState::Idle, PeriodOrigin::IdleTimeout);
                }
            }
            LedgerState::Idle => {
                // Fresh input wins over the auto-break conversion: the user
                // is demonstrably back, and resuming must always open a new
                // Active period.
                if last_input > self.open_start {
                    self.transition(last_input, LedgerState::Active, PeriodOrigin::User);
                } else if now - self.open_start >= self.idle_break_threshold {
                    self.transition(now, LedgerState::OnBreak, PeriodOrigin::IdleTimeout);
                }
            }
            LedgerState::OnBreak => {}
        }
    }

    /// Explicit break toggle from the user.
    ///
    /// From Active or Idle the open period closes at `now` and a Break
    /// opens; from OnBreak the break closes and a new Active period opens.
    pub fn toggle_break(&mut self, now: f64) {
        if self.ended {
            return;
        }
        match self.state {
            LedgerState::Active | LedgerState::Idle => {
                self.transition(now, LedgerState::OnBreak, PeriodOrigin::User);
            }
            LedgerState::OnBreak => {
                self.transition(now, LedgerState::Active, PeriodOrigin::User);
            }
        }
    }

    /// Force-closes the open period and stops the machine.
    ///
    /// Idempotent: ending an already-ended session changes nothing.
    pub fn end_session(&mut self, now: f64) {
        if self.ended {
            return;
        }
        let end = now.max(self.open_start);
        self.close_open(end);
        self.session.end_ts = Some(end);
        self.ended = true;
        msg_debug!(format!("session ended at {:.3}, {} periods", end, self.session.periods.len()));
    }

    /// Clamps an input timestamp that predates the open period.
    ///
    /// Clock skew between the input hook thread and the tick clock must not
    /// produce a negative-duration period; the skewed value is pulled up to
    /// the open period's start and the condition is logged as recoverable.
    fn clamp_input(&self, last_input_ts: f64) -> f64 {
        if last_input_ts < self.open_start {
            msg_warning!(Message::InputClockSkew(last_input_ts, self.open_start));
            self.open_start
        } else {
            last_input_ts
        }
    }

    /// The single transition path: close the open period at `end_ts`, then
    /// open the next one there.
    ///
    /// A close at the open period's own start would commit a zero-duration
    /// period; it is discarded instead, and the next period reuses the same
    /// start so the list stays gapless.
    fn transition(&mut self, end_ts: f64, next: LedgerState, next_origin: PeriodOrigin) {
        msg_debug!(format!("state transition: {:?} -> {:?} at {:.3}", self.state, next, end_ts));
        self.close_open(end_ts);
        self.state = next;
        self.open_origin = next_origin;
    }

    fn close_open(&mut self, end_ts: f64) {
        let end_ts = end_ts.max(self.open_start);
        if end_ts > self.open_start {
            self.session.push_period(Period {
                kind: self.state.kind(),
                start_ts: self.open_start,
                end_ts,
                origin: self.open_origin,
                assignment: Assignment::None,
            });
            self.open_start = end_ts;
        }
    }
}
