//! Sessions and their running totals.

use crate::libs::period::{Period, PeriodKind};

/// Running sums of a session's closed periods, in seconds.
///
/// The period list is the source of truth; these sums are an accumulator
/// updated on every period close and recomputable from the list at any time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SessionTotals {
    pub active: f64,
    pub breaks: f64,
    pub idle: f64,
}

impl SessionTotals {
    /// Folds one closed period into the sums.
    pub fn add(&mut self, period: &Period) {
        match period.kind {
            PeriodKind::Active => self.active += period.duration(),
            PeriodKind::Break => self.breaks += period.duration(),
            PeriodKind::Idle => self.idle += period.duration(),
        }
    }

    /// Rebuilds the sums from a period list.
    pub fn recompute(periods: &[Period]) -> Self {
        let mut totals = Self::default();
        for period in periods {
            totals.add(period);
        }
        totals
    }

    /// Break time as reported in top-level summaries: idle time is merged
    /// into it for display, while staying distinct in the period list.
    pub fn break_display(&self) -> f64 {
        self.breaks + self.idle
    }
}

/// One recorded work session: an ordered, gapless list of periods plus
/// session-level metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Wall-clock start, epoch seconds.
    pub start_ts: f64,
    /// Set once at `end_session`; `None` while the session is live.
    pub end_ts: Option<f64>,
    /// Top-level category, assigned at completion time.
    pub sphere: Option<String>,
    pub periods: Vec<Period>,
    pub totals: SessionTotals,
}

impl Session {
    pub fn new(start_ts: f64) -> Self {
        Session {
            start_ts,
            end_ts: None,
            sphere: None,
            periods: Vec::new(),
            totals: SessionTotals::default(),
        }
    }

    /// Appends a closed period and folds it into the totals.
    ///
    /// Only the ledger calls this; it guarantees ordering and gaplessness.
    pub fn push_period(&mut self, period: Period) {
        self.totals.add(&period);
        self.periods.push(period);
    }

    /// Total elapsed wall-clock seconds, up to `at` for a live session.
    pub fn elapsed(&self, at: f64) -> f64 {
        self.end_ts.unwrap_or(at) - self.start_ts
    }

    pub fn is_ended(&self) -> bool {
        self.end_ts.is_some()
    }

    /// Indices of periods the tagging flow still has to visit.
    pub fn untagged_periods(&self) -> Vec<usize> {
        self.periods
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_tagged())
            .map(|(i, _)| i)
            .collect()
    }
}
