//! JSON-file-backed storage for session records.
//!
//! Sessions are persisted as an array of records in a single `sessions.json`
//! file under the application data directory. Every save is a
//! read-modify-write of that file: the existing records are loaded, the
//! saved session's record is replaced (or appended), and the whole array is
//! written back, so a failed save never clobbers other sessions.
//!
//! ## Record format
//!
//! The on-disk shape is the legacy one the analysis tooling expects, with
//! periods grouped by kind and numeric timestamps next to formatted strings:
//!
//! ```json
//! {
//!   "sphere": "Work",
//!   "date": "2025-01-15",
//!   "start_time": "09:00:00", "start_timestamp": 1736928000.0,
//!   "end_time": "17:00:00",   "end_timestamp": 1736956800.0,
//!   "total_duration": 28800.0, "active_duration": 27000.0, "break_duration": 1800.0,
//!   "active":       [{ "start": "...", "start_timestamp": 0.0, ..., "project": "..." }],
//!   "breaks":       [{ ..., "action": "..." }],
//!   "idle_periods": [{ ..., "actions": [ ... ] }]
//! }
//! ```
//!
//! A period carries either the single-tag key (`project`/`action`) or the
//! split array (`projects`/`actions`), never both. The writer rebuilds each
//! record from the in-memory assignment on every save, which is what deletes
//! the unused form's keys when a period switches between single and split.
//! The numeric `*_timestamp` fields are authoritative on load; the formatted
//! strings are display-only.

use crate::libs::data_storage::DataStorage;
use crate::libs::formatter::{format_date, format_time};
use crate::libs::messages::Message;
use crate::libs::period::{Assignment, Period, PeriodKind, PeriodOrigin, Share};
use crate::libs::session::{Session, SessionTotals};
use crate::msg_warning;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Data file holding all persisted session records.
pub const SESSIONS_FILE_NAME: &str = "sessions.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShareRecord {
    name: String,
    percentage: u8,
    comment: String,
    duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_primary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    break_primary: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PeriodRecord {
    start: String,
    start_timestamp: f64,
    end: String,
    end_timestamp: f64,
    duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    projects: Option<Vec<ShareRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actions: Option<Vec<ShareRecord>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    sphere: Option<String>,
    date: String,
    start_time: String,
    start_timestamp: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_timestamp: Option<f64>,
    total_duration: f64,
    active_duration: f64,
    break_duration: f64,
    #[serde(default)]
    active: Vec<PeriodRecord>,
    #[serde(default)]
    breaks: Vec<PeriodRecord>,
    #[serde(default)]
    idle_periods: Vec<PeriodRecord>,
}

fn share_to_record(share: &Share, kind: PeriodKind, primary: bool) -> ShareRecord {
    let flag = Some(primary);
    ShareRecord {
        name: share.name.clone(),
        percentage: share.percentage,
        comment: share.comment.clone(),
        duration: share.duration,
        project_primary: if kind == PeriodKind::Active { flag } else { None },
        break_primary: if kind != PeriodKind::Active { flag } else { None },
    }
}

fn record_to_share(record: &ShareRecord) -> Share {
    Share {
        name: record.name.clone(),
        percentage: record.percentage,
        duration: record.duration,
        comment: record.comment.clone(),
    }
}

fn period_to_record(period: &Period) -> PeriodRecord {
    let mut record = PeriodRecord {
        start: format_time(period.start_ts),
        start_timestamp: period.start_ts,
        end: format_time(period.end_ts),
        end_timestamp: period.end_ts,
        duration: period.duration(),
        project: None,
        projects: None,
        action: None,
        actions: None,
        comment: String::new(),
    };

    match &period.assignment {
        Assignment::None => {}
        Assignment::Single { name, comment } => {
            record.comment = comment.clone();
            match period.kind {
                PeriodKind::Active => record.project = Some(name.clone()),
                PeriodKind::Break | PeriodKind::Idle => record.action = Some(name.clone()),
            }
        }
        Assignment::Split { primary, secondary } => {
            let shares = vec![
                share_to_record(primary, period.kind, true),
                share_to_record(secondary, period.kind, false),
            ];
            match period.kind {
                PeriodKind::Active => record.projects = Some(shares),
                PeriodKind::Break | PeriodKind::Idle => record.actions = Some(shares),
            }
        }
    }

    record
}

fn record_to_period(record: &PeriodRecord, kind: PeriodKind) -> Period {
    let shares = record.projects.as_ref().or(record.actions.as_ref());
    let assignment = if let Some(shares) = shares {
        // Primary is flagged explicitly; older records may rely on order.
        let primary_idx = shares
            .iter()
            .position(|s| s.project_primary == Some(true) || s.break_primary == Some(true))
            .unwrap_or(0);
        let secondary_idx = if primary_idx == 0 { 1 } else { 0 };
        match (shares.get(primary_idx), shares.get(secondary_idx)) {
            (Some(primary), Some(secondary)) => Assignment::Split {
                primary: record_to_share(primary),
                secondary: record_to_share(secondary),
            },
            (Some(only), None) => Assignment::Single {
                name: only.name.clone(),
                comment: only.comment.clone(),
            },
            _ => Assignment::None,
        }
    } else if let Some(name) = record.project.as_ref().or(record.action.as_ref()) {
        Assignment::Single {
            name: name.clone(),
            comment: record.comment.clone(),
        }
    } else {
        Assignment::None
    };

    Period {
        kind,
        start_ts: record.start_timestamp,
        end_ts: record.end_timestamp,
        origin: PeriodOrigin::User,
        assignment,
    }
}

fn session_to_record(session: &Session) -> SessionRecord {
    let mut record = SessionRecord {
        sphere: session.sphere.clone(),
        date: format_date(session.start_ts),
        start_time: format_time(session.start_ts),
        start_timestamp: session.start_ts,
        end_time: session.end_ts.map(format_time),
        end_timestamp: session.end_ts,
        total_duration: session.end_ts.map_or(0.0, |end| end - session.start_ts),
        active_duration: session.totals.active,
        break_duration: session.totals.break_display(),
        active: Vec::new(),
        breaks: Vec::new(),
        idle_periods: Vec::new(),
    };

    for period in &session.periods {
        let period_record = period_to_record(period);
        match period.kind {
            PeriodKind::Active => record.active.push(period_record),
            PeriodKind::Break => record.breaks.push(period_record),
            PeriodKind::Idle => record.idle_periods.push(period_record),
        }
    }

    record
}

fn record_to_session(record: &SessionRecord) -> Session {
    let mut periods: Vec<Period> = record
        .active
        .iter()
        .map(|p| record_to_period(p, PeriodKind::Active))
        .chain(record.breaks.iter().map(|p| record_to_period(p, PeriodKind::Break)))
        .chain(record.idle_periods.iter().map(|p| record_to_period(p, PeriodKind::Idle)))
        .collect();
    periods.sort_by(|a, b| a.start_ts.partial_cmp(&b.start_ts).unwrap_or(std::cmp::Ordering::Equal));

    let totals = SessionTotals::recompute(&periods);
    Session {
        start_ts: record.start_timestamp,
        end_ts: record.end_timestamp,
        sphere: record.sphere.clone(),
        periods,
        totals,
    }
}

/// Store for the per-session JSON records.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Opens the store at the platform data directory.
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(SESSIONS_FILE_NAME)?;
        Ok(SessionStore { path })
    }

    /// Opens the store at an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        SessionStore { path }
    }

    /// Loads all persisted sessions, ordered by start.
    ///
    /// A missing or malformed file yields an empty dataset rather than an
    /// error; malformed files are reported with a warning.
    pub fn load(&self) -> Result<Vec<Session>> {
        let mut sessions: Vec<Session> = self.load_records()?.iter().map(record_to_session).collect();
        sessions.sort_by(|a, b| a.start_ts.partial_cmp(&b.start_ts).unwrap_or(std::cmp::Ordering::Equal));
        Ok(sessions)
    }

    /// Saves one session, replacing any record with the same start.
    ///
    /// All other records pass through untouched.
    pub fn save(&self, session: &Session) -> Result<()> {
        let mut records = self.load_records()?;
        let record = session_to_record(session);
        match records.iter_mut().find(|r| r.start_timestamp == session.start_ts) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        self.write_records(&records)
    }

    /// Deletes the session starting at `start_ts`. Returns whether a record
    /// was removed.
    pub fn delete(&self, start_ts: f64) -> Result<bool> {
        let mut records = self.load_records()?;
        let before = records.len();
        records.retain(|r| r.start_timestamp != start_ts);
        if records.len() == before {
            return Ok(false);
        }
        self.write_records(&records)?;
        Ok(true)
    }

    /// The start timestamp of a persisted session that was never ended, if
    /// one exists. Used to reject starting a second live session.
    pub fn open_session(&self) -> Result<Option<f64>> {
        Ok(self
            .load_records()?
            .iter()
            .find(|r| r.end_timestamp.is_none())
            .map(|r| r.start_timestamp))
    }

    fn load_records(&self) -> Result<Vec<SessionRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&contents) {
            Ok(records) => Ok(records),
            Err(_) => {
                msg_warning!(Message::SessionsFileMalformed(self.path.display().to_string()));
                Ok(Vec::new())
            }
        }
    }

    fn write_records(&self, records: &[SessionRecord]) -> Result<()> {
        let file = fs::File::create(&self.path)?;
        serde_json::to_writer_pretty(&file, records)?;
        Ok(())
    }
}
