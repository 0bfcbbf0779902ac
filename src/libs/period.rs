//! The period data model: closed time intervals within a session.

use std::fmt;

/// What kind of time a period records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKind {
    /// The user was working.
    Active,
    /// The user was on a break.
    Break,
    /// No user input was detected; distinct from an explicit break.
    Idle,
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// How a period came to exist.
///
/// Breaks started by the idle-timeout rule are distinguished from breaks the
/// user toggled, so the tagging flow can present them differently. The marker
/// is live-session metadata only; the persisted record does not carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeriodOrigin {
    #[default]
    User,
    IdleTimeout,
}

/// One side of a percentage split between two concurrent activities.
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub name: String,
    /// Integer percentage in `1..=99`; the two shares of a split sum to 100.
    pub percentage: u8,
    /// Allocated seconds; the two shares of a split sum exactly to the
    /// period's duration.
    pub duration: f64,
    pub comment: String,
}

/// The tag state of a period.
///
/// Exactly one variant is ever present, which is what keeps the persisted
/// record's mutually exclusive `project`/`projects` (or `action`/`actions`)
/// key forms from leaking stale data: the writer serializes whatever variant
/// is current and nothing else.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Assignment {
    /// Not tagged yet (always the case while the session is live).
    #[default]
    None,
    /// A single activity for the whole period.
    Single { name: String, comment: String },
    /// Two concurrent activities with a percentage split.
    Split { primary: Share, secondary: Share },
}

impl Assignment {
    /// Names this assignment mentions, with the seconds allocated to each.
    ///
    /// A single tag owns the full `duration`; a split allocates each share's
    /// own sub-duration. Untagged periods yield nothing.
    pub fn allocations(&self, duration: f64) -> Vec<(&str, f64)> {
        match self {
            Assignment::None => Vec::new(),
            Assignment::Single { name, .. } => vec![(name.as_str(), duration)],
            Assignment::Split { primary, secondary } => vec![
                (primary.name.as_str(), primary.duration),
                (secondary.name.as_str(), secondary.duration),
            ],
        }
    }

    /// The primary tag name, if any.
    pub fn primary_name(&self) -> Option<&str> {
        match self {
            Assignment::None => None,
            Assignment::Single { name, .. } => Some(name),
            Assignment::Split { primary, .. } => Some(&primary.name),
        }
    }
}

/// A closed time interval within a session.
///
/// Once committed by the ledger, `kind`, `start_ts`, and `end_ts` never
/// change; only the assignment is mutated later by the tagging flow.
#[derive(Debug, Clone, PartialEq)]
pub struct Period {
    pub kind: PeriodKind,
    /// Wall-clock start, epoch seconds. Strictly less than `end_ts`.
    pub start_ts: f64,
    /// Wall-clock end, epoch seconds.
    pub end_ts: f64,
    pub origin: PeriodOrigin,
    pub assignment: Assignment,
}

impl Period {
    /// The period's length in seconds, always derived from its bounds.
    pub fn duration(&self) -> f64 {
        self.end_ts - self.start_ts
    }

    pub fn is_tagged(&self) -> bool {
        self.assignment != Assignment::None
    }
}
