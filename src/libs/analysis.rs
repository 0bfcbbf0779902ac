//! Aggregation over recorded sessions for the report view.
//!
//! Pure functions over already-closed, already-tagged periods: a filter
//! predicate (date range, sphere, tag, active/archived status) and duration
//! sums per kind and per tag. Split periods contribute each share's
//! allocated sub-duration to its own tag, so per-tag sums never double-count
//! while the unfiltered total still recovers full period durations.

use crate::libs::config::Config;
use crate::libs::period::{Assignment, PeriodKind};
use crate::libs::session::Session;
use chrono::NaiveDate;
use std::collections::HashMap;

use super::formatter::local_date;

/// Which catalog-status view a report aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StatusFilter {
    /// Only periods whose sphere and owning entity are both active.
    #[default]
    Active,
    /// Only periods where the sphere or the owning entity is archived.
    Archived,
    /// Everything, regardless of catalog status.
    All,
}

/// Filter over sessions and period contributions.
#[derive(Debug, Clone, Default)]
pub struct AnalysisFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub sphere: Option<String>,
    /// Restrict to one project/action name; split periods contribute only
    /// the share allocated to it.
    pub tag: Option<String>,
    pub status: StatusFilter,
}

impl AnalysisFilter {
    fn matches_session(&self, session: &Session) -> bool {
        let date = local_date(session.start_ts);
        if self.from.is_some_and(|from| date < from) {
            return false;
        }
        if self.to.is_some_and(|to| date > to) {
            return false;
        }
        if let Some(sphere) = &self.sphere {
            if session.sphere.as_deref() != Some(sphere.as_str()) {
                return false;
            }
        }
        true
    }

    /// Human-readable description for the report header.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        match (self.from, self.to) {
            (Some(from), Some(to)) => parts.push(format!("{} to {}", from, to)),
            (Some(from), None) => parts.push(format!("from {}", from)),
            (None, Some(to)) => parts.push(format!("until {}", to)),
            (None, None) => parts.push("all dates".to_string()),
        }
        if let Some(sphere) = &self.sphere {
            parts.push(format!("sphere '{}'", sphere));
        }
        if let Some(tag) = &self.tag {
            parts.push(format!("tag '{}'", tag));
        }
        parts.push(
            match self.status {
                StatusFilter::Active => "active entries",
                StatusFilter::Archived => "archived entries",
                StatusFilter::All => "all entries",
            }
            .to_string(),
        );
        parts.join(", ")
    }
}

/// Seconds attributed to one tag.
#[derive(Debug, Clone, PartialEq)]
pub struct TagTotal {
    pub name: String,
    pub seconds: f64,
}

/// Aggregated durations for a report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    /// Sum of all included contributions. Without a tag filter this equals
    /// the sum of full period durations.
    pub total: f64,
    pub active: f64,
    pub breaks: f64,
    pub idle: f64,
    /// Seconds of included periods that carry no tag yet.
    pub untagged: f64,
    /// Per-tag allocated sums, largest first.
    pub by_tag: Vec<TagTotal>,
    pub session_count: usize,
}

/// Aggregates the sessions that pass the filter.
///
/// The catalog in `config` decides active/archived status: a contribution is
/// "active" when both the session's sphere and the tag's owning entity
/// (project for Active periods, break action for Break/Idle periods) are
/// active. Names missing from the catalog count as active; only an explicit
/// archive flag excludes them.
pub fn calculate_totals(sessions: &[Session], config: &Config, filter: &AnalysisFilter) -> Totals {
    let mut totals = Totals::default();
    let mut by_tag: HashMap<String, f64> = HashMap::new();

    for session in sessions.iter().filter(|s| filter.matches_session(s)) {
        let sphere = session.sphere.as_deref();
        let sphere_active = config.sphere_active(sphere);
        let mut counted = false;

        for period in &session.periods {
            let contributions: Vec<(Option<&str>, f64)> = match &period.assignment {
                Assignment::None => vec![(None, period.duration())],
                _ => period
                    .assignment
                    .allocations(period.duration())
                    .into_iter()
                    .map(|(name, secs)| (Some(name), secs))
                    .collect(),
            };

            for (name, seconds) in contributions {
                let entity_active = match name {
                    Some(name) => match period.kind {
                        PeriodKind::Active => config.project_active(sphere, name),
                        PeriodKind::Break | PeriodKind::Idle => config.action_active(name),
                    },
                    None => true,
                };
                let included = match filter.status {
                    StatusFilter::Active => sphere_active && entity_active,
                    StatusFilter::Archived => !(sphere_active && entity_active),
                    StatusFilter::All => true,
                };
                if !included {
                    continue;
                }
                if let Some(tag) = &filter.tag {
                    if name != Some(tag.as_str()) {
                        continue;
                    }
                }

                totals.total += seconds;
                match period.kind {
                    PeriodKind::Active => totals.active += seconds,
                    PeriodKind::Break => totals.breaks += seconds,
                    PeriodKind::Idle => totals.idle += seconds,
                }
                match name {
                    Some(name) => *by_tag.entry(name.to_string()).or_default() += seconds,
                    None => totals.untagged += seconds,
                }
                counted = true;
            }
        }

        if counted {
            totals.session_count += 1;
        }
    }

    totals.by_tag = by_tag
        .into_iter()
        .map(|(name, seconds)| TagTotal { name, seconds })
        .collect();
    totals
        .by_tag
        .sort_by(|a, b| b.seconds.partial_cmp(&a.seconds).unwrap_or(std::cmp::Ordering::Equal).then(a.name.cmp(&b.name)));

    totals
}
