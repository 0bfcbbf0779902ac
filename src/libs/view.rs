use super::analysis::Totals;
use super::formatter::{format_date, format_seconds, format_time};
use super::period::{Assignment, Period};
use super::session::Session;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints one session per row with its summary durations.
    pub fn sessions(sessions: &[Session]) {
        let mut table = Table::new();

        table.add_row(row!["#", "DATE", "START", "END", "ACTIVE", "BREAK", "PERIODS"]);
        for (index, session) in sessions.iter().enumerate() {
            table.add_row(row![
                index + 1,
                format_date(session.start_ts),
                format_time(session.start_ts),
                session.end_ts.map_or_else(|| "-".to_string(), format_time),
                format_seconds(session.totals.active),
                format_seconds(session.totals.break_display()),
                session.periods.len()
            ]);
        }
        table.printstd();
    }

    /// Prints a session's period list with tags.
    pub fn periods(periods: &[Period]) {
        let mut table = Table::new();

        table.add_row(row!["#", "KIND", "START", "END", "DURATION", "TAG"]);
        for (index, period) in periods.iter().enumerate() {
            table.add_row(row![
                index + 1,
                period.kind,
                format_time(period.start_ts),
                format_time(period.end_ts),
                format_seconds(period.duration()),
                Self::tag_label(period)
            ]);
        }
        table.printstd();
    }

    /// Prints report totals followed by the per-tag breakdown.
    pub fn totals(totals: &Totals) {
        let mut summary = Table::new();
        summary.add_row(row!["SESSIONS", "TOTAL", "ACTIVE", "BREAK", "IDLE"]);
        summary.add_row(row![
            totals.session_count,
            format_seconds(totals.total),
            format_seconds(totals.active),
            format_seconds(totals.breaks + totals.idle),
            format_seconds(totals.idle)
        ]);
        summary.printstd();

        if totals.by_tag.is_empty() && totals.untagged == 0.0 {
            return;
        }
        let mut breakdown = Table::new();
        breakdown.add_row(row!["TAG", "DURATION"]);
        for tag in &totals.by_tag {
            breakdown.add_row(row![tag.name, format_seconds(tag.seconds)]);
        }
        if totals.untagged > 0.0 {
            breakdown.add_row(row!["(untagged)", format_seconds(totals.untagged)]);
        }
        breakdown.printstd();
    }

    fn tag_label(period: &Period) -> String {
        match &period.assignment {
            Assignment::None => "-".to_string(),
            Assignment::Single { name, .. } => name.clone(),
            Assignment::Split { primary, secondary } => {
                format!("{} {}% / {} {}%", primary.name, primary.percentage, secondary.name, secondary.percentage)
            }
        }
    }
}
