//! Data export for external analysis and backup.
//!
//! Flattens recorded sessions or report totals into rows and writes them as
//! CSV or pretty-printed JSON. File names carry the current date so repeated
//! exports don't overwrite each other unless an explicit path is given.

use crate::libs::analysis::Totals;
use crate::libs::formatter::{format_date, format_seconds, format_time};
use crate::libs::messages::Message;
use crate::libs::period::Assignment;
use crate::libs::session::Session;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheets and simple tooling.
    Csv,
    /// Pretty-printed JSON preserving types and structure.
    Json,
}

/// What to export.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// One row per period across all exported sessions.
    Sessions,
    /// The aggregated report totals, one row per tag.
    Report,
}

/// One period (or period share) flattened for export.
#[derive(Debug, Serialize)]
struct PeriodRow {
    date: String,
    sphere: String,
    kind: String,
    start: String,
    end: String,
    duration: String,
    duration_seconds: f64,
    tag: String,
    percentage: Option<u8>,
    comment: String,
}

/// One report line flattened for export.
#[derive(Debug, Serialize)]
struct ReportRow {
    tag: String,
    duration: String,
    duration_seconds: f64,
}

pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Exporter { format, output }
    }

    /// Writes one row per period share across the given sessions.
    ///
    /// Split periods produce two rows, each with its allocated sub-duration,
    /// so summing the `duration_seconds` column per tag matches the report.
    pub fn export_sessions(&self, sessions: &[Session]) -> Result<PathBuf> {
        let mut rows = Vec::new();
        for session in sessions {
            let sphere = session.sphere.clone().unwrap_or_default();
            for period in &session.periods {
                let base = |tag: String, percentage: Option<u8>, duration: f64, comment: String| PeriodRow {
                    date: format_date(session.start_ts),
                    sphere: sphere.clone(),
                    kind: period.kind.to_string(),
                    start: format_time(period.start_ts),
                    end: format_time(period.end_ts),
                    duration: format_seconds(duration),
                    duration_seconds: duration,
                    tag,
                    percentage,
                    comment,
                };
                match &period.assignment {
                    Assignment::None => rows.push(base(String::new(), None, period.duration(), String::new())),
                    Assignment::Single { name, comment } => {
                        rows.push(base(name.clone(), None, period.duration(), comment.clone()))
                    }
                    Assignment::Split { primary, secondary } => {
                        for share in [primary, secondary] {
                            rows.push(base(share.name.clone(), Some(share.percentage), share.duration, share.comment.clone()));
                        }
                    }
                }
            }
        }
        self.write(&rows, "sessions")
    }

    /// Writes the per-tag breakdown of a report.
    pub fn export_report(&self, totals: &Totals) -> Result<PathBuf> {
        let mut rows: Vec<ReportRow> = totals
            .by_tag
            .iter()
            .map(|t| ReportRow {
                tag: t.name.clone(),
                duration: format_seconds(t.seconds),
                duration_seconds: t.seconds,
            })
            .collect();
        if totals.untagged > 0.0 {
            rows.push(ReportRow {
                tag: "(untagged)".to_string(),
                duration: format_seconds(totals.untagged),
                duration_seconds: totals.untagged,
            });
        }
        self.write(&rows, "report")
    }

    fn write<T: Serialize>(&self, rows: &[T], prefix: &str) -> Result<PathBuf> {
        let path = self.resolve_path(prefix);
        match self.format {
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_path(&path)?;
                for row in rows {
                    writer.serialize(row)?;
                }
                writer.flush()?;
            }
            ExportFormat::Json => {
                let mut file = File::create(&path)?;
                serde_json::to_writer_pretty(&file, rows)?;
                file.flush()?;
            }
        }
        msg_success!(Message::ExportCompleted(path.display().to_string()));
        Ok(path)
    }

    fn resolve_path(&self, prefix: &str) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }
        let extension = match self.format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };
        PathBuf::from(format!("stint_{}_{}.{}", prefix, Local::now().format("%Y-%m-%d"), extension))
    }
}
