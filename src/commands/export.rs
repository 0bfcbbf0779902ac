//! Exporting sessions or report totals to CSV or JSON files.

use crate::db::records::SessionStore;
use crate::libs::analysis::{calculate_totals, AnalysisFilter};
use crate::libs::config::Config;
use crate::libs::export::{ExportData, ExportFormat, Exporter};
use crate::libs::formatter::local_date;
use crate::libs::messages::Message;
use crate::msg_info;
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// What to export
    #[arg(value_enum, default_value_t = ExportData::Sessions)]
    data: ExportData,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,

    /// Output file (defaults to a dated name in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// First date to include (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last date to include (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let store = SessionStore::new()?;
    let mut sessions = store.load()?;
    sessions.retain(|s| {
        let date = local_date(s.start_ts);
        !args.from.is_some_and(|from| date < from) && !args.to.is_some_and(|to| date > to)
    });
    if sessions.is_empty() {
        msg_info!(Message::ExportNothingToDo);
        return Ok(());
    }

    let exporter = Exporter::new(args.format, args.output);
    match args.data {
        ExportData::Sessions => {
            exporter.export_sessions(&sessions)?;
        }
        ExportData::Report => {
            let config = Config::read()?;
            let filter = AnalysisFilter {
                from: args.from,
                to: args.to,
                status: crate::libs::analysis::StatusFilter::All,
                ..Default::default()
            };
            let totals = calculate_totals(&sessions, &config, &filter);
            exporter.export_report(&totals)?;
        }
    }
    Ok(())
}
