//! The analysis command: aggregate recorded time under filters.

use crate::db::records::SessionStore;
use crate::libs::analysis::{calculate_totals, AnalysisFilter, StatusFilter};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Only sessions on this date (shorthand for --from DATE --to DATE)
    #[arg(short, long, conflicts_with_all = ["from", "to"])]
    date: Option<NaiveDate>,

    /// First date to include (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last date to include (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Only sessions assigned to this sphere
    #[arg(short, long)]
    sphere: Option<String>,

    /// Only time allocated to this project or break action
    #[arg(short, long)]
    tag: Option<String>,

    /// Which catalog-status view to aggregate
    #[arg(long, value_enum, default_value_t = StatusFilter::Active)]
    status: StatusFilter,
}

impl ReportArgs {
    pub fn filter(&self) -> AnalysisFilter {
        AnalysisFilter {
            from: self.date.or(self.from),
            to: self.date.or(self.to),
            sphere: self.sphere.clone(),
            tag: self.tag.clone(),
            status: self.status,
        }
    }
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let store = SessionStore::new()?;
    let sessions = store.load()?;

    let filter = args.filter();
    let totals = calculate_totals(&sessions, &config, &filter);
    if totals.session_count == 0 {
        msg_info!(Message::NoSessionsForFilter);
        return Ok(());
    }

    msg_print!(Message::ReportHeader(filter.describe()), true);
    View::totals(&totals);
    Ok(())
}
