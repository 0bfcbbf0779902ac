//! The live tracking command: one full session from start to end.

use crate::db::records::SessionStore;
use crate::libs::config::Config;
use crate::libs::monitor::Tracker;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TrackArgs {
    /// Sphere to assign to the session up front (otherwise assigned during tagging)
    #[arg(short, long)]
    sphere: Option<String>,
}

/// Starts a session and runs the tracker loop until it ends.
pub async fn cmd(args: TrackArgs) -> Result<()> {
    let config = Config::read()?;
    let monitor_config = config.monitor.unwrap_or_default();
    let store = SessionStore::new()?;

    let tracker = Tracker::start(&monitor_config, store, args.sphere)?;
    tracker.run().await
}
