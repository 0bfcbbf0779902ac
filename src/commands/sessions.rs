//! Listing and deleting recorded sessions.

use crate::db::records::SessionStore;
use crate::libs::formatter::{format_date, format_time};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct SessionsArgs {
    /// Show the period list of the session with this number
    #[arg(short, long)]
    periods: Option<usize>,

    /// Delete the session with this number (as shown by the listing)
    #[arg(short, long)]
    delete: Option<usize>,
}

pub fn cmd(args: SessionsArgs) -> Result<()> {
    let store = SessionStore::new()?;
    let sessions = store.load()?;
    if sessions.is_empty() {
        msg_info!(Message::NoSessionsFound);
        return Ok(());
    }

    if let Some(number) = args.delete {
        let Some(session) = sessions.get(number.wrapping_sub(1)) else {
            msg_info!(Message::SessionNotFound(number));
            return Ok(());
        };
        let label = format!("{} {}", format_date(session.start_ts), format_time(session.start_ts));
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteSession(label.clone()).to_string())
            .default(false)
            .interact()?;
        if confirmed && store.delete(session.start_ts)? {
            msg_success!(Message::SessionDeleted(label));
        }
        return Ok(());
    }

    if let Some(number) = args.periods {
        let Some(session) = sessions.get(number.wrapping_sub(1)) else {
            msg_info!(Message::SessionNotFound(number));
            return Ok(());
        };
        View::periods(&session.periods);
        return Ok(());
    }

    View::sessions(&sessions);
    Ok(())
}
