//! The completion flow: retroactively tag recorded periods.
//!
//! Walks the untagged periods of a recorded session and assigns a project
//! (Active periods) or break action (Break/Idle periods) to each, optionally
//! splitting a period between two concurrent activities by percentage.
//! Skipped periods get the configured default tags. New names typed in here
//! are registered in the catalog so reports can archive them later.

use crate::db::records::SessionStore;
use crate::libs::config::Config;
use crate::libs::formatter::{format_date, format_seconds, format_time};
use crate::libs::messages::Message;
use crate::libs::period::PeriodKind;
use crate::libs::session::Session;
use crate::libs::splitter::{apply_tag, TagRequest};
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct TagArgs {}

pub fn cmd(_args: TagArgs) -> Result<()> {
    let mut config = Config::read()?;
    let store = SessionStore::new()?;
    let sessions = store.load()?;

    let mut candidates: Vec<Session> = sessions
        .into_iter()
        .filter(|s| s.is_ended() && (!s.untagged_periods().is_empty() || s.sphere.is_none()))
        .collect();
    if candidates.is_empty() {
        msg_info!(Message::NoUntaggedPeriods);
        return Ok(());
    }
    // Most recent session first; it is the one usually being completed.
    candidates.sort_by(|a, b| b.start_ts.partial_cmp(&a.start_ts).unwrap_or(std::cmp::Ordering::Equal));

    let labels: Vec<String> = candidates.iter().map(session_label).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectSession.to_string())
        .items(&labels)
        .default(0)
        .interact()?;
    let mut session = candidates.swap_remove(selection);

    if session.sphere.is_none() {
        let names: Vec<String> = config.spheres.iter().map(|s| s.name.clone()).collect();
        let sphere = select_or_input(Message::PromptSelectSphere, &names)?;
        config.ensure_sphere(&sphere);
        session.sphere = Some(sphere);
    }
    let sphere = session.sphere.clone().unwrap_or_default();

    for index in session.untagged_periods() {
        let period = &session.periods[index];
        msg_print!(
            format!(
                "\n{} period {} - {} ({})",
                period.kind,
                format_time(period.start_ts),
                format_time(period.end_ts),
                format_seconds(period.duration())
            ),
            true
        );

        let kind = period.kind;
        let options = ["Tag", "Split between two activities", "Skip (use defaults)"];
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPeriodAction.to_string())
            .items(&options)
            .default(0)
            .interact()?;

        let request = match choice {
            0 => {
                let name = prompt_tag_name(&config, &sphere, kind)?;
                let comment = prompt_comment()?;
                TagRequest {
                    primary_tag: name,
                    primary_comment: comment,
                    ..Default::default()
                }
            }
            1 => {
                let primary_tag = prompt_tag_name(&config, &sphere, kind)?;
                let primary_comment = prompt_comment()?;
                msg_print!(Message::PromptSelectSecondary);
                let secondary_tag = prompt_tag_name(&config, &sphere, kind)?;
                let secondary_comment = prompt_comment()?;
                let percentage: u8 = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptSecondaryPercentage.to_string())
                    .validate_with(|value: &u8| {
                        if (1..=99).contains(value) {
                            Ok(())
                        } else {
                            Err(Message::InvalidPercentage(*value).to_string())
                        }
                    })
                    .interact_text()?;
                TagRequest {
                    primary_tag,
                    primary_comment,
                    secondary_tag: Some(secondary_tag),
                    secondary_comment,
                    secondary_percentage: Some(percentage),
                }
            }
            _ => {
                let defaults = config.defaults.clone().unwrap_or_default();
                let name = match kind {
                    PeriodKind::Active => defaults.project,
                    PeriodKind::Break | PeriodKind::Idle => defaults.action,
                };
                msg_info!(Message::TagSkippedDefaults(name.clone()));
                TagRequest::single(name, String::new())
            }
        };

        register_tags(&mut config, &sphere, kind, &request);
        match apply_tag(&mut session.periods[index], request) {
            Ok(()) => {
                if choice != 2 {
                    let name = session.periods[index].assignment.primary_name().unwrap_or_default().to_string();
                    msg_success!(Message::TagApplied(name));
                }
            }
            Err(e) => msg_error!(e.to_string()),
        }
    }

    store.save(&session)?;
    config.save()?;
    msg_success!(Message::TaggingCompleted(session_label(&session)));
    Ok(())
}

fn session_label(session: &Session) -> String {
    format!("{} {}", format_date(session.start_ts), format_time(session.start_ts))
}

/// Picks a name from the catalog, with a free-text escape for new names.
fn select_or_input(prompt: Message, names: &[String]) -> Result<String> {
    if names.is_empty() {
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .interact_text()?;
        return Ok(name);
    }

    let mut items: Vec<&str> = names.iter().map(String::as_str).collect();
    items.push("(new)");
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&items)
        .default(0)
        .interact()?;
    if selection == names.len() {
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .interact_text()?;
        Ok(name)
    } else {
        Ok(names[selection].clone())
    }
}

fn prompt_tag_name(config: &Config, sphere: &str, kind: PeriodKind) -> Result<String> {
    match kind {
        PeriodKind::Active => {
            let names: Vec<String> = config
                .sphere(sphere)
                .map(|s| s.projects.iter().map(|p| p.name.clone()).collect())
                .unwrap_or_default();
            select_or_input(Message::PromptSelectProject, &names)
        }
        PeriodKind::Break | PeriodKind::Idle => {
            let names: Vec<String> = config.actions.iter().map(|a| a.name.clone()).collect();
            select_or_input(Message::PromptSelectAction, &names)
        }
    }
}

fn prompt_comment() -> Result<String> {
    let comment: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptComment.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(comment)
}

/// Grows the catalog with any names used by the request.
fn register_tags(config: &mut Config, sphere: &str, kind: PeriodKind, request: &TagRequest) {
    let mut names = vec![request.primary_tag.as_str()];
    if let Some(secondary) = &request.secondary_tag {
        names.push(secondary.as_str());
    }
    for name in names {
        match kind {
            PeriodKind::Active => config.ensure_project(sphere, name),
            PeriodKind::Break | PeriodKind::Idle => config.ensure_action(name),
        }
    }
}
