//! Display implementation for stint application messages.
//!
//! All user-facing text is defined in this one place, so wording stays
//! consistent and message variants stay type-safe with their parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleMonitor => "Monitor configuration".to_string(),
            Message::ConfigModuleDefaults => "Defaults used when a period is skipped during tagging".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptIdleThreshold => "Seconds without input before a period turns idle".to_string(),
            Message::PromptIdleBreakThreshold => "Seconds of idle time before an automatic break starts".to_string(),
            Message::PromptPollInterval => "Poll interval in milliseconds".to_string(),
            Message::PromptDefaultSphere => "Default sphere".to_string(),
            Message::PromptDefaultProject => "Default project".to_string(),
            Message::PromptDefaultAction => "Default break action".to_string(),

            // === SESSION MESSAGES ===
            Message::SessionStarted(start) => format!("Session started at {}", start),
            Message::SessionEnded(end, total) => format!("Session ended at {} (total {})", end, total),
            Message::SessionAlreadyActive(start) => {
                format!("A session started at {} is still open. End or delete it before starting a new one.", start)
            }
            Message::SessionDeleted(label) => format!("Session {} deleted", label),
            Message::SessionNotFound(index) => format!("No session with number {}", index),
            Message::ConfirmDeleteSession(label) => format!("Delete session {}?", label),
            Message::NoSessionsFound => "No recorded sessions yet".to_string(),
            Message::NoSessionsForFilter => "No sessions match the given filter".to_string(),

            // === TRACKER MESSAGES ===
            Message::TrackerStarted {
                idle_threshold,
                idle_break_threshold,
                poll_interval,
            } => format!(
                "Tracker started (idle after {}s, auto-break after {}s idle, polling every {}ms)",
                idle_threshold, idle_break_threshold, poll_interval
            ),
            Message::TrackerStopped => "Tracker stopped".to_string(),
            Message::TrackerHint => "Type 'b' + Enter to toggle a break, 'q' + Enter (or Ctrl-C) to end the session".to_string(),
            Message::TrackerReceivedCtrlC => "Received Ctrl-C, ending session...".to_string(),
            Message::TrackerCtrlCListenFailed(e) => format!("Failed to listen for Ctrl-C: {}", e),
            Message::BreakStarted(start) => format!("Break started at {}", start),
            Message::BreakEnded(end) => format!("Break ended at {}", end),
            Message::AutoBreakStarted(start) => format!("Idle long enough, automatic break started at {}", start),
            Message::InputClockSkew(reported, clamped) => {
                format!("Input timestamp {:.3} is before the open period, clamped to {:.3}", reported, clamped)
            }

            // === TAGGING MESSAGES ===
            Message::TagApplied(name) => format!("Period tagged as '{}'", name),
            Message::TagSkippedDefaults(name) => format!("Period skipped, default tag '{}' assigned", name),
            Message::NoUntaggedPeriods => "All periods are already tagged".to_string(),
            Message::PromptSelectSession => "Select a session to tag".to_string(),
            Message::PromptSelectSphere => "Sphere for this session".to_string(),
            Message::PromptSelectProject => "Project".to_string(),
            Message::PromptSelectAction => "Break action".to_string(),
            Message::PromptSelectSecondary => "Secondary activity".to_string(),
            Message::PromptPeriodAction => "What to do with this period".to_string(),
            Message::PromptComment => "Comment (empty for none)".to_string(),
            Message::PromptSecondaryPercentage => "Secondary activity share in percent (1-99)".to_string(),
            Message::InvalidPercentage(pct) => format!("Percentage must be between 1 and 99, got {}", pct),
            Message::TaggingCompleted(label) => format!("Tagging completed for session {}", label),

            // === REPORT MESSAGES ===
            Message::ReportHeader(filter) => format!("📊 Time report — {}", filter),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportNothingToDo => "Nothing to export for the given filter".to_string(),

            // === STORE MESSAGES ===
            Message::SessionsFileMalformed(path) => {
                format!("Session file {} is malformed, starting with an empty dataset", path)
            }
            Message::SessionSaveFailed(e) => format!("Failed to save session data: {}", e),
        };
        write!(f, "{}", text)
    }
}
