//! # Stint - Session Time Tracker
//!
//! A command-line utility for tracking work sessions, detecting idle time,
//! and attributing recorded periods to projects for later analysis.
//!
//! ## Features
//!
//! - **Session Tracking**: Explicit session start/end with break toggling
//! - **Idle Detection**: Passive idle periods derived from mouse/keyboard input
//! - **Period Ledger**: Gapless, non-overlapping Active/Break/Idle periods
//! - **Retroactive Tagging**: Assign projects and break actions after the fact,
//!   optionally splitting a period between two concurrent activities
//! - **Analysis**: Totals by date range, sphere, tag, and archive status
//! - **Data Export**: CSV and JSON export of sessions and reports
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stint::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
