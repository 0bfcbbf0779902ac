pub mod export;
pub mod init;
pub mod report;
pub mod sessions;
pub mod tag;
pub mod track;

use clap::{Parser, Subcommand};
use anyhow::Result;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Start a session and track activity until it ends")]
    Track(track::TrackArgs),
    #[command(about = "Tag recorded periods with projects and break actions")]
    Tag(tag::TagArgs),
    #[command(about = "List or delete recorded sessions")]
    Sessions(sessions::SessionsArgs),
    #[command(about = "Aggregate recorded time by date range, sphere, and tag")]
    Report(report::ReportArgs),
    #[command(about = "Export sessions or report totals to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Track(args) => track::cmd(args).await,
            Commands::Tag(args) => tag::cmd(args),
            Commands::Sessions(args) => sessions::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
