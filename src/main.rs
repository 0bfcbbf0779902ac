use anyhow::Result;
use stint::commands::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // In debug mode the message macros route to tracing instead of the
    // console; give them a subscriber honoring RUST_LOG.
    if stint::libs::messages::macros::is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    Cli::menu().await
}
