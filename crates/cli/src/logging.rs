use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global stderr subscriber
///
/// `verbose` forces DEBUG; otherwise the configured level applies.
pub fn init(verbose: bool, configured: Level) -> Result<()> {
    let log_level = if verbose { Level::DEBUG } else { configured };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}
