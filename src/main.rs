//! Rolodex - main entry point.
//!
//! Loads configuration, opens the directory from its backing file, and
//! hands control to the interactive command loop.

use anyhow::Result;
use rolodex::{cli, Config, Directory};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first; the log level comes from it
    let config = Config::from_env()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(path = %config.data_path.display(), "opening contact directory");

    let mut directory = match Directory::load(&config.data_path) {
        Ok(directory) => directory,
        Err(e) => {
            error!("Failed to load contact directory: {}", e);
            return Err(e.into());
        }
    };

    cli::run(&mut directory)?;
    Ok(())
}
