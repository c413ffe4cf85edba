use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::OpenOptions;

use crate::config::{get_log_path, log_level_from_env};
use crate::error::Result;

/// Route the `log` facade to a file in the data directory.
///
/// The terminal belongs to the UI, so nothing is written to stdout or stderr.
pub fn init_logging() -> Result<()> {
    let level = log_level_from_env()?;
    let path = get_log_path()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let config = ConfigBuilder::new()
        .set_target_level(level)
        .set_thread_level(log::LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, file)?;
    log::info!("logging to {}", path.display());
    Ok(())
}
