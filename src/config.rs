use directories::ProjectDirs;
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{NightmareError, Result};

/// Tick rate for the event loop (100ms)
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// How often the time-of-day bucket is recomputed
pub const TIME_OF_DAY_INTERVAL: Duration = Duration::from_secs(60);

/// How often the idle check runs
pub const IDLE_CHECK_INTERVAL: Duration = Duration::from_secs(10);

/// Inactivity window after which the activity level drops back to idle
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(30);

/// Random events fire after a delay drawn from [min, max)
pub const RANDOM_EVENT_MIN_DELAY: Duration = Duration::from_secs(120);
pub const RANDOM_EVENT_MAX_DELAY: Duration = Duration::from_secs(300);

/// How long a random event stays active
pub const RANDOM_EVENT_DURATION: Duration = Duration::from_secs(3);

/// How long the jump scare overlay stays up
pub const JUMP_SCARE_DURATION: Duration = Duration::from_millis(800);

/// Logo clicks needed for a jump scare
pub const LOGO_CLICK_THRESHOLD: u32 = 3;

/// Interaction counts above which the activity level rises
pub const ACTIVE_THRESHOLD: u64 = 5;
pub const HYPERACTIVE_THRESHOLD: u64 = 20;

/// Completion streak that summons the congratulating ghost
pub const GHOST_STREAK_THRESHOLD: u32 = 3;

/// Ghost timings
pub const GHOST_CHEER_DURATION: Duration = Duration::from_secs(3);
pub const GHOST_IDLE_DELAY: Duration = Duration::from_secs(5);
pub const GHOST_STARE_DURATION: Duration = Duration::from_secs(2);

/// Delay between a stormy weather refresh and its thunder clap
pub const THUNDER_DELAY: Duration = Duration::from_secs(1);

/// Step used by the volume keys
pub const VOLUME_STEP: f32 = 0.1;

/// Furthest a new task's due date may be set, in hours (thirty nights)
pub const MAX_DUE_HOURS: u32 = 720;

/// Environment variable holding an optional u64 seed for every random source
pub const SEED_ENV: &str = "NIGHTMARE_SEED";

/// Environment variable holding the log level
pub const LOG_ENV: &str = "NIGHTMARE_LOG";

/// Get the path to the log file.
///
/// Returns the path to `nightmare.log` in the appropriate data directory:
/// - Linux: `~/.local/share/nightmare/nightmare.log`
/// - macOS: `~/Library/Application Support/nightmare/nightmare.log`
/// - Windows: `C:\Users\<User>\AppData\Roaming\nightmare\nightmare.log`
pub fn get_log_path() -> Result<PathBuf> {
    let proj_dirs =
        ProjectDirs::from("", "", "nightmare").ok_or(NightmareError::NoDataDirectory)?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("nightmare.log"))
}

/// Read the seed for the random sources from the environment.
///
/// Returns `Ok(None)` when the variable is unset, so the caller seeds from entropy.
pub fn seed_from_env() -> Result<Option<u64>> {
    match std::env::var(SEED_ENV) {
        Ok(raw) => parse_seed(&raw).map(Some),
        Err(_) => Ok(None),
    }
}

/// Read the log level from the environment, defaulting to `Info`
pub fn log_level_from_env() -> Result<LevelFilter> {
    match std::env::var(LOG_ENV) {
        Ok(raw) => parse_log_level(&raw),
        Err(_) => Ok(LevelFilter::Info),
    }
}

fn parse_seed(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| NightmareError::InvalidEnv {
            name: SEED_ENV,
            value: raw.to_string(),
        })
}

fn parse_log_level(raw: &str) -> Result<LevelFilter> {
    raw.trim()
        .parse::<LevelFilter>()
        .map_err(|_| NightmareError::InvalidEnv {
            name: LOG_ENV,
            value: raw.to_string(),
        })
}
