use thiserror::Error;

/// Application-specific error type
#[derive(Debug, Error)]
pub enum NightmareError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not determine data directory")]
    NoDataDirectory,

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Convenience type alias for Result with NightmareError
pub type Result<T> = std::result::Result<T, NightmareError>;
