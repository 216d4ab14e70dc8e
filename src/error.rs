use thiserror::Error;

/// Errors that can occur while loading the board configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown shortcut key: {0}")]
    UnknownKey(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Fatal startup failures
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to open window: {0}")]
    Window(#[from] eframe::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
