use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouterConfigError {
    #[error("configuration file not found")]
    ConfigNotFound,
    #[error("[router] section missing from configuration")]
    ConfigSectionNotFound,
    #[error("history_limit must be at least 1")]
    InvalidHistoryLimit,
    #[error("Config Error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for RouterConfigError {
    fn from(e: config::ConfigError) -> Self {
        Self::ConfigError(e.to_string())
    }
}
