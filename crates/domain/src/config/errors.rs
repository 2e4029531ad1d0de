/// Why a dnsrelay configuration could not be produced.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Unknown log level '{0}' (expected off, error, warn, info, debug or trace)")]
    LogLevel(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
