use serde::{Deserialize, Serialize};
use std::path::Path;

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

const LOCAL_CONFIG_PATH: &str = "dnsrelay.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnsrelay/config.toml";
const MIN_PACKET_SIZE: usize = 12;

/// Main configuration structure for dnsrelay
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Client-facing socket
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream resolver used on cache misses
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Record cache persistence
    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsrelay.toml in current directory
    /// 3. /etc/dnsrelay/config.toml
    /// 4. Default configuration
    ///
    /// CLI overrides are applied last, then the result is validated.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        Self::from_toml_str(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(upstream) = overrides.upstream {
            self.upstream.address = upstream;
        }
        if let Some(path) = overrides.cache_file {
            self.cache.snapshot_path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.max_packet_size < MIN_PACKET_SIZE {
            return Err(ConfigError::Validation(format!(
                "max_packet_size must be at least {} bytes",
                MIN_PACKET_SIZE
            )));
        }

        self.upstream
            .socket_addr()
            .map_err(ConfigError::Validation)?;

        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout cannot be 0".to_string(),
            ));
        }

        if self.cache.snapshot_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Cache snapshot path cannot be empty".to_string(),
            ));
        }

        self.logging.validate()
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub upstream: Option<String>,
    pub cache_file: Option<String>,
    pub log_level: Option<String>,
}
