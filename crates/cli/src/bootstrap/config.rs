use anyhow::Context;
use dnsrelay_domain::{CliOverrides, Config};

/// Loads the configuration file (or defaults), applies CLI overrides and
/// validates the result.
pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    Config::load(path, cli_overrides).with_context(|| match path {
        Some(p) => format!("failed to load configuration from {}", p),
        None => "failed to load configuration".to_string(),
    })
}
