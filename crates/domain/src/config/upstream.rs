use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

const DEFAULT_DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// `IP:PORT`, or a bare IP that gets port 53.
    #[serde(default = "default_address")]
    pub address: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Answer SERVFAIL instead of staying silent when the upstream times out or fails.
    #[serde(default)]
    pub servfail_on_failure: bool,

    #[serde(default = "default_max_response_size")]
    pub max_response_size: usize,
}

impl UpstreamConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        parse_upstream_addr(&self.address)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            timeout_secs: default_timeout_secs(),
            servfail_on_failure: false,
            max_response_size: default_max_response_size(),
        }
    }
}

pub fn parse_upstream_addr(s: &str) -> Result<SocketAddr, String> {
    if let Ok(addr) = s.parse::<SocketAddr>() {
        return Ok(addr);
    }
    if let Ok(ip) = s.trim_matches(|c| c == '[' || c == ']').parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, DEFAULT_DNS_PORT));
    }
    Err(format!(
        "Invalid upstream address '{}'. Expected IP or IP:PORT",
        s
    ))
}

fn default_address() -> String {
    "8.8.8.8:53".to_string()
}

fn default_timeout_secs() -> u64 {
    2
}

fn default_max_response_size() -> usize {
    4096
}
