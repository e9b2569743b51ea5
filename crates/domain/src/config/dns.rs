use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Port every resolver is contacted on; only the server IP is configurable.
pub const DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// IP address of the resolver all lookups are forced through.
    #[serde(default = "default_server")]
    pub server: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-query deadline in milliseconds.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            port: default_port(),
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}

impl DnsConfig {
    /// Combine the configured server IP with the DNS port.
    pub fn resolver_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .server
            .trim()
            .parse()
            .map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidDnsServer(self.server.clone(), e.to_string())
            })?;

        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

fn default_server() -> String {
    "8.8.8.8".to_string()
}

fn default_port() -> u16 {
    DNS_PORT
}

fn default_query_timeout_ms() -> u64 {
    5000
}
