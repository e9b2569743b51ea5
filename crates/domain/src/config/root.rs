use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::public_ip::PublicIpConfig;
use super::server::ServerConfig;

/// Process-wide configuration. Built once at startup and never mutated.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP listener (port, bind address)
    pub server: ServerConfig,

    /// Resolver all domain lookups are forced through
    pub dns: DnsConfig,

    /// Public-IP reporting endpoint
    pub public_ip: PublicIpConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Build configuration from defaults plus command-line overrides, then validate it.
    pub fn load(cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(dns) = overrides.dns_server {
            self.dns.server = dns;
        }
        if let Some(timeout) = overrides.dns_timeout_ms {
            self.dns.query_timeout_ms = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("HTTP port cannot be 0".to_string()));
        }
        if self.dns.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "DNS query timeout cannot be 0".to_string(),
            ));
        }
        self.dns.resolver_addr()?;
        self.listen_addr()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.server.bind_address.parse().map_err(
            |e: std::net::AddrParseError| {
                ConfigError::InvalidBindAddress(self.server.bind_address.clone(), e.to_string())
            },
        )?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub dns_server: Option<String>,
    pub dns_timeout_ms: Option<u64>,
    pub log_level: Option<String>,
}
