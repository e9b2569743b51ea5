#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid DNS server address '{0}': {1}")]
    InvalidDnsServer(String, String),

    #[error("Invalid bind address '{0}': {1}")]
    InvalidBindAddress(String, String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
