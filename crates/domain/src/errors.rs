use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Missing 'domain' parameter")]
    MissingDomain,

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Failed to encode DNS query: {0}")]
    QueryEncoding(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("no such host")]
    NxDomain,

    #[error("server misbehaving: {0}")]
    ServerFailure(&'static str),

    #[error("no addresses found")]
    NoAddresses,

    #[error("i/o timeout querying {server}")]
    TransportTimeout { server: String },

    #[error("connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    TransportError { server: String, reason: String },

    #[error("Error resolving {domain}: {cause}")]
    ResolveFailed {
        domain: String,
        cause: Box<DomainError>,
    },

    #[error("{0}")]
    PublicIpUnavailable(String),

    #[error("Error fetching public IP: {0}")]
    PublicIpFailed(Box<DomainError>),

    #[error("Error encoding JSON response: {0}")]
    ResponseEncoding(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// True for failures caused by the caller's request rather than an upstream.
    pub fn is_client_error(&self) -> bool {
        matches!(self, DomainError::MissingDomain)
    }
}
