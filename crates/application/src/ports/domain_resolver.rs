use async_trait::async_trait;
use vpncheck_domain::DomainError;
use std::net::IpAddr;

#[async_trait]
pub trait DomainResolver: Send + Sync {
    /// Resolve `domain` through the configured resolver and return the first
    /// address of the answer, IPv4 before IPv6.
    async fn resolve_first(&self, domain: &str) -> Result<IpAddr, DomainError>;
}
