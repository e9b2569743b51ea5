use async_trait::async_trait;
use vpncheck_domain::DomainError;

/// Port for learning the address our outbound traffic appears to come from.
#[async_trait]
pub trait PublicIpProvider: Send + Sync {
    /// Returns the reported address with surrounding whitespace trimmed.
    async fn public_ip(&self) -> Result<String, DomainError>;
}
