use crate::ports::{DomainResolver, PublicIpProvider};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};
use vpncheck_domain::{DomainError, VpnCheck};

pub struct CheckVpnUseCase {
    resolver: Arc<dyn DomainResolver>,
    public_ip: Arc<dyn PublicIpProvider>,
}

impl CheckVpnUseCase {
    pub fn new(resolver: Arc<dyn DomainResolver>, public_ip: Arc<dyn PublicIpProvider>) -> Self {
        Self {
            resolver,
            public_ip,
        }
    }

    /// Resolve `domain`, then fetch the public IP, then compare.
    ///
    /// The public-IP lookup only starts once resolution has succeeded; any
    /// failure ends the check immediately.
    pub async fn execute(&self, domain: &str) -> Result<VpnCheck, DomainError> {
        if domain.is_empty() {
            return Err(DomainError::MissingDomain);
        }

        let start = Instant::now();

        let resolved_ip = self.resolver.resolve_first(domain).await.map_err(|e| {
            warn!(domain = %domain, error = %e, "Domain resolution failed");
            DomainError::ResolveFailed {
                domain: domain.to_string(),
                cause: Box::new(e),
            }
        })?;

        debug!(domain = %domain, resolved_ip = %resolved_ip, "Domain resolved");

        let public_ip = self.public_ip.public_ip().await.map_err(|e| {
            warn!(error = %e, "Public IP lookup failed");
            DomainError::PublicIpFailed(Box::new(e))
        })?;

        let check = VpnCheck::new(domain, resolved_ip, public_ip);

        info!(
            domain = %check.domain,
            resolved_ip = %check.resolved_ip,
            public_ip = %check.public_ip,
            status = %check.status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "VPN check completed"
        );

        Ok(check)
    }
}
