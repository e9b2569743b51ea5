use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::UdpTransport;
use async_trait::async_trait;
use hickory_proto::rr::RecordType;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;
use vpncheck_application::ports::DomainResolver;
use vpncheck_domain::config::DnsConfig;
use vpncheck_domain::DomainError;

/// Resolves names through one explicit resolver over UDP, bypassing the
/// system resolver configuration.
pub struct UdpDomainResolver {
    transport: UdpTransport,
    timeout: Duration,
}

impl UdpDomainResolver {
    pub fn new(server_addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            transport: UdpTransport::new(server_addr),
            timeout,
        }
    }

    pub fn from_config(config: &DnsConfig) -> Result<Self, DomainError> {
        let server_addr = config
            .resolver_addr()
            .map_err(|e| DomainError::ConfigError(e.to_string()))?;
        Ok(Self::new(server_addr, config.query_timeout()))
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.transport.server_addr()
    }

    /// Query a single record type and return the addresses in the answer.
    pub async fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<IpAddr>, DomainError> {
        let (query_id, request_bytes) = MessageBuilder::build_query_with_id(domain, record_type)?;

        let response_bytes = self
            .transport
            .exchange(query_id, &request_bytes, self.timeout)
            .await?;

        let response = ResponseParser::parse(&response_bytes)?;

        if response.is_nxdomain() {
            return Err(DomainError::NxDomain);
        }

        if response.is_server_error() {
            return Err(DomainError::ServerFailure(ResponseParser::rcode_to_status(
                response.rcode,
            )));
        }

        if response.truncated && response.addresses.is_empty() {
            return Err(DomainError::InvalidDnsResponse(
                "truncated response without addresses".to_string(),
            ));
        }

        debug!(
            domain = %domain,
            record_type = %record_type,
            server = %self.transport.server_addr(),
            addresses = response.addresses.len(),
            "Lookup finished"
        );

        Ok(response.addresses)
    }

    /// Look up both address families; IPv4 answers come first.
    ///
    /// One family failing is tolerated as long as the other produced
    /// addresses. When neither did, the IPv4 error wins. An IP literal is
    /// returned as-is without querying the server.
    pub async fn lookup_ip(&self, domain: &str) -> Result<Vec<IpAddr>, DomainError> {
        if let Ok(ip) = domain.parse::<IpAddr>() {
            debug!(domain = %domain, "Domain is an IP literal, skipping lookup");
            return Ok(vec![ip]);
        }

        let (v4, v6) = tokio::join!(
            self.lookup(domain, RecordType::A),
            self.lookup(domain, RecordType::AAAA)
        );

        merge_families(v4, v6)
    }
}

fn merge_families(
    v4: Result<Vec<IpAddr>, DomainError>,
    v6: Result<Vec<IpAddr>, DomainError>,
) -> Result<Vec<IpAddr>, DomainError> {
    match (v4, v6) {
        (Ok(mut v4), Ok(v6)) => {
            v4.extend(v6);
            if v4.is_empty() {
                Err(DomainError::NoAddresses)
            } else {
                Ok(v4)
            }
        }
        (Ok(v4), Err(e)) if v4.is_empty() => Err(e),
        (Ok(v4), Err(_)) => Ok(v4),
        (Err(e), Ok(v6)) if v6.is_empty() => Err(e),
        (Err(_), Ok(v6)) => Ok(v6),
        (Err(e), Err(_)) => Err(e),
    }
}

#[async_trait]
impl DomainResolver for UdpDomainResolver {
    async fn resolve_first(&self, domain: &str) -> Result<IpAddr, DomainError> {
        self.lookup_ip(domain)
            .await?
            .into_iter()
            .next()
            .ok_or(DomainError::NoAddresses)
    }
}
