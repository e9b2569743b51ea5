use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use vpncheck_application::use_cases::CheckVpnUseCase;
use vpncheck_domain::Config;
use vpncheck_infrastructure::{dns::UdpDomainResolver, http::HttpPublicIpProvider};

pub struct Services {
    pub check_vpn: Arc<CheckVpnUseCase>,
    pub resolver_addr: SocketAddr,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let resolver = Arc::new(UdpDomainResolver::from_config(&config.dns)?);
        let public_ip = Arc::new(HttpPublicIpProvider::from_config(&config.public_ip)?);

        let resolver_addr = resolver.server_addr();

        info!(
            dns_server = %resolver_addr,
            dns_timeout_ms = config.dns.query_timeout_ms,
            public_ip_url = %public_ip.url(),
            "Lookup services initialized"
        );

        Ok(Self {
            check_vpn: Arc::new(CheckVpnUseCase::new(resolver, public_ip)),
            resolver_addr,
        })
    }
}
