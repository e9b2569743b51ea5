use async_trait::async_trait;
use tracing::{debug, warn};
use vpncheck_application::ports::PublicIpProvider;
use vpncheck_domain::config::PublicIpConfig;
use vpncheck_domain::DomainError;

/// Asks an external echo service which address our requests arrive from.
pub struct HttpPublicIpProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpPublicIpProvider {
    pub fn new(url: impl Into<String>) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(concat!("vpncheck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &PublicIpConfig) -> Result<Self, DomainError> {
        Self::new(config.url.clone())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PublicIpProvider for HttpPublicIpProvider {
    async fn public_ip(&self) -> Result<String, DomainError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            DomainError::PublicIpUnavailable(format!("request to {} failed: {}", self.url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = status.as_u16(), "Public IP service returned non-success status");
        }

        let body = response.text().await.map_err(|e| {
            DomainError::PublicIpUnavailable(format!(
                "failed to read response from {}: {}",
                self.url, e
            ))
        })?;

        let public_ip = body.trim().to_string();
        debug!(url = %self.url, public_ip = %public_ip, "Public IP fetched");

        Ok(public_ip)
    }
}
