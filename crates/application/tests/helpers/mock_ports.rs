use async_trait::async_trait;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use vpncheck_application::ports::{DomainResolver, PublicIpProvider};
use vpncheck_domain::DomainError;

#[derive(Clone, Default)]
pub struct MockDomainResolver {
    responses: Arc<RwLock<HashMap<String, Result<IpAddr, DomainError>>>>,
    calls: Arc<AtomicUsize>,
}

impl MockDomainResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_response(&self, domain: &str, ip: &str) {
        self.responses
            .write()
            .await
            .insert(domain.to_string(), Ok(ip.parse().unwrap()));
    }

    pub async fn set_error(&self, domain: &str, error: DomainError) {
        self.responses
            .write()
            .await
            .insert(domain.to_string(), Err(error));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DomainResolver for MockDomainResolver {
    async fn resolve_first(&self, domain: &str) -> Result<IpAddr, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .read()
            .await
            .get(domain)
            .cloned()
            .unwrap_or(Err(DomainError::NxDomain))
    }
}

#[derive(Clone)]
pub struct MockPublicIpProvider {
    response: Arc<RwLock<Result<String, DomainError>>>,
    calls: Arc<AtomicUsize>,
}

impl MockPublicIpProvider {
    pub fn new(ip: &str) -> Self {
        Self {
            response: Arc::new(RwLock::new(Ok(ip.to_string()))),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            response: Arc::new(RwLock::new(Err(DomainError::PublicIpUnavailable(
                reason.to_string(),
            )))),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PublicIpProvider for MockPublicIpProvider {
    async fn public_ip(&self) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.read().await.clone()
    }
}
