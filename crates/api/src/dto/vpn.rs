use serde::Serialize;
use vpncheck_domain::{VpnCheck, VpnStatus};

/// Query string of `/checkvpn`.
#[derive(Debug)]
pub struct CheckVpnQuery {
    pub domain: Option<String>,
}

impl CheckVpnQuery {
    /// Repeated keys keep their first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let domain = pairs
            .into_iter()
            .find(|(key, _)| key == "domain")
            .map(|(_, value)| value);
        Self { domain }
    }

    /// The requested domain, or `None` when absent or empty.
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref().filter(|d| !d.is_empty())
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct CheckVpnResponse {
    pub status: VpnStatus,
}

impl From<&VpnCheck> for CheckVpnResponse {
    fn from(check: &VpnCheck) -> Self {
        Self {
            status: check.status,
        }
    }
}
