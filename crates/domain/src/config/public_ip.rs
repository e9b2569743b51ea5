use serde::{Deserialize, Serialize};

/// Service that echoes the caller's egress address as a bare plain-text body.
pub const DEFAULT_PUBLIC_IP_URL: &str = "https://ifconfig.me/ip";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublicIpConfig {
    pub url: String,
}

impl Default for PublicIpConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PUBLIC_IP_URL.to_string(),
        }
    }
}
