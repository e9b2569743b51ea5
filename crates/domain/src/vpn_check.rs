use serde::{Serialize, Serializer};
use std::fmt;
use std::net::IpAddr;

/// Heuristic verdict on whether traffic leaves through a VPN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VpnStatus {
    Working,
    NotWorking,
}

impl VpnStatus {
    /// Compare the textual forms of both addresses. No normalization is done,
    /// so `::ffff:1.2.3.4` and `1.2.3.4` count as different.
    pub fn from_addresses(resolved_ip: &str, public_ip: &str) -> Self {
        if resolved_ip != public_ip {
            VpnStatus::Working
        } else {
            VpnStatus::NotWorking
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VpnStatus::Working => "VPN is working",
            VpnStatus::NotWorking => "VPN is not working",
        }
    }
}

impl fmt::Display for VpnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for VpnStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Outcome of one check; lives for the duration of a single request.
#[derive(Debug, Clone)]
pub struct VpnCheck {
    pub domain: String,
    pub resolved_ip: IpAddr,
    pub public_ip: String,
    pub status: VpnStatus,
}

impl VpnCheck {
    pub fn new(domain: impl Into<String>, resolved_ip: IpAddr, public_ip: String) -> Self {
        let status = VpnStatus::from_addresses(&resolved_ip.to_string(), &public_ip);
        Self {
            domain: domain.into(),
            resolved_ip,
            public_ip,
            status,
        }
    }
}
