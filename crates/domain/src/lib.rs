//! vpncheck Domain Layer
pub mod config;
pub mod errors;
pub mod vpn_check;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use vpn_check::{VpnCheck, VpnStatus};
