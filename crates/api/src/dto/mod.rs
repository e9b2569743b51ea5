pub mod vpn;

pub use vpn::{CheckVpnQuery, CheckVpnResponse};
