pub mod vpn;

pub use vpn::check_vpn;
