pub mod check_vpn;

pub use check_vpn::CheckVpnUseCase;
