pub mod vpn;

pub use vpn::CheckVpnUseCase;
