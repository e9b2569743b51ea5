use std::sync::Arc;
use vpncheck_application::use_cases::CheckVpnUseCase;

#[derive(Clone)]
pub struct AppState {
    pub check_vpn: Arc<CheckVpnUseCase>,
}
