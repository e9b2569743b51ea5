use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/checkvpn", get(handlers::check_vpn))
        .with_state(state)
}
