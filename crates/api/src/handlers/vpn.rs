use crate::{
    dto::{CheckVpnQuery, CheckVpnResponse},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument};
use vpncheck_domain::DomainError;

#[instrument(skip(state, params), name = "api_check_vpn")]
pub async fn check_vpn(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let query = CheckVpnQuery::from_pairs(params);
    let domain = query.domain().ok_or(DomainError::MissingDomain)?;

    debug!(domain = %domain, "Checking VPN");

    let check = state.check_vpn.execute(domain).await?;

    let body = serde_json::to_vec(&CheckVpnResponse::from(&check))
        .map_err(|e| DomainError::ResponseEncoding(e.to_string()))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
