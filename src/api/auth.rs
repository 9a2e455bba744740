//! Auth API endpoints.

use axum::{
    extract::State,
    http::HeaderMap,
    Extension, Json,
};

use super::{error, success, ApiResult};
use crate::auth::SESSION_TOKEN_HEADER;
use crate::errors::AppError;
use crate::models::{LoginRequest, LoginResponse, Role, SessionInfo};
use crate::AppState;

/// POST /api/auth/login - Exchange a password for a role and session token.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let last_updated = state.store.last_updated().await;

    match state.sessions.login(&state.config, &request.password) {
        Some((role, token)) => {
            tracing::info!("Login accepted for role {}", role.as_str());
            success(LoginResponse { role, token }, last_updated)
        }
        // One generic message for any wrong password; no role hinting
        None => error(
            AppError::Unauthorized("Invalid password".to_string()),
            last_updated,
        ),
    }
}

/// POST /api/auth/logout - Close the current session.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<()> {
    let last_updated = state.store.last_updated().await;

    if let Some(token) = headers
        .get(SESSION_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        state.sessions.logout(token);
    }

    success((), last_updated)
}

/// GET /api/auth/session - Role of the current session.
pub async fn get_session(
    State(state): State<AppState>,
    Extension(role): Extension<Role>,
) -> ApiResult<SessionInfo> {
    let last_updated = state.store.last_updated().await;
    success(SessionInfo { role }, last_updated)
}
