//! Two-password authentication gate.
//!
//! Each of the two fixed passwords maps to one role. A successful login
//! issues a session token held in an in-memory map, so sessions last for the
//! process lifetime only, independent of the slides document's storage.
//! Password comparison is constant-time to mitigate timing attacks.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use subtle::ConstantTimeEq;

use crate::config::Config;
use crate::errors::{AppError, ErrorResponse};
use crate::models::Role;

/// Header name for the session token.
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

/// In-memory token-to-role session map.
#[derive(Clone, Default)]
pub struct SessionMap {
    inner: Arc<RwLock<HashMap<String, Role>>>,
}

impl SessionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a submitted password to a role and open a session for it.
    /// Returns `None` when the password matches neither role.
    pub fn login(&self, config: &Config, password: &str) -> Option<(Role, String)> {
        let role = if constant_time_compare(password, &config.viewer_password) {
            Role::Viewer
        } else if constant_time_compare(password, &config.admin_password) {
            Role::Admin
        } else {
            return None;
        };

        let token = uuid::Uuid::new_v4().to_string();
        self.inner
            .write()
            .expect("session map poisoned")
            .insert(token.clone(), role);
        Some((role, token))
    }

    /// Close the session for `token`. Closing an unknown token is a no-op.
    pub fn logout(&self, token: &str) {
        self.inner
            .write()
            .expect("session map poisoned")
            .remove(token);
    }

    /// Role for an open session, if any.
    pub fn role_for(&self, token: &str) -> Option<Role> {
        self.inner
            .read()
            .expect("session map poisoned")
            .get(token)
            .copied()
    }
}

/// Session authentication layer: resolves the token header to a role and
/// injects it as a request extension.
pub async fn session_auth_layer(sessions: SessionMap, mut request: Request, next: Next) -> Response {
    let token = request
        .headers()
        .get(SESSION_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    match token.and_then(|t| sessions.role_for(&t)) {
        Some(role) => {
            request.extensions_mut().insert(role);
            next.run(request).await
        }
        None => unauthorized_response("Missing or invalid session token"),
    }
}

/// Admin-only layer, applied after `session_auth_layer` on mutating routes.
pub async fn require_admin_layer(request: Request, next: Next) -> Response {
    let role = request.extensions().get::<Role>().copied();
    match role {
        Some(Role::Admin) => next.run(request).await,
        Some(Role::Viewer) => forbidden_response("Admin role required"),
        None => unauthorized_response("Missing or invalid session token"),
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

fn unauthorized_response(message: &str) -> Response {
    error_response(AppError::Unauthorized(message.to_string()))
}

fn forbidden_response(message: &str) -> Response {
    error_response(AppError::Forbidden(message.to_string()))
}

/// Auth rejections happen before any handler runs, so they carry no
/// document timestamp.
fn error_response(error: AppError) -> Response {
    let body = ErrorResponse::new(&error, String::new());
    (error.status_code(), Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_config() -> Config {
        Config {
            viewer_password: "viewer-pass".to_string(),
            admin_password: "admin-pass".to_string(),
            db_path: PathBuf::from("./unused.sqlite"),
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
        }
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("secret", "secret"));
        assert!(!constant_time_compare("secret", "secre7"));
        assert!(!constant_time_compare("short", "much-longer-value"));
        assert!(constant_time_compare("", ""));
    }

    #[test]
    fn test_login_maps_passwords_to_roles() {
        let sessions = SessionMap::new();
        let config = test_config();

        let (role, token) = sessions.login(&config, "viewer-pass").unwrap();
        assert_eq!(role, Role::Viewer);
        assert_eq!(sessions.role_for(&token), Some(Role::Viewer));

        let (role, token) = sessions.login(&config, "admin-pass").unwrap();
        assert_eq!(role, Role::Admin);
        assert_eq!(sessions.role_for(&token), Some(Role::Admin));
    }

    #[test]
    fn test_login_rejects_unknown_password() {
        let sessions = SessionMap::new();
        assert!(sessions.login(&test_config(), "wrong").is_none());
    }

    #[test]
    fn test_logout_clears_session() {
        let sessions = SessionMap::new();
        let (_, token) = sessions.login(&test_config(), "viewer-pass").unwrap();

        sessions.logout(&token);
        assert!(sessions.role_for(&token).is_none());

        // Unknown token logout is a no-op
        sessions.logout("never-issued");
    }

    #[test]
    fn test_tokens_are_distinct_per_login() {
        let sessions = SessionMap::new();
        let config = test_config();
        let (_, a) = sessions.login(&config, "viewer-pass").unwrap();
        let (_, b) = sessions.login(&config, "viewer-pass").unwrap();
        assert_ne!(a, b);
    }
}
