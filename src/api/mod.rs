//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.

mod auth;
mod document;
mod slides;

pub use auth::*;
pub use document::*;
pub use slides::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub last_updated: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, last_updated: String) -> Self {
        Self {
            success: true,
            data,
            last_updated,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::errors::AppErrorWithContext>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T, last_updated: String) -> ApiResult<T> {
    Ok(ApiResponse::new(data, last_updated))
}

/// Create an error API response.
pub fn error<T: Serialize>(err: crate::errors::AppError, last_updated: String) -> ApiResult<T> {
    Err(crate::errors::AppErrorWithContext {
        error: err,
        last_updated,
    })
}
