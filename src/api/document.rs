//! Document API endpoints: the aggregate, its metadata, and import/export.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppErrorWithContext;
use crate::models::{BgmConfig, SlidesDocument, UpdateMetaRequest};
use crate::store::export_filename;
use crate::AppState;

/// GET /api/document - Get the full slides document.
pub async fn get_document(State(state): State<AppState>) -> ApiResult<SlidesDocument> {
    let document = state.store.document().await;
    let last_updated = document.last_updated.clone();
    success(document, last_updated)
}

/// PUT /api/document/meta - Replace the presentation title and subtitle.
pub async fn update_meta(
    State(state): State<AppState>,
    Json(request): Json<UpdateMetaRequest>,
) -> ApiResult<SlidesDocument> {
    let last_updated = state.store.last_updated().await;

    match state.store.update_meta(request.title, request.subtitle).await {
        Ok(document) => {
            let new_last_updated = document.last_updated.clone();
            success(document, new_last_updated)
        }
        Err(e) => error(e, last_updated),
    }
}

/// PUT /api/document/bgm - Replace the background-music settings wholesale.
pub async fn update_bgm(
    State(state): State<AppState>,
    Json(config): Json<BgmConfig>,
) -> ApiResult<SlidesDocument> {
    let last_updated = state.store.last_updated().await;

    match state.store.update_bgm(config).await {
        Ok(document) => {
            let new_last_updated = document.last_updated.clone();
            success(document, new_last_updated)
        }
        Err(e) => error(e, last_updated),
    }
}

/// POST /api/document/reset - Replace the document with the built-in default.
pub async fn reset_document(State(state): State<AppState>) -> ApiResult<SlidesDocument> {
    let last_updated = state.store.last_updated().await;

    match state.store.reset_to_default().await {
        Ok(document) => {
            let new_last_updated = document.last_updated.clone();
            success(document, new_last_updated)
        }
        Err(e) => error(e, last_updated),
    }
}

/// GET /api/document/export - Download the document as pretty-printed JSON.
pub async fn export_document(
    State(state): State<AppState>,
) -> Result<Response, AppErrorWithContext> {
    let last_updated = state.store.last_updated().await;

    let body = state
        .store
        .export_json()
        .await
        .map_err(|e| AppErrorWithContext {
            error: e,
            last_updated,
        })?;

    let disposition = format!("attachment; filename=\"{}\"", export_filename());
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

/// POST /api/document/import - Parse the raw body as a full document and
/// replace the current one. Rejects malformed input with no side effects.
pub async fn import_document(
    State(state): State<AppState>,
    body: String,
) -> ApiResult<SlidesDocument> {
    let last_updated = state.store.last_updated().await;

    match state.store.import_json(&body).await {
        Ok(document) => {
            let new_last_updated = document.last_updated.clone();
            success(document, new_last_updated)
        }
        Err(e) => error(e, last_updated),
    }
}
