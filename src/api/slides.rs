//! Slide API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::models::{CreateSlideRequest, ReorderSlidesRequest, Slide, UpdateSlideRequest};
use crate::AppState;

/// GET /api/slides - List all slides sorted by order.
pub async fn list_slides(State(state): State<AppState>) -> ApiResult<Vec<Slide>> {
    let last_updated = state.store.last_updated().await;
    let slides = state.store.sorted_slides().await;
    success(slides, last_updated)
}

/// POST /api/slides - Append a new slide to the deck.
pub async fn create_slide(
    State(state): State<AppState>,
    Json(request): Json<CreateSlideRequest>,
) -> ApiResult<Slide> {
    let last_updated = state.store.last_updated().await;

    match state.store.add_slide(request).await {
        Ok(slide) => {
            let new_last_updated = state.store.last_updated().await;
            success(slide, new_last_updated)
        }
        Err(e) => error(e, last_updated),
    }
}

/// PUT /api/slides/:id - Partially update a slide.
pub async fn update_slide(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateSlideRequest>,
) -> ApiResult<Slide> {
    let last_updated = state.store.last_updated().await;

    match state.store.update_slide(&id, patch).await {
        Ok(slide) => {
            let new_last_updated = state.store.last_updated().await;
            success(slide, new_last_updated)
        }
        Err(e) => error(e, last_updated),
    }
}

/// DELETE /api/slides/:id - Delete a slide and renumber the rest.
pub async fn delete_slide(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    let last_updated = state.store.last_updated().await;

    match state.store.delete_slide(&id).await {
        Ok(()) => {
            let new_last_updated = state.store.last_updated().await;
            success((), new_last_updated)
        }
        Err(e) => error(e, last_updated),
    }
}

/// PUT /api/slides/reorder - Move a slide within the sorted sequence.
pub async fn reorder_slides(
    State(state): State<AppState>,
    Json(request): Json<ReorderSlidesRequest>,
) -> ApiResult<Vec<Slide>> {
    let last_updated = state.store.last_updated().await;

    match state
        .store
        .reorder_slides(request.from_index, request.to_index)
        .await
    {
        Ok(slides) => {
            let new_last_updated = state.store.last_updated().await;
            success(slides, new_last_updated)
        }
        Err(e) => error(e, last_updated),
    }
}
