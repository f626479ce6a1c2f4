//! Handlers for short link record endpoints (fetch, delete).

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::{MessageResponse, ShortLinkRecord};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored record for a short code.
///
/// # Endpoint
///
/// `GET /api/v1/urls/{code}`
///
/// Lookup semantics are byte-identical to the redirect endpoint; only the
/// response shape differs.
///
/// # Errors
///
/// - `400` if the code does not have exactly 6 characters
/// - `404` if no live link matches
pub async fn fetch_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ShortLinkRecord>, AppError> {
    let link = state.link_service.resolve(&code).await?;

    Ok(Json(link.into()))
}

/// Soft-deletes a short link.
///
/// # Endpoint
///
/// `DELETE /api/v1/urls/{code}`
///
/// The record is retained but stops resolving; its code is never recycled.
/// Deleting an already-deleted code is indistinguishable from deleting a
/// nonexistent one: both respond `404`.
///
/// # Errors
///
/// - `400` if the code does not have exactly 6 characters
/// - `404` if no live link matches
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.link_service.soft_delete(&code).await?;

    Ok(Json(MessageResponse {
        message: "Short URL deleted successfully".to_string(),
    }))
}
