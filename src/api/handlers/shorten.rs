//! Handler for the link creation endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::{ShortLinkRecord, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for the submitted URL.
///
/// # Endpoint
///
/// `POST /api/v1/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a/b" }
/// ```
///
/// # Response
///
/// `201 Created` with the stored record:
///
/// ```json
/// {
///   "originalURL": "https://example.com/a/b",
///   "shortCode": "aB3x_9",
///   "shortURL": "https://sho.rt/aB3x_9",
///   "createdAt": "2026-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - `400` if the URL is missing, not an absolute URI, or longer than 2048 characters
/// - `500` if code generation retries are exhausted or the store fails
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortLinkRecord>), AppError> {
    let link = state.link_service.create_short_link(&payload.url).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}
