//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds `302 Found` with a `Location` header. Built by hand because
/// axum's `Redirect` constructors emit 303/307/308, and stored links expect
/// the classic 302 redirect.
///
/// # Errors
///
/// - `400` if the code does not have exactly 6 characters
/// - `404` if no live link matches (deleted links respond identically to
///   never-created ones)
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    let link = state.link_service.resolve(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, link.original_url)]).into_response())
}
