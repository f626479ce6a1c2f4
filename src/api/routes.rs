//! API route configuration.

use crate::api::handlers::{delete_link_handler, fetch_link_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Versioned API routes, nested under `/api/v1`.
///
/// # Endpoints
///
/// - `POST   /shorten`       - Create a short link
/// - `GET    /urls/{code}`   - Fetch the stored record
/// - `DELETE /urls/{code}`   - Soft-delete a link
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route(
            "/urls/{code}",
            get(fetch_link_handler).delete(delete_link_handler),
        )
}
