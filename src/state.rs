use std::sync::Arc;

use crate::application::services::ShortLinkService;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<ShortLinkService>,
}
