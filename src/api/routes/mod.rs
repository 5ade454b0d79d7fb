//! API routes module

pub mod chat;
pub mod settings;

use std::sync::Arc;

use axum::Router;

use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Create the combined router
pub fn router() -> Router<SharedState> {
    Router::new()
        // The chat page
        .merge(chat::router())
        // Settings page
        .merge(settings::router())
}
