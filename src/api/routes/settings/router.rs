//! Router for the settings page

use std::sync::Arc;

use axum::{Router, extract::State, response::Html, routing::get};
use serde_json::json;

use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::templates::Template;

type SharedState = Arc<AppState>;

/// Render the settings page showing the server's defaults
async fn settings(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let page = state.templates.render(
        &Template::Settings.to_string(),
        &json!({
            "model": &state.config.openai_model,
            "api_hostname": &state.config.openai_api_hostname,
        }),
    )?;
    Ok(Html(page))
}

/// Create the settings router
pub fn router() -> Router<SharedState> {
    Router::new().route("/settings", get(settings).post(settings))
}
