//! Test utilities for integration tests
use std::sync::Arc;

use axum::{Router, body::Body};

use banter::api::AppState;
use banter::api::app;
use banter::core::AppConfig;

/// Creates a test application router pointed at the given completion
/// API hostname (usually a mockito server URL).
pub fn test_app(api_hostname: &str) -> Router {
    let app_config = AppConfig {
        openai_api_hostname: api_hostname.to_string(),
        openai_api_key: String::from("test-api-key"),
        openai_model: String::from("gpt-4"),
        system_prompt: String::from("You are a helpful assistant."),
    };
    let app_state = AppState::new(app_config);
    app(Arc::new(app_state))
}

#[allow(dead_code)]
pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
