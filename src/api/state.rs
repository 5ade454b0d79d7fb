use handlebars::Handlebars;
use serde_json::json;

use crate::core::AppConfig;
use crate::templates::{Template, templates};

pub struct AppState {
    pub config: AppConfig,
    pub templates: Handlebars<'static>,
    // Rendered once at startup and read-only afterwards
    pub system_prompt: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let registry = templates();
        let system_prompt = if config.system_prompt.is_empty() {
            registry
                .render(&Template::SystemPrompt.to_string(), &json!({}))
                .expect("Failed to render system prompt")
        } else {
            config.system_prompt.clone()
        };

        Self {
            config,
            templates: registry,
            system_prompt,
        }
    }
}
