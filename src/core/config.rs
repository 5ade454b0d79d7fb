use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub openai_model: String,
    /// Overrides the built-in system prompt template when non-empty.
    pub system_prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let openai_api_hostname = env::var("BANTER_LLM_HOST")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let openai_api_key =
            env::var("OPENAI_API_KEY").unwrap_or_else(|_| "thiswontworkforopenai".to_string());
        let openai_model = env::var("BANTER_MODEL").unwrap_or_else(|_| "gpt-4".to_string());
        let system_prompt = env::var("BANTER_SYSTEM_PROMPT").unwrap_or_default();

        Self {
            openai_api_hostname,
            openai_api_key,
            openai_model,
            system_prompt,
        }
    }
}
