//! Markdown rendering of transcript messages for display. Kept apart
//! from the HTTP layer so the transform can be tested on its own.

use anyhow::Result;
use handlebars::Handlebars;
use serde_json::json;

use crate::openai::{Message, Role};
use crate::templates::Template;

/// Converts message content (lightweight markup: headers, emphasis,
/// lists, code spans) to an HTML fragment.
pub fn render_markdown(content: &str) -> String {
    markdown::to_html(content)
}

/// Renders each non-system message in order, wrapping the converted
/// content with role metadata via the message template.
pub fn transcript_to_html(registry: &Handlebars, transcript: &[Message]) -> Result<String> {
    let mut html = String::new();
    for message in transcript.iter().filter(|m| m.role != Role::System) {
        let fragment = registry.render(
            &Template::Message.to_string(),
            &json!({
                "role": &message.role,
                "name": &message.name,
                "content": render_markdown(&message.content),
            }),
        )?;
        html.push_str(&fragment);
    }
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::templates;

    #[test]
    fn test_render_markdown_heading() {
        assert!(render_markdown("# Hello").contains("<h1>Hello</h1>"));
    }

    #[test]
    fn test_render_markdown_emphasis_and_code() {
        let html = render_markdown("Some *emphasis* and `code`");
        assert!(html.contains("<em>emphasis</em>"));
        assert!(html.contains("<code>code</code>"));
    }

    #[test]
    fn test_transcript_to_html_excludes_system() {
        let registry = templates();
        let transcript = vec![
            Message::new(Role::System, "You are a helpful assistant."),
            Message::new(Role::User, "Hello"),
            Message::new(Role::Assistant, "Hi there!"),
        ];

        let html = transcript_to_html(&registry, &transcript).unwrap();
        assert!(!html.contains("helpful assistant"));
        assert!(!html.contains("message-system"));
    }

    #[test]
    fn test_transcript_to_html_wraps_with_role_metadata() {
        let registry = templates();
        let transcript = vec![
            Message::new(Role::User, "Hello"),
            Message::new(Role::Assistant, "Hi there!"),
        ];

        let html = transcript_to_html(&registry, &transcript).unwrap();
        let user_pos = html.find("message-user").unwrap();
        let assistant_pos = html.find("message-assistant").unwrap();
        assert!(user_pos < assistant_pos);
        assert!(html.contains("<p>Hello</p>"));
        assert!(html.contains("<p>Hi there!</p>"));
    }

    #[test]
    fn test_transcript_to_html_shows_function_name() {
        let registry = templates();
        let transcript = vec![Message::new_function_result(
            "get_current_weather",
            "The weather in Boston is hot and sunny.",
        )];

        let html = transcript_to_html(&registry, &transcript).unwrap();
        assert!(html.contains("message-function"));
        assert!(html.contains("get_current_weather"));
        assert!(html.contains("hot and sunny"));
    }
}
