//! Page and prompt templates using Handlebars for templating.
//! Handlebars adds additional security controls since it can't do
//! much out of the box without registering your own helpers, which is
//! ideal here because message content comes back from an LLM and
//! should be considered untrusted.

use std::fmt;

use handlebars::Handlebars;

#[derive(Debug)]
pub enum Template {
    Index,
    Settings,
    Message,
    SystemPrompt,
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

const SYSTEM_PROMPT: &str = r"You are a friendly chat assistant. Answer the user directly and concisely, and format your responses with Markdown.";

// Wraps one rendered message with its role metadata. `content` is
// already HTML at this point so it is emitted unescaped.
const MESSAGE_FRAGMENT: &str = r#"<div class="message message-{{role}}">
  {{#if name}}<div class="message-name">{{name}}</div>{{/if}}
  <div class="message-content">{{{content}}}</div>
</div>
"#;

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>banter</title>
  <style>
    body { max-width: 48rem; margin: 2rem auto; font-family: sans-serif; }
    .notice { padding: 0.5rem 1rem; border: 1px solid #c33; color: #c33; }
    .message { margin: 1rem 0; padding: 0.5rem 1rem; border-radius: 0.5rem; }
    .message-user { background: #eef; }
    .message-assistant { background: #efe; }
    .message-function { background: #ffe; font-family: monospace; }
    .message-name { font-weight: bold; }
    textarea, input[type=text], input[type=password] { width: 100%; margin: 0.25rem 0; }
  </style>
</head>
<body>
  <h1>banter</h1>
  {{#if notice}}
  <div class="notice">{{notice}}</div>
  {{/if}}
  <div class="conversation">
    {{{conversation}}}
  </div>
  <form method="post" action="/">
    <input type="hidden" name="conversation_so_far" value="{{conversation_json}}">
    <textarea name="user_message" rows="3" placeholder="Say something" autofocus></textarea>
    <input type="text" name="model" value="{{model}}">
    <input type="password" name="key" placeholder="API key (optional, defaults to the server's key)">
    <button type="submit">Send</button>
  </form>
  <p><a href="/settings">Settings</a></p>
</body>
</html>
"#;

const SETTINGS_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>banter settings</title>
  <style>
    body { max-width: 48rem; margin: 2rem auto; font-family: sans-serif; }
  </style>
</head>
<body>
  <h1>Settings</h1>
  <p>Defaults used when the chat form leaves a field blank:</p>
  <ul>
    <li><strong>Model:</strong> {{model}}</li>
    <li><strong>Completion API:</strong> {{api_hostname}}</li>
    <li><strong>API key:</strong> taken from the OPENAI_API_KEY environment variable</li>
  </ul>
  <p><a href="/">Back to chat</a></p>
</body>
</html>
"#;

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry
        .register_template_string(&Template::Index.to_string(), INDEX_PAGE)
        .expect("Failed to register template");
    registry
        .register_template_string(&Template::Settings.to_string(), SETTINGS_PAGE)
        .expect("Failed to register template");
    registry
        .register_template_string(&Template::Message.to_string(), MESSAGE_FRAGMENT)
        .expect("Failed to register template");
    registry
        .register_template_string(&Template::SystemPrompt.to_string(), SYSTEM_PROMPT)
        .expect("Failed to register template");
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_templates_registered() {
        let registry = templates();
        for template in [
            Template::Index,
            Template::Settings,
            Template::Message,
            Template::SystemPrompt,
        ] {
            assert!(registry.has_template(&template.to_string()));
        }
    }

    #[test]
    fn test_message_fragment_render() {
        let registry = templates();
        let html = registry
            .render(
                &Template::Message.to_string(),
                &json!({
                    "role": "assistant",
                    "name": null,
                    "content": "<p>Hi there!</p>",
                }),
            )
            .unwrap();
        assert!(html.contains("message-assistant"));
        assert!(html.contains("<p>Hi there!</p>"));
        assert!(!html.contains("message-name"));
    }

    #[test]
    fn test_index_page_escapes_transcript_json() {
        let registry = templates();
        let html = registry
            .render(
                &Template::Index.to_string(),
                &json!({
                    "conversation": "",
                    "conversation_json": r#"[{"role":"user","content":"Hello"}]"#,
                    "model": "gpt-4",
                    "notice": null,
                }),
            )
            .unwrap();
        assert!(html.contains("&quot;role&quot;:&quot;user&quot;"));
        assert!(!html.contains(r#"value="[{"role""#));
    }

    #[test]
    fn test_index_page_notice() {
        let registry = templates();
        let html = registry
            .render(
                &Template::Index.to_string(),
                &json!({
                    "conversation": "",
                    "conversation_json": "[]",
                    "model": "gpt-4",
                    "notice": "Something went wrong. Please try again later.",
                }),
            )
            .unwrap();
        assert!(html.contains(r#"<div class="notice">"#));
        assert!(html.contains("Something went wrong."));
    }
}
