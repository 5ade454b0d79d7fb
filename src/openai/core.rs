use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

/// Temperature used for every completion request.
pub const CHAT_TEMPERATURE: f64 = 0.7;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "function")]
    Function,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
            name: None,
        }
    }

    /// A message carrying the result of a locally dispatched function
    /// call, tagged with the function's name.
    pub fn new_function_result(name: &str, content: &str) -> Self {
        Message {
            role: Role::Function,
            content: content.to_string(),
            name: Some(name.to_string()),
        }
    }
}

// Object {
//     "function_call": Object {
//         "arguments": String("{\"location\":\"Boston\"}"),
//         "name": String("get_current_weather")
//     },
//     "role": String("assistant")
// }
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct FunctionCallSpec {
    pub name: String,
    pub arguments: String,
}

/// The first choice of a completion response: either a direct text
/// reply or a request to call a registered function.
#[derive(Clone, Debug, PartialEq)]
pub enum AssistantReply {
    Text(String),
    FunctionCall(FunctionCallSpec),
}

#[derive(Serialize)]
pub struct Property {
    pub r#type: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#enum: Option<Vec<String>>,
}

#[derive(Serialize)]
pub struct Parameters<Props: Serialize> {
    pub r#type: String,
    pub properties: Props,
    pub required: Vec<String>,
}

#[derive(Serialize)]
pub struct FunctionDecl<Props: Serialize> {
    pub name: String,
    pub description: String,
    pub parameters: Parameters<Props>,
}

/// Completion call failures classified into user-facing categories so
/// raw provider errors never reach the page.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("rate limit exceeded for the completion API")]
    RateLimited,
    #[error("completion API is temporarily unavailable")]
    TransientUnavailable,
    #[error("completion request failed: {0}")]
    Unknown(String),
}

fn classify_status(status: StatusCode) -> Option<CompletionError> {
    match status {
        StatusCode::TOO_MANY_REQUESTS => Some(CompletionError::RateLimited),
        StatusCode::INTERNAL_SERVER_ERROR
        | StatusCode::BAD_GATEWAY
        | StatusCode::SERVICE_UNAVAILABLE => Some(CompletionError::TransientUnavailable),
        s if !s.is_success() => Some(CompletionError::Unknown(format!(
            "unexpected status {}",
            s
        ))),
        _ => None,
    }
}

fn parse_reply(resp: &Value) -> Result<AssistantReply, CompletionError> {
    let message = &resp["choices"][0]["message"];

    if let Some(call) = message.get("function_call").filter(|c| !c.is_null()) {
        let spec: FunctionCallSpec = serde_json::from_value(call.clone())
            .map_err(|e| CompletionError::Unknown(format!("malformed function_call: {}", e)))?;
        return Ok(AssistantReply::FunctionCall(spec));
    }

    if let Some(content) = message["content"].as_str() {
        return Ok(AssistantReply::Text(content.to_string()));
    }

    Err(CompletionError::Unknown(format!(
        "response missing message content: {}",
        resp
    )))
}

/// Issues a single chat completion request and returns the first
/// choice. `functions` is the JSON array of function declarations to
/// advertise to the provider, if any.
pub async fn completion(
    messages: &[Message],
    functions: Option<&Value>,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<AssistantReply, CompletionError> {
    let mut payload = json!({
        "model": model,
        "messages": messages,
        "temperature": CHAT_TEMPERATURE,
    });
    if let Some(functions) = functions {
        payload["functions"] = functions.clone();
    }

    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60))
        .json(&payload)
        .send()
        .await
        .map_err(|e| CompletionError::Unknown(e.to_string()))?;

    if let Some(err) = classify_status(response.status()) {
        return Err(err);
    }

    let body: Value = response
        .json()
        .await
        .map_err(|e| CompletionError::Unknown(format!("malformed response body: {}", e)))?;

    parse_reply(&body)
}
