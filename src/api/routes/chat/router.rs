//! Router for the chat page

use std::sync::Arc;

use axum::{Form, Router, extract::State, response::Html, routing::get};
use serde_json::json;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::chat::{build_messages, integrate, transcript_to_html, transcript_to_json};
use crate::openai::{CompletionError, Message, completion};
use crate::templates::Template;

type SharedState = Arc<AppState>;

/// User-facing notice for each completion failure category. Raw
/// provider errors stay in the logs.
fn completion_notice(err: &CompletionError) -> &'static str {
    match err {
        CompletionError::RateLimited => {
            "The completion API hit its rate limit. Please wait a moment and try again."
        }
        CompletionError::TransientUnavailable => {
            "The completion API is overloaded right now. Please try again later."
        }
        CompletionError::Unknown(_) => "Something went wrong. Please try again later.",
    }
}

fn render_page(
    state: &AppState,
    transcript: &[Message],
    notice: Option<&str>,
) -> Result<Html<String>, ApiError> {
    let conversation = transcript_to_html(&state.templates, transcript)?;
    let conversation_json = transcript_to_json(transcript)?;
    let page = state.templates.render(
        &Template::Index.to_string(),
        &json!({
            "conversation": conversation,
            "conversation_json": conversation_json,
            "model": &state.config.openai_model,
            "notice": notice,
        }),
    )?;
    Ok(Html(page))
}

/// Render the chat page with an empty conversation
async fn index(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    render_page(&state, &[], None)
}

/// Run one turn of the conversation: assemble the message list, call
/// the completion API, fold the reply into the transcript, and
/// re-render the page. On a completion failure the transcript is
/// returned as assembled (the user's message stays) with a notice.
async fn chat_submit(
    State(state): State<SharedState>,
    Form(form): Form<public::ChatForm>,
) -> Result<Html<String>, ApiError> {
    let mut transcript = build_messages(
        &state.system_prompt,
        &form.conversation_so_far,
        &form.user_message,
    )
    .map_err(ApiError::bad_request)?;

    let model = if form.model.is_empty() {
        state.config.openai_model.clone()
    } else {
        form.model
    };
    let api_key = if form.key.is_empty() {
        state.config.openai_api_key.clone()
    } else {
        form.key
    };

    let mut notice = None;
    match completion(
        &transcript,
        None,
        &state.config.openai_api_hostname,
        &api_key,
        &model,
    )
    .await
    {
        Ok(reply) => integrate(&mut transcript, reply)?,
        Err(err) => {
            tracing::warn!("Completion call failed: {}", err);
            notice = Some(completion_notice(&err));
        }
    }

    render_page(&state, &transcript, notice)
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(index).post(chat_submit))
}
