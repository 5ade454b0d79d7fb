//! Conversation-state assembly: building the message list for the
//! completion call and folding the reply back into the transcript.

pub mod functions;
pub mod render;
pub mod transcript;

pub use functions::{DispatchError, RegisteredFunction, dispatch};
pub use render::{render_markdown, transcript_to_html};
pub use transcript::{TranscriptError, parse_transcript, transcript_to_json};

use crate::openai::{AssistantReply, Message, Role};

/// Builds the full message list for a completion request: the system
/// prompt, then the prior transcript in its original order, then the
/// new user message if non-empty. No trimming or de-duplication is
/// applied so transcripts grow unbounded across turns.
pub fn build_messages(
    system_prompt: &str,
    prior_json: &str,
    user_message: &str,
) -> Result<Vec<Message>, TranscriptError> {
    let mut messages = vec![Message::new(Role::System, system_prompt)];
    if !prior_json.is_empty() {
        messages.extend(parse_transcript(prior_json)?);
    }
    if !user_message.is_empty() {
        messages.push(Message::new(Role::User, user_message));
    }
    Ok(messages)
}

/// Appends the provider's reply to the transcript: either the
/// assistant's text (trimmed) or the result of dispatching a function
/// call, tagged with the function's name. Callers must skip this step
/// entirely when the completion call failed.
pub fn integrate(
    transcript: &mut Vec<Message>,
    reply: AssistantReply,
) -> Result<(), DispatchError> {
    match reply {
        AssistantReply::Text(content) => {
            transcript.push(Message::new(Role::Assistant, content.trim()));
        }
        AssistantReply::FunctionCall(spec) => {
            let result = dispatch(&spec)?;
            transcript.push(Message::new_function_result(&spec.name, &result));
        }
    }
    Ok(())
}
