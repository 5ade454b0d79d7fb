//! Codec for the client-carried transcript: a JSON array of
//! role/content messages round-tripped with each form submission.

use thiserror::Error;

use crate::openai::{Message, Role};

#[derive(Debug, Error)]
#[error("malformed transcript JSON: {0}")]
pub struct TranscriptError(#[from] serde_json::Error);

/// Parses the transcript JSON echoed back by the client. The input is
/// client-supplied state so malformed text must surface as an error,
/// never a panic.
pub fn parse_transcript(json: &str) -> Result<Vec<Message>, TranscriptError> {
    let messages = serde_json::from_str(json)?;
    Ok(messages)
}

/// Serializes all non-system messages, order preserved. The system
/// prompt never appears in the payload sent to the client.
pub fn transcript_to_json(transcript: &[Message]) -> Result<String, TranscriptError> {
    let visible: Vec<&Message> = transcript
        .iter()
        .filter(|m| m.role != Role::System)
        .collect();
    Ok(serde_json::to_string(&visible)?)
}
