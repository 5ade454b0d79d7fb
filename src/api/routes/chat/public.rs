//! Public types for the chat page

use serde::Deserialize;

/// Form fields posted by the chat page. Empty `model` and `key` fall
/// back to the server's configured defaults.
#[derive(Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub conversation_so_far: String,
    #[serde(default)]
    pub user_message: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub key: String,
}
