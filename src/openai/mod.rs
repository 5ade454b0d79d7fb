mod core;
pub use core::{
    AssistantReply, CHAT_TEMPERATURE, CompletionError, FunctionCallSpec, FunctionDecl, Message,
    Parameters, Property, Role, completion,
};
