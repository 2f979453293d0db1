//! Application services - Wiring and driving the conversation

pub mod conversation_service;

pub use conversation_service::{Conversation, ConversationService};
