//! # Domain Traits
//!
//! Abstract interface for the chat transport.
//! Allows for pluggable implementations in the Infrastructure layer.

use async_trait::async_trait;

/// Abstract interface for a Chat Provider (e.g., Matrix, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a markdown-formatted message to the room
    async fn send_message(&self, content: &str) -> Result<String, String>;

    /// Send a plain text message to the room
    async fn send_text(&self, content: &str) -> Result<String, String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}
