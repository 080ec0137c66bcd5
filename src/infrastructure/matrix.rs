//! # Matrix Service Adapter
//!
//! Implements the `ChatProvider` trait for the Matrix protocol using the `matrix_sdk`.
//! This module acts as the bridge between the generic `ChatProvider` interface used by the bot's core logic
//! and the specific implementation details of the Matrix SDK.

use crate::domain::traits::ChatProvider;
use crate::domain::types::ChatId;
use async_trait::async_trait;
use matrix_sdk::room::Room;
use matrix_sdk::ruma::events::room::message::RoomMessageEventContent;
use std::collections::HashMap;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct MatrixService {
    room: Room,
}

impl MatrixService {
    pub fn new(room: Room) -> Self {
        Self { room }
    }

    async fn send(&self, content: RoomMessageEventContent) -> Result<String, String> {
        self.room
            .send(content)
            .await
            .map(|resp| resp.event_id.to_string())
            .map_err(|e| e.to_string())
    }
}

#[async_trait]
impl ChatProvider for MatrixService {
    fn room_id(&self) -> String {
        self.room.room_id().as_str().to_string()
    }

    async fn send_message(&self, content: &str) -> Result<String, String> {
        tracing::info!("Bot sending message to {}: {}", self.room_id(), content);
        self.send(RoomMessageEventContent::text_markdown(content)).await
    }

    async fn send_text(&self, content: &str) -> Result<String, String> {
        tracing::info!("Bot sending text to {}: {}", self.room_id(), content);
        self.send(RoomMessageEventContent::text_plain(content)).await
    }
}

/// Assigns each Matrix user id a stable integer [`ChatId`] for the lifetime
/// of the process, in order of first contact.
#[derive(Debug, Default)]
pub struct SenderDirectory {
    ids: Mutex<HashMap<String, ChatId>>,
}

impl SenderDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn resolve(&self, sender: &str) -> ChatId {
        let mut ids = self.ids.lock().await;
        let next = ChatId(ids.len() as i64 + 1);
        *ids.entry(sender.to_string()).or_insert_with(|| {
            tracing::debug!("Assigned chat id {} to {}", next, sender);
            next
        })
    }
}
