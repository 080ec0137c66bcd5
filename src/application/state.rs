//! # Bot State
//!
//! Defines the shared state of the application (`BotState`) and per-chat state (`ChatState`).
//! The marketplace data and every chat's pending action sit behind one lock, so a
//! conversation step (check pending action, parse, mutate, clear) is atomic with
//! respect to other messages.

use crate::application::conversation::PendingAction;
use crate::domain::market::Market;
use crate::domain::types::ChatId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

pub type SharedState = Arc<Mutex<BotState>>;

/// State for a single chat.
#[derive(Debug, Default, Clone)]
pub struct ChatState {
    pub pending: Option<PendingAction>,
}

/// Process-lifetime state of the bot.
#[derive(Debug, Default)]
pub struct BotState {
    pub market: Market,
    pub chats: HashMap<ChatId, ChatState>,
}

impl BotState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedState {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Gets or creates the state for a specific chat.
    pub fn get_chat_state(&mut self, chat: ChatId) -> &mut ChatState {
        self.chats.entry(chat).or_default()
    }

    pub fn pending(&self, chat: ChatId) -> Option<PendingAction> {
        self.chats.get(&chat).and_then(|c| c.pending)
    }

    /// Replaces whatever the chat was waiting for.
    pub fn set_pending(&mut self, chat: ChatId, action: PendingAction) {
        self.get_chat_state(chat).pending = Some(action);
    }

    /// Clears and returns the chat's pending action.
    pub fn take_pending(&mut self, chat: ChatId) -> Option<PendingAction> {
        self.chats.get_mut(&chat).and_then(|c| c.pending.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_is_single_valued() {
        let mut state = BotState::new();
        let chat = ChatId(1);
        assert_eq!(state.pending(chat), None);

        state.set_pending(chat, PendingAction::NewAd);
        state.set_pending(chat, PendingAction::Review);
        assert_eq!(state.pending(chat), Some(PendingAction::Review));

        assert_eq!(state.take_pending(chat), Some(PendingAction::Review));
        assert_eq!(state.take_pending(chat), None);
    }

    #[test]
    fn test_pending_is_per_chat() {
        let mut state = BotState::new();
        state.set_pending(ChatId(1), PendingAction::FeedFilter);
        assert_eq!(state.pending(ChatId(2)), None);
        assert_eq!(state.take_pending(ChatId(2)), None);
        assert_eq!(state.pending(ChatId(1)), Some(PendingAction::FeedFilter));
    }
}
