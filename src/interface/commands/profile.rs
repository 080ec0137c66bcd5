//! # Profile Command
//!
//! Handles the `profile` command.

use super::Reply;
use crate::application::state::BotState;
use crate::domain::config::MarketConfig;
use crate::domain::types::ChatId;
use crate::strings::messages;

pub fn handle_profile(config: &MarketConfig, state: &BotState, chat: ChatId) -> Reply {
    match state.market.user(chat) {
        Some(user) => Reply::text(messages::profile(user, state.market.ad_count(chat))),
        None => Reply::text(messages::not_registered(&config.command_prefix)),
    }
}
