//! # Feed Command
//!
//! Handles the `feed` command: browse every ad, optionally filtered by
//! category and location.

use super::Reply;
use crate::application::conversation::PendingAction;
use crate::application::parsing::parse_feed_filter;
use crate::application::state::BotState;
use crate::domain::config::MarketConfig;
use crate::domain::types::ChatId;
use crate::strings::{messages, prompts};

pub fn handle_feed(config: &MarketConfig, state: &mut BotState, chat: ChatId, args: &str) -> Reply {
    if args.trim().is_empty() {
        state.set_pending(chat, PendingAction::FeedFilter);
        return Reply::text(prompts::FEED);
    }
    process_feed(config, state, args)
}

pub fn process_feed(config: &MarketConfig, state: &BotState, input: &str) -> Reply {
    let filter = parse_feed_filter(input);
    let ads = state.market.filtered_ads(&filter.category, &filter.location);
    tracing::debug!(
        "Feed filter category='{}' location='{}' matched {} ads",
        filter.category,
        filter.location,
        ads.len()
    );

    if ads.is_empty() {
        return Reply::text(messages::FEED_EMPTY);
    }
    Reply::markdown(messages::feed(&ads, &config.currency))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::commands::ads::process_new_ad;

    #[test]
    fn test_feed_filtering() {
        let config = MarketConfig::default();
        let mut state = BotState::new();
        process_new_ad(&config, &mut state, ChatId(1), "Chair, Furniture, Used, 5, Berlin");
        process_new_ad(&config, &mut state, ChatId(2), "Phone, electronics, New, 90, Berlin");

        let all = process_feed(&config, &state, "").text;
        assert!(all.find("Chair").unwrap() < all.find("Phone").unwrap());

        let electronics = process_feed(&config, &state, "electronics, ").text;
        assert!(electronics.contains("Phone"));
        assert!(!electronics.contains("Chair"));

        assert_eq!(process_feed(&config, &state, "Furniture, Paris").text, messages::FEED_EMPTY);
    }

    #[test]
    fn test_feed_without_args_prompts() {
        let config = MarketConfig::default();
        let mut state = BotState::new();
        assert_eq!(handle_feed(&config, &mut state, ChatId(1), "").text, prompts::FEED);
        assert_eq!(state.pending(ChatId(1)), Some(PendingAction::FeedFilter));
    }
}
