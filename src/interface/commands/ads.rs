//! # Ad Commands
//!
//! Handles `newad`, `myads` and `deletead`.

use super::Reply;
use crate::application::conversation::PendingAction;
use crate::application::parsing::{parse_name, parse_new_ad};
use crate::application::state::BotState;
use crate::domain::config::MarketConfig;
use crate::domain::types::ChatId;
use crate::strings::{messages, prompts};

pub fn handle_new_ad(config: &MarketConfig, state: &mut BotState, chat: ChatId, args: &str) -> Reply {
    if args.trim().is_empty() {
        state.set_pending(chat, PendingAction::NewAd);
        return Reply::text(prompts::NEW_AD);
    }
    process_new_ad(config, state, chat, args)
}

pub fn process_new_ad(config: &MarketConfig, state: &mut BotState, chat: ChatId, input: &str) -> Reply {
    let input = match parse_new_ad(input) {
        Ok(input) => input,
        Err(e) => return e.into(),
    };

    if let Some(max) = config.max_ads_per_user {
        if state.market.ad_count(chat) >= max {
            return Reply::text(messages::ad_limit_reached(max));
        }
    }

    let description = messages::ad_description(&input.product.name, &input.location);
    let ad = state
        .market
        .create_ad(chat, description, input.product, input.location);
    tracing::info!("Ad #{} '{}' posted by {}", ad.id, ad.product.name, chat);
    let reply = Reply::markdown(messages::ad_created(ad, &config.currency));
    tracing::debug!("Feed holds {} ads", state.market.feed().len());

    reply
}

pub fn handle_my_ads(config: &MarketConfig, state: &BotState, chat: ChatId) -> Reply {
    let ads = state.market.ads_of(chat);
    if ads.is_empty() {
        return Reply::text(messages::NO_ADS);
    }
    Reply::markdown(messages::my_ads(&ads, &config.currency))
}

pub fn handle_delete_ad(config: &MarketConfig, state: &mut BotState, chat: ChatId, args: &str) -> Reply {
    let listing = {
        let ads = state.market.ads_of(chat);
        if ads.is_empty() {
            return Reply::text(messages::NO_ADS_TO_DELETE);
        }
        messages::delete_candidates(&ads)
    };

    if !args.trim().is_empty() {
        return process_delete_ad(config, state, chat, args);
    }

    state.set_pending(chat, PendingAction::DeleteAd);
    Reply::text(format!("{listing}\n{}", prompts::DELETE_AD))
}

/// Deletes the requester's ad named `input`, ignoring case when there is no exact match.
pub fn process_delete_ad(config: &MarketConfig, state: &mut BotState, chat: ChatId, input: &str) -> Reply {
    if state.market.user(chat).is_none() {
        return Reply::text(messages::not_registered(&config.command_prefix));
    }

    let name = match parse_name(input, "ad name") {
        Ok(name) => name,
        Err(e) => return e.into(),
    };

    // An exact match wins over one that only differs in case.
    let removed = state
        .market
        .delete_ad(chat, &name)
        .or_else(|| state.market.delete_ad_ignore_case(chat, &name));

    match removed {
        Some(ad) => {
            tracing::info!("Ad #{} '{}' deleted by {}", ad.id, ad.product.name, chat);
            Reply::text(messages::ad_deleted(&ad.product.name))
        }
        None => {
            tracing::debug!("No ad named '{}' for {}", name, chat);
            Reply::text(messages::AD_NOT_FOUND)
        }
    }
}
