//! # Review Command
//!
//! Handles the `review` command.
//! The target is looked up by display name; reviewing yourself is refused.

use super::Reply;
use crate::application::conversation::PendingAction;
use crate::application::parsing::parse_review;
use crate::application::state::BotState;
use crate::domain::types::{ChatId, User};
use crate::strings::{messages, prompts};

pub fn handle_review(state: &mut BotState, chat: ChatId, args: &str) -> Reply {
    if args.trim().is_empty() {
        state.set_pending(chat, PendingAction::Review);
        return Reply::text(prompts::REVIEW);
    }
    process_review(state, chat, args)
}

pub fn process_review(state: &mut BotState, chat: ChatId, input: &str) -> Reply {
    let input = match parse_review(input) {
        Ok(input) => input,
        Err(e) => return e.into(),
    };

    let Some(target) = state.market.user_by_name(&input.target).map(|u| u.id) else {
        return Reply::text(messages::user_not_found(&input.target));
    };
    if target == chat {
        return Reply::text(messages::SELF_REVIEW);
    }

    let author = state
        .market
        .user(chat)
        .map(|u| u.name.clone())
        .unwrap_or_else(|| User::placeholder_name(chat));

    match state
        .market
        .leave_review(target, &author, &input.text, input.rating)
    {
        Some(rating) => {
            tracing::info!("{} reviewed {} ({}), new rating {:.2}", chat, input.target, target, rating);
            Reply::text(messages::REVIEW_ADDED)
        }
        None => Reply::text(messages::user_not_found(&input.target)),
    }
}
