//! # Register Command
//!
//! Handles the `register` command.
//! Creates the user's profile, or renames it when the chat is already known.

use super::Reply;
use crate::application::conversation::PendingAction;
use crate::application::parsing::parse_name;
use crate::application::state::BotState;
use crate::domain::market::Registration;
use crate::domain::types::ChatId;
use crate::strings::{messages, prompts};

pub fn handle_register(state: &mut BotState, chat: ChatId, args: &str) -> Reply {
    if args.trim().is_empty() {
        state.set_pending(chat, PendingAction::Registration);
        return Reply::text(prompts::REGISTER);
    }
    process_registration(state, chat, args)
}

pub fn process_registration(state: &mut BotState, chat: ChatId, input: &str) -> Reply {
    let name = match parse_name(input, "name") {
        Ok(name) => name,
        Err(e) => return e.into(),
    };

    match state.market.register(chat, &name) {
        Registration::Created => {
            tracing::info!("Registered {} as '{}'", chat, name);
            Reply::text(messages::registered(&name))
        }
        Registration::Renamed { previous } if previous == name => {
            Reply::text(messages::registered(&name))
        }
        Registration::Renamed { previous } => {
            tracing::info!("Renamed {} from '{}' to '{}'", chat, previous, name);
            Reply::text(messages::renamed(&previous, &name))
        }
        Registration::NameTaken => {
            tracing::warn!("Name '{}' requested by {} is taken", name, chat);
            Reply::text(messages::NAME_TAKEN)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_without_args_prompts() {
        let mut state = BotState::new();
        let reply = handle_register(&mut state, ChatId(1), "  ");
        assert_eq!(reply.text, prompts::REGISTER);
        assert_eq!(state.pending(ChatId(1)), Some(PendingAction::Registration));
        assert!(state.market.user(ChatId(1)).is_none());
    }

    #[test]
    fn test_register_inline() {
        let mut state = BotState::new();
        let reply = handle_register(&mut state, ChatId(1), "Alice");
        assert_eq!(reply.text, messages::registered("Alice"));
        assert_eq!(state.pending(ChatId(1)), None);
        assert_eq!(state.market.user(ChatId(1)).unwrap().name, "Alice");
    }

    #[test]
    fn test_rename_reports_previous_name() {
        let mut state = BotState::new();
        process_registration(&mut state, ChatId(1), "Alice");
        let reply = process_registration(&mut state, ChatId(1), "Alicia");
        assert_eq!(reply.text, messages::renamed("Alice", "Alicia"));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut state = BotState::new();
        let reply = process_registration(&mut state, ChatId(1), "   ");
        assert!(reply.text.contains("must not be empty"));
        assert!(state.market.user(ChatId(1)).is_none());
    }
}
