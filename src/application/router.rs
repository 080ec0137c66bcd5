//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! A message is either a known command, the answer to the chat's pending prompt, or
//! unknown. The whole decision and the state change it causes happen under one lock;
//! the reply is sent after the lock is released.

use anyhow::Result;

use crate::application::conversation::{Command, PendingAction};
use crate::application::state::SharedState;
use crate::domain::config::AppConfig;
use crate::domain::traits::ChatProvider;
use crate::domain::types::ChatId;
use crate::interface::commands::{self, Reply};

#[derive(Clone)]
pub struct CommandRouter {
    config: AppConfig,
    state: SharedState,
}

impl CommandRouter {
    pub fn new(config: AppConfig, state: SharedState) -> Self {
        Self { config, state }
    }

    pub async fn route<C>(&self, chat: &C, sender: ChatId, message: &str) -> Result<()>
    where
        C: ChatProvider + ?Sized,
    {
        let Some(reply) = self.dispatch(sender, message).await else {
            return Ok(());
        };

        let sent = if reply.markdown {
            chat.send_message(&reply.text).await
        } else {
            chat.send_text(&reply.text).await
        };
        sent.map(|_| ()).map_err(|e| anyhow::anyhow!(e))
    }

    /// Computes the reply to `message` from `sender` and applies its state
    /// changes. Returns `None` for blank messages.
    pub async fn dispatch(&self, sender: ChatId, message: &str) -> Option<Reply> {
        let msg = message.trim();
        if msg.is_empty() {
            return None;
        }

        let market = &self.config.market;
        let mut guard = self.state.lock().await;

        if let Some((cmd, args)) = Command::parse(msg, &market.command_prefix) {
            tracing::info!("Router dispatching cmd={:?} args='{}' sender={}", cmd, args, sender);

            // A new command always supersedes whatever the chat was waiting for.
            let previous = guard.take_pending(sender);
            if let Some(action) = previous {
                if cmd != Command::Cancel {
                    tracing::debug!("Dropping pending {:?} for {}", action, sender);
                }
            }

            let state = &mut *guard;
            let reply = match cmd {
                Command::Start | Command::Help => commands::start::handle_start(market),
                Command::Register => commands::register::handle_register(state, sender, args),
                Command::NewAd => commands::ads::handle_new_ad(market, state, sender, args),
                Command::MyAds => commands::ads::handle_my_ads(market, state, sender),
                Command::DeleteAd => commands::ads::handle_delete_ad(market, state, sender, args),
                Command::Profile => commands::profile::handle_profile(market, state, sender),
                Command::Feed => commands::feed::handle_feed(market, state, sender, args),
                Command::Review => commands::review::handle_review(state, sender, args),
                Command::Cancel => commands::cancel::handle_cancel(previous),
            };
            return Some(reply);
        }

        // Taken before processing so it is cleared on every exit path.
        let Some(action) = guard.take_pending(sender) else {
            return Some(Reply::text(crate::strings::messages::unknown_command(
                &market.command_prefix,
            )));
        };

        tracing::info!("Router resuming {:?} for {}", action, sender);
        let state = &mut *guard;
        let reply = match action {
            PendingAction::Registration => commands::register::process_registration(state, sender, msg),
            PendingAction::NewAd => commands::ads::process_new_ad(market, state, sender, msg),
            PendingAction::DeleteAd => commands::ads::process_delete_ad(market, state, sender, msg),
            PendingAction::FeedFilter => commands::feed::process_feed(market, state, msg),
            PendingAction::Review => commands::review::process_review(state, sender, msg),
        };
        Some(reply)
    }
}
