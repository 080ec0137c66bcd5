//! # Cancel Command
//!
//! Handles the `cancel` command, which drops the chat's pending input.

use super::Reply;
use crate::application::conversation::PendingAction;
use crate::strings::messages;

/// `previous` is the pending action the router cleared for this chat.
pub fn handle_cancel(previous: Option<PendingAction>) -> Reply {
    match previous {
        Some(action) => Reply::text(messages::cancelled(action.describe())),
        None => Reply::text(messages::NOTHING_TO_CANCEL),
    }
}
