//! # Start Command
//!
//! Handles the `start` and `help` commands.
//! Displays the main help menu to the user.

use super::Reply;
use crate::domain::config::MarketConfig;

pub fn handle_start(config: &MarketConfig) -> Reply {
    Reply::markdown(crate::strings::help::main(&config.command_prefix))
}
