//! # Application Layer
//!
//! Contains the core logic and orchestration of the bot.
//! This includes command routing, conversation state, input parsing and the shared state store.

pub mod conversation;
pub mod parsing;
pub mod router;
pub mod state;
