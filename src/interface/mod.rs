//! # Interface Layer
//!
//! User-facing entry points of the bot. Each command has a handler here,
//! invoked by the router in the application layer.

pub mod commands;
