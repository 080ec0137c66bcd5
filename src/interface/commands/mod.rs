//! # Command Handlers
//!
//! Contains specific handler functions for each supported command (e.g. register, newad, feed).
//! These handlers are invoked by the Router while it holds the state lock. They never do
//! I/O: each returns the [`Reply`] the router delivers once the lock is released.

pub mod ads;
pub mod cancel;
pub mod feed;
pub mod profile;
pub mod register;
pub mod review;
pub mod start;

/// Response to one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub markdown: bool,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: false,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: true,
        }
    }
}

impl From<crate::application::parsing::InputError> for Reply {
    fn from(err: crate::application::parsing::InputError) -> Self {
        tracing::warn!("Rejected input: {}", err);
        Reply::text(crate::strings::messages::input_error(&err.to_string()))
    }
}
