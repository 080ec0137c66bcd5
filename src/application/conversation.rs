//! # Conversation
//!
//! Commands understood by the bot and the per-chat pending action that
//! routes the next free-text message to the right processor.

/// Input a chat owes the bot after a prompting command.
/// A chat has at most one pending action at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    NewAd,
    DeleteAd,
    FeedFilter,
    Review,
    Registration,
}

impl PendingAction {
    /// Human readable name, used when the action is cancelled.
    pub fn describe(&self) -> &'static str {
        match self {
            PendingAction::NewAd => "the new ad",
            PendingAction::DeleteAd => "the ad deletion",
            PendingAction::FeedFilter => "the feed search",
            PendingAction::Review => "the review",
            PendingAction::Registration => "the registration",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Register,
    NewAd,
    MyAds,
    DeleteAd,
    Profile,
    Feed,
    Review,
    Cancel,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "start" => Some(Command::Start),
            "help" => Some(Command::Help),
            "register" => Some(Command::Register),
            "newad" => Some(Command::NewAd),
            "myads" => Some(Command::MyAds),
            "deletead" => Some(Command::DeleteAd),
            "profile" => Some(Command::Profile),
            "feed" => Some(Command::Feed),
            "review" => Some(Command::Review),
            "cancel" => Some(Command::Cancel),
            _ => None,
        }
    }

    /// Splits `message` into a known command and its argument text.
    /// Returns `None` when the message does not start with `prefix` followed
    /// by a known command name.
    pub fn parse<'a>(message: &'a str, prefix: &str) -> Option<(Self, &'a str)> {
        let rest = message.trim().strip_prefix(prefix)?;
        let (name, args) = match rest.find(char::is_whitespace) {
            Some(idx) => (&rest[..idx], rest[idx..].trim()),
            None => (rest, ""),
        };
        Self::from_name(name).map(|cmd| (cmd, args))
    }
}
