//! # Prompts
//!
//! Questions the bot asks when a command needs further input.
//! The next free-text message of the chat answers them.

pub const REGISTER: &str = "Enter your name to register:";

pub const NEW_AD: &str = concat!(
    "Enter your ad in the format:\n",
    "Name, Category, Condition, Price, Location"
);

pub const DELETE_AD: &str = "Enter the exact name of the ad to delete:";

pub const FEED: &str =
    "Enter a filter in the format: Category, Location (leave a field empty to match everything)";

pub const REVIEW: &str = concat!(
    "Enter your review in the format:\n",
    "Name, Text, Rating (0-5)"
);
