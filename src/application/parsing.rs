//! # Input Parsing
//!
//! Parsers for the comma-separated replies users send after a prompt.
//! Malformed input is reported through [`InputError`]; nothing is defaulted.

use crate::domain::types::{MAX_RATING, Product};
use std::num::IntErrorKind;
use thiserror::Error;

pub const NEW_AD_FORMAT: &str = "Name, Category, Condition, Price, Location";
pub const REVIEW_FORMAT: &str = "Name, Text, Rating (0-5)";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Wrong format! Use: {0}")]
    Format(&'static str),

    #[error("The {0} must not be empty.")]
    MissingField(&'static str),

    #[error("Price must be a non-negative whole number, got '{0}'.")]
    InvalidPrice(String),

    #[error("Rating must be a whole number from 0 to 5, got '{0}'.")]
    InvalidRating(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdInput {
    pub product: Product,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedFilter {
    pub category: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewInput {
    pub target: String,
    pub text: String,
    pub rating: u8,
}

fn required(value: &str, field: &'static str) -> Result<String, InputError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(InputError::MissingField(field));
    }
    Ok(value.to_string())
}

/// Parses a single free-text value such as a display name.
pub fn parse_name(input: &str, field: &'static str) -> Result<String, InputError> {
    required(input, field)
}

/// `Name, Category, Condition, Price, Location`. Commas after the fourth
/// one belong to the location.
pub fn parse_new_ad(input: &str) -> Result<NewAdInput, InputError> {
    let parts: Vec<&str> = input.split(',').collect();
    if parts.len() < 5 {
        return Err(InputError::Format(NEW_AD_FORMAT));
    }

    let name = required(parts[0], "name")?;
    let category = required(parts[1], "category")?;
    let condition = required(parts[2], "condition")?;
    let raw_price = parts[3].trim();
    let price = raw_price
        .parse::<u64>()
        .map_err(|_| InputError::InvalidPrice(raw_price.to_string()))?;
    let location = required(&parts[4..].join(","), "location")?;

    Ok(NewAdInput {
        product: Product {
            category,
            name,
            condition,
            price,
        },
        location,
    })
}

/// `Category, Location`; either part may be empty, further fields are ignored.
pub fn parse_feed_filter(input: &str) -> FeedFilter {
    let mut parts = input.split(',').map(str::trim);
    FeedFilter {
        category: parts.next().unwrap_or_default().to_string(),
        location: parts.next().unwrap_or_default().to_string(),
    }
}

/// `Name, Text, Rating`. The first field names the target, the last one is
/// the rating and everything in between is the review text.
pub fn parse_review(input: &str) -> Result<ReviewInput, InputError> {
    let parts: Vec<&str> = input.split(',').collect();
    if parts.len() < 3 {
        return Err(InputError::Format(REVIEW_FORMAT));
    }

    let target = required(parts[0], "name")?;
    let text = required(&parts[1..parts.len() - 1].join(","), "review text")?;
    let raw_rating = parts[parts.len() - 1].trim();
    let rating = parse_rating(raw_rating)?;

    Ok(ReviewInput {
        target,
        text,
        rating,
    })
}

/// Whole numbers only. Negative scores become 0, anything above the maximum
/// (including values too large for an integer) becomes [`MAX_RATING`].
fn parse_rating(raw: &str) -> Result<u8, InputError> {
    match raw.parse::<i64>() {
        Ok(rating) => Ok(rating.clamp(0, i64::from(MAX_RATING)) as u8),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(MAX_RATING),
            IntErrorKind::NegOverflow => Ok(0),
            _ => Err(InputError::InvalidRating(raw.to_string())),
        },
    }
}
