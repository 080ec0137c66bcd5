//! # Domain Types
//!
//! Value and entity types of the marketplace: users, their listings and reviews.

use chrono::{DateTime, Utc};
use std::fmt;

/// Highest score a review may carry. Larger inputs are capped, not rejected.
pub const MAX_RATING: u8 = 5;

/// Stable identity of a chat participant as seen by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Feed-unique listing id, assigned in creation order.
pub type AdId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub category: String,
    pub name: String,
    pub condition: String,
    pub price: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ad {
    pub id: AdId,
    pub owner_id: ChatId,
    /// Owner name at the time the ad was posted.
    pub owner_name: String,
    pub description: String,
    pub product: Product,
    pub location: String,
    pub posted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub text: String,
    pub author: String,
    pub rating: u8,
    pub posted_at: DateTime<Utc>,
}

impl Review {
    /// Builds a review, capping `rating` at [`MAX_RATING`].
    pub fn new(text: impl Into<String>, author: impl Into<String>, rating: u8) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            rating: rating.min(MAX_RATING),
            posted_at: Utc::now(),
        }
    }
}

/// A registered (or lazily created) marketplace participant.
///
/// The user's listings live in the market feed; `Market` keeps the
/// owner index, so a `User` only carries profile data and reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ChatId,
    pub name: String,
    pub rating: f64,
    pub reviews: Vec<Review>,
}

impl User {
    pub fn new(id: ChatId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            rating: 0.0,
            reviews: Vec::new(),
        }
    }

    /// Name given to users who post before registering.
    pub fn placeholder_name(id: ChatId) -> String {
        format!("User_{}", id)
    }

    /// Appends a review and recomputes the mean rating.
    pub fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
        let sum: f64 = self.reviews.iter().map(|r| f64::from(r.rating)).sum();
        self.rating = sum / self.reviews.len() as f64;
    }
}
