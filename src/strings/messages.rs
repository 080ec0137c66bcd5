//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.
//! Includes listings, confirmations and informational replies.

use crate::domain::types::{Ad, User};
use std::fmt::Write;

pub fn unknown_command(prefix: &str) -> String {
    format!("❓ Unknown command. Use {prefix}start to see the list of commands.")
}

pub fn not_registered(prefix: &str) -> String {
    format!("You are not registered! Use {prefix}register.")
}

pub const NO_ADS: &str = "You have no ads.";
pub const NO_ADS_TO_DELETE: &str = "You have no ads to delete.";
pub const AD_NOT_FOUND: &str = "Ad not found. Check the name and try again.";
pub const FEED_EMPTY: &str = "No ads found.";
pub const NAME_TAKEN: &str = "This name is already taken, choose another one.";
pub const REVIEW_ADDED: &str = "✅ Review added!";
pub const SELF_REVIEW: &str = "You cannot review yourself.";
pub const NOTHING_TO_CANCEL: &str = "Nothing to cancel.";

pub fn input_error(err: &str) -> String {
    format!("⚠️ {err}")
}

pub fn registered(name: &str) -> String {
    format!("✅ You are registered as {name}!")
}

pub fn renamed(previous: &str, name: &str) -> String {
    format!("✅ Your name changed from {previous} to {name}.")
}

pub fn ad_limit_reached(max: usize) -> String {
    format!("You already have {max} ads. Delete one before posting another.")
}

pub fn ad_deleted(name: &str) -> String {
    format!("✅ Ad '{name}' deleted.")
}

pub fn user_not_found(name: &str) -> String {
    format!("User '{name}' not found.")
}

pub fn cancelled(what: &str) -> String {
    format!("❌ Cancelled {what}.")
}

pub fn ad_description(name: &str, location: &str) -> String {
    format!("Listing: {name} in {location}")
}

/// Escapes markdown metacharacters in user-supplied text so it renders literally.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']' | '~' | '<' | '>' | '#') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

pub fn ad_created(ad: &Ad, currency: &str) -> String {
    format!(
        "✅ Ad posted!\n📌 *{}* ({})\n💬 {}\n💰 {} {}\n📍 {}",
        escape_markdown(&ad.product.name),
        escape_markdown(&ad.product.category),
        escape_markdown(&ad.product.condition),
        ad.product.price,
        escape_markdown(currency),
        escape_markdown(&ad.location)
    )
}

pub fn my_ads(ads: &[&Ad], currency: &str) -> String {
    let mut out = String::from("📢 Your ads:\n");
    for ad in ads {
        let _ = write!(
            out,
            "\n📌 *{}* ({})\n💬 {}\n💰 {} {}\n📍 {}\n🕒 {}\n",
            escape_markdown(&ad.product.name),
            escape_markdown(&ad.product.category),
            escape_markdown(&ad.product.condition),
            ad.product.price,
            escape_markdown(currency),
            escape_markdown(&ad.location),
            ad.posted_at.format("%Y-%m-%d")
        );
    }
    out
}

pub fn delete_candidates(ads: &[&Ad]) -> String {
    let mut out = String::from("📢 Your ads:\n");
    for ad in ads {
        let _ = writeln!(out, "🔹 {} ({})", ad.product.name, ad.product.category);
    }
    out
}

pub fn feed(ads: &[&Ad], currency: &str) -> String {
    let mut out = String::from("🔍 Ads found:\n");
    for ad in ads {
        let _ = write!(
            out,
            "\n📌 *{}* ({})\n📍 {}\n💰 {} {}\n💬 {}\n👤 {}\n",
            escape_markdown(&ad.product.name),
            escape_markdown(&ad.product.category),
            escape_markdown(&ad.location),
            ad.product.price,
            escape_markdown(currency),
            escape_markdown(&ad.description),
            escape_markdown(&ad.owner_name)
        );
    }
    out
}

pub fn profile(user: &User, ad_count: usize) -> String {
    let mut out = format!(
        "👤 Profile:\nName: {}\nRating: {:.1} ⭐ ({} reviews)\nAds: {}",
        user.name,
        user.rating,
        user.reviews.len(),
        ad_count
    );
    if let Some(review) = user.reviews.last() {
        let _ = write!(
            out,
            "\nLatest review: \"{}\" by {} ({}, {}⭐)",
            review.text,
            review.author,
            review.posted_at.format("%Y-%m-%d"),
            review.rating
        );
    }
    out
}
