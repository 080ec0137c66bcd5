//! # Market
//!
//! The in-memory marketplace: user registry, the global ad feed and an
//! owner index into it.
//!
//! The feed is the single source of truth for listings. `owner_index` maps
//! each owner to the ids of their ads in posting order, so a user's
//! listings and the feed cannot drift apart: both views are resolved
//! through the same ad id.

use crate::domain::types::{Ad, AdId, ChatId, Product, Review, User};
use chrono::Utc;
use std::collections::HashMap;

/// Result of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Created,
    Renamed { previous: String },
    /// The name belongs to another identity; nothing was changed.
    NameTaken,
}

#[derive(Debug, Default)]
pub struct Market {
    users: HashMap<ChatId, User>,
    feed: Vec<Ad>,
    owner_index: HashMap<ChatId, Vec<AdId>>,
    next_ad_id: AdId,
}

impl Market {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self, id: ChatId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn user_by_name(&self, name: &str) -> Option<&User> {
        self.users.values().find(|u| u.name == name)
    }

    fn name_taken(&self, name: &str, except: ChatId) -> bool {
        self.users.values().any(|u| u.name == name && u.id != except)
    }

    /// `User_<id>`, or `User_<id>_<n>` when another identity already holds it.
    fn free_placeholder_name(&self, id: ChatId) -> String {
        let base = User::placeholder_name(id);
        let mut name = base.clone();
        let mut suffix = 1;
        while self.name_taken(&name, id) {
            suffix += 1;
            name = format!("{base}_{suffix}");
        }
        name
    }

    /// Returns the user for `id`, creating a placeholder profile if needed.
    pub fn ensure_user(&mut self, id: ChatId) -> &mut User {
        let placeholder = (!self.users.contains_key(&id)).then(|| self.free_placeholder_name(id));
        self.users.entry(id).or_insert_with(|| {
            let name = placeholder.unwrap_or_else(|| User::placeholder_name(id));
            tracing::debug!("Creating placeholder user {} for {}", name, id);
            User::new(id, name)
        })
    }

    /// Registers `id` under `name`, or renames an existing profile.
    /// Names are unique across identities (exact comparison).
    pub fn register(&mut self, id: ChatId, name: &str) -> Registration {
        if self.name_taken(name, id) {
            return Registration::NameTaken;
        }

        match self.users.get_mut(&id) {
            Some(user) => {
                let previous = std::mem::replace(&mut user.name, name.to_string());
                Registration::Renamed { previous }
            }
            None => {
                self.users.insert(id, User::new(id, name));
                Registration::Created
            }
        }
    }

    /// Posts a new ad for `owner`. The ad is appended to the feed and to the
    /// owner's index.
    pub fn create_ad(
        &mut self,
        owner: ChatId,
        description: String,
        product: Product,
        location: String,
    ) -> &Ad {
        let owner_name = self.ensure_user(owner).name.clone();

        let id = self.next_ad_id;
        self.next_ad_id += 1;

        self.owner_index.entry(owner).or_default().push(id);
        self.feed.push(Ad {
            id,
            owner_id: owner,
            owner_name,
            description,
            product,
            location,
            posted_at: Utc::now(),
        });

        &self.feed[self.feed.len() - 1]
    }

    /// Feed position of ad `id`. Ids are handed out in increasing order and
    /// removal keeps the order, so the feed is always sorted by id.
    fn position(&self, id: AdId) -> Option<usize> {
        self.feed.binary_search_by_key(&id, |ad| ad.id).ok()
    }

    /// Listings of `owner` in posting order.
    pub fn ads_of(&self, owner: ChatId) -> Vec<&Ad> {
        let Some(ids) = self.owner_index.get(&owner) else {
            return Vec::new();
        };
        ids.iter()
            .filter_map(|id| self.position(*id).map(|pos| &self.feed[pos]))
            .collect()
    }

    pub fn ad_count(&self, owner: ChatId) -> usize {
        self.owner_index.get(&owner).map_or(0, Vec::len)
    }

    /// Removes the first ad of `owner` whose product name equals `name`
    /// exactly.
    pub fn delete_ad(&mut self, owner: ChatId, name: &str) -> Option<Ad> {
        self.remove_first_where(owner, |ad| ad.product.name == name)
    }

    /// Same as [`Market::delete_ad`] but ignores letter case.
    pub fn delete_ad_ignore_case(&mut self, owner: ChatId, name: &str) -> Option<Ad> {
        let wanted = name.to_lowercase();
        self.remove_first_where(owner, |ad| ad.product.name.to_lowercase() == wanted)
    }

    fn remove_first_where<F>(&mut self, owner: ChatId, matches: F) -> Option<Ad>
    where
        F: Fn(&Ad) -> bool,
    {
        let (slot, pos) = self
            .owner_index
            .get(&owner)?
            .iter()
            .enumerate()
            .find_map(|(slot, id)| {
                self.position(*id)
                    .filter(|pos| matches(&self.feed[*pos]))
                    .map(|pos| (slot, pos))
            })?;

        if let Some(ids) = self.owner_index.get_mut(&owner) {
            ids.remove(slot);
        }
        Some(self.feed.remove(pos))
    }

    /// Appends a review to `target` and returns the target's new rating.
    /// Ratings above five are capped. Returns `None` for unknown targets.
    pub fn leave_review(
        &mut self,
        target: ChatId,
        author: &str,
        text: &str,
        rating: u8,
    ) -> Option<f64> {
        let user = self.users.get_mut(&target)?;
        user.add_review(Review::new(text, author, rating));
        Some(user.rating)
    }

    /// Ads matching both filters, in feed order. An empty filter matches
    /// everything; otherwise comparison is exact.
    pub fn filtered_ads(&self, category: &str, location: &str) -> Vec<&Ad> {
        self.feed
            .iter()
            .filter(|ad| category.is_empty() || ad.product.category == category)
            .filter(|ad| location.is_empty() || ad.location == location)
            .collect()
    }

    pub fn feed(&self) -> &[Ad] {
        &self.feed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, category: &str, price: u64) -> Product {
        Product {
            category: category.to_string(),
            name: name.to_string(),
            condition: "Used".to_string(),
            price,
        }
    }

    fn post(market: &mut Market, owner: i64, name: &str, category: &str, location: &str) -> AdId {
        market
            .create_ad(
                ChatId(owner),
                format!("{name} in {location}"),
                product(name, category, 100),
                location.to_string(),
            )
            .id
    }

    #[test]
    fn test_create_ad_lands_in_feed_and_owner_list() {
        let mut market = Market::new();
        market.register(ChatId(1), "Alice");

        post(&mut market, 1, "Chair", "Furniture", "Berlin");
        post(&mut market, 1, "Lamp", "Furniture", "Berlin");

        let names: Vec<_> = market.ads_of(ChatId(1)).iter().map(|a| a.product.name.clone()).collect();
        assert_eq!(names, vec!["Chair", "Lamp"]);
        assert_eq!(market.feed().len(), 2);
        assert_eq!(market.feed()[0].owner_name, "Alice");
        assert_eq!(market.ad_count(ChatId(1)), 2);
    }

    #[test]
    fn test_create_ad_creates_placeholder_owner() {
        let mut market = Market::new();
        post(&mut market, 7, "Bike", "Sport", "Rome");

        let user = market.user(ChatId(7)).unwrap();
        assert_eq!(user.name, "User_7");
        assert_eq!(market.feed()[0].owner_name, "User_7");
    }

    #[test]
    fn test_placeholder_never_reuses_a_registered_name() {
        let mut market = Market::new();
        market.register(ChatId(1), "User_2");
        post(&mut market, 2, "Bike", "Sport", "Rome");

        let holders: Vec<_> = market.users.values().filter(|u| u.name == "User_2").collect();
        assert_eq!(holders.len(), 1);
        assert_eq!(holders[0].id, ChatId(1));

        let placeholder = &market.user(ChatId(2)).unwrap().name;
        assert_eq!(placeholder, "User_2_2");
        assert_eq!(market.feed()[0].owner_name, "User_2_2");
        assert_eq!(market.user_by_name("User_2").unwrap().id, ChatId(1));
    }

    #[test]
    fn test_ads_of_after_deletions_in_the_middle() {
        let mut market = Market::new();
        let a = post(&mut market, 1, "A", "x", "Berlin");
        let b = post(&mut market, 2, "B", "x", "Berlin");
        let c = post(&mut market, 1, "C", "x", "Berlin");
        let d = post(&mut market, 1, "D", "x", "Berlin");

        assert_eq!(market.delete_ad(ChatId(1), "C").unwrap().id, c);
        let ids: Vec<_> = market.ads_of(ChatId(1)).iter().map(|ad| ad.id).collect();
        assert_eq!(ids, vec![a, d]);
        let feed: Vec<_> = market.feed().iter().map(|ad| ad.id).collect();
        assert_eq!(feed, vec![a, b, d]);
    }

    #[test]
    fn test_delete_ad_is_case_sensitive() {
        let mut market = Market::new();
        post(&mut market, 1, "Chair", "Furniture", "Berlin");

        assert!(market.delete_ad(ChatId(1), "chair").is_none());
        assert!(market.delete_ad(ChatId(1), "Chair").is_some());
        assert!(market.feed().is_empty());
        assert!(market.ads_of(ChatId(1)).is_empty());
    }

    #[test]
    fn test_delete_ignore_case_removes_from_both_views() {
        let mut market = Market::new();
        post(&mut market, 1, "Chair", "Furniture", "Berlin");
        post(&mut market, 2, "Chair", "Furniture", "Berlin");

        let removed = market.delete_ad_ignore_case(ChatId(1), "CHAIR").unwrap();
        assert_eq!(removed.owner_id, ChatId(1));
        assert_eq!(market.feed().len(), 1);
        assert_eq!(market.feed()[0].owner_id, ChatId(2));
        assert!(market.ads_of(ChatId(1)).is_empty());

        assert!(market.delete_ad_ignore_case(ChatId(1), "chair").is_none());
    }

    #[test]
    fn test_delete_duplicate_names_removes_one_at_a_time() {
        let mut market = Market::new();
        let first = post(&mut market, 1, "Chair", "Furniture", "Berlin");
        let second = post(&mut market, 1, "Chair", "Furniture", "Paris");

        assert_eq!(market.delete_ad(ChatId(1), "Chair").unwrap().id, first);
        let left: Vec<_> = market.ads_of(ChatId(1)).iter().map(|a| a.id).collect();
        assert_eq!(left, vec![second]);
        assert_eq!(market.feed().len(), 1);
        assert_eq!(market.feed()[0].id, second);
    }

    #[test]
    fn test_delete_does_not_touch_other_owners() {
        let mut market = Market::new();
        post(&mut market, 2, "Chair", "Furniture", "Berlin");
        assert!(market.delete_ad_ignore_case(ChatId(1), "Chair").is_none());
        assert_eq!(market.feed().len(), 1);
    }

    #[test]
    fn test_filtered_ads() {
        let mut market = Market::new();
        post(&mut market, 1, "Phone", "electronics", "Berlin");
        post(&mut market, 1, "Chair", "Furniture", "Berlin");
        post(&mut market, 2, "Laptop", "electronics", "Paris");
        post(&mut market, 2, "Radio", "Electronics", "Berlin");

        let all: Vec<_> = market.filtered_ads("", "").iter().map(|a| a.product.name.clone()).collect();
        assert_eq!(all, vec!["Phone", "Chair", "Laptop", "Radio"]);

        let electronics: Vec<_> = market
            .filtered_ads("electronics", "")
            .iter()
            .map(|a| a.product.name.clone())
            .collect();
        assert_eq!(electronics, vec!["Phone", "Laptop"]);

        let berlin: Vec<_> = market
            .filtered_ads("electronics", "Berlin")
            .iter()
            .map(|a| a.product.name.clone())
            .collect();
        assert_eq!(berlin, vec!["Phone"]);

        assert!(market.filtered_ads("", "berlin").is_empty());
    }

    #[test]
    fn test_register_rejects_taken_name() {
        let mut market = Market::new();
        assert_eq!(market.register(ChatId(1), "Alice"), Registration::Created);
        assert_eq!(market.register(ChatId(2), "Bob"), Registration::Created);

        assert_eq!(market.register(ChatId(2), "Alice"), Registration::NameTaken);
        assert_eq!(market.user(ChatId(1)).unwrap().name, "Alice");
        assert_eq!(market.user(ChatId(2)).unwrap().name, "Bob");
    }

    #[test]
    fn test_register_renames_and_allows_own_name() {
        let mut market = Market::new();
        market.register(ChatId(1), "Alice");
        assert_eq!(
            market.register(ChatId(1), "Alice"),
            Registration::Renamed { previous: "Alice".to_string() }
        );
        assert_eq!(
            market.register(ChatId(1), "Alicia"),
            Registration::Renamed { previous: "Alice".to_string() }
        );
        assert_eq!(market.user_by_name("Alicia").unwrap().id, ChatId(1));
        assert!(market.user_by_name("Alice").is_none());
    }

    #[test]
    fn test_leave_review_updates_mean() {
        let mut market = Market::new();
        market.register(ChatId(2), "Bob");

        assert_eq!(market.leave_review(ChatId(2), "Alice", "Great seller", 7), Some(5.0));
        assert_eq!(market.leave_review(ChatId(2), "Carol", "Late", 2), Some(3.5));
        assert_eq!(market.user(ChatId(2)).unwrap().reviews.len(), 2);

        assert_eq!(market.leave_review(ChatId(9), "Alice", "?", 3), None);
    }
}
