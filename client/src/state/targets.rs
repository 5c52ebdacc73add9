//! Scrape-target list state for the usernames page.
//!
//! DESIGN
//! ======
//! The list and the search filter live in one owned container so the page can
//! hold it in a single signal. The table is a pure projection of
//! `(targets, filter)` through `visible_rows`; nothing else reads the list.
//!
//! Usernames are unique case-insensitively. New targets are prepended so the
//! table shows the most recent additions first.

#[cfg(test)]
#[path = "targets_test.rs"]
mod targets_test;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

const AVATAR_BASE_URL: &str = "https://i.pravatar.cc/80";

/// One tracked account and its scrape metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub id: u64,
    pub username: String,
    pub profile_pic_url: String,
    pub is_private: bool,
    pub last_scraped: Option<NaiveDateTime>,
    pub is_scraped: bool,
    pub added_date: NaiveDate,
    pub total_stories: u32,
    pub stories_24h: u32,
    pub comments: String,
}

impl Target {
    /// Fresh target with creation defaults: public, never scraped, scraping enabled.
    pub fn new(id: u64, username: &str, added_date: NaiveDate) -> Self {
        Self {
            id,
            username: username.to_owned(),
            profile_pic_url: profile_pic_url(username),
            is_private: false,
            last_scraped: None,
            is_scraped: true,
            added_date,
            total_stories: 0,
            stories_24h: 0,
            comments: String::new(),
        }
    }
}

/// Placeholder avatar URL keyed on the username.
pub fn profile_pic_url(username: &str) -> String {
    format!("{AVATAR_BASE_URL}?u={}", urlencoding::encode(username))
}

/// Result of an add request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added { id: u64 },
    /// Input was empty after trimming.
    Empty,
    /// A target with the same username (ignoring case) already exists.
    Duplicate { username: String },
}

/// Target list plus the active search filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetList {
    targets: Vec<Target>,
    filter: String,
}

impl TargetList {
    pub fn new(targets: Vec<Target>) -> Self {
        Self { targets, filter: String::new() }
    }

    /// The list a freshly mounted page starts with.
    pub fn seeded() -> Self {
        Self::new(vec![seed_target()])
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn contains_username(&self, username: &str) -> bool {
        let needle = username.to_lowercase();
        self.targets.iter().any(|t| t.username.to_lowercase() == needle)
    }

    /// Next id: one past the largest id in the list, starting at 1.
    pub fn next_id(&self) -> u64 {
        self.targets.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Add a target dated today (UTC).
    pub fn add_target(&mut self, raw: &str) -> AddOutcome {
        self.add_target_on(raw, Utc::now().date_naive())
    }

    /// Add a target with an explicit creation date.
    pub fn add_target_on(&mut self, raw: &str, added_date: NaiveDate) -> AddOutcome {
        let username = raw.trim();
        if username.is_empty() {
            return AddOutcome::Empty;
        }
        if self.contains_username(username) {
            log::debug!("target add rejected: @{username} already tracked");
            return AddOutcome::Duplicate { username: username.to_owned() };
        }

        let id = self.next_id();
        self.targets.insert(0, Target::new(id, username, added_date));
        log::debug!("target added: @{username} (id {id})");
        AddOutcome::Added { id }
    }

    /// Flip `is_scraped` on the target with `id`. Returns false if no target matched.
    pub fn toggle_scraped(&mut self, id: u64) -> bool {
        let Some(target) = self.targets.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        target.is_scraped = !target.is_scraped;
        log::debug!("target {id} is_scraped -> {}", target.is_scraped);
        true
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    /// Targets whose username contains the filter (case-insensitive), in list order.
    pub fn visible_rows(&self) -> Vec<&Target> {
        let needle = self.filter.trim().to_lowercase();
        if needle.is_empty() {
            return self.targets.iter().collect();
        }
        self.targets
            .iter()
            .filter(|t| t.username.to_lowercase().contains(&needle))
            .collect()
    }
}

fn seed_target() -> Target {
    Target {
        id: 1,
        username: "test_user".to_owned(),
        profile_pic_url: format!("{AVATAR_BASE_URL}?img=12"),
        is_private: false,
        last_scraped: Some(
            NaiveDate::from_ymd_opt(2026, 1, 3)
                .and_then(|d| d.and_hms_opt(14, 10, 0))
                .expect("valid seed timestamp"),
        ),
        is_scraped: true,
        added_date: NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid seed date"),
        total_stories: 120,
        stories_24h: 4,
        comments: "Watch this account".to_owned(),
    }
}
