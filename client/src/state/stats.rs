//! Dashboard counters.
//!
//! Values are fixed mock figures until a scraping backend exists.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::route::AppRoute;

/// Aggregate counters shown on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub usernames: u64,
    pub stories: u64,
    pub stories_24h: u64,
    pub military_related: u64,
    pub new_items: u64,
    pub complete_items: u64,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            usernames: 42,
            stories: 1280,
            stories_24h: 37,
            military_related: 116,
            new_items: 12,
            complete_items: 268,
        }
    }
}

/// Whether a stat card reacts to activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    Static,
    Navigate(AppRoute),
}

impl CardAction {
    pub fn is_clickable(self) -> bool {
        !matches!(self, Self::Static)
    }
}

/// Everything a `StatCard` needs to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCardSpec {
    pub title: &'static str,
    pub value: u64,
    pub subtitle: Option<&'static str>,
    pub action: CardAction,
}

impl DashboardStats {
    /// Cards in display order.
    pub fn cards(&self) -> Vec<StatCardSpec> {
        vec![
            StatCardSpec {
                title: "Usernames",
                value: self.usernames,
                subtitle: Some("Manage scraping targets"),
                action: CardAction::Navigate(AppRoute::InstagramUsernames),
            },
            StatCardSpec { title: "Stories", value: self.stories, subtitle: None, action: CardAction::Static },
            StatCardSpec {
                title: "Stories - Last 24h",
                value: self.stories_24h,
                subtitle: None,
                action: CardAction::Static,
            },
            StatCardSpec {
                title: "Military Related",
                value: self.military_related,
                subtitle: Some("AI analyzed as interesting"),
                action: CardAction::Static,
            },
            StatCardSpec {
                title: "New Items",
                value: self.new_items,
                subtitle: Some("Not seen yet"),
                action: CardAction::Static,
            },
            StatCardSpec {
                title: "Complete Items",
                value: self.complete_items,
                subtitle: Some("Marked as seen"),
                action: CardAction::Static,
            },
        ]
    }
}
