//! Typed route table.
//!
//! `app` builds its `<Route>` paths from `section_segment` and `page_segment`.
//! The host server's fallback resolves unmatched request paths through
//! `resolve`, so a path with a stray trailing slash lands on its canonical
//! route and anything else lands on `/`.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// First path segment shared by the Instagram pages.
pub const INSTAGRAM_SECTION: &str = "instagram";

/// Every page the application can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Root,
    InstagramDashboard,
    InstagramUsernames,
}

impl AppRoute {
    pub const ALL: [AppRoute; 3] = [Self::Root, Self::InstagramDashboard, Self::InstagramUsernames];

    /// Section segment, `None` for the root page.
    pub fn section_segment(self) -> Option<&'static str> {
        match self {
            Self::Root => None,
            Self::InstagramDashboard | Self::InstagramUsernames => Some(INSTAGRAM_SECTION),
        }
    }

    /// Last path segment; empty for the root page.
    pub fn page_segment(self) -> &'static str {
        match self {
            Self::Root => "",
            Self::InstagramDashboard => "dashboard",
            Self::InstagramUsernames => "usernames",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::InstagramDashboard => "/instagram/dashboard",
            Self::InstagramUsernames => "/instagram/usernames",
        }
    }

    /// Match a request path. Trailing slashes are ignored.
    pub fn resolve(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|r| r.path() == normalized)
    }

    /// Destination for anything `resolve` rejects.
    pub fn fallback() -> Self {
        Self::Root
    }

    /// Where a request for `path` that no page served should go.
    pub fn redirect_target(path: &str) -> Self {
        Self::resolve(path).unwrap_or_else(Self::fallback)
    }
}
