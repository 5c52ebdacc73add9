//! Helpers shared across pages and components.

pub mod format;
