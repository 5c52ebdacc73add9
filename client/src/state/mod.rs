//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each model is plain Rust owned by the page that needs it; pages wrap them
//! in `RwSignal`s. Nothing here is provided as global context.

pub mod modal;
pub mod stats;
pub mod targets;
pub mod usernames;
