//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive data as props or read-only signals and report user
//! actions through `Callback`s. None of them own page state.

pub mod add_target_modal;
pub mod layout;
pub mod logo;
pub mod stat_card;
pub mod targets_table;
