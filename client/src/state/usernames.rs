//! Usernames page state: target list, modal, and inline notice.
//!
//! DESIGN
//! ======
//! The page keeps one `RwSignal` of this struct. Every user action maps to a
//! method here, so the view closures only forward events.

#[cfg(test)]
#[path = "usernames_test.rs"]
mod usernames_test;

use crate::state::modal::ModalState;
use crate::state::targets::{AddOutcome, TargetList};

/// Inline feedback for an add attempt. Only duplicates produce a notice.
pub fn add_notice(outcome: &AddOutcome) -> Option<String> {
    match outcome {
        AddOutcome::Duplicate { username } => Some(format!("@{username} is already tracked")),
        AddOutcome::Added { .. } | AddOutcome::Empty => None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsernamesPageState {
    pub targets: TargetList,
    pub modal: ModalState,
    pub notice: Option<String>,
}

impl Default for UsernamesPageState {
    fn default() -> Self {
        Self { targets: TargetList::seeded(), modal: ModalState::Idle, notice: None }
    }
}

impl UsernamesPageState {
    /// "+ Add" clicked.
    pub fn open_add(&mut self) {
        self.notice = None;
        self.modal = self.modal.open();
    }

    /// Modal submitted. The modal closes whatever the outcome.
    pub fn submit(&mut self, username: &str) -> AddOutcome {
        let outcome = self.targets.add_target(username);
        self.notice = add_notice(&outcome);
        self.modal = self.modal.close();
        outcome
    }

    /// Cancel, overlay click, close button, or Escape.
    pub fn cancel(&mut self) {
        self.modal = self.modal.close();
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.targets.set_filter(text);
        self.notice = None;
    }

    pub fn toggle_scraped(&mut self, id: u64) {
        self.targets.toggle_scraped(id);
    }
}
