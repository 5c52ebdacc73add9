//! Add-target modal: open/closed machine and the input draft.
//!
//! DESIGN
//! ======
//! The modal never touches the target list. It only hands a trimmed,
//! non-empty string to the page, which decides what to do with it.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Usernames page interaction state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Idle,
    ModalOpen,
}

impl ModalState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::ModalOpen)
    }

    /// "Add" clicked.
    #[must_use]
    pub fn open(self) -> Self {
        Self::ModalOpen
    }

    /// Cancel, overlay click, close button, or submit.
    #[must_use]
    pub fn close(self) -> Self {
        Self::Idle
    }
}

/// Uncommitted modal input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddTargetDraft {
    pub input: String,
}

impl AddTargetDraft {
    /// Submit stays disabled while this is false.
    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Trimmed input if submittable. Clears the draft on success.
    pub fn take_submission(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        let value = self.input.trim().to_owned();
        self.input.clear();
        Some(value)
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }
}
