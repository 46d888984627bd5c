// SPDX-License-Identifier: MPL-2.0
//! Modal presentation state.

/// Whether the enlarged player overlay is shown, and for which entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(usize),
}

impl ModalState {
    /// Opens the modal for `index`. Only valid from `Closed`; switching
    /// entries requires closing first.
    pub fn open(&mut self, index: usize) -> bool {
        match self {
            ModalState::Closed => {
                *self = ModalState::Open(index);
                true
            }
            ModalState::Open(_) => false,
        }
    }

    /// Closes the modal. Returns the index that was shown, if any.
    pub fn close(&mut self) -> Option<usize> {
        let previous = self.open_index();
        *self = ModalState::Closed;
        previous
    }

    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        match self {
            ModalState::Open(index) => Some(*index),
            ModalState::Closed => None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }
}
