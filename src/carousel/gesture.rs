// SPDX-License-Identifier: MPL-2.0
//! Classification of raw input into carousel intents.
//!
//! Explicit controls (arrow buttons, dots, cards, close button) do not go
//! through here; they call the navigation and modal APIs directly.

use crate::domain::carousel::{Direction, SwipeThreshold};
use iced::keyboard;

/// Horizontal movement below which a press-release on the carousel surface
/// counts as a tap on the displayed entry.
pub const TAP_SLOP_PX: f32 = 5.0;

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Navigate(Direction),
    /// Activate the entry currently on the carousel surface.
    OpenCurrent,
    CloseModal,
}

/// Maps a key press to an intent.
///
/// While a modal is open only Escape does anything; arrows never navigate
/// behind it.
#[must_use]
pub fn classify_key(key: &keyboard::Key, modal_open: bool) -> Option<Intent> {
    use keyboard::key::Named;

    match key {
        keyboard::Key::Named(Named::Escape) if modal_open => Some(Intent::CloseModal),
        _ if modal_open => None,
        keyboard::Key::Named(Named::ArrowRight) => Some(Intent::Navigate(Direction::Next)),
        keyboard::Key::Named(Named::ArrowLeft) => Some(Intent::Navigate(Direction::Previous)),
        _ => None,
    }
}

/// Where a press landed inside the modal layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// The dimmed area around the modal content.
    Backdrop,
    /// The modal content itself.
    Content,
}

/// Only presses on the backdrop itself dismiss the modal.
#[must_use]
pub fn classify_modal_press(target: PressTarget) -> Option<Intent> {
    match target {
        PressTarget::Backdrop => Some(Intent::CloseModal),
        PressTarget::Content => None,
    }
}

/// Tracks horizontal displacement of a press-drag-release on the carousel
/// surface.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: SwipeThreshold,
    /// Latest pointer x seen on the surface.
    last_x: Option<f32>,
    /// Pointer x at press time, while a press is active.
    start_x: Option<f32>,
    displacement: f32,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            threshold,
            last_x: None,
            start_x: None,
            displacement: 0.0,
        }
    }

    /// Net horizontal movement since the press, 0 when idle.
    #[must_use]
    pub fn displacement(&self) -> f32 {
        self.displacement
    }

    /// Pointer moved to `x` (surface-local coordinates).
    pub fn pointer_moved(&mut self, x: f32) {
        self.last_x = Some(x);
        if let Some(start) = self.start_x {
            self.displacement = x - start;
        }
    }

    /// Press started at the last known pointer position.
    pub fn press(&mut self) {
        self.start_x = self.last_x;
        self.displacement = 0.0;
    }

    /// Ends the gesture and classifies it. Displacement is reset whatever
    /// the outcome.
    ///
    /// A rightward swipe beyond the threshold goes to the previous entry, a
    /// leftward one to the next. A press with almost no movement is a tap.
    pub fn release(&mut self) -> Option<Intent> {
        let was_pressed = self.start_x.is_some();
        let dx = self.displacement;
        self.start_x = None;
        self.displacement = 0.0;

        if !was_pressed {
            return None;
        }
        let threshold = self.threshold.value();
        if dx > threshold {
            Some(Intent::Navigate(Direction::Previous))
        } else if dx < -threshold {
            Some(Intent::Navigate(Direction::Next))
        } else if dx.abs() <= TAP_SLOP_PX {
            Some(Intent::OpenCurrent)
        } else {
            None
        }
    }

    /// Pointer left the surface: the gesture is abandoned.
    pub fn cancel(&mut self) {
        self.start_x = None;
        self.last_x = None;
        self.displacement = 0.0;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SwipeThreshold::default())
    }
}
