// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Which player a playback event concerns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlayerSlot {
    /// The inline carousel preview.
    Preview,
    /// The enlarged modal player.
    Modal,
}

/// How a navigation request reached the carousel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InputSource {
    Button,
    Keyboard,
    Swipe,
}

/// User-initiated actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Navigation
    // ==========================================================================
    NavigateNext {
        source: InputSource,
        /// `false` when dropped by the cool-down.
        accepted: bool,
    },

    NavigatePrevious {
        source: InputSource,
        accepted: bool,
    },

    /// Dot indicator click.
    JumpTo { index: usize },

    // ==========================================================================
    // Modal
    // ==========================================================================
    OpenModal { index: usize },

    CloseModal,

    // ==========================================================================
    // Playback
    // ==========================================================================
    TogglePlayback { slot: PlayerSlot },

    Seek {
        slot: PlayerSlot,
        /// Target position in seconds.
        position_secs: f64,
    },

    /// Host-level close of the whole gallery.
    CloseGallery,
}

/// Application state changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    PlaylistLoaded {
        entries: usize,
        /// `true` when the embedded default playlist was used.
        fallback: bool,
    },

    MediaMounted { slot: PlayerSlot, index: usize },

    MediaReleased { slot: PlayerSlot, index: usize },

    MetadataReady {
        slot: PlayerSlot,
        index: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        duration_secs: Option<f64>,
    },

    /// A probe finished after its element was released.
    StaleResultDropped { slot: PlayerSlot, index: usize },
}

/// Category of a non-fatal problem.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    ConfigLoad,
    PlaylistLoad,
    MediaProbe,
    DiagnosticsExport,
}

/// A non-fatal problem, also echoed to stderr.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    pub kind: WarningKind,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Type and payload of a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction { action: UserAction },
    AppState { state: AppStateEvent },
    Warning { warning: WarningEvent },
}

/// A diagnostic event with the moment it was recorded.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Monotonic; converted to an offset on export.
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_is_stamped_now() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction {
            action: UserAction::CloseModal,
        });
        assert!(event.timestamp >= before);
        assert!(event.timestamp <= Instant::now());
    }

    #[test]
    fn with_timestamp_keeps_given_instant() {
        let at = Instant::now();
        let event = DiagnosticEvent::with_timestamp(
            DiagnosticEventKind::AppState {
                state: AppStateEvent::MediaReleased {
                    slot: PlayerSlot::Preview,
                    index: 2,
                },
            },
            at,
        );
        assert_eq!(event.timestamp, at);
    }

    #[test]
    fn warning_new_accepts_str() {
        let warning = WarningEvent::new(WarningKind::MediaProbe, "no video stream");
        assert_eq!(warning.kind, WarningKind::MediaProbe);
        assert_eq!(warning.message, "no video stream");
    }
}
