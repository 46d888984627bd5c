// SPDX-License-Identifier: MPL-2.0
//! Carousel component: rotating preview, dot indicators and modal player.
//!
//! The component encapsulates all showcase state and exposes a
//! message-driven API. It never spawns work itself: timers come back as
//! tasks, probe requests go out as [`Effect::Probe`] for the application to
//! run.
//!
//! - [`navigation`]: index arithmetic and the cool-down guard
//! - [`gesture`]: keyboard, swipe and backdrop classification
//! - [`progress`]: playback progress of the mounted local entry
//! - [`modal`]: open/closed state of the enlarged player

pub mod gesture;
pub mod modal;
pub mod navigation;
pub mod progress;

pub use gesture::{Intent, PressTarget, SwipeTracker};
pub use modal::ModalState;
pub use navigation::{Advance, NavigationController};
pub use progress::{MediaHandle, ProgressTracker};

use crate::config::Config;
use crate::diagnostics::{
    AppStateEvent, DiagnosticsCollector, InputSource, PlayerSlot, UserAction, WarningEvent,
    WarningKind,
};
use crate::domain::carousel::{Cooldown, Direction, SwipeThreshold};
use crate::domain::media::{EntryId, MediaEntry, Playlist};
use crate::error::MediaError;
use crate::media::{ProbeResult, ThumbnailCache};
use iced::{keyboard, Point, Task};
use std::path::PathBuf;
use std::time::Instant;

/// Behavior knobs resolved from the configuration and command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub cooldown: Cooldown,
    pub swipe_threshold: SwipeThreshold,
    pub autoplay_modal: bool,
    pub loop_preview: bool,
    /// Whether the host registered a close handler.
    pub closable: bool,
}

impl Settings {
    #[must_use]
    pub fn from_config(config: &Config, closable: bool) -> Self {
        let defaults = Self::default();
        Self {
            cooldown: config
                .carousel
                .cooldown_ms
                .map_or(defaults.cooldown, Cooldown::from_millis),
            swipe_threshold: config
                .carousel
                .swipe_threshold_px
                .map_or(defaults.swipe_threshold, SwipeThreshold::new),
            autoplay_modal: config
                .playback
                .autoplay_modal
                .unwrap_or(defaults.autoplay_modal),
            loop_preview: config
                .playback
                .loop_preview
                .unwrap_or(defaults.loop_preview),
            closable,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cooldown: Cooldown::default(),
            swipe_threshold: SwipeThreshold::default(),
            autoplay_modal: crate::config::DEFAULT_AUTOPLAY_MODAL,
            loop_preview: crate::config::DEFAULT_LOOP_PREVIEW,
            closable: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    /// Dot indicator pressed.
    JumpTo(usize),
    CooldownElapsed,
    /// Card or carousel item activated.
    OpenEntry(usize),
    /// Close button in the modal.
    CloseModal,
    ModalPressed(PressTarget),
    KeyPressed(keyboard::Key),
    SurfaceMoved(Point),
    SurfacePressed,
    SurfaceReleased,
    SurfaceExited,
    /// Pointer over a progress bar, as a ratio of its width.
    SeekHover(PlayerSlot, f32),
    SeekPressed(PlayerSlot),
    TogglePlayback(PlayerSlot),
    Probed {
        slot: PlayerSlot,
        handle: MediaHandle,
        result: Result<ProbeResult, MediaError>,
    },
    ThumbnailProbed {
        id: EntryId,
        result: Result<ProbeResult, MediaError>,
    },
    Tick(Instant),
    CloseGallery,
}

/// Requests for the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The host close handler should run.
    Close,
    /// Load metadata for a freshly mounted element.
    Probe {
        slot: PlayerSlot,
        handle: MediaHandle,
        path: PathBuf,
    },
}

/// Carousel component state.
#[derive(Debug)]
pub struct State {
    playlist: Playlist,
    settings: Settings,
    navigation: NavigationController,
    modal: ModalState,
    preview: ProgressTracker,
    player: ProgressTracker,
    swipe: SwipeTracker,
    thumbnails: ThumbnailCache,
    seek_hover: Option<(PlayerSlot, f32)>,
    last_tick: Option<Instant>,
}

impl State {
    #[must_use]
    pub fn new(playlist: Playlist, settings: Settings) -> Self {
        Self {
            navigation: NavigationController::new(playlist.len(), settings.cooldown),
            preview: ProgressTracker::new(true, settings.loop_preview),
            player: ProgressTracker::new(settings.autoplay_modal, false),
            swipe: SwipeTracker::new(settings.swipe_threshold),
            thumbnails: ThumbnailCache::default(),
            modal: ModalState::default(),
            seek_hover: None,
            last_tick: None,
            playlist,
            settings,
        }
    }

    /// Mounts the preview for the initial entry.
    pub fn start(&mut self, diagnostics: &mut DiagnosticsCollector) -> Effect {
        self.mount_preview(diagnostics)
    }

    /// Local entries whose thumbnail still has to be decoded.
    ///
    /// The entry mounted in the preview is skipped: its pending load fills
    /// the cache as well.
    #[must_use]
    pub fn thumbnail_requests(&self) -> Vec<(EntryId, PathBuf)> {
        let mounted = self.preview.handle().map(|handle| handle.index());
        self.playlist
            .iter()
            .enumerate()
            .filter(|&(index, entry)| {
                entry.is_local() && Some(index) != mounted && !self.thumbnails.contains(entry.id)
            })
            .map(|(_, entry)| (entry.id, PathBuf::from(&entry.source_uri)))
            .collect()
    }

    pub fn handle_message(
        &mut self,
        message: Message,
        diagnostics: &mut DiagnosticsCollector,
    ) -> (Effect, Task<Message>) {
        match message {
            Message::Previous => {
                self.navigate(Direction::Previous, InputSource::Button, diagnostics)
            }
            Message::Next => self.navigate(Direction::Next, InputSource::Button, diagnostics),
            Message::JumpTo(index) => {
                let before = self.navigation.current_index();
                let Some(index) = self.navigation.jump_to(index) else {
                    return (Effect::None, Task::none());
                };
                diagnostics.log_action(UserAction::JumpTo { index });
                let effect = if index == before {
                    Effect::None
                } else {
                    self.mount_preview(diagnostics)
                };
                (effect, Task::none())
            }
            Message::CooldownElapsed => {
                self.navigation.cooldown_elapsed();
                (Effect::None, Task::none())
            }
            Message::OpenEntry(index) => (self.open_modal(index, diagnostics), Task::none()),
            Message::CloseModal => {
                self.close_modal(diagnostics);
                (Effect::None, Task::none())
            }
            Message::ModalPressed(target) => match gesture::classify_modal_press(target) {
                Some(intent) => self.apply_intent(intent, InputSource::Button, diagnostics),
                None => (Effect::None, Task::none()),
            },
            Message::KeyPressed(key) => {
                match gesture::classify_key(&key, self.modal.is_open()) {
                    Some(intent) => self.apply_intent(intent, InputSource::Keyboard, diagnostics),
                    None => (Effect::None, Task::none()),
                }
            }
            Message::SurfaceMoved(position) => {
                self.swipe.pointer_moved(position.x);
                (Effect::None, Task::none())
            }
            Message::SurfacePressed => {
                if !self.modal.is_open() {
                    self.swipe.press();
                }
                (Effect::None, Task::none())
            }
            Message::SurfaceReleased => match self.swipe.release() {
                Some(intent) if !self.modal.is_open() => {
                    self.apply_intent(intent, InputSource::Swipe, diagnostics)
                }
                _ => (Effect::None, Task::none()),
            },
            Message::SurfaceExited => {
                self.swipe.cancel();
                (Effect::None, Task::none())
            }
            Message::SeekHover(slot, ratio) => {
                self.seek_hover = Some((slot, ratio));
                (Effect::None, Task::none())
            }
            Message::SeekPressed(slot) => {
                if let Some((hover_slot, ratio)) = self.seek_hover {
                    if hover_slot == slot {
                        self.seek(slot, f64::from(ratio), diagnostics);
                    }
                }
                (Effect::None, Task::none())
            }
            Message::TogglePlayback(slot) => {
                self.tracker_mut(slot).toggle_playback();
                self.last_tick = None;
                diagnostics.log_action(UserAction::TogglePlayback { slot });
                (Effect::None, Task::none())
            }
            Message::Probed {
                slot,
                handle,
                result,
            } => {
                self.apply_probe(slot, handle, result, diagnostics);
                (Effect::None, Task::none())
            }
            Message::ThumbnailProbed { id, result } => {
                match result {
                    Ok(probe) => self.thumbnails.insert(id, probe.thumbnail),
                    Err(e) => {
                        diagnostics.log_warning(WarningEvent::new(
                            WarningKind::MediaProbe,
                            format!("entry {id}: {e}"),
                        ));
                        self.thumbnails.insert(id, None);
                    }
                }
                (Effect::None, Task::none())
            }
            Message::Tick(now) => {
                let elapsed = self
                    .last_tick
                    .map(|last| now.saturating_duration_since(last))
                    .unwrap_or_default();
                self.last_tick = Some(now);
                self.preview.tick(elapsed);
                self.player.tick(elapsed);
                if !self.is_playing() {
                    self.last_tick = None;
                }
                (Effect::None, Task::none())
            }
            Message::CloseGallery => {
                if !self.settings.closable {
                    return (Effect::None, Task::none());
                }
                diagnostics.log_action(UserAction::CloseGallery);
                (Effect::Close, Task::none())
            }
        }
    }

    fn apply_intent(
        &mut self,
        intent: Intent,
        source: InputSource,
        diagnostics: &mut DiagnosticsCollector,
    ) -> (Effect, Task<Message>) {
        match intent {
            Intent::Navigate(direction) => self.navigate(direction, source, diagnostics),
            Intent::OpenCurrent => {
                let index = self.navigation.current_index();
                (self.open_modal(index, diagnostics), Task::none())
            }
            Intent::CloseModal => {
                self.close_modal(diagnostics);
                (Effect::None, Task::none())
            }
        }
    }

    fn navigate(
        &mut self,
        direction: Direction,
        source: InputSource,
        diagnostics: &mut DiagnosticsCollector,
    ) -> (Effect, Task<Message>) {
        let before = self.navigation.current_index();
        let outcome = self.navigation.advance(direction);
        let accepted = matches!(outcome, Advance::Moved { .. });
        diagnostics.log_action(match direction {
            Direction::Next => UserAction::NavigateNext { source, accepted },
            Direction::Previous => UserAction::NavigatePrevious { source, accepted },
        });

        match outcome {
            Advance::Ignored => (Effect::None, Task::none()),
            Advance::Moved { index, cooldown } => {
                let effect = if index == before {
                    Effect::None
                } else {
                    self.mount_preview(diagnostics)
                };
                let timer = Task::perform(
                    async move { tokio::time::sleep(cooldown).await },
                    |()| Message::CooldownElapsed,
                );
                (effect, timer)
            }
        }
    }

    /// Releases the previous preview element, then mounts the current one.
    fn mount_preview(&mut self, diagnostics: &mut DiagnosticsCollector) -> Effect {
        let index = self.navigation.current_index();
        self.remount(PlayerSlot::Preview, index, diagnostics)
    }

    fn open_modal(&mut self, index: usize, diagnostics: &mut DiagnosticsCollector) -> Effect {
        if self.playlist.get(index).is_none() || !self.modal.open(index) {
            return Effect::None;
        }
        diagnostics.log_action(UserAction::OpenModal { index });
        self.remount(PlayerSlot::Modal, index, diagnostics)
    }

    fn close_modal(&mut self, diagnostics: &mut DiagnosticsCollector) {
        if self.modal.close().is_none() {
            return;
        }
        diagnostics.log_action(UserAction::CloseModal);
        if let Some(handle) = self.player.detach() {
            diagnostics.log_state(AppStateEvent::MediaReleased {
                slot: PlayerSlot::Modal,
                index: handle.index(),
            });
        }
        if matches!(self.seek_hover, Some((PlayerSlot::Modal, _))) {
            self.seek_hover = None;
        }
    }

    fn remount(
        &mut self,
        slot: PlayerSlot,
        index: usize,
        diagnostics: &mut DiagnosticsCollector,
    ) -> Effect {
        if let Some(released) = self.tracker_mut(slot).detach() {
            diagnostics.log_state(AppStateEvent::MediaReleased {
                slot,
                index: released.index(),
            });
        }
        self.last_tick = None;

        let entry = self.playlist.entry(index).clone();
        match self.tracker_mut(slot).attach(index, &entry) {
            Some(handle) => {
                diagnostics.log_state(AppStateEvent::MediaMounted { slot, index });
                Effect::Probe {
                    slot,
                    handle,
                    path: PathBuf::from(entry.source_uri),
                }
            }
            None => Effect::None,
        }
    }

    fn apply_probe(
        &mut self,
        slot: PlayerSlot,
        handle: MediaHandle,
        result: Result<ProbeResult, MediaError>,
        diagnostics: &mut DiagnosticsCollector,
    ) {
        let id = self.playlist.get(handle.index()).map(|entry| entry.id);

        let duration_secs = match result {
            Ok(probe) => {
                if let Some(id) = id {
                    self.thumbnails.insert(id, probe.thumbnail);
                }
                probe.metadata.duration_secs
            }
            Err(e) => {
                diagnostics.log_warning(WarningEvent::new(
                    WarningKind::MediaProbe,
                    format!("entry at {}: {e}", handle.index()),
                ));
                if let Some(id) = id {
                    if !self.thumbnails.contains(id) {
                        self.thumbnails.insert(id, None);
                    }
                }
                None
            }
        };

        let tracker = self.tracker_mut(slot);
        if !tracker.on_metadata(handle, duration_secs) {
            diagnostics.log_state(AppStateEvent::StaleResultDropped {
                slot,
                index: handle.index(),
            });
            return;
        }
        tracker.report_position();
        diagnostics.log_state(AppStateEvent::MetadataReady {
            slot,
            index: handle.index(),
            duration_secs,
        });
    }

    fn seek(&mut self, slot: PlayerSlot, ratio: f64, diagnostics: &mut DiagnosticsCollector) {
        let tracker = self.tracker_mut(slot);
        if let Some(position_secs) = tracker.seek(ratio) {
            tracker.report_position();
            diagnostics.log_action(UserAction::Seek {
                slot,
                position_secs,
            });
        }
    }

    fn tracker_mut(&mut self, slot: PlayerSlot) -> &mut ProgressTracker {
        match slot {
            PlayerSlot::Preview => &mut self.preview,
            PlayerSlot::Modal => &mut self.player,
        }
    }

    // =========================================================================
    // Read access for views and subscriptions
    // =========================================================================

    #[must_use]
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.navigation.current_index()
    }

    #[must_use]
    pub fn current_entry(&self) -> &MediaEntry {
        self.playlist.entry(self.navigation.current_index())
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.navigation.is_transitioning()
    }

    #[must_use]
    pub fn modal(&self) -> ModalState {
        self.modal
    }

    #[must_use]
    pub fn tracker(&self, slot: PlayerSlot) -> &ProgressTracker {
        match slot {
            PlayerSlot::Preview => &self.preview,
            PlayerSlot::Modal => &self.player,
        }
    }

    #[must_use]
    pub fn thumbnails(&self) -> &ThumbnailCache {
        &self.thumbnails
    }

    #[must_use]
    pub fn is_closable(&self) -> bool {
        self.settings.closable
    }

    #[must_use]
    pub fn swipe_displacement(&self) -> f32 {
        self.swipe.displacement()
    }

    /// Whether a playback tick is needed.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.preview.is_playing() || self.player.is_playing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::{sample_entry, MediaKind, VideoMetadata};
    use iced::keyboard::key::Named;
    use std::time::Duration;

    /// local, embedded, local, local, embedded
    fn playlist() -> Playlist {
        Playlist::new(vec![
            sample_entry(1, MediaKind::LocalFile),
            sample_entry(2, MediaKind::EmbeddedExternal),
            sample_entry(3, MediaKind::LocalFile),
            sample_entry(4, MediaKind::LocalFile),
            sample_entry(5, MediaKind::EmbeddedExternal),
        ])
        .expect("valid playlist")
    }

    fn state_with(settings: Settings) -> (State, DiagnosticsCollector) {
        let mut diagnostics = DiagnosticsCollector::default();
        let mut state = State::new(playlist(), settings);
        state.start(&mut diagnostics);
        (state, diagnostics)
    }

    fn state() -> (State, DiagnosticsCollector) {
        state_with(Settings::default())
    }

    fn probe(duration: f64) -> Result<ProbeResult, MediaError> {
        Ok(ProbeResult {
            metadata: VideoMetadata {
                width: 1920,
                height: 1080,
                duration_secs: Some(duration),
            },
            thumbnail: None,
        })
    }

    fn send(state: &mut State, diagnostics: &mut DiagnosticsCollector, message: Message) -> Effect {
        state.handle_message(message, diagnostics).0
    }

    fn key(named: Named) -> Message {
        Message::KeyPressed(keyboard::Key::Named(named))
    }

    fn probe_handle(effect: Effect) -> (PlayerSlot, MediaHandle) {
        match effect {
            Effect::Probe { slot, handle, .. } => (slot, handle),
            other => panic!("expected probe effect, got {other:?}"),
        }
    }

    #[test]
    fn start_mounts_first_local_entry() {
        let mut diagnostics = DiagnosticsCollector::default();
        let mut state = State::new(playlist(), Settings::default());
        let effect = state.start(&mut diagnostics);

        match effect {
            Effect::Probe { slot, handle, path } => {
                assert_eq!(slot, PlayerSlot::Preview);
                assert_eq!(handle.index(), 0);
                assert_eq!(path, PathBuf::from("reel-1.mp4"));
            }
            other => panic!("expected probe, got {other:?}"),
        }
    }

    #[test]
    fn next_is_throttled_until_cooldown_elapses() {
        let (mut state, mut diagnostics) = state();

        send(&mut state, &mut diagnostics, Message::Next);
        send(&mut state, &mut diagnostics, Message::Next);
        assert_eq!(state.current_index(), 1);
        assert!(state.is_transitioning());

        send(&mut state, &mut diagnostics, Message::CooldownElapsed);
        send(&mut state, &mut diagnostics, Message::Next);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn navigating_to_embedded_entry_requests_no_probe() {
        let (mut state, mut diagnostics) = state();
        let effect = send(&mut state, &mut diagnostics, Message::Next);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.tracker(PlayerSlot::Preview).handle(), None);
    }

    #[test]
    fn dot_jump_works_during_cooldown() {
        let (mut state, mut diagnostics) = state();
        send(&mut state, &mut diagnostics, Message::Next);
        let effect = send(&mut state, &mut diagnostics, Message::JumpTo(3));

        assert_eq!(state.current_index(), 3);
        assert_eq!(probe_handle(effect).1.index(), 3);
        assert!(state.is_transitioning());
    }

    #[test]
    fn jump_out_of_range_is_ignored() {
        let (mut state, mut diagnostics) = state();
        send(&mut state, &mut diagnostics, Message::JumpTo(42));
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn example_walkthrough() {
        let (mut state, mut diagnostics) = state();
        for _ in 0..3 {
            send(&mut state, &mut diagnostics, key(Named::ArrowRight));
            send(&mut state, &mut diagnostics, Message::CooldownElapsed);
        }
        assert_eq!(state.current_index(), 3);

        send(&mut state, &mut diagnostics, Message::JumpTo(0));
        assert_eq!(state.current_index(), 0);

        send(&mut state, &mut diagnostics, key(Named::ArrowLeft));
        assert_eq!(state.current_index(), 4);
    }

    #[test]
    fn arrows_do_not_navigate_behind_open_modal() {
        let (mut state, mut diagnostics) = state();
        send(&mut state, &mut diagnostics, Message::OpenEntry(1));
        send(&mut state, &mut diagnostics, key(Named::ArrowRight));

        assert_eq!(state.current_index(), 0);
        assert_eq!(state.modal(), ModalState::Open(1));

        send(&mut state, &mut diagnostics, key(Named::Escape));
        assert_eq!(state.modal(), ModalState::Closed);
    }

    #[test]
    fn content_press_keeps_modal_backdrop_press_closes() {
        let (mut state, mut diagnostics) = state();
        send(&mut state, &mut diagnostics, Message::OpenEntry(2));

        send(
            &mut state,
            &mut diagnostics,
            Message::ModalPressed(PressTarget::Content),
        );
        assert!(state.modal().is_open());

        send(
            &mut state,
            &mut diagnostics,
            Message::ModalPressed(PressTarget::Backdrop),
        );
        assert!(!state.modal().is_open());
    }

    #[test]
    fn opening_local_entry_mounts_modal_player() {
        let (mut state, mut diagnostics) = state();
        let effect = send(&mut state, &mut diagnostics, Message::OpenEntry(2));
        let (slot, handle) = probe_handle(effect);
        assert_eq!(slot, PlayerSlot::Modal);
        assert_eq!(handle.index(), 2);

        send(&mut state, &mut diagnostics, Message::CloseModal);
        assert_eq!(state.tracker(PlayerSlot::Modal).handle(), None);
    }

    #[test]
    fn second_open_while_open_is_ignored() {
        let (mut state, mut diagnostics) = state();
        send(&mut state, &mut diagnostics, Message::OpenEntry(1));
        let effect = send(&mut state, &mut diagnostics, Message::OpenEntry(2));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.modal(), ModalState::Open(1));
    }

    #[test]
    fn swipe_left_goes_next_and_tap_opens_current() {
        let (mut state, mut diagnostics) = state();
        send(&mut state, &mut diagnostics, Message::SurfaceMoved(Point::new(300.0, 10.0)));
        send(&mut state, &mut diagnostics, Message::SurfacePressed);
        send(&mut state, &mut diagnostics, Message::SurfaceMoved(Point::new(249.0, 10.0)));
        send(&mut state, &mut diagnostics, Message::SurfaceReleased);
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.swipe_displacement(), 0.0);

        send(&mut state, &mut diagnostics, Message::SurfacePressed);
        send(&mut state, &mut diagnostics, Message::SurfaceReleased);
        assert_eq!(state.modal(), ModalState::Open(1));
    }

    #[test]
    fn short_swipe_does_nothing() {
        let (mut state, mut diagnostics) = state();
        send(&mut state, &mut diagnostics, Message::SurfaceMoved(Point::new(300.0, 10.0)));
        send(&mut state, &mut diagnostics, Message::SurfacePressed);
        send(&mut state, &mut diagnostics, Message::SurfaceMoved(Point::new(251.0, 10.0)));
        send(&mut state, &mut diagnostics, Message::SurfaceReleased);

        assert_eq!(state.current_index(), 0);
        assert!(!state.modal().is_open());
    }

    #[test]
    fn stale_probe_result_is_dropped() {
        let (mut state, mut diagnostics) = state();
        let old = state.tracker(PlayerSlot::Preview).handle().unwrap();

        send(&mut state, &mut diagnostics, Message::JumpTo(2));
        send(
            &mut state,
            &mut diagnostics,
            Message::Probed {
                slot: PlayerSlot::Preview,
                handle: old,
                result: probe(100.0),
            },
        );

        let preview = state.tracker(PlayerSlot::Preview);
        assert_eq!(preview.duration(), None);
        assert_eq!(preview.progress_percent(), 0.0);
        assert!(matches!(
            diagnostics.latest().map(|e| &e.kind),
            Some(crate::diagnostics::DiagnosticEventKind::AppState {
                state: AppStateEvent::StaleResultDropped { index: 0, .. }
            })
        ));
    }

    #[test]
    fn probe_then_ticks_advance_progress() {
        let (mut state, mut diagnostics) = state();
        let handle = state.tracker(PlayerSlot::Preview).handle().unwrap();
        send(
            &mut state,
            &mut diagnostics,
            Message::Probed {
                slot: PlayerSlot::Preview,
                handle,
                result: probe(10.0),
            },
        );
        assert!(state.is_playing());

        let t0 = Instant::now();
        send(&mut state, &mut diagnostics, Message::Tick(t0));
        send(
            &mut state,
            &mut diagnostics,
            Message::Tick(t0 + Duration::from_secs(1)),
        );
        let percent = state.tracker(PlayerSlot::Preview).progress_percent();
        assert!((percent - 10.0).abs() < 1e-6, "got {percent}");
    }

    #[test]
    fn failed_probe_leaves_unknown_duration() {
        let (mut state, mut diagnostics) = state();
        let handle = state.tracker(PlayerSlot::Preview).handle().unwrap();
        send(
            &mut state,
            &mut diagnostics,
            Message::Probed {
                slot: PlayerSlot::Preview,
                handle,
                result: Err(MediaError::NoVideoStream),
            },
        );

        assert_eq!(state.tracker(PlayerSlot::Preview).duration(), None);
        assert!(!state.is_playing());
        assert!(state.thumbnails().contains(EntryId(1)));
    }

    #[test]
    fn seek_on_progress_bar_moves_position() {
        let (mut state, mut diagnostics) = state();
        let (_, handle) = probe_handle(send(&mut state, &mut diagnostics, Message::OpenEntry(3)));
        send(
            &mut state,
            &mut diagnostics,
            Message::Probed {
                slot: PlayerSlot::Modal,
                handle,
                result: probe(100.0),
            },
        );

        send(
            &mut state,
            &mut diagnostics,
            Message::SeekHover(PlayerSlot::Modal, 0.5),
        );
        send(
            &mut state,
            &mut diagnostics,
            Message::SeekPressed(PlayerSlot::Modal),
        );

        let player = state.tracker(PlayerSlot::Modal);
        assert_eq!(player.position(), 50.0);
        assert!((player.progress_percent() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn seek_press_without_hover_is_ignored() {
        let (mut state, mut diagnostics) = state();
        send(
            &mut state,
            &mut diagnostics,
            Message::SeekPressed(PlayerSlot::Preview),
        );
        assert_eq!(state.tracker(PlayerSlot::Preview).position(), 0.0);
    }

    #[test]
    fn close_gallery_needs_host_handler() {
        let (mut state, mut diagnostics) = state();
        assert_eq!(
            send(&mut state, &mut diagnostics, Message::CloseGallery),
            Effect::None
        );

        let (mut closable, mut diagnostics) = state_with(Settings {
            closable: true,
            ..Settings::default()
        });
        assert_eq!(
            send(&mut closable, &mut diagnostics, Message::CloseGallery),
            Effect::Close
        );
    }

    fn requested_ids(state: &State) -> Vec<EntryId> {
        state
            .thumbnail_requests()
            .into_iter()
            .map(|(id, _)| id)
            .collect()
    }

    #[test]
    fn thumbnail_requests_skip_the_mounted_preview() {
        let mut diagnostics = DiagnosticsCollector::default();
        let mut state = State::new(playlist(), Settings::default());
        assert_eq!(
            requested_ids(&state),
            vec![EntryId(1), EntryId(3), EntryId(4)]
        );

        state.start(&mut diagnostics);
        assert_eq!(requested_ids(&state), vec![EntryId(3), EntryId(4)]);

        // The preview load still fills the cache for the first entry
        let handle = state.tracker(PlayerSlot::Preview).handle().unwrap();
        send(
            &mut state,
            &mut diagnostics,
            Message::Probed {
                slot: PlayerSlot::Preview,
                handle,
                result: probe(10.0),
            },
        );
        assert!(state.thumbnails().contains(EntryId(1)));
    }

    #[test]
    fn thumbnail_requests_cover_local_entries_once() {
        let (mut state, mut diagnostics) = state();
        assert_eq!(requested_ids(&state), vec![EntryId(3), EntryId(4)]);

        send(
            &mut state,
            &mut diagnostics,
            Message::ThumbnailProbed {
                id: EntryId(3),
                result: probe(5.0),
            },
        );
        assert_eq!(requested_ids(&state), vec![EntryId(4)]);
    }

    #[test]
    fn settings_follow_config() {
        let mut config = Config::default();
        config.carousel.cooldown_ms = Some(10);
        config.carousel.swipe_threshold_px = Some(120.0);
        config.playback.autoplay_modal = Some(false);

        let settings = Settings::from_config(&config, true);
        assert_eq!(settings.cooldown.as_millis(), 50);
        assert_eq!(settings.swipe_threshold.value(), 120.0);
        assert!(!settings.autoplay_modal);
        assert!(settings.loop_preview);
        assert!(settings.closable);
    }
}
