// SPDX-License-Identifier: MPL-2.0
//! Progress tracking for the mounted local entry.
//!
//! A tracker owns at most one [`Playhead`] at a time. Every attach releases
//! the previous one and hands out a fresh [`MediaHandle`]; metadata and
//! time updates tagged with an older handle are dropped, so a slow probe
//! for an entry the user already left can never move the progress bar.

use crate::domain::media::MediaEntry;
use crate::media::Playhead;
use std::time::Duration;

/// Identifies one mounted element of one tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaHandle {
    index: usize,
    generation: u64,
}

impl MediaHandle {
    /// Playlist index this element was mounted for.
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone)]
struct Mounted {
    handle: MediaHandle,
    playhead: Playhead,
}

/// Observes playback of the currently mounted local entry.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    mounted: Option<Mounted>,
    generation: u64,
    percent: f64,
    autoplay: bool,
    looping: bool,
}

impl ProgressTracker {
    #[must_use]
    pub fn new(autoplay: bool, looping: bool) -> Self {
        Self {
            mounted: None,
            generation: 0,
            percent: 0.0,
            autoplay,
            looping,
        }
    }

    /// Mounts `entry` as the observed element.
    ///
    /// The previous element is always released first and progress resets
    /// to 0. Returns a handle only for local entries; embedded entries have
    /// no observable progress.
    pub fn attach(&mut self, index: usize, entry: &MediaEntry) -> Option<MediaHandle> {
        self.detach();
        if !entry.is_local() {
            return None;
        }

        self.generation = self.generation.wrapping_add(1);
        let handle = MediaHandle {
            index,
            generation: self.generation,
        };
        self.mounted = Some(Mounted {
            handle,
            playhead: Playhead::new(self.autoplay, self.looping),
        });
        Some(handle)
    }

    /// Releases the mounted element, if any, and resets progress.
    pub fn detach(&mut self) -> Option<MediaHandle> {
        self.percent = 0.0;
        self.mounted.take().map(|mounted| mounted.handle)
    }

    #[must_use]
    pub fn handle(&self) -> Option<MediaHandle> {
        self.mounted.as_ref().map(|m| m.handle)
    }

    /// Whether `handle` still refers to the mounted element.
    #[must_use]
    pub fn is_current(&self, handle: MediaHandle) -> bool {
        self.handle() == Some(handle)
    }

    /// Metadata became available for `handle`.
    ///
    /// Returns `false` when the handle is stale.
    pub fn on_metadata(&mut self, handle: MediaHandle, duration_secs: Option<f64>) -> bool {
        let Some(mounted) = self.mounted_for(handle) else {
            return false;
        };
        mounted.playhead.set_duration(duration_secs);
        true
    }

    /// The element reported a new playback position for `handle`.
    ///
    /// Progress is `position / duration * 100`, or 0 while the duration is
    /// unknown. Returns `false` when the handle is stale.
    pub fn on_time_update(&mut self, handle: MediaHandle, position_secs: f64) -> bool {
        let Some(mounted) = self.mounted_for(handle) else {
            return false;
        };
        let percent = match mounted.playhead.duration() {
            Some(duration) => (position_secs / duration * 100.0).clamp(0.0, 100.0),
            None => 0.0,
        };
        self.percent = percent;
        true
    }

    /// Advances the mounted playhead by `elapsed` and reports the new
    /// position. Returns `true` when progress changed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let Some(mounted) = self.mounted.as_mut() else {
            return false;
        };
        if !mounted.playhead.advance(elapsed) {
            return false;
        }
        self.report_position()
    }

    /// Re-emits the current position as a time update.
    pub fn report_position(&mut self) -> bool {
        let Some((handle, position)) = self
            .mounted
            .as_ref()
            .map(|m| (m.handle, m.playhead.current_time()))
        else {
            return false;
        };
        self.on_time_update(handle, position)
    }

    /// Moves playback to `ratio` of the duration.
    ///
    /// The ratio is clamped to `[0, 1]`. Nothing happens without a mounted
    /// element or a known duration. Returns the written position; the
    /// progress value follows on the next time update.
    pub fn seek(&mut self, ratio: f64) -> Option<f64> {
        if !ratio.is_finite() {
            return None;
        }
        let mounted = self.mounted.as_mut()?;
        let duration = mounted.playhead.duration()?;
        let position = ratio.clamp(0.0, 1.0) * duration;
        mounted.playhead.set_current_time(position);
        Some(position)
    }

    /// Current progress in percent, 0 when nothing is known.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        self.percent
    }

    #[must_use]
    pub fn duration(&self) -> Option<f64> {
        self.mounted.as_ref().and_then(|m| m.playhead.duration())
    }

    #[must_use]
    pub fn position(&self) -> f64 {
        self.mounted
            .as_ref()
            .map_or(0.0, |m| m.playhead.current_time())
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.mounted
            .as_ref()
            .is_some_and(|m| m.playhead.is_playing() && m.playhead.duration().is_some())
    }

    pub fn toggle_playback(&mut self) {
        if let Some(mounted) = self.mounted.as_mut() {
            mounted.playhead.toggle();
        }
    }

    fn mounted_for(&mut self, handle: MediaHandle) -> Option<&mut Mounted> {
        self.mounted.as_mut().filter(|m| m.handle == handle)
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new(true, true)
    }
}
