// SPDX-License-Identifier: MPL-2.0
//! Software playback clock for a mounted local video.
//!
//! A [`Playhead`] plays the role of a native media element: it owns the
//! playback position and duration, advances while playing, and accepts
//! position writes from seeking. Frames are not decoded; the position is
//! what drives the progress bar.

use std::time::Duration;

/// Playback position owner for one mounted local entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Playhead {
    duration_secs: Option<f64>,
    position_secs: f64,
    playing: bool,
    looping: bool,
}

impl Playhead {
    /// A freshly mounted element: position 0, duration not yet known.
    #[must_use]
    pub fn new(autoplay: bool, looping: bool) -> Self {
        Self {
            duration_secs: None,
            position_secs: 0.0,
            playing: autoplay,
            looping,
        }
    }

    /// Records the duration once metadata is available.
    pub fn set_duration(&mut self, duration_secs: Option<f64>) {
        self.duration_secs = duration_secs.filter(|d| d.is_finite() && *d > 0.0);
        if let Some(duration) = self.duration_secs {
            self.position_secs = self.position_secs.min(duration);
        }
    }

    #[must_use]
    pub fn duration(&self) -> Option<f64> {
        self.duration_secs
    }

    #[must_use]
    pub fn current_time(&self) -> f64 {
        self.position_secs
    }

    /// Writes the playback position, bounded to `[0, duration]`.
    pub fn set_current_time(&mut self, secs: f64) {
        if !secs.is_finite() {
            return;
        }
        let upper = self.duration_secs.unwrap_or(f64::MAX);
        self.position_secs = secs.clamp(0.0, upper);
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Starts playback. A non-looping element sitting at its end restarts
    /// from 0, the way a native element replays after `ended`.
    pub fn play(&mut self) {
        if let Some(duration) = self.duration_secs {
            if self.position_secs >= duration {
                self.position_secs = 0.0;
            }
        }
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Moves the position forward by `elapsed` of wall time.
    ///
    /// Returns `true` when the position changed. Without a known duration
    /// the element has nothing to play and stays at 0. At the end, a
    /// looping element wraps, otherwise it stops at the duration.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let Some(duration) = self.duration_secs else {
            return false;
        };
        if !self.playing {
            return false;
        }

        let next = self.position_secs + elapsed.as_secs_f64();
        if next < duration {
            self.position_secs = next;
        } else if self.looping {
            self.position_secs = next % duration;
        } else {
            self.position_secs = duration;
            self.playing = false;
        }
        true
    }
}
