// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Carousel**: Navigation cool-down and swipe threshold
//! - **Playback**: Playhead tick interval
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Default cool-down after an accepted navigation, in milliseconds.
pub const DEFAULT_COOLDOWN_MS: u64 = 500;

/// Minimum navigation cool-down in milliseconds.
pub const MIN_COOLDOWN_MS: u64 = 50;

/// Maximum navigation cool-down in milliseconds.
pub const MAX_COOLDOWN_MS: u64 = 5_000;

/// Default horizontal displacement a swipe must exceed, in logical pixels.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Minimum swipe threshold in logical pixels.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Maximum swipe threshold in logical pixels.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 500.0;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Default interval between playback position updates, in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 250;

/// Minimum tick interval (roughly one frame at 60 Hz).
pub const MIN_TICK_MS: u64 = 16;

/// Maximum tick interval.
pub const MAX_TICK_MS: u64 = 1_000;

/// Whether the modal player starts playing as soon as it opens.
pub const DEFAULT_AUTOPLAY_MODAL: bool = true;

/// Whether the muted carousel preview restarts when it reaches the end.
pub const DEFAULT_LOOP_PREVIEW: bool = true;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Thumbnail Cache
// ==========================================================================

/// Number of decoded thumbnails kept in memory.
pub const THUMBNAIL_CACHE_ENTRIES: usize = 64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldown_default_is_within_bounds() {
        assert!(DEFAULT_COOLDOWN_MS >= MIN_COOLDOWN_MS);
        assert!(DEFAULT_COOLDOWN_MS <= MAX_COOLDOWN_MS);
    }

    #[test]
    fn swipe_threshold_default_is_within_bounds() {
        assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
        assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);
    }

    #[test]
    fn tick_default_is_within_bounds() {
        assert!(DEFAULT_TICK_MS >= MIN_TICK_MS);
        assert!(DEFAULT_TICK_MS <= MAX_TICK_MS);
    }

    #[test]
    fn diagnostics_capacity_default_is_within_bounds() {
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
    }
}
