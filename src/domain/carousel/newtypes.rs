// SPDX-License-Identifier: MPL-2.0
//! Carousel interaction newtypes.
//!
//! Each wrapper clamps its input to a fixed range on construction, so a
//! hand-edited config can never produce a zero cool-down or a swipe that
//! triggers on sensor noise.

use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Cool-down bounds in milliseconds.
pub mod cooldown_bounds {
    pub const MIN: u64 = 50;
    pub const MAX: u64 = 5_000;
    pub const DEFAULT: u64 = 500;
}

/// Swipe threshold bounds in logical pixels.
pub mod swipe_threshold_bounds {
    pub const MIN: f32 = 10.0;
    pub const MAX: f32 = 500.0;
    pub const DEFAULT: f32 = 50.0;
}

/// Playback tick bounds in milliseconds.
pub mod tick_interval_bounds {
    pub const MIN: u64 = 16;
    pub const MAX: u64 = 1_000;
    pub const DEFAULT: u64 = 250;
}

// =============================================================================
// Direction
// =============================================================================

/// Direction of a carousel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Signed index offset for this direction.
    #[must_use]
    pub fn delta(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}

// =============================================================================
// Cooldown
// =============================================================================

/// Window after an accepted navigation during which further requests are dropped.
///
/// # Example
///
/// ```
/// use showreel::domain::carousel::Cooldown;
///
/// assert_eq!(Cooldown::default().as_millis(), 500);
/// assert_eq!(Cooldown::from_millis(1).as_millis(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cooldown(u64);

impl Cooldown {
    /// Creates a cool-down, clamping to the valid range.
    #[must_use]
    pub fn from_millis(value: u64) -> Self {
        Self(value.clamp(cooldown_bounds::MIN, cooldown_bounds::MAX))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for Cooldown {
    fn default() -> Self {
        Self(cooldown_bounds::DEFAULT)
    }
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Horizontal displacement a swipe must strictly exceed to count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a threshold, clamping to the valid range. NaN falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(swipe_threshold_bounds::MIN, swipe_threshold_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(swipe_threshold_bounds::DEFAULT)
    }
}

// =============================================================================
// TickInterval
// =============================================================================

/// Interval between playback position updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(u64);

impl TickInterval {
    #[must_use]
    pub fn from_millis(value: u64) -> Self {
        Self(value.clamp(tick_interval_bounds::MIN, tick_interval_bounds::MAX))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(tick_interval_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_delta_signs() {
        assert_eq!(Direction::Next.delta(), 1);
        assert_eq!(Direction::Previous.delta(), -1);
    }

    #[test]
    fn cooldown_clamps_to_bounds() {
        assert_eq!(Cooldown::from_millis(0).as_millis(), cooldown_bounds::MIN);
        assert_eq!(
            Cooldown::from_millis(60_000).as_millis(),
            cooldown_bounds::MAX
        );
        assert_eq!(Cooldown::from_millis(750).as_millis(), 750);
    }

    #[test]
    fn cooldown_converts_to_duration() {
        assert_eq!(Cooldown::default().as_duration(), Duration::from_millis(500));
    }

    #[test]
    fn swipe_threshold_clamps_and_rejects_nan() {
        assert_eq!(SwipeThreshold::new(1.0).value(), swipe_threshold_bounds::MIN);
        assert_eq!(SwipeThreshold::new(9000.0).value(), swipe_threshold_bounds::MAX);
        assert_eq!(SwipeThreshold::new(f32::NAN), SwipeThreshold::default());
        assert_eq!(SwipeThreshold::default().value(), 50.0);
    }

    #[test]
    fn tick_interval_clamps_to_bounds() {
        assert_eq!(
            TickInterval::from_millis(1).as_duration(),
            Duration::from_millis(tick_interval_bounds::MIN)
        );
        assert_eq!(
            TickInterval::default().as_duration(),
            Duration::from_millis(250)
        );
    }
}
