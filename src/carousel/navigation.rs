// SPDX-License-Identifier: MPL-2.0
//! Index navigation with a cool-down guard.
//!
//! The controller is pure: it never sleeps or spawns. When a step is
//! accepted it reports the cool-down to schedule, and the host calls
//! [`NavigationController::cooldown_elapsed`] once that timer fires.

use crate::domain::carousel::{Cooldown, Direction};
use std::time::Duration;

/// Outcome of an [`NavigationController::advance`] request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// A cool-down was running; nothing changed.
    Ignored,
    /// The index moved (possibly onto itself when N = 1).
    Moved {
        index: usize,
        /// Delay after which the guard must be released.
        cooldown: Duration,
    },
}

/// Current index over a cyclic list of `len` entries.
#[derive(Debug, Clone)]
pub struct NavigationController {
    current: usize,
    len: usize,
    transitioning: bool,
    cooldown: Cooldown,
}

impl NavigationController {
    /// Starts at index 0. A zero length is treated as one entry.
    #[must_use]
    pub fn new(len: usize, cooldown: Cooldown) -> Self {
        Self {
            current: 0,
            len: len.max(1),
            transitioning: false,
            cooldown,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Steps one entry in `direction`, unless a cool-down is running.
    ///
    /// Requests during the cool-down are dropped, not queued.
    pub fn advance(&mut self, direction: Direction) -> Advance {
        if self.transitioning {
            return Advance::Ignored;
        }
        let len = self.len as isize;
        self.current = (self.current as isize + direction.delta()).rem_euclid(len) as usize;
        self.transitioning = true;
        Advance::Moved {
            index: self.current,
            cooldown: self.cooldown.as_duration(),
        }
    }

    /// Selects `index` directly, ignoring any running cool-down.
    ///
    /// Does not start a cool-down of its own and leaves a pending one
    /// untouched. Returns `None` for an out-of-range index.
    pub fn jump_to(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.current = index;
        Some(index)
    }

    /// Timer callback: releases the guard unconditionally.
    pub fn cooldown_elapsed(&mut self) {
        self.transitioning = false;
    }
}
