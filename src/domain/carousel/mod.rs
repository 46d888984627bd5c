// SPDX-License-Identifier: MPL-2.0
//! Carousel interaction value objects.

mod newtypes;

pub use newtypes::{
    cooldown_bounds, swipe_threshold_bounds, tick_interval_bounds, Cooldown, Direction,
    SwipeThreshold, TickInterval,
};
