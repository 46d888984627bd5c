// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views are pure functions of the carousel state following the Elm-style
//! "state down, messages up" pattern.
//!
//! # Views
//!
//! - [`carousel`] - Rotating preview surface with arrows and dot indicators
//! - [`card_grid`] - Wrapped grid of entry cards
//! - [`modal`] - Enlarged player layered over the showcase
//!
//! # Shared Infrastructure
//!
//! - [`progress`] - Clickable playback progress bar
//! - [`thumbnail`] - Thumbnail and placeholder rendering
//! - [`styles`] - Centralized styling (buttons, containers, progress bars)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod card_grid;
pub mod carousel;
pub mod design_tokens;
pub mod modal;
pub mod progress;
pub mod styles;
pub mod theming;
pub mod thumbnail;
