// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! This module contains the playlist model, independent of how entries are
//! loaded or drawn.

pub mod playlist;
pub mod types;

pub use playlist::Playlist;
pub use types::{EntryId, MediaEntry, MediaKind, Orientation, VideoMetadata};

#[cfg(test)]
pub(crate) use types::sample_entry;
