// SPDX-License-Identifier: MPL-2.0
//! The ordered, cyclic list of showcase entries.

use super::types::MediaEntry;
use crate::error::PlaylistError;
use std::collections::HashSet;

/// Non-empty, immutable sequence of entries. Indices wrap around.
#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
    entries: Vec<MediaEntry>,
}

impl Playlist {
    /// Builds a playlist, rejecting empty lists and repeated ids.
    pub fn new(entries: Vec<MediaEntry>) -> Result<Self, PlaylistError> {
        if entries.is_empty() {
            return Err(PlaylistError::Empty);
        }
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(PlaylistError::DuplicateId(entry.id.0));
            }
        }
        Ok(Self { entries })
    }

    /// Number of entries (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MediaEntry> {
        self.entries.get(index)
    }

    /// Entry at a wrapped index, so any `usize` is valid.
    #[must_use]
    pub fn entry(&self, index: usize) -> &MediaEntry {
        &self.entries[index % self.entries.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &MediaEntry> {
        self.entries.iter()
    }

    /// `(index + delta + N) mod N`, valid for any delta.
    #[must_use]
    pub fn wrap(&self, index: usize, delta: isize) -> usize {
        let len = self.entries.len() as isize;
        (index as isize + delta).rem_euclid(len) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::types::{sample_entry, MediaKind};

    fn playlist(len: u32) -> Playlist {
        Playlist::new(
            (1..=len)
                .map(|id| sample_entry(id, MediaKind::LocalFile))
                .collect(),
        )
        .expect("valid playlist")
    }

    #[test]
    fn empty_playlist_is_rejected() {
        assert_eq!(Playlist::new(Vec::new()), Err(PlaylistError::Empty));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let entries = vec![
            sample_entry(1, MediaKind::LocalFile),
            sample_entry(1, MediaKind::EmbeddedExternal),
        ];
        assert_eq!(Playlist::new(entries), Err(PlaylistError::DuplicateId(1)));
    }

    #[test]
    fn wrap_moves_forward_and_backward_cyclically() {
        let list = playlist(5);
        assert_eq!(list.wrap(4, 1), 0);
        assert_eq!(list.wrap(0, -1), 4);
        assert_eq!(list.wrap(2, 1), 3);
        assert_eq!(list.wrap(1, -7), 4);
    }

    #[test]
    fn single_entry_wraps_onto_itself() {
        let list = playlist(1);
        assert_eq!(list.wrap(0, 1), 0);
        assert_eq!(list.wrap(0, -1), 0);
    }

    #[test]
    fn entry_wraps_out_of_range_indices() {
        let list = playlist(3);
        assert_eq!(list.entry(4).id, list.entry(1).id);
        assert!(list.get(3).is_none());
        assert!(!list.is_empty());
    }
}
