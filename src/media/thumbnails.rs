// SPDX-License-Identifier: MPL-2.0
//! Cache of decoded thumbnails keyed by entry.
//!
//! Probing a file decodes its first frame. The resulting handle is kept so
//! that revisiting an entry in the carousel or card grid draws immediately
//! instead of waiting for another probe.

use super::probe::Thumbnail;
use crate::config::THUMBNAIL_CACHE_ENTRIES;
use crate::domain::media::EntryId;
use iced::widget::image;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Thumbnail state of one entry.
#[derive(Debug, Clone)]
pub enum ThumbnailState {
    /// Decoded first frame.
    Ready(image::Handle),
    /// Probe finished without a usable frame.
    Unavailable,
}

/// LRU cache of thumbnails.
#[derive(Debug)]
pub struct ThumbnailCache {
    cache: LruCache<EntryId, ThumbnailState>,
}

impl Default for ThumbnailCache {
    fn default() -> Self {
        Self::new(THUMBNAIL_CACHE_ENTRIES)
    }
}

impl ThumbnailCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Stores the outcome of a probe for `id`.
    pub fn insert(&mut self, id: EntryId, thumbnail: Option<Thumbnail>) {
        let state = match thumbnail {
            Some(thumb) => ThumbnailState::Ready(image::Handle::from_rgba(
                thumb.width,
                thumb.height,
                thumb.rgba,
            )),
            None => ThumbnailState::Unavailable,
        };
        self.cache.put(id, state);
    }

    /// Looks up a thumbnail without changing its recency.
    #[must_use]
    pub fn peek(&self, id: EntryId) -> Option<&ThumbnailState> {
        self.cache.peek(&id)
    }

    /// Returns the drawable handle for `id`, if one was decoded.
    #[must_use]
    pub fn handle(&self, id: EntryId) -> Option<&image::Handle> {
        match self.cache.peek(&id) {
            Some(ThumbnailState::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    /// Whether a probe already ran for `id`.
    #[must_use]
    pub fn contains(&self, id: EntryId) -> bool {
        self.cache.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
