// SPDX-License-Identifier: MPL-2.0
//! Playlist entry types.

use std::fmt;
use std::path::PathBuf;

/// Unique identifier of a playlist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u32);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an entry's media comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Hosted by a third party and shown through an embed locator.
    /// Playback position is never controlled from here.
    EmbeddedExternal,
    /// A video file on disk, probed for duration and first frame.
    LocalFile,
}

/// Display orientation of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    /// Drawn rotated by a quarter turn.
    Vertical,
}

impl Orientation {
    /// Rotation to apply when drawing, in degrees.
    #[must_use]
    pub fn rotation_degrees(self) -> f32 {
        match self {
            Orientation::Horizontal => 0.0,
            Orientation::Vertical => 90.0,
        }
    }
}

/// One playable item of the showcase.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaEntry {
    pub id: EntryId,
    pub kind: MediaKind,
    /// File path for local files, embed URL for external entries.
    pub source_uri: String,
    pub title: String,
    pub description: String,
    pub meta: String,
    pub view_count: u64,
    /// Decorative only; the probed duration is authoritative.
    pub duration_label: String,
    pub badge_label: String,
    /// Only meaningful for [`MediaKind::EmbeddedExternal`].
    pub thumbnail_uri: Option<String>,
    /// `thumbnail_uri` resolved to a file that existed when the playlist
    /// was loaded. Remote locators never resolve.
    pub thumbnail_file: Option<PathBuf>,
    pub orientation: Orientation,
}

impl MediaEntry {
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.kind == MediaKind::LocalFile
    }
}

/// Metadata read from a local video file.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    /// Duration in seconds; `None` when the container does not report one.
    pub duration_secs: Option<f64>,
}

#[cfg(test)]
pub(crate) fn sample_entry(id: u32, kind: MediaKind) -> MediaEntry {
    MediaEntry {
        id: EntryId(id),
        kind,
        source_uri: format!("reel-{id}.mp4"),
        title: format!("Reel {id}"),
        description: String::new(),
        meta: String::new(),
        view_count: 0,
        duration_label: "0:30".into(),
        badge_label: "MP4".into(),
        thumbnail_uri: None,
        thumbnail_file: None,
        orientation: Orientation::Horizontal,
    }
}
