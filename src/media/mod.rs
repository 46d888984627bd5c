// SPDX-License-Identifier: MPL-2.0
//! Media loading and playback primitives.
//!
//! - [`catalog`]: playlist loading from TOML
//! - [`probe`]: FFmpeg metadata and first-frame extraction
//! - [`playhead`]: software playback position clock
//! - [`thumbnails`]: decoded thumbnail cache

pub mod catalog;
pub mod playhead;
pub mod probe;
pub mod thumbnails;

pub use playhead::Playhead;
pub use probe::{ProbeResult, Thumbnail};
pub use thumbnails::{ThumbnailCache, ThumbnailState};

use crate::error::MediaError;
use std::path::PathBuf;

/// Probes a local file on the blocking thread pool.
///
/// FFmpeg demuxing and decoding must never run on the UI thread.
pub async fn probe_in_background(path: PathBuf) -> Result<ProbeResult, MediaError> {
    tokio::task::spawn_blocking(move || probe::probe_local(&path))
        .await
        .map_err(|e| MediaError::DecodingFailed(e.to_string()))?
}
