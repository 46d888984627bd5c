// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Playlist(PlaylistError),
    Media(MediaError),
    /// The windowing or rendering backend failed to start.
    Gui(String),
}

/// Reasons a playlist definition is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistError {
    /// The playlist has no entries; the carousel needs at least one.
    Empty,

    /// Two entries share the same identifier.
    DuplicateId(u32),

    /// The playlist file could not be parsed.
    Parse(String),
}

impl fmt::Display for PlaylistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaylistError::Empty => write!(f, "playlist has no entries"),
            PlaylistError::DuplicateId(id) => write!(f, "duplicate entry id {}", id),
            PlaylistError::Parse(msg) => write!(f, "invalid playlist: {}", msg),
        }
    }
}

/// Failures while probing a local media file.
///
/// None of these reach the user as a dialog; the entry falls back to an
/// unknown duration and a placeholder thumbnail.
#[derive(Debug, Clone)]
pub enum MediaError {
    /// FFmpeg could not be initialized.
    Init(String),

    /// File exists but contains no video stream
    NoVideoStream,

    /// Video reports zero width or height.
    InvalidDimensions { width: u32, height: u32 },

    /// Decoding the first frame failed.
    DecodingFailed(String),

    /// I/O error (file not found, permission denied, etc.)
    IoError(String),
}

impl MediaError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            MediaError::Init(_) => "error-media-init",
            MediaError::NoVideoStream => "error-media-no-video-stream",
            MediaError::InvalidDimensions { .. } => "error-media-invalid-dimensions",
            MediaError::DecodingFailed(_) => "error-media-decoding-failed",
            MediaError::IoError(_) => "error-media-io",
        }
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::Init(msg) => write!(f, "FFmpeg initialization failed: {}", msg),
            MediaError::NoVideoStream => write!(f, "No video stream found"),
            MediaError::InvalidDimensions { width, height } => {
                write!(f, "Invalid video dimensions: {}x{}", width, height)
            }
            MediaError::DecodingFailed(msg) => write!(f, "Decoding failed: {}", msg),
            MediaError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Playlist(e) => write!(f, "Playlist Error: {}", e),
            Error::Media(e) => write!(f, "Media Error: {}", e),
            Error::Gui(e) => write!(f, "GUI Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<MediaError> for Error {
    fn from(err: MediaError) -> Self {
        Error::Media(err)
    }
}

impl From<PlaylistError> for Error {
    fn from(err: PlaylistError) -> Self {
        Error::Playlist(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn playlist_error_converts_and_displays() {
        let err: Error = PlaylistError::DuplicateId(7).into();
        assert_eq!(format!("{}", err), "Playlist Error: duplicate entry id 7");
        assert_eq!(
            format!("{}", Error::from(PlaylistError::Empty)),
            "Playlist Error: playlist has no entries"
        );
    }

    #[test]
    fn media_error_i18n_keys() {
        assert_eq!(
            MediaError::NoVideoStream.i18n_key(),
            "error-media-no-video-stream"
        );
        assert_eq!(
            MediaError::IoError("x".into()).i18n_key(),
            "error-media-io"
        );
    }

    #[test]
    fn media_error_display_includes_dimensions() {
        let err = MediaError::InvalidDimensions {
            width: 0,
            height: 480,
        };
        assert!(format!("{}", err).contains("0x480"));
    }
}
