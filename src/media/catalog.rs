// SPDX-License-Identifier: MPL-2.0
//! Playlist loading from TOML.
//!
//! The default playlist is embedded in the binary; a different one can be
//! passed on the command line. Relative local paths resolve against the
//! directory of the playlist file.
//!
//! ```toml
//! [[entry]]
//! id = 1
//! kind = "local-file"
//! source = "reels/bathroom.mp4"
//! title = "Bathroom Reel"
//! views = 1234
//! duration = "0:30"
//! badge = "MP4"
//! ```

use crate::domain::media::{EntryId, MediaEntry, MediaKind, Orientation, Playlist};
use crate::error::{Error, PlaylistError, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/playlists/"]
struct PlaylistAsset;

/// Name of the embedded playlist shipped with the binary.
pub const DEFAULT_PLAYLIST: &str = "default.toml";

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
enum KindDto {
    LocalFile,
    EmbeddedExternal,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
enum OrientationDto {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Deserialize)]
struct EntryDto {
    id: u32,
    kind: KindDto,
    source: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    meta: String,
    #[serde(default)]
    views: u64,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    badge: String,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    orientation: OrientationDto,
}

#[derive(Debug, Deserialize)]
struct PlaylistDto {
    #[serde(default, rename = "entry")]
    entries: Vec<EntryDto>,
}

impl EntryDto {
    fn into_entry(self, base_dir: Option<&Path>) -> MediaEntry {
        let kind = match self.kind {
            KindDto::LocalFile => MediaKind::LocalFile,
            KindDto::EmbeddedExternal => MediaKind::EmbeddedExternal,
        };
        let source_uri = match (kind, base_dir) {
            (MediaKind::LocalFile, Some(base)) => resolve_local(base, &self.source),
            _ => self.source,
        };
        let thumbnail_file = match kind {
            MediaKind::EmbeddedExternal => self
                .thumbnail
                .as_deref()
                .and_then(|uri| resolve_thumbnail(base_dir, uri)),
            MediaKind::LocalFile => None,
        };
        MediaEntry {
            id: EntryId(self.id),
            kind,
            source_uri,
            title: self.title,
            description: self.description,
            meta: self.meta,
            view_count: self.views,
            duration_label: self.duration,
            badge_label: self.badge,
            thumbnail_uri: self.thumbnail,
            thumbnail_file,
            orientation: match self.orientation {
                OrientationDto::Horizontal => Orientation::Horizontal,
                OrientationDto::Vertical => Orientation::Vertical,
            },
        }
    }
}

fn resolve_local(base: &Path, source: &str) -> String {
    let path = Path::new(source);
    if path.is_absolute() {
        source.to_string()
    } else {
        base.join(path).to_string_lossy().into_owned()
    }
}

/// Resolves a thumbnail locator to a file on disk. URLs are never fetched.
fn resolve_thumbnail(base_dir: Option<&Path>, uri: &str) -> Option<PathBuf> {
    if uri.contains("://") {
        return None;
    }
    let path = match base_dir {
        Some(base) => PathBuf::from(resolve_local(base, uri)),
        None => PathBuf::from(uri),
    };
    path.is_file().then_some(path)
}

/// Parses playlist TOML. `base_dir` anchors relative local paths.
pub fn parse(content: &str, base_dir: Option<&Path>) -> Result<Playlist> {
    let dto: PlaylistDto =
        toml::from_str(content).map_err(|e| PlaylistError::Parse(e.to_string()))?;
    let entries = dto
        .entries
        .into_iter()
        .map(|entry| entry.into_entry(base_dir))
        .collect();
    Ok(Playlist::new(entries)?)
}

/// Loads a playlist file from disk.
pub fn load_from_path(path: &Path) -> Result<Playlist> {
    let content = fs::read_to_string(path)?;
    parse(&content, path.parent())
}

/// Loads the playlist embedded in the binary.
pub fn load_default() -> Result<Playlist> {
    let file = PlaylistAsset::get(DEFAULT_PLAYLIST)
        .ok_or_else(|| Error::Io(format!("embedded {DEFAULT_PLAYLIST} is missing")))?;
    parse(&String::from_utf8_lossy(file.data.as_ref()), None)
}

/// Loads the playlist requested on the command line, falling back to the
/// embedded one when none is given or it cannot be read.
///
/// Returns the playlist and the error that caused a fallback, if any.
pub fn load_or_default(path: Option<PathBuf>) -> Result<(Playlist, Option<Error>)> {
    if let Some(path) = path {
        match load_from_path(&path) {
            Ok(playlist) => return Ok((playlist, None)),
            Err(err) => {
                eprintln!("Failed to load playlist {}: {}", path.display(), err);
                return Ok((load_default()?, Some(err)));
            }
        }
    }
    Ok((load_default()?, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TWO_ENTRIES: &str = r#"
[[entry]]
id = 1
kind = "local-file"
source = "reels/bathroom.mp4"
title = "Bathroom Reel"
views = 1234
duration = "0:30"
badge = "MP4"
orientation = "vertical"

[[entry]]
id = 2
kind = "embedded-external"
source = "https://www.youtube.com/embed/abc"
title = "Demo"
thumbnail = "https://img.example/abc.jpg"
"#;

    #[test]
    fn parse_reads_all_fields() {
        let playlist = parse(TWO_ENTRIES, None).expect("valid playlist");
        assert_eq!(playlist.len(), 2);

        let local = playlist.entry(0);
        assert_eq!(local.kind, MediaKind::LocalFile);
        assert_eq!(local.source_uri, "reels/bathroom.mp4");
        assert_eq!(local.view_count, 1234);
        assert_eq!(local.orientation, Orientation::Vertical);

        let external = playlist.entry(1);
        assert_eq!(external.kind, MediaKind::EmbeddedExternal);
        assert_eq!(
            external.thumbnail_uri.as_deref(),
            Some("https://img.example/abc.jpg")
        );
        assert_eq!(external.thumbnail_file, None);
        assert_eq!(external.orientation, Orientation::Horizontal);
        assert_eq!(external.view_count, 0);
    }

    #[test]
    fn relative_local_paths_resolve_against_base_dir() {
        let playlist = parse(TWO_ENTRIES, Some(Path::new("/srv/showcase"))).expect("valid");
        assert_eq!(
            PathBuf::from(&playlist.entry(0).source_uri),
            Path::new("/srv/showcase").join("reels/bathroom.mp4")
        );
        // External locators are left untouched
        assert_eq!(
            playlist.entry(1).source_uri,
            "https://www.youtube.com/embed/abc"
        );
    }

    #[test]
    fn thumbnail_files_resolve_once_at_load() {
        let temp_dir = tempdir().expect("temp dir");
        fs::write(temp_dir.path().join("cover.png"), b"png").expect("write thumbnail");
        let content = r#"
[[entry]]
id = 1
kind = "embedded-external"
source = "https://player.example.com/embed/one"
title = "On disk"
thumbnail = "cover.png"

[[entry]]
id = 2
kind = "embedded-external"
source = "https://player.example.com/embed/two"
title = "Missing"
thumbnail = "gone.png"

[[entry]]
id = 3
kind = "local-file"
source = "reel.mp4"
title = "Local"
thumbnail = "cover.png"
"#;

        let playlist = parse(content, Some(temp_dir.path())).expect("valid");
        assert_eq!(
            playlist.entry(0).thumbnail_file,
            Some(temp_dir.path().join("cover.png"))
        );
        assert_eq!(playlist.entry(1).thumbnail_file, None);
        // Local entries draw their first frame instead
        assert_eq!(playlist.entry(2).thumbnail_file, None);
    }

    #[test]
    fn empty_playlist_is_an_error() {
        match parse("", None) {
            Err(Error::Playlist(PlaylistError::Empty)) => {}
            other => panic!("expected empty playlist error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let content = r#"
[[entry]]
id = 1
kind = "vhs-tape"
source = "x"
title = "x"
"#;
        assert!(matches!(
            parse(content, None),
            Err(Error::Playlist(PlaylistError::Parse(_)))
        ));
    }

    #[test]
    fn embedded_default_playlist_is_valid() {
        let playlist = load_default().expect("embedded playlist parses");
        assert!(!playlist.is_empty());
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let temp_dir = tempdir().expect("temp dir");
        let missing = temp_dir.path().join("nope.toml");

        let (playlist, fallback) = load_or_default(Some(missing)).expect("fallback loads");
        assert!(fallback.is_some());
        assert_eq!(playlist, load_default().expect("default"));
    }

    #[test]
    fn load_from_path_uses_file_directory_as_base() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("list.toml");
        fs::write(&path, TWO_ENTRIES).expect("write playlist");

        let playlist = load_from_path(&path).expect("load");
        assert_eq!(
            PathBuf::from(&playlist.entry(0).source_uri),
            temp_dir.path().join("reels/bathroom.mp4")
        );
    }
}
