// SPDX-License-Identifier: MPL-2.0
use showreel::carousel::Settings;
use showreel::config::{self, Config};
use showreel::i18n::I18n;
use showreel::media::catalog;
use std::fs;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write english config");
    let loaded = config::load_from_path(&path).expect("Failed to load english config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("gallery-close"), "Fermer la galerie");
}

#[test]
fn cli_language_beats_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn out_of_range_settings_are_clamped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        "[carousel]\ncooldown_ms = 1\nswipe_threshold_px = 9000.0\n",
    )
    .expect("Failed to write config");

    let config = config::load_from_path(&path).expect("Failed to load config");
    let settings = Settings::from_config(&config, false);
    assert_eq!(settings.cooldown.as_millis(), 50);
    assert_eq!(settings.swipe_threshold.value(), 500.0);
}

#[test]
fn broken_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "this is not toml = = =")
        .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn playlist_file_resolves_relative_sources() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("reels.toml");
    fs::write(
        &path,
        r#"
[[entry]]
id = 7
kind = "local-file"
source = "clips/a.mp4"
title = "A"
"#,
    )
    .expect("Failed to write playlist");

    let playlist = catalog::load_from_path(&path).expect("Failed to load playlist");
    assert_eq!(playlist.len(), 1);
    assert_eq!(
        playlist.entry(0).source_uri,
        dir.path().join("clips/a.mp4").to_string_lossy()
    );
}

#[test]
fn missing_playlist_falls_back_to_built_in() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (playlist, error) =
        catalog::load_or_default(Some(dir.path().join("absent.toml"))).expect("built-in parses");
    assert!(error.is_some());
    assert!(!playlist.is_empty());
}

#[test]
fn empty_playlist_file_is_rejected() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("empty.toml");
    fs::write(&path, "").expect("Failed to write playlist");
    assert!(catalog::load_from_path(&path).is_err());
}
