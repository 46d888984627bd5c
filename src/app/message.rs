// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::carousel;

/// Top-level messages consumed by `App::update`. Carousel messages are
/// forwarded so the component keeps a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Carousel(carousel::Message),
    /// Hide the startup notice banner.
    DismissNotice,
    /// The window manager asked to close the window.
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional playlist TOML replacing the built-in one.
    pub playlist: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SHOWREEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Whether the host offers a "close gallery" action.
    pub closable: bool,
    /// Where to write the diagnostics report when the gallery closes.
    pub diagnostics_out: Option<String>,
}
