// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the carousel component.
//!
//! The `App` struct wires together the carousel, localization and
//! diagnostics, and translates carousel effects into tasks (probes, exit).
//! Startup resolves configuration and the playlist before the event loop
//! starts so that a broken built-in playlist is reported instead of showing
//! an empty window.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::carousel::{self, Effect, Settings};
use crate::config::{self, Config};
use crate::diagnostics::{AppStateEvent, DiagnosticsCollector, WarningEvent, WarningKind};
use crate::domain::carousel::TickInterval;
use crate::domain::diagnostics::BufferCapacity;
use crate::domain::media::Playlist;
use crate::error::{Error, Result};
use crate::i18n::I18n;
use crate::media::catalog;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    carousel: carousel::State,
    diagnostics: DiagnosticsCollector,
    theme_mode: ThemeMode,
    tick_interval: TickInterval,
    /// i18n key of a startup warning shown until dismissed.
    notice: Option<String>,
    /// Report destination written when the gallery closes.
    diagnostics_out: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_index", &self.carousel.current_index())
            .field("modal", &self.carousel.modal())
            .field("events", &self.diagnostics.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1040;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Close requests go through `Message::WindowCloseRequested` so the
        // diagnostics report can be written first.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Everything resolved from disk before the event loop starts.
#[derive(Debug, Clone)]
pub struct Startup {
    pub lang: Option<String>,
    pub closable: bool,
    pub config: Config,
    /// i18n key of the config load warning, if loading failed.
    pub config_warning: Option<String>,
    pub playlist: Playlist,
    /// Why the requested playlist was replaced by the built-in one.
    pub playlist_error: Option<Error>,
    pub diagnostics_out: Option<PathBuf>,
}

impl Startup {
    /// Loads configuration and the playlist named by `flags`.
    ///
    /// Fails only when the built-in playlist itself cannot be parsed.
    pub fn load(flags: Flags) -> Result<Self> {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();
        let (playlist, playlist_error) =
            catalog::load_or_default(flags.playlist.map(PathBuf::from))?;

        Ok(Self {
            lang: flags.lang,
            closable: flags.closable,
            config,
            config_warning,
            playlist,
            playlist_error,
            diagnostics_out: flags.diagnostics_out.map(PathBuf::from),
        })
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> Result<()> {
    let startup = Startup::load(flags)?;

    // iced 0.14 requires a `Fn` boot; each call starts from the same snapshot
    let boot = move || App::new(startup.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
        .map_err(|e| Error::Gui(e.to_string()))
}

impl App {
    /// Builds application state and kicks off the first probes.
    pub fn new(startup: Startup) -> (Self, Task<Message>) {
        let Startup {
            lang,
            closable,
            config,
            config_warning,
            playlist,
            playlist_error,
            diagnostics_out,
        } = startup;

        let capacity = config
            .diagnostics
            .buffer_capacity
            .map_or_else(BufferCapacity::default, BufferCapacity::new);
        let mut diagnostics = DiagnosticsCollector::new(capacity);

        let mut notice = None;
        if let Some(key) = config_warning {
            diagnostics.log_warning(WarningEvent::new(WarningKind::ConfigLoad, key.clone()));
            notice = Some(key);
        }
        if let Some(err) = &playlist_error {
            diagnostics.log_warning(WarningEvent::new(WarningKind::PlaylistLoad, err.to_string()));
            notice = Some("notification-playlist-load-error".to_string());
        }
        diagnostics.log_state(AppStateEvent::PlaylistLoaded {
            entries: playlist.len(),
            fallback: playlist_error.is_some(),
        });

        let i18n = I18n::new(lang, &config);
        let tick_interval = config
            .playback
            .tick_ms
            .map_or_else(TickInterval::default, TickInterval::from_millis);

        let mut state = carousel::State::new(playlist, Settings::from_config(&config, closable));
        let first_probe = update::run_effect(state.start(&mut diagnostics));
        let thumbnails = update::thumbnail_tasks(state.thumbnail_requests());

        let app = App {
            i18n,
            carousel: state,
            diagnostics,
            theme_mode: config.general.theme_mode,
            tick_interval,
            notice,
            diagnostics_out,
        };

        (app, Task::batch([first_probe, thumbnails]))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        format!("{} - {app_name}", self.carousel.current_entry().title)
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.carousel.is_playing(),
                self.tick_interval,
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Carousel(message) => {
                let (effect, task) = self.carousel.handle_message(message, &mut self.diagnostics);
                if effect == Effect::Close {
                    self.export_diagnostics();
                }
                Task::batch([task.map(Message::Carousel), update::run_effect(effect)])
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
            Message::WindowCloseRequested(_window) => {
                self.export_diagnostics();
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            carousel: &self.carousel,
            notice: self.notice.as_deref(),
        })
    }

    fn export_diagnostics(&mut self) -> bool {
        update::export_diagnostics(&mut self.diagnostics, self.diagnostics_out.as_deref())
    }

    /// Read access to the collected diagnostics.
    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }
}
