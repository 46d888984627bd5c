// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The carousel never spawns work itself; this module turns its effects into
//! tasks: probes run on the blocking pool and report back tagged with the
//! handle they were issued for.

use super::Message;
use crate::carousel::{self, Effect};
use crate::diagnostics::{DiagnosticsCollector, WarningEvent, WarningKind};
use crate::domain::media::EntryId;
use crate::media;
use iced::Task;
use std::path::{Path, PathBuf};

/// Writes the diagnostics report before the application goes away.
///
/// Returns whether a report was written. A failed write is only logged:
/// closing must not be blocked by it.
pub fn export_diagnostics(diagnostics: &mut DiagnosticsCollector, path: Option<&Path>) -> bool {
    let Some(path) = path else {
        return false;
    };
    match diagnostics.export_to_file(path) {
        Ok(()) => true,
        Err(e) => {
            diagnostics.log_warning(WarningEvent::new(
                WarningKind::DiagnosticsExport,
                format!("{}: {e}", path.display()),
            ));
            false
        }
    }
}

/// Translates a carousel effect into a task.
pub fn run_effect(effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::Close => iced::exit(),
        Effect::Probe { slot, handle, path } => {
            Task::perform(media::probe_in_background(path), move |result| {
                Message::Carousel(carousel::Message::Probed {
                    slot,
                    handle,
                    result,
                })
            })
        }
    }
}

/// Decodes thumbnails for the card grid in the background.
pub fn thumbnail_tasks(requests: Vec<(EntryId, PathBuf)>) -> Task<Message> {
    Task::batch(requests.into_iter().map(|(id, path)| {
        Task::perform(media::probe_in_background(path), move |result| {
            Message::Carousel(carousel::Message::ThumbnailProbed { id, result })
        })
    }))
}
