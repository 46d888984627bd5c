// SPDX-License-Identifier: MPL-2.0
//! Central collector for diagnostic events.

use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::buffer::{BufferCapacity, CircularBuffer};
use super::events::{
    AppStateEvent, DiagnosticEvent, DiagnosticEventKind, UserAction, WarningEvent,
};
use crate::error::Result;

/// Stores events in a bounded ring buffer and exports them as a report.
///
/// Events are logged synchronously from the update loop; nothing here is
/// shared across threads.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    /// Monotonic start, for event offsets.
    started_at: Instant,
    /// Wall-clock start, for the report header.
    started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
        }
    }

    pub fn log_action(&mut self, action: UserAction) {
        self.push(DiagnosticEventKind::UserAction { action });
    }

    pub fn log_state(&mut self, state: AppStateEvent) {
        self.push(DiagnosticEventKind::AppState { state });
    }

    /// Records a warning and echoes it to stderr.
    pub fn log_warning(&mut self, warning: WarningEvent) {
        eprintln!("[WARN] {:?}: {}", warning.kind, warning.message);
        self.push(DiagnosticEventKind::Warning { warning });
    }

    fn push(&mut self, kind: DiagnosticEventKind) {
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&DiagnosticEvent> {
        self.buffer.latest()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Serializes the buffered events as a TOML report.
    ///
    /// # Errors
    ///
    /// Returns an error if TOML serialization fails.
    pub fn export_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(&self.build_report())?)
    }

    /// Writes the TOML report to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = self.export_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> DiagnosticReport {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent {
                offset_ms: event.timestamp.duration_since(self.started_at).as_millis() as u64,
                event: event.kind.clone(),
            })
            .collect();

        DiagnosticReport {
            app_version: env!("CARGO_PKG_VERSION"),
            started_at: self.started_at_utc.to_rfc3339(),
            duration_ms: self.started_at.elapsed().as_millis() as u64,
            event_count: events.len(),
            events,
        }
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[derive(Debug, Serialize)]
struct DiagnosticReport {
    app_version: &'static str,
    started_at: String,
    duration_ms: u64,
    event_count: usize,
    events: Vec<SerializableEvent>,
}

#[derive(Debug, Serialize)]
struct SerializableEvent {
    /// Milliseconds since the collector was created.
    offset_ms: u64,
    event: DiagnosticEventKind,
}
