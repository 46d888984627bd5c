// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting activity reports.
//!
//! - [`CircularBuffer`]: generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: a user action, state change or warning with its timestamp
//! - [`DiagnosticsCollector`]: owns the buffer and exports a TOML report

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::DiagnosticsCollector;
pub use events::{
    AppStateEvent, DiagnosticEvent, DiagnosticEventKind, InputSource, PlayerSlot, UserAction,
    WarningEvent, WarningKind,
};
