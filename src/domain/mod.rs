// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`carousel`]: Interaction value objects ([`Cooldown`](carousel::Cooldown),
//!   [`SwipeThreshold`](carousel::SwipeThreshold), [`TickInterval`](carousel::TickInterval),
//!   [`Direction`](carousel::Direction))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`media`]: Playlist types ([`MediaEntry`](media::MediaEntry),
//!   [`Playlist`](media::Playlist), [`MediaKind`](media::MediaKind))

pub mod carousel;
pub mod diagnostics;
pub mod media;
