// SPDX-License-Identifier: MPL-2.0
//! `showreel` is a video showcase built with the Iced GUI framework.
//!
//! It shows a rotating carousel of videos with dot indicators, a card grid
//! and a modal player. Interaction logic lives in plain state types under
//! [`carousel`]; Iced only hosts the views and delivers events.

#![doc(html_root_url = "https://docs.rs/showreel/0.1.0")]

pub mod app;
pub mod carousel;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
