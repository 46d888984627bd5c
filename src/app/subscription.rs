// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard presses nobody captured are routed to the carousel, window close
//! requests go to the application, and a periodic tick drives the playheads
//! while something plays.

use super::Message;
use crate::carousel;
use crate::domain::carousel::TickInterval;
use iced::{event, keyboard, time, window, Event, Subscription};

/// Routes uncaptured key presses to the carousel and close requests to the
/// application.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        // Close requests are handled whatever their capture status
        if let Event::Window(window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        let Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
            return None;
        };
        match status {
            event::Status::Ignored => Some(Message::Carousel(carousel::Message::KeyPressed(key))),
            event::Status::Captured => None,
        }
    })
}

/// Creates the playback tick, active only while a playhead is running.
pub fn create_tick_subscription(playing: bool, interval: TickInterval) -> Subscription<Message> {
    if playing {
        time::every(interval.as_duration())
            .map(|now| Message::Carousel(carousel::Message::Tick(now)))
    } else {
        Subscription::none()
    }
}
