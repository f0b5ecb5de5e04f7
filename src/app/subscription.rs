// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.

use super::config::NOTIFICATION_TICK_MS;
use super::Message;
use crate::ui::notifications::NotificationMessage;
use crate::ui::testimonials::Section;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Window resizes (for the compact navbar) and close requests (to unmount
/// the testimonials section before exiting).
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    })
}

/// Drives toast auto-dismiss while any toast is showing.
pub fn create_notification_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS))
            .map(|_| Message::Notification(NotificationMessage::Tick))
    } else {
        Subscription::none()
    }
}

/// Rotation and playback timers of the mounted section, if any.
pub fn create_testimonials_subscription(section: Option<&Section>) -> Subscription<Message> {
    section.map_or_else(Subscription::none, |section| {
        section.subscription().map(Message::Testimonials)
    })
}
