// SPDX-License-Identifier: MPL-2.0
//! Toast bookkeeping.
//!
//! At most [`MAX_SHOWN`] toasts are on screen; the rest wait in arrival
//! order. A toast whose message key is already shown or waiting replaces the
//! older one, so submitting the same form twice leaves a single fresh
//! confirmation instead of a pile.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

pub const MAX_SHOWN: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic expiry check while anything is shown.
    Tick,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    shown: VecDeque<Notification>,
    waiting: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        if notification.severity() == Severity::Warning {
            tracing::warn!(key = notification.message_key(), "warning toast");
        }

        let key = notification.message_key().to_owned();
        self.shown.retain(|n| n.message_key() != key);
        self.waiting.retain(|n| n.message_key() != key);

        self.waiting.push_back(notification);
        self.refill();
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => self.dismiss(*id),
            Message::Tick => self.expire(Instant::now()),
        }
    }

    pub fn dismiss(&mut self, id: NotificationId) {
        self.shown.retain(|n| n.id() != id);
        self.waiting.retain(|n| n.id() != id);
        self.refill();
    }

    /// Drops shown toasts that have outlived their severity's lifetime.
    pub fn expire(&mut self, now: Instant) {
        self.shown.retain(|n| !n.is_expired_at(now));
        self.refill();
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.shown.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.shown.len()
    }

    #[must_use]
    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.shown.is_empty() || !self.waiting.is_empty()
    }

    fn refill(&mut self) {
        while self.shown.len() < MAX_SHOWN {
            match self.waiting.pop_front() {
                Some(next) => self.shown.push_front(next),
                None => break,
            }
        }
    }
}
