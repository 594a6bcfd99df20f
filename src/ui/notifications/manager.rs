// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the instances currently anchored to the screen, keyed
//! by the gallery variant that produced them. Auto-hide is driven by a
//! periodic tick message through the update loop rather than by timers
//! mutating state directly, so event ordering stays strict.

use super::notification::{ActionKind, Notification, NotificationId};
use crate::ui::gallery::catalog::Variant;

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// An interaction on a notification, dispatched to the central handler.
    Action { variant: Variant, kind: ActionKind },
}

/// Manages the notifications currently shown on screen.
///
/// Each variant owns at most one visible instance. Re-showing a variant
/// whose instance is still on screen cancels and replaces it, deadline
/// included.
#[derive(Debug, Default)]
pub struct Manager {
    active: Vec<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Displays a notification, scheduling `auto_hide` from now.
    ///
    /// A prior instance of the same variant is discarded atomically with the
    /// new show (cancel-and-replace), together with its pending deadline.
    pub fn show(
        &mut self,
        notification: Notification,
        auto_hide: Option<std::time::Duration>,
    ) -> NotificationId {
        let variant = notification.variant();
        self.active.retain(|n| n.variant() != variant);

        let shown = notification.displayed(auto_hide);
        let id = shown.id();
        self.active.push(shown);
        id
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.active.len();
        self.active.retain(|n| n.id() != id);
        self.active.len() < before
    }

    /// Dismisses the visible instance of `variant`, if any.
    pub fn dismiss_variant(&mut self, variant: Variant) -> bool {
        let before = self.active.len();
        self.active.retain(|n| n.variant() != variant);
        self.active.len() < before
    }

    /// Processes a tick event, hiding any instances past their deadline.
    ///
    /// Should be called periodically (e.g. every 100ms) while something on
    /// screen can expire. Persistent instances are left untouched.
    pub fn tick(&mut self) {
        self.active.retain(|n| !n.expired());
    }

    /// Handles a notification message.
    ///
    /// Action dispatch beyond dismissal (feedback, logging) is the caller's
    /// responsibility; the manager only maintains visibility state.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Action { variant, kind } => {
                if *kind == ActionKind::Dismiss {
                    self.dismiss_variant(*variant);
                }
            }
        }
    }

    /// Returns the currently visible notifications, in show order.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    /// Returns the visible bar-style notifications.
    pub fn bars(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter().filter(|n| n.style().is_bar())
    }

    /// Returns the visible toast-style notifications.
    pub fn toasts(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter().filter(|n| n.style().is_toast())
    }

    /// Returns the visible instance produced by `variant`, if any.
    #[must_use]
    pub fn showing(&self, variant: Variant) -> Option<&Notification> {
        self.active.iter().find(|n| n.variant() == variant)
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Returns whether any notification is on screen.
    #[must_use]
    pub fn has_active(&self) -> bool {
        !self.active.is_empty()
    }

    /// Returns whether any visible notification carries an auto-hide deadline.
    #[must_use]
    pub fn can_expire(&self) -> bool {
        self.active.iter().any(|n| n.auto_hide().is_some())
    }

    /// Clears all notifications.
    pub fn clear(&mut self) {
        self.active.clear();
    }
}
