// SPDX-License-Identifier: MPL-2.0
//! Toast/bar notification system.
//!
//! This module provides the notification widget demonstrated by the gallery:
//! transient toasts anchored to the bottom edge and full-width bars anchored
//! to the top edge.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` instance with style kinds and action tags
//! - [`manager`] - `Manager` owning visible instances and their auto-hide deadlines
//! - [`toast`] - Widget rendering for cards, bars and the screen overlay
//!
//! # Design Considerations
//!
//! - Auto-hide is tick-driven through the update loop; timers never mutate state directly
//! - One visible instance per gallery variant; re-shows cancel and replace
//! - Persistent instances require an explicit dismiss interaction

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{
    ActionAffordance, ActionKind, Notification, NotificationId, NotificationStyle,
};
pub use toast::{style_colors, StyleColors, Toast};
