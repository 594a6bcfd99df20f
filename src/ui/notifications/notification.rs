// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` instance produced by the gallery
//! factory, the `NotificationStyle` kinds it can take, and the action tags
//! dispatched when the user interacts with a shown instance.

use crate::image_handler::ImageData;
use crate::ui::gallery::catalog::Variant;
use std::time::{Duration, Instant};

/// Unique identifier for a notification instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Presentation style of a notification.
///
/// Toasts are floating cards anchored to the bottom edge; bars span the full
/// width of the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStyle {
    PrimaryToast,
    NeutralToast,
    PrimaryBar,
    PrimaryOutlineBar,
    NeutralBar,
}

impl NotificationStyle {
    /// Returns whether this style presents as a full-width bar.
    #[must_use]
    pub fn is_bar(self) -> bool {
        matches!(
            self,
            NotificationStyle::PrimaryBar
                | NotificationStyle::PrimaryOutlineBar
                | NotificationStyle::NeutralBar
        )
    }

    /// Returns whether this style presents as a floating toast card.
    #[must_use]
    pub fn is_toast(self) -> bool {
        !self.is_bar()
    }
}

/// Tag identifying which interaction was performed on a notification.
///
/// Actions are dispatched as messages through a single central handler
/// instead of being captured as per-instance closures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// The labeled action button was pressed.
    Primary,
    /// The message body was tapped.
    MessageTap,
    /// The dismiss affordance was pressed.
    Dismiss,
}

/// The visible control bound to a notification's action, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionAffordance {
    /// A text button carrying the Fluent key of its label.
    Labeled(String),
    /// A cross icon that dismisses the notification.
    DismissIcon,
}

/// A configured notification instance.
///
/// Instances are ephemeral: one is produced per show request, owned by the
/// manager while visible, and dropped once hidden. Text fields hold Fluent
/// keys resolved at render time.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    variant: Variant,
    style: NotificationStyle,
    title_key: Option<String>,
    message_key: String,
    image: Option<ImageData>,
    action: Option<ActionAffordance>,
    message_action: bool,
    no_image_padding: bool,
    shown_at: Instant,
    auto_hide: Option<Duration>,
}

impl Notification {
    /// Creates a notification for `variant` with the given style and message key.
    pub fn new(variant: Variant, style: NotificationStyle, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            variant,
            style,
            title_key: None,
            message_key: message_key.into(),
            image: None,
            action: None,
            message_action: false,
            no_image_padding: false,
            shown_at: Instant::now(),
            auto_hide: None,
        }
    }

    /// Adds a title line above the message.
    #[must_use]
    pub fn with_title(mut self, key: impl Into<String>) -> Self {
        self.title_key = Some(key.into());
        self
    }

    /// Attaches an image.
    ///
    /// `None` leaves the notification image-less; a missing resource is not
    /// an error and the remaining fields are unaffected.
    #[must_use]
    pub fn with_image(mut self, image: Option<ImageData>) -> Self {
        self.image = image;
        self
    }

    /// Binds a labeled action button.
    #[must_use]
    pub fn with_action(mut self, label_key: impl Into<String>) -> Self {
        self.action = Some(ActionAffordance::Labeled(label_key.into()));
        self
    }

    /// Binds a dismiss icon in place of a labeled action.
    #[must_use]
    pub fn with_dismiss_action(mut self) -> Self {
        self.action = Some(ActionAffordance::DismissIcon);
        self
    }

    /// Makes the message body itself tappable.
    #[must_use]
    pub fn with_message_action(mut self) -> Self {
        self.message_action = true;
        self
    }

    /// Renders the image flush against the card edge, without padding.
    #[must_use]
    pub fn without_image_padding(mut self) -> Self {
        self.no_image_padding = true;
        self
    }

    /// Marks the instance as displayed now, scheduling the given auto-hide
    /// delay. `None` keeps it visible until explicitly dismissed.
    #[must_use]
    pub fn displayed(mut self, auto_hide: Option<Duration>) -> Self {
        self.shown_at = Instant::now();
        self.auto_hide = auto_hide;
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn style(&self) -> NotificationStyle {
        self.style
    }

    #[must_use]
    pub fn title_key(&self) -> Option<&str> {
        self.title_key.as_deref()
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn action(&self) -> Option<&ActionAffordance> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn has_message_action(&self) -> bool {
        self.message_action
    }

    #[must_use]
    pub fn no_image_padding(&self) -> bool {
        self.no_image_padding
    }

    #[must_use]
    pub fn auto_hide(&self) -> Option<Duration> {
        self.auto_hide
    }

    /// Returns whether the auto-hide deadline has passed.
    ///
    /// Persistent instances (no deadline) never expire.
    #[must_use]
    pub fn expired(&self) -> bool {
        match self.auto_hide {
            Some(delay) => self.shown_at.elapsed() >= delay,
            None => false,
        }
    }
}
