// SPDX-License-Identifier: MPL-2.0
//! Builds a configured notification instance for each catalog variant.
//!
//! The factory maps variant parameters onto widget configuration: style
//! kind, text keys, optional image, action bindings. Building has no side
//! effects; actions are bound as tags and dispatched later through
//! [`action_feedback_key`]'s central table.

use super::catalog::Variant;
use crate::assets;
use crate::image_handler::{self, ImageData};
use crate::ui::design_tokens::sizing;
use crate::ui::notifications::{ActionKind, Notification, NotificationStyle};

/// Constructs a fresh notification instance for `variant`.
#[must_use]
pub fn build(variant: Variant) -> Notification {
    match variant {
        Variant::PrimaryToast => Notification::new(
            variant,
            NotificationStyle::PrimaryToast,
            "notification-mail-archived",
        )
        .with_action("action-undo"),
        Variant::PrimaryToastWithImageAndTitle => Notification::new(
            variant,
            NotificationStyle::PrimaryToast,
            "notification-listen-to-emails",
        )
        .with_title("notification-kats-iphone")
        .with_image(demo_image_data("play-in-circle"))
        .with_dismiss_action()
        .with_message_action(),
        Variant::NeutralToast => Notification::new(
            variant,
            NotificationStyle::NeutralToast,
            "notification-sign-in-required",
        )
        .with_action("action-sign-in"),
        Variant::PrimaryOutlineBar => Notification::new(
            variant,
            NotificationStyle::PrimaryOutlineBar,
            "notification-mail-sent",
        ),
        Variant::PrimaryBar => Notification::new(
            variant,
            NotificationStyle::PrimaryBar,
            "notification-updating",
        ),
        Variant::NeutralBar => Notification::new(
            variant,
            NotificationStyle::NeutralBar,
            "notification-no-internet",
        ),
        Variant::PersistentBarWithAction => Notification::new(
            variant,
            NotificationStyle::NeutralBar,
            "notification-persistent-action",
        )
        .with_action("action-action"),
        Variant::PersistentBarWithCancel => Notification::new(
            variant,
            NotificationStyle::NeutralBar,
            "notification-persistent-cancel",
        )
        .with_dismiss_action(),
        Variant::NeutralToastWithImageAndTitle => Notification::new(
            variant,
            NotificationStyle::NeutralToast,
            "notification-screenshot-hint",
        )
        .with_title("notification-screenshot-found")
        .with_image(demo_thumbnail(
            "avatar-allan-munger",
            sizing::THUMBNAIL as u32,
            sizing::THUMBNAIL as u32,
        ))
        .with_dismiss_action()
        .with_message_action()
        .without_image_padding(),
    }
}

/// Fluent key of the transient feedback shown when an interaction fires.
///
/// One central table covers every variant-scoped action tag; interactions
/// without an entry produce no feedback.
#[must_use]
pub fn action_feedback_key(variant: Variant, kind: ActionKind) -> Option<&'static str> {
    match (variant, kind) {
        (Variant::PrimaryToast, ActionKind::Primary) => Some("feedback-undo-tapped"),
        (Variant::PrimaryToastWithImageAndTitle, ActionKind::Dismiss) => {
            Some("feedback-dismiss-tapped")
        }
        (Variant::PrimaryToastWithImageAndTitle, ActionKind::MessageTap) => {
            Some("feedback-listen-tapped")
        }
        (Variant::NeutralToast, ActionKind::Primary) => Some("feedback-sign-in-tapped"),
        (Variant::PersistentBarWithAction, ActionKind::Primary) => Some("feedback-action-tapped"),
        (Variant::PersistentBarWithCancel, ActionKind::Dismiss) => Some("feedback-dismiss-tapped"),
        (Variant::NeutralToastWithImageAndTitle, ActionKind::Dismiss) => {
            Some("feedback-dismiss-tapped")
        }
        (Variant::NeutralToastWithImageAndTitle, ActionKind::MessageTap) => {
            Some("feedback-screenshot-tapped")
        }
        _ => None,
    }
}

/// Loads an embedded demo image for display, degrading to `None` silently.
fn demo_image_data(name: &str) -> Option<ImageData> {
    let img = assets::demo_image(name)?;
    image_handler::dynamic_to_image_data(&img).ok()
}

/// Loads an embedded demo image and resizes it to a thumbnail.
fn demo_thumbnail(name: &str, width: u32, height: u32) -> Option<ImageData> {
    let img = assets::demo_image(name)?;
    let thumb = image_handler::thumbnail(&img, width, height);
    image_handler::dynamic_to_image_data(&thumb).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::i18n::I18n;
    use crate::ui::notifications::ActionAffordance;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn every_variant_builds() {
        for variant in Variant::ALL {
            let notification = build(variant);
            assert_eq!(notification.variant(), variant);
        }
    }

    #[test]
    fn primary_toast_carries_undo_action() {
        let notification = build(Variant::PrimaryToast);
        assert_eq!(notification.style(), NotificationStyle::PrimaryToast);
        assert_eq!(
            notification.action(),
            Some(&ActionAffordance::Labeled("action-undo".into()))
        );
        assert_eq!(
            english().tr(notification.message_key()),
            "Mail Archived"
        );
    }

    #[test]
    fn outline_bar_shows_mail_sent() {
        let notification = build(Variant::PrimaryOutlineBar);
        assert!(notification.style().is_bar());
        assert_eq!(notification.style(), NotificationStyle::PrimaryOutlineBar);
        assert_eq!(english().tr(notification.message_key()), "Mail Sent");
        assert!(notification.action().is_none());
        assert!(notification.image().is_none());
    }

    #[test]
    fn image_and_title_toast_is_fully_configured() {
        let notification = build(Variant::PrimaryToastWithImageAndTitle);
        assert_eq!(notification.style(), NotificationStyle::PrimaryToast);
        assert_eq!(notification.title_key(), Some("notification-kats-iphone"));
        assert!(notification.image().is_some());
        assert_eq!(notification.action(), Some(&ActionAffordance::DismissIcon));
        assert!(notification.has_message_action());
        assert!(!notification.no_image_padding());
    }

    #[test]
    fn screenshot_toast_uses_square_thumbnail_without_padding() {
        let notification = build(Variant::NeutralToastWithImageAndTitle);
        assert_eq!(notification.style(), NotificationStyle::NeutralToast);
        assert!(notification.no_image_padding());

        let image = notification.image().expect("bundled avatar should load");
        assert_eq!(image.width, sizing::THUMBNAIL as u32);
        assert_eq!(image.height, sizing::THUMBNAIL as u32);
    }

    #[test]
    fn missing_image_resource_degrades_silently() {
        assert!(demo_image_data("no-such-asset").is_none());
        assert!(demo_thumbnail("no-such-asset", 64, 64).is_none());

        // A notification built with a missing image keeps its text fields.
        let notification = Notification::new(
            Variant::NeutralToastWithImageAndTitle,
            NotificationStyle::NeutralToast,
            "notification-screenshot-hint",
        )
        .with_title("notification-screenshot-found")
        .with_image(demo_thumbnail("no-such-asset", 64, 64));

        assert!(notification.image().is_none());
        assert_eq!(notification.title_key(), Some("notification-screenshot-found"));
        assert_eq!(notification.message_key(), "notification-screenshot-hint");
    }

    #[test]
    fn plain_bars_carry_their_status_messages() {
        let i18n = english();

        let updating = build(Variant::PrimaryBar);
        assert_eq!(updating.style(), NotificationStyle::PrimaryBar);
        assert_eq!(i18n.tr(updating.message_key()), "Updating...");

        let offline = build(Variant::NeutralBar);
        assert_eq!(offline.style(), NotificationStyle::NeutralBar);
        assert_eq!(i18n.tr(offline.message_key()), "No internet connection");
    }

    #[test]
    fn neutral_toast_offers_sign_in() {
        let i18n = english();
        let notification = build(Variant::NeutralToast);

        assert_eq!(notification.style(), NotificationStyle::NeutralToast);
        match notification.action() {
            Some(ActionAffordance::Labeled(key)) => assert_eq!(i18n.tr(key), "Sign in"),
            other => panic!("expected a labeled action, got {other:?}"),
        }
    }

    #[test]
    fn persistent_bars_reuse_the_neutral_bar_style() {
        assert_eq!(
            build(Variant::PersistentBarWithAction).style(),
            NotificationStyle::NeutralBar
        );
        assert_eq!(
            build(Variant::PersistentBarWithCancel).style(),
            NotificationStyle::NeutralBar
        );
    }

    #[test]
    fn feedback_table_covers_every_bound_action() {
        use ActionKind::{Dismiss, MessageTap, Primary};

        for variant in Variant::ALL {
            let notification = build(variant);
            match notification.action() {
                Some(ActionAffordance::Labeled(_)) => {
                    assert!(action_feedback_key(variant, Primary).is_some());
                }
                Some(ActionAffordance::DismissIcon) => {
                    assert!(action_feedback_key(variant, Dismiss).is_some());
                }
                None => {}
            }
            if notification.has_message_action() {
                assert!(action_feedback_key(variant, MessageTap).is_some());
            }
        }
    }

    #[test]
    fn unbound_actions_produce_no_feedback() {
        assert_eq!(
            action_feedback_key(Variant::PrimaryBar, ActionKind::Primary),
            None
        );
        assert_eq!(
            action_feedback_key(Variant::PrimaryToast, ActionKind::MessageTap),
            None
        );
    }
}
