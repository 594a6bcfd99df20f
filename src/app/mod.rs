// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the notification gallery.
//!
//! The `App` struct wires the gallery screen, the notification manager and
//! localization together, and translates messages into state changes. Action
//! dispatch is centralized here: interactions on shown notifications arrive
//! as variant-scoped tags and are resolved against the factory's feedback
//! table, so no per-instance closures capture screen state.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::gallery::{self, factory};
use crate::ui::notifications::{self, NotificationMessage, Toast};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{container, text, Container, Stack, Text};
use iced::{alignment, window, Element, Length, Subscription, Task, Theme};
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 520;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// How long the transient tap feedback stays on screen.
const FEEDBACK_AUTO_HIDE: Duration = Duration::from_secs(2);

/// Transient feedback line shown after an interaction on a notification.
#[derive(Debug, Clone)]
struct Feedback {
    message: String,
    shown_at: Instant,
}

impl Feedback {
    fn new(message: String) -> Self {
        Self {
            message,
            shown_at: Instant::now(),
        }
    }

    fn expired(&self) -> bool {
        self.shown_at.elapsed() >= FEEDBACK_AUTO_HIDE
    }
}

/// Root Iced application state bridging the gallery, the notification
/// manager and localization.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    notifications: notifications::Manager,
    feedback: Option<Feedback>,
    theme_mode: ThemeMode,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("active_notifications", &self.notifications.active_count())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            gallery: gallery::State::new(),
            notifications: notifications::Manager::new(),
            feedback: None,
            theme_mode: ThemeMode::System,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from persisted preferences and `Flags`
    /// received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let app = App {
            i18n,
            theme_mode: config.theme_mode,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.notifications.can_expire() || self.feedback.is_some(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery::Message::Show(variant)) => {
                let notification = factory::build(variant);
                self.notifications
                    .show(notification, variant.auto_hide_delay());
                Task::none()
            }
            Message::Gallery(gallery::Message::Preview(notification_message))
            | Message::Notification(notification_message) => {
                self.handle_notification_message(notification_message)
            }
            Message::Tick(_instant) => {
                // Expire notification deadlines and the feedback line
                self.notifications.tick();
                if self.feedback.as_ref().is_some_and(Feedback::expired) {
                    self.feedback = None;
                }
                Task::none()
            }
        }
    }

    /// Central handler for interactions on shown notifications.
    fn handle_notification_message(&mut self, message: NotificationMessage) -> Task<Message> {
        if let NotificationMessage::Action { variant, kind } = message {
            if let Some(key) = factory::action_feedback_key(variant, kind) {
                self.feedback = Some(Feedback::new(self.i18n.tr(key)));
            }
        }
        self.notifications.handle_message(&message);
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let scheme = self.theme_mode.scheme();

        let content = gallery::view(&self.gallery, &self.i18n, &scheme).map(Message::Gallery);
        let overlay =
            Toast::view_overlay(&self.notifications, &self.i18n).map(Message::Notification);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(content)
            .push(overlay);

        if let Some(feedback) = &self.feedback {
            layers = layers.push(feedback_strip(&feedback.message, &scheme));
        }

        layers.into()
    }
}

/// Renders the transient tap-feedback line, bottom-center above everything.
fn feedback_strip<'a>(message: &'a str, scheme: &ColorScheme) -> Element<'a, Message> {
    let background = scheme.overlay_background;
    let foreground = scheme.overlay_text;

    let pill = Container::new(
        Text::new(message)
            .size(typography::CAPTION)
            .style(move |_theme: &Theme| text::Style {
                color: Some(foreground),
            }),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(move |_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    Container::new(pill)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::XL)
        .into()
}
