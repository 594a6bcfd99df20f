// SPDX-License-Identifier: MPL-2.0
//! Widget rendering for toast and bar notifications.
//!
//! Toasts render as floating cards with rounded corners and a shadow; bars
//! span the full width with square corners. Colors are fixed per style kind.

use super::manager::Message;
use super::notification::{ActionAffordance, ActionKind, Notification, NotificationStyle};
use crate::i18n::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::image::Image;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Fixed colors of a notification style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleColors {
    pub background: Color,
    pub text: Color,
    pub outline: Option<Color>,
}

/// Returns the color set for a style kind.
#[must_use]
pub fn style_colors(style: NotificationStyle) -> StyleColors {
    match style {
        NotificationStyle::PrimaryToast => StyleColors {
            background: palette::PRIMARY_100,
            text: palette::PRIMARY_800,
            outline: None,
        },
        NotificationStyle::NeutralToast => StyleColors {
            background: palette::GRAY_900,
            text: palette::WHITE,
            outline: None,
        },
        NotificationStyle::PrimaryBar => StyleColors {
            background: palette::PRIMARY_600,
            text: palette::WHITE,
            outline: None,
        },
        NotificationStyle::PrimaryOutlineBar => StyleColors {
            background: palette::WHITE,
            text: palette::PRIMARY_600,
            outline: Some(palette::GRAY_200),
        },
        NotificationStyle::NeutralBar => StyleColors {
            background: palette::GRAY_900,
            text: palette::WHITE,
            outline: None,
        },
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single notification in its style's presentation.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let style = notification.style();
        let colors = style_colors(style);
        let variant = notification.variant();

        // Text block: optional title above the message
        let mut text_column = Column::new().spacing(spacing::XXS);
        if let Some(title_key) = notification.title_key() {
            text_column = text_column.push(
                Text::new(i18n.tr(title_key))
                    .size(typography::BODY)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(colors.text),
                    }),
            );
        }
        let message_size = if notification.title_key().is_some() {
            typography::BODY_SM
        } else {
            typography::BODY
        };
        text_column = text_column.push(
            Text::new(i18n.tr(notification.message_key()))
                .size(message_size)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(colors.text),
                }),
        );

        // A tappable message body dispatches a MessageTap action
        let text_block: Element<'a, Message> = if notification.has_message_action() {
            button(text_column)
                .on_press(Message::Action {
                    variant,
                    kind: ActionKind::MessageTap,
                })
                .padding(0.0)
                .style(transparent_button_style)
                .into()
        } else {
            text_column.into()
        };

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);

        if let Some(image) = notification.image() {
            let display_edge = (image.width as f32).min(sizing::THUMBNAIL);
            let widget = Image::new(image.handle.clone())
                .width(Length::Fixed(display_edge))
                .height(Length::Fixed(display_edge));
            let image_padding = if notification.no_image_padding() {
                0.0
            } else {
                spacing::XXS
            };
            content = content.push(Container::new(widget).padding(image_padding));
        }

        content = content.push(
            Container::new(text_block)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

        match notification.action() {
            Some(ActionAffordance::Labeled(label_key)) => {
                content = content.push(
                    button(
                        Text::new(i18n.tr(label_key))
                            .size(typography::BODY)
                            .style(move |_theme: &Theme| text::Style {
                                color: Some(colors.text),
                            }),
                    )
                    .on_press(Message::Action {
                        variant,
                        kind: ActionKind::Primary,
                    })
                    .padding(spacing::XXS)
                    .style(overlay_button_style),
                );
            }
            Some(ActionAffordance::DismissIcon) => {
                content = content.push(
                    button(
                        Text::new("✕")
                            .size(sizing::ICON_SM)
                            .style(move |_theme: &Theme| text::Style {
                                color: Some(colors.text),
                            }),
                    )
                    .on_press(Message::Action {
                        variant,
                        kind: ActionKind::Dismiss,
                    })
                    .padding(spacing::XXS)
                    .style(overlay_button_style),
                );
            }
            None => {}
        }

        let card_padding = if notification.no_image_padding() && notification.image().is_some() {
            iced::Padding {
                top: 0.0,
                right: spacing::SM,
                bottom: 0.0,
                left: 0.0,
            }
        } else {
            iced::Padding::new(spacing::SM)
        };

        if style.is_bar() {
            Container::new(content)
                .width(Length::Fill)
                .padding(card_padding)
                .style(move |_theme: &Theme| bar_container_style(colors))
                .into()
        } else {
            Container::new(content)
                .width(Length::Fixed(sizing::TOAST_WIDTH))
                .padding(card_padding)
                .style(move |_theme: &Theme| toast_container_style(colors))
                .into()
        }
    }

    /// Renders the overlay with all visible notifications.
    ///
    /// Bars stack from the top edge at full width; toasts stack bottom-center.
    pub fn view_overlay<'a>(
        manager: &'a super::manager::Manager,
        i18n: &'a I18n,
    ) -> Element<'a, Message> {
        let bars: Vec<Element<'a, Message>> = manager
            .bars()
            .map(|notification| Self::view(notification, i18n))
            .collect();
        let toasts: Vec<Element<'a, Message>> = manager
            .toasts()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if bars.is_empty() && toasts.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let bar_stack = Column::with_children(bars)
            .spacing(spacing::XXS)
            .width(Length::Fill);
        let toast_stack = Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center),
        )
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::MD);

        Column::new()
            .push(bar_stack)
            .push(iced::widget::Space::new().height(Length::Fill))
            .push(toast_stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Style function for toast cards.
fn toast_container_style(colors: StyleColors) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(colors.background)),
        border: iced::Border {
            color: colors.outline.unwrap_or(colors.background),
            width: if colors.outline.is_some() {
                border::WIDTH_SM
            } else {
                0.0
            },
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        text_color: Some(colors.text),
        ..Default::default()
    }
}

/// Style function for full-width bars.
fn bar_container_style(colors: StyleColors) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(colors.background)),
        border: iced::Border {
            color: colors.outline.unwrap_or(colors.background),
            width: if colors.outline.is_some() {
                border::WIDTH_SM
            } else {
                0.0
            },
            radius: radius::NONE.into(),
        },
        shadow: shadow::NONE,
        text_color: Some(colors.text),
        ..Default::default()
    }
}

/// Style function for the tappable message body (no chrome of its own).
fn transparent_button_style(theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: theme.palette().text,
        border: iced::Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for action and dismiss buttons on a notification.
fn overlay_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.palette().text;

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
