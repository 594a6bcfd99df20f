// SPDX-License-Identifier: MPL-2.0
//! View rendering for the gallery screen.

use super::{Message, State, Variant};
use crate::i18n::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::notifications::Toast;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, scrollable, text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Renders the vertical list of variant groups.
pub fn view<'a>(state: &'a State, i18n: &'a I18n, scheme: &ColorScheme) -> Element<'a, Message> {
    let text_color = scheme.text_primary;
    let accent = scheme.brand_primary;

    let mut groups = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Left);

    for preview in state.previews() {
        let variant = preview.variant();
        groups = groups.push(group(preview, variant, i18n, text_color, accent));
    }

    let background = scheme.surface_secondary;
    Container::new(scrollable(groups).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(background)),
            ..Default::default()
        })
        .into()
}

/// One catalog group: label, live preview, trigger button.
fn group<'a>(
    preview: &'a crate::ui::notifications::Notification,
    variant: Variant,
    i18n: &'a I18n,
    text_color: iced::Color,
    accent: iced::Color,
) -> Element<'a, Message> {
    let label = Text::new(i18n.tr(variant.display_label_key()))
        .size(typography::TITLE_SM)
        .style(move |_theme: &Theme| text::Style {
            color: Some(text_color),
        });

    let preview_widget = Toast::view(preview, i18n).map(Message::Preview);

    let trigger = button(
        Text::new(i18n.tr("show-button"))
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(iced::Color::WHITE),
            }),
    )
    .on_press(Message::Show(variant))
    .padding([spacing::XXS, spacing::MD])
    .style(move |_theme: &Theme, status: button::Status| trigger_style(accent, status));

    Column::new()
        .spacing(spacing::XS)
        .push(label)
        .push(preview_widget)
        .push(trigger)
        .into()
}

/// Style function for the "Show" trigger buttons.
fn trigger_style(accent: iced::Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => iced::Color {
            a: 0.85,
            ..accent
        },
        button::Status::Pressed => iced::Color { a: 0.7, ..accent },
        button::Status::Active | button::Status::Disabled => accent,
    };

    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: iced::Color::WHITE,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: crate::ui::design_tokens::shadow::NONE,
        snap: true,
    }
}
