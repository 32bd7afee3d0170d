// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! Toasts appear as small cards with a severity-tinted surface and accent
//! border: `[icon] [title / description] [action] [dismiss]`. The overlay view
//! stacks the manager's visible toasts in the configured screen corner.

use crate::config::Position;
use crate::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::host::{CompositeTitle, PreparedToast, ToastId};
use crate::icons;
use crate::manager::{Manager, Message};
use crate::provider::{ProviderConfig, SlotStyle};
use crate::severity::Severity;
use crate::style::variant_style;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Color, Element, Length, Theme};

/// Toast card widget.
pub struct ToastCard;

impl ToastCard {
    /// Renders a single toast.
    pub fn view<'a>(
        id: ToastId,
        toast: &'a PreparedToast,
        provider: ProviderConfig,
    ) -> Element<'a, Message> {
        let severity = toast.severity();

        // Composite title: icon slot (only when the severity has one), then
        // the plain title text, with a fixed gap.
        let mut title_row = Row::new()
            .spacing(CompositeTitle::GAP)
            .align_y(alignment::Vertical::Center);
        if let Some(glyph) = toast.title().icon() {
            title_row = title_row.push(Element::<'static, Message>::from(icons::sized(
                icons::glyph(glyph),
                sizing::ICON_MD,
            )));
        }
        if let Some(title) = toast.title().text() {
            title_row = title_row.push(Text::new(title).size(typography::BODY).style(
                move |theme: &Theme| text::Style {
                    color: Some(variant_style(severity, theme).text),
                },
            ));
        }

        let mut body = Column::new().spacing(spacing::XXS).push(title_row);
        if let Some(description) = toast.description() {
            let slot = provider.description;
            body = body.push(Text::new(description).size(typography::BODY_SM).style(
                move |theme: &Theme| text::Style {
                    color: Some(slot.text.unwrap_or(variant_style(severity, theme).text)),
                },
            ));
        }

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(body).width(Length::Fill));

        if let Some(action) = toast.action() {
            let slot = provider.action_button;
            content = content.push(
                button(Text::new(action.label()).size(typography::CAPTION))
                    .on_press(Message::Action(id))
                    .padding(spacing::XXS)
                    .style(move |theme, status| action_button_style(theme, status, slot)),
            );
        }

        let cancel_slot = provider.cancel_button;
        let dismiss_button = button(Element::<'static, Message>::from(icons::sized(
            icons::cross(),
            sizing::ICON_SM,
        )))
            .on_press(Message::Dismiss(id))
            .padding(spacing::XXS)
            .style(move |theme, status| cancel_button_style(theme, status, cancel_slot));
        content = content.push(dismiss_button);

        let container_slot = provider.container;
        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| card_style(theme, severity, container_slot))
            .into()
    }

    /// Renders the overlay with all visible toasts, stacked vertically in the
    /// manager's configured corner.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let provider = manager.provider();
        let toasts: Vec<Element<'_, Message>> = manager
            .visible()
            .map(|(id, toast)| Self::view(id, toast, provider))
            .collect();

        if toasts.is_empty() {
            // An empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let (align_x, align_y) = anchor(manager.position());

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(align_x);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(align_x)
            .align_y(align_y)
            .padding(spacing::MD)
            .into()
    }
}

fn anchor(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    match position {
        Position::BottomRight => (alignment::Horizontal::Right, alignment::Vertical::Bottom),
        Position::BottomLeft => (alignment::Horizontal::Left, alignment::Vertical::Bottom),
        Position::TopRight => (alignment::Horizontal::Right, alignment::Vertical::Top),
        Position::TopLeft => (alignment::Horizontal::Left, alignment::Vertical::Top),
    }
}

/// Style function for the toast card container.
///
/// Slot overrides from the provider configuration win; unset fields fall back
/// to the severity's style bundle.
fn card_style(theme: &Theme, severity: Severity, slot: SlotStyle) -> container::Style {
    let variant = variant_style(severity, theme);

    container::Style {
        background: Some(Background::Color(
            slot.background.unwrap_or(variant.background),
        )),
        border: iced::Border {
            color: slot.border.unwrap_or(variant.border),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(slot.text.unwrap_or(variant.text)),
        ..Default::default()
    }
}

/// Style function for the primary action button.
fn action_button_style(theme: &Theme, status: button::Status, slot: SlotStyle) -> button::Style {
    let extended = theme.extended_palette();
    let base_background = slot.background.unwrap_or(extended.primary.base.color);
    let text_color = slot.text.unwrap_or(extended.primary.base.text);

    let background = match status {
        button::Status::Active | button::Status::Disabled => base_background,
        button::Status::Hovered | button::Status::Pressed => Color {
            a: opacity::OVERLAY_HOVER,
            ..base_background
        },
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: iced::Border {
            color: slot.border.unwrap_or(base_background),
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the cancel/dismiss button.
fn cancel_button_style(theme: &Theme, status: button::Status, slot: SlotStyle) -> button::Style {
    let base = theme.extended_palette().background.base;
    let text_color = slot.text.unwrap_or(base.text);

    match status {
        button::Status::Active => button::Style {
            background: slot.background.map(Background::Color),
            text_color,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(slot.background.unwrap_or(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            }))),
            text_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(slot.background.unwrap_or(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            }))),
            text_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..text_color
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
