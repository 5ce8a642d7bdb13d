// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the binary-noise backdrop, the scrollable page
//! (header, form or confirmation card, footer), and the toast overlay.

use super::{App, Message};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::{confirmation, form, header, notifications, styles};
use iced::widget::{column, container, scrollable, text, Stack};
use iced::{Color, Element, Length, Theme};
use std::f32::consts::TAU;

const SPINNER_STEPS: u64 = 12;

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let backdrop = container(
        text(app.noise.as_str())
            .size(typography::CAPTION)
            // A single run of 800 digits has no word breaks to wrap on.
            .wrapping(text::Wrapping::Glyph)
            .style(|_theme: &Theme| text::Style {
                color: Some(Color {
                    a: opacity::NOISE,
                    ..palette::PRIMARY_400
                }),
            }),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .clip(true);

    let card_body: Element<'_, Message> = match app.phase.receipt() {
        Some(receipt) => confirmation::view(confirmation::ViewContext {
            i18n: &app.i18n,
            receipt,
        })
        .map(Message::Confirmation),
        None => form::view(form::ViewContext {
            i18n: &app.i18n,
            draft: &app.draft,
            preview: app.preview.as_ref(),
            submitting: app.phase.is_submitting(),
            highlight_missing: app.highlight_missing,
            spinner_rotation: spinner_rotation(app.spinner_frame),
        })
        .map(Message::Form),
    };

    let card = container(card_body)
        .style(styles::container::card)
        .padding(spacing::XL)
        .max_width(sizing::FORM_MAX_WIDTH)
        .width(Length::Fill);

    let footer = column![
        text(app.i18n.tr("footer-platform"))
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
        text(app.i18n.tr("footer-privacy"))
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
    ]
    .spacing(spacing::XXS)
    .align_x(iced::Alignment::Center);

    let page = container(
        column![header::view(&app.i18n, app.glitch_active), card, footer]
            .spacing(spacing::XL)
            .align_x(iced::Alignment::Center)
            .width(Length::Fill)
            .padding(spacing::XXL),
    )
    .center_x(Length::Fill);

    let toasts = container(
        notifications::view(&app.notifications, &app.i18n).map(Message::Notification),
    )
    .width(Length::Fill)
    .padding(spacing::MD);

    Stack::new()
        .push(backdrop)
        .push(
            scrollable(page)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .into()
}

fn spinner_rotation(frame: u64) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let step = (frame % SPINNER_STEPS) as f32;
    step * (TAU / SPINNER_STEPS as f32)
}
