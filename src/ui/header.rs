// SPDX-License-Identifier: MPL-2.0
//! Form header: the glitching title, divider bar, and intro paragraph.
//!
//! During a glitch pulse the title is drawn three times in a stack with the
//! accent pair slightly offset, the desktop rendition of a chromatic
//! text-shadow flicker.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, text, Column, Space, Stack};
use iced::{Color, Element, Length, Padding};

const GLITCH_OFFSET: f32 = 2.0;

pub fn view<'a, Message: 'a>(i18n: &I18n, glitch_active: bool) -> Element<'a, Message> {
    let title_str = i18n.tr("form-title");

    let title: Element<'a, Message> = if glitch_active {
        let ghost = |content: String, color: Color, left: f32, top: f32| {
            container(text(content).size(typography::TITLE_LG).color(color)).padding(Padding {
                top,
                left,
                ..Padding::ZERO
            })
        };

        Stack::new()
            .push(ghost(
                title_str.clone(),
                palette::GLITCH_INDIGO,
                0.0,
                GLITCH_OFFSET,
            ))
            .push(ghost(
                title_str.clone(),
                palette::GLITCH_TEAL,
                GLITCH_OFFSET * 2.0,
                0.0,
            ))
            .push(ghost(
                title_str,
                palette::PRIMARY_200,
                GLITCH_OFFSET,
                GLITCH_OFFSET,
            ))
            .into()
    } else {
        text(title_str)
            .size(typography::TITLE_LG)
            .color(palette::PRIMARY_200)
            .into()
    };

    let divider = container(
        Space::new()
            .width(Length::Fixed(sizing::TITLE_DIVIDER_WIDTH))
            .height(Length::Fixed(sizing::TITLE_DIVIDER_HEIGHT)),
    )
    .style(styles::container::title_divider);

    let intro = text(i18n.tr("form-intro"))
        .size(typography::BODY_LG)
        .align_x(iced::alignment::Horizontal::Center)
        .width(Length::Fixed(sizing::FORM_MAX_WIDTH));

    Column::new()
        .push(title)
        .push(divider)
        .push(intro)
        .spacing(spacing::MD)
        .align_x(iced::Alignment::Center)
        .width(Length::Fill)
        .into()
}
