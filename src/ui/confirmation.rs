// SPDX-License-Identifier: MPL-2.0
//! Confirmation screen shown after a successful submission.

use crate::i18n::fluent::I18n;
use crate::submission::SubmitReceipt;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element};

/// Messages produced by the confirmation screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// Start a fresh report: resets the draft and returns to the form.
    NewReport,
    /// Copy the reference token to the clipboard.
    CopyReference,
}

/// Context required to render the confirmation screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub receipt: &'a SubmitReceipt,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let badge = container(
        text("✓")
            .size(typography::TITLE_LG)
            .color(palette::PRIMARY_400),
    )
    .style(styles::container::success_badge)
    .padding(spacing::LG);

    let reference = text(format!(
        "{} {}",
        ctx.i18n.tr("confirmation-reference-label"),
        ctx.receipt.reference,
    ))
    .size(typography::BODY_LG)
    .color(palette::PRIMARY_200);

    let submitted_at = text(
        ctx.receipt
            .submitted_at
            .format("%Y-%m-%d %H:%M")
            .to_string(),
    )
    .size(typography::CAPTION)
    .color(palette::GRAY_400);

    let actions = row![
        button(text(ctx.i18n.tr("confirmation-new-report")).size(typography::BODY_LG))
            .on_press(Message::NewReport)
            .style(styles::button::primary)
            .padding([spacing::SM, spacing::LG]),
        button(text(ctx.i18n.tr("confirmation-copy-reference")).size(typography::BODY_LG))
            .on_press(Message::CopyReference)
            .style(styles::button::secondary)
            .padding([spacing::SM, spacing::LG]),
    ]
    .spacing(spacing::MD);

    column![
        badge,
        text(ctx.i18n.tr("confirmation-title")).size(typography::TITLE_MD),
        text(ctx.i18n.tr("confirmation-body")).size(typography::BODY_LG),
        reference,
        submitted_at,
        actions,
    ]
    .spacing(spacing::MD)
    .align_x(Alignment::Center)
    .into()
}
