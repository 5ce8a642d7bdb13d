// SPDX-License-Identifier: MPL-2.0
//! The report form view.
//!
//! Rendering only: every interaction is surfaced as a [`Message`] and handled
//! by the application update loop. Inputs stop accepting changes while a
//! submission is in flight.

use crate::i18n::fluent::I18n;
use crate::media::PreviewImage;
use crate::report::{Draft, FieldChange, IssueCategory, Priority, RequiredField};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::ProcessingSpinner;
use iced::widget::{button, column, container, image, pick_list, row, text, text_input, Column};
use iced::{Alignment, Element, Length, Padding};
use std::fmt;

/// Messages produced by the form.
#[derive(Debug, Clone)]
pub enum Message {
    Field(FieldChange),
    PickAttachment,
    Submit,
}

/// Context required to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub draft: &'a Draft,
    pub preview: Option<&'a PreviewImage>,
    pub submitting: bool,
    /// Set after a submit attempt with empty required fields; highlights them.
    pub highlight_missing: bool,
    pub spinner_rotation: f32,
}

/// Wrapper giving enum options a localized `Display` for pick lists.
#[derive(Debug, Clone, PartialEq)]
struct Labeled<T> {
    value: T,
    label: String,
}

impl<T> fmt::Display for Labeled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let missing = if ctx.highlight_missing {
        ctx.draft.missing_fields()
    } else {
        Vec::new()
    };

    let field_row = |left: Element<'a, Message>, right: Element<'a, Message>| {
        row![
            container(left).width(Length::FillPortion(1)),
            container(right).width(Length::FillPortion(1)),
        ]
        .spacing(spacing::LG)
    };

    let grid = column![
        field_row(
            labeled_input(
                &ctx,
                &missing,
                RequiredField::Email,
                "label-email",
                "placeholder-email",
                &ctx.draft.email,
                FieldChange::Email,
            ),
            labeled_input(
                &ctx,
                &missing,
                RequiredField::Username,
                "label-username",
                "placeholder-username",
                &ctx.draft.username,
                FieldChange::Username,
            ),
        ),
        field_row(
            labeled_input(
                &ctx,
                &missing,
                RequiredField::DeviceType,
                "label-device-type",
                "placeholder-device-type",
                &ctx.draft.device_type,
                FieldChange::DeviceType,
            ),
            labeled_input(
                &ctx,
                &missing,
                RequiredField::BrowserInfo,
                "label-browser-info",
                "placeholder-browser-info",
                &ctx.draft.browser_info,
                FieldChange::BrowserInfo,
            ),
        ),
        field_row(
            category_picker(&ctx),
            labeled_input(
                &ctx,
                &missing,
                RequiredField::Location,
                "label-issue-location",
                "placeholder-issue-location",
                &ctx.draft.location,
                FieldChange::Location,
            ),
        ),
        labeled_input(
            &ctx,
            &missing,
            RequiredField::Description,
            "label-description",
            "placeholder-description",
            &ctx.draft.description,
            FieldChange::Description,
        ),
        labeled_input(
            &ctx,
            &missing,
            RequiredField::StepsToReproduce,
            "label-steps",
            "placeholder-steps",
            &ctx.draft.steps_to_reproduce,
            FieldChange::StepsToReproduce,
        ),
        attachment_zone(&ctx),
        priority_picker(&ctx),
    ]
    .spacing(spacing::LG);

    column![grid, submit_button(&ctx)]
        .spacing(spacing::XL)
        .align_x(Alignment::Center)
        .into()
}

fn field_label<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    text(i18n.tr(key))
        .size(typography::BODY)
        .color(palette::PRIMARY_200)
        .into()
}

#[allow(clippy::too_many_arguments)]
fn labeled_input<'a>(
    ctx: &ViewContext<'a>,
    missing: &[RequiredField],
    field: RequiredField,
    label_key: &str,
    placeholder_key: &str,
    value: &'a str,
    change: fn(String) -> FieldChange,
) -> Element<'a, Message> {
    let mut input = text_input(&ctx.i18n.tr(placeholder_key), value)
        .padding(spacing::SM)
        .size(typography::BODY)
        .style(styles::text_input::form_field(missing.contains(&field)));

    if !ctx.submitting {
        input = input.on_input(move |v| Message::Field(change(v)));
    }

    column![field_label(ctx.i18n, label_key), input]
        .spacing(spacing::XXS)
        .into()
}

fn category_picker<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let options: Vec<Labeled<IssueCategory>> = IssueCategory::ALL
        .iter()
        .map(|category| Labeled {
            value: *category,
            label: ctx.i18n.tr(category.label_key()),
        })
        .collect();
    let selected = Labeled {
        value: ctx.draft.category,
        label: ctx.i18n.tr(ctx.draft.category.label_key()),
    };

    let picker = pick_list(options, Some(selected), |option| {
        Message::Field(FieldChange::Category(option.value))
    })
    .padding(spacing::SM)
    .text_size(typography::BODY)
    .width(Length::Fill);

    column![field_label(ctx.i18n, "label-issue-type"), picker]
        .spacing(spacing::XXS)
        .into()
}

fn priority_picker<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let options: Vec<Labeled<Priority>> = Priority::ALL
        .iter()
        .map(|priority| Labeled {
            value: *priority,
            label: ctx.i18n.tr(priority.label_key()),
        })
        .collect();
    let selected = Labeled {
        value: ctx.draft.priority,
        label: ctx.i18n.tr(ctx.draft.priority.label_key()),
    };

    let picker = pick_list(options, Some(selected), |option| {
        Message::Field(FieldChange::Priority(option.value))
    })
    .padding(spacing::SM)
    .text_size(typography::BODY)
    .width(Length::Fill);

    column![field_label(ctx.i18n, "label-priority"), picker]
        .spacing(spacing::XXS)
        .into()
}

fn attachment_zone<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let inner: Element<'a, Message> = if let Some(preview) = ctx.preview {
        image(preview.handle.clone())
            .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
            .into()
    } else {
        column![
            text(ctx.i18n.tr("attachment-hint")).size(typography::BODY),
            text(ctx.i18n.tr("attachment-formats"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        ]
        .spacing(spacing::XXS)
        .align_x(Alignment::Center)
        .into()
    };

    let zone = button(
        container(inner)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::ATTACHMENT_ZONE_HEIGHT))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press_maybe((!ctx.submitting).then_some(Message::PickAttachment))
    .style(styles::button::attachment)
    .padding(Padding::ZERO);

    let mut block = Column::new()
        .push(field_label(ctx.i18n, "label-attachment"))
        .push(
            container(zone)
                .style(styles::container::attachment_zone)
                .width(Length::Fill),
        )
        .spacing(spacing::XXS);

    if let Some(attachment) = &ctx.draft.attachment {
        block = block.push(
            text(format!(
                "{} {} ({})",
                ctx.i18n.tr("attachment-selected"),
                attachment.file_name,
                attachment.display_size(),
            ))
            .size(typography::CAPTION)
            .color(palette::PRIMARY_200),
        );
    }

    block.into()
}

fn submit_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if ctx.submitting {
        let spinner =
            ProcessingSpinner::new(palette::WHITE, ctx.spinner_rotation).into_element();
        // No on_press while in flight; the button renders disabled.
        button(
            row![
                spinner,
                text(ctx.i18n.tr("submit-processing")).size(typography::BODY_LG)
            ]
            .spacing(spacing::SM)
            .align_y(Alignment::Center),
        )
        .style(styles::button::primary)
        .padding([spacing::SM, spacing::XL])
        .into()
    } else {
        button(text(ctx.i18n.tr("submit-button")).size(typography::BODY_LG))
            .on_press(Message::Submit)
            .style(styles::button::primary)
            .padding([spacing::SM, spacing::XL])
            .into()
    }
}
