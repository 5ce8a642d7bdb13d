// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message};
use crate::error::Result;
use crate::media::{self, Attachment, PreviewImage};
use crate::report::ReportPayload;
use crate::submission::{SubmitReceipt, TransportError};
use crate::ui::{confirmation, effects, form, notifications};
use iced::Task;
use std::path::{Path, PathBuf};

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Form(form::Message::Field(change)) => {
            // The form stops emitting edits while submitting, but a message
            // already in flight must not mutate the snapshot being sent.
            if app.phase.is_idle() {
                app.draft.apply(change);
            }
            Task::none()
        }
        Message::Form(form::Message::PickAttachment) => handle_pick_attachment(app),
        Message::Form(form::Message::Submit) => handle_submit(app),
        Message::Confirmation(confirmation::Message::NewReport) => handle_new_report(app),
        Message::Confirmation(confirmation::Message::CopyReference) => handle_copy_reference(app),
        Message::AttachmentSelected(path) => handle_attachment_selected(app, path),
        Message::AttachmentLoaded { generation, result } => {
            handle_attachment_loaded(app, generation, result)
        }
        Message::SubmissionFinished(result) => handle_submission_finished(app, result),
        Message::GlitchPulse => {
            app.glitch_active = true;
            Task::none()
        }
        Message::GlitchRelease => {
            app.glitch_active = false;
            Task::none()
        }
        Message::NoiseTick => handle_noise_tick(app),
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
    }
}

fn handle_pick_attachment(app: &mut App) -> Task<Message> {
    if !app.phase.is_idle() {
        return Task::none();
    }

    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter(
                    "Screenshots & video",
                    media::extensions::ALL_ATTACHMENT_EXTENSIONS,
                )
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::AttachmentSelected,
    )
}

fn handle_attachment_selected(app: &mut App, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        // Dialog cancelled; keep whatever was selected before.
        return Task::none();
    };

    // Bump the generation so an earlier decode still in flight is discarded
    // when it lands (last selection wins).
    app.preview_generation += 1;
    let generation = app.preview_generation;

    Task::perform(
        async move { load_with_preview(&path) },
        move |result| Message::AttachmentLoaded { generation, result },
    )
}

fn load_with_preview(path: &Path) -> Result<(Attachment, Option<PreviewImage>)> {
    let attachment = media::load_attachment(path)?;
    let preview = media::preview::generate(&attachment)?;
    Ok((attachment, preview))
}

fn handle_attachment_loaded(
    app: &mut App,
    generation: u64,
    result: Result<(Attachment, Option<PreviewImage>)>,
) -> Task<Message> {
    if generation != app.preview_generation {
        return Task::none();
    }

    match result {
        Ok((attachment, preview)) => {
            app.draft.attachment = Some(attachment);
            // A non-image attachment produced no preview, which also clears
            // the previous one.
            app.preview = preview;
        }
        Err(err) => {
            tracing::warn!(%err, "failed to load attachment");
            app.notifications
                .push(notifications::Notification::error(
                    "notification-attachment-error",
                ));
        }
    }
    Task::none()
}

fn handle_submit(app: &mut App) -> Task<Message> {
    if !app.phase.is_idle() {
        return Task::none();
    }

    if !app.draft.is_complete() {
        app.highlight_missing = true;
        app.notifications
            .push(notifications::Notification::warning(
                "notification-validation-missing",
            ));
        return Task::none();
    }

    app.highlight_missing = false;
    app.phase.begin();

    let payload = ReportPayload::from_draft(&app.draft);
    tracing::info!(
        category = payload.category,
        priority = payload.priority,
        has_attachment = payload.attachment.is_some(),
        "submitting report"
    );

    Task::perform(app.transport.submit(payload), Message::SubmissionFinished)
}

fn handle_submission_finished(
    app: &mut App,
    result: std::result::Result<SubmitReceipt, TransportError>,
) -> Task<Message> {
    match result {
        Ok(receipt) => {
            if app.phase.complete(receipt.clone()) {
                tracing::info!(reference = %receipt.reference, "report submitted");
            }
        }
        Err(err) => {
            if app.phase.fail() {
                tracing::warn!(%err, "report submission failed");
                app.notifications
                    .push(notifications::Notification::error(err.i18n_key()));
            }
        }
    }
    Task::none()
}

fn handle_new_report(app: &mut App) -> Task<Message> {
    if app.phase.clear() {
        app.draft.reset();
        app.preview = None;
        app.preview_generation += 1;
        app.highlight_missing = false;
    }
    Task::none()
}

fn handle_copy_reference(app: &mut App) -> Task<Message> {
    if let Some(receipt) = app.phase.receipt() {
        app.notifications
            .push(notifications::Notification::success(
                "notification-reference-copied",
            ));
        iced::clipboard::write(receipt.reference.clone())
    } else {
        Task::none()
    }
}

fn handle_noise_tick(app: &mut App) -> Task<Message> {
    app.noise = effects::binary_noise(&mut app.rng, effects::NOISE_LENGTH);
    app.spinner_frame = app.spinner_frame.wrapping_add(1);
    // The noise cadence doubles as the toast auto-dismiss tick.
    app.notifications.tick();
    Task::none()
}
