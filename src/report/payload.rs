// SPDX-License-Identifier: MPL-2.0
//! Multipart payload assembly for a completed draft.
//!
//! The part names follow the production endpoint contract; the payload is
//! handed to the transport port and never posted by this crate itself.

use super::Draft;
use crate::error::{Error, Result};
use reqwest::multipart::{Form, Part};

/// Attachment data carried in the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentPart {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// An owned snapshot of a draft, ready to be rendered as a multipart form.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPayload {
    pub email: String,
    pub username: String,
    pub device_type: String,
    pub browser_info: String,
    pub category: &'static str,
    pub location: String,
    pub description: String,
    pub steps_to_reproduce: String,
    pub priority: &'static str,
    pub attachment: Option<AttachmentPart>,
}

impl ReportPayload {
    /// Snapshots every draft field, including attachment bytes.
    #[must_use]
    pub fn from_draft(draft: &Draft) -> Self {
        Self {
            email: draft.email.clone(),
            username: draft.username.clone(),
            device_type: draft.device_type.clone(),
            browser_info: draft.browser_info.clone(),
            category: draft.category.wire_name(),
            location: draft.location.clone(),
            description: draft.description.clone(),
            steps_to_reproduce: draft.steps_to_reproduce.clone(),
            priority: draft.priority.wire_name(),
            attachment: draft.attachment.as_ref().map(|a| AttachmentPart {
                file_name: a.file_name.clone(),
                mime: a.mime,
                bytes: a.bytes().to_vec(),
            }),
        }
    }

    /// Renders the payload as a multipart form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Payload`] if the attachment's media type cannot be
    /// attached to its part.
    pub fn into_multipart(self) -> Result<Form> {
        let mut form = Form::new()
            .text("email", self.email)
            .text("username", self.username)
            .text("deviceType", self.device_type)
            .text("browserInfo", self.browser_info)
            .text("glitchType", self.category)
            .text("glitchLocation", self.location)
            .text("glitchDescription", self.description)
            .text("stepsToReproduce", self.steps_to_reproduce)
            .text("urgency", self.priority);

        if let Some(attachment) = self.attachment {
            let part = Part::bytes(attachment.bytes)
                .file_name(attachment.file_name)
                .mime_str(attachment.mime)
                .map_err(|e| Error::Payload(e.to_string()))?;
            form = form.part("attachment", part);
        }

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::Attachment;
    use crate::report::{FieldChange, IssueCategory, Priority};
    use std::path::PathBuf;

    fn complete_draft() -> Draft {
        let mut draft = Draft::default();
        draft.apply(FieldChange::Email("user@company.com".into()));
        draft.apply(FieldChange::Username("nightowl".into()));
        draft.apply(FieldChange::DeviceType("Dell XPS 15".into()));
        draft.apply(FieldChange::BrowserInfo("Firefox 95".into()));
        draft.apply(FieldChange::Category(IssueCategory::Crash));
        draft.apply(FieldChange::Location("Dashboard".into()));
        draft.apply(FieldChange::Description("It crashed".into()));
        draft.apply(FieldChange::StepsToReproduce("1. Open dashboard".into()));
        draft.apply(FieldChange::Priority(Priority::High));
        draft
    }

    #[test]
    fn from_draft_snapshots_every_field() {
        let payload = ReportPayload::from_draft(&complete_draft());

        assert_eq!(payload.email, "user@company.com");
        assert_eq!(payload.username, "nightowl");
        assert_eq!(payload.device_type, "Dell XPS 15");
        assert_eq!(payload.browser_info, "Firefox 95");
        assert_eq!(payload.category, "crash");
        assert_eq!(payload.location, "Dashboard");
        assert_eq!(payload.description, "It crashed");
        assert_eq!(payload.steps_to_reproduce, "1. Open dashboard");
        assert_eq!(payload.priority, "high");
        assert!(payload.attachment.is_none());
    }

    #[test]
    fn attachment_bytes_are_carried() {
        let mut draft = complete_draft();
        draft.attachment = Some(Attachment::from_bytes(
            &PathBuf::from("shot.png"),
            vec![1, 2, 3],
        ));

        let payload = ReportPayload::from_draft(&draft);
        let attachment = payload.attachment.as_ref().expect("attachment expected");
        assert_eq!(attachment.file_name, "shot.png");
        assert_eq!(attachment.mime, "image/png");
        assert_eq!(attachment.bytes, vec![1, 2, 3]);
    }

    #[test]
    fn into_multipart_builds_a_form() {
        let payload = ReportPayload::from_draft(&complete_draft());
        let form = payload.into_multipart().expect("form should build");
        assert!(!form.boundary().is_empty());
    }

    #[test]
    fn into_multipart_accepts_attachment_part() {
        let mut draft = complete_draft();
        draft.attachment = Some(Attachment::from_bytes(
            &PathBuf::from("clip.webm"),
            vec![9; 16],
        ));

        let form = ReportPayload::from_draft(&draft)
            .into_multipart()
            .expect("form with attachment should build");
        assert!(!form.boundary().is_empty());
    }
}
