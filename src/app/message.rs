// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::{Attachment, PreviewImage};
use crate::submission::{SubmitReceipt, TransportError};
use crate::ui::{confirmation, form, notifications};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Form(form::Message),
    Confirmation(confirmation::Message),
    /// Result from the attachment file dialog (`None` when cancelled).
    AttachmentSelected(Option<PathBuf>),
    /// Result from reading and decoding a selected attachment. The
    /// generation tags the selection so a stale decode can be discarded.
    AttachmentLoaded {
        generation: u64,
        result: Result<(Attachment, Option<PreviewImage>), Error>,
    },
    /// Result from the submission transport.
    SubmissionFinished(Result<SubmitReceipt, TransportError>),
    /// Start of a title glitch pulse.
    GlitchPulse,
    /// End of the current glitch pulse.
    GlitchRelease,
    /// Regenerate the binary-noise backdrop (also drives toast expiry).
    NoiseTick,
    Notification(notifications::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}
