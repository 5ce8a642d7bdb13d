// SPDX-License-Identifier: MPL-2.0
//! Submission lifecycle: the `idle → submitting → submitted` state machine,
//! receipts, and the transport port behind which the (currently simulated)
//! backend call lives.

pub mod transport;

pub use transport::{ReportTransport, SimulatedTransport};

use rand::Rng;
use std::fmt;
use std::time::Duration;

/// Fixed artificial round-trip delay of the simulated transport.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Length of the client-generated reference token.
pub const REFERENCE_LENGTH: usize = 10;

const REFERENCE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Acknowledgment returned by a transport on success.
///
/// The reference token is generated client-side: collision-prone and not
/// persisted anywhere, it only gives the user something to quote.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    pub reference: String,
    pub submitted_at: chrono::DateTime<chrono::Local>,
}

impl SubmitReceipt {
    /// Builds a receipt stamped with the current local time.
    #[must_use]
    pub fn new(reference: String) -> Self {
        Self {
            reference,
            submitted_at: chrono::Local::now(),
        }
    }
}

/// Errors a transport can report.
#[derive(Debug, Clone)]
pub enum TransportError {
    /// The submission service refused the payload.
    Rejected(String),
    /// The submission service could not be reached.
    Unavailable(String),
}

impl TransportError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            TransportError::Rejected(_) => "notification-submit-rejected",
            TransportError::Unavailable(_) => "notification-submit-error",
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Rejected(msg) => write!(f, "Submission rejected: {}", msg),
            TransportError::Unavailable(msg) => write!(f, "Submission service unavailable: {}", msg),
        }
    }
}

/// The submission lifecycle state.
///
/// Transitions: `begin` (idle → submitting), `complete` (submitting →
/// submitted), `fail` (submitting → idle), `clear` (submitted → idle).
/// Each transition method returns whether it applied, so stale completion
/// messages can be ignored by the caller.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Submitted(SubmitReceipt),
}

impl Phase {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Phase::Idle)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Phase::Submitting)
    }

    #[must_use]
    pub fn receipt(&self) -> Option<&SubmitReceipt> {
        match self {
            Phase::Submitted(receipt) => Some(receipt),
            _ => None,
        }
    }

    /// `idle → submitting`.
    pub fn begin(&mut self) -> bool {
        if self.is_idle() {
            *self = Phase::Submitting;
            true
        } else {
            false
        }
    }

    /// `submitting → submitted`.
    pub fn complete(&mut self, receipt: SubmitReceipt) -> bool {
        if self.is_submitting() {
            *self = Phase::Submitted(receipt);
            true
        } else {
            false
        }
    }

    /// `submitting → idle`, the failure path.
    pub fn fail(&mut self) -> bool {
        if self.is_submitting() {
            *self = Phase::Idle;
            true
        } else {
            false
        }
    }

    /// `submitted → idle`, the full-reset path.
    pub fn clear(&mut self) -> bool {
        if self.receipt().is_some() {
            *self = Phase::Idle;
            true
        } else {
            false
        }
    }
}

/// Generates a reference token of [`REFERENCE_LENGTH`] uppercase
/// alphanumerics.
pub fn reference_token(rng: &mut impl Rng) -> String {
    (0..REFERENCE_LENGTH)
        .map(|_| {
            let index = rng.random_range(0..REFERENCE_CHARSET.len());
            REFERENCE_CHARSET[index] as char
        })
        .collect()
}
