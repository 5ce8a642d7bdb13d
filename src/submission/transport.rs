// SPDX-License-Identifier: MPL-2.0
//! Submission transport port.
//!
//! The lifecycle controller only ever talks to a [`ReportTransport`], so it
//! can be driven in tests by a stub and, eventually, by a real HTTP adapter
//! posting the multipart form. The implementation shipped here is
//! [`SimulatedTransport`]: it assembles the multipart payload, waits the
//! fixed delay, and fabricates a receipt. No request leaves the process.

use super::{reference_token, SubmitReceipt, TransportError, SUBMIT_DELAY};
use crate::report::ReportPayload;
use futures_util::future::BoxFuture;

/// Port for submitting a completed report.
pub trait ReportTransport: Send + Sync {
    /// Submits the payload, resolving to a receipt or a transport error.
    fn submit(&self, payload: ReportPayload)
        -> BoxFuture<'static, Result<SubmitReceipt, TransportError>>;
}

/// Transport that simulates a backend round trip.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedTransport;

impl ReportTransport for SimulatedTransport {
    fn submit(
        &self,
        payload: ReportPayload,
    ) -> BoxFuture<'static, Result<SubmitReceipt, TransportError>> {
        Box::pin(async move {
            let form = payload
                .into_multipart()
                .map_err(|e| TransportError::Rejected(e.to_string()))?;
            tracing::debug!(
                boundary = form.boundary(),
                "assembled multipart payload for simulated submission"
            );

            tokio::time::sleep(SUBMIT_DELAY).await;

            let reference = reference_token(&mut rand::rng());
            Ok(SubmitReceipt::new(reference))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Draft, FieldChange};
    use crate::submission::REFERENCE_LENGTH;

    fn payload() -> ReportPayload {
        let mut draft = Draft::default();
        draft.apply(FieldChange::Email("user@company.com".into()));
        draft.apply(FieldChange::Username("nightowl".into()));
        draft.apply(FieldChange::DeviceType("Dell XPS 15".into()));
        draft.apply(FieldChange::BrowserInfo("Firefox 95".into()));
        draft.apply(FieldChange::Location("Dashboard".into()));
        draft.apply(FieldChange::Description("It broke".into()));
        draft.apply(FieldChange::StepsToReproduce("1. Click".into()));
        ReportPayload::from_draft(&draft)
    }

    #[tokio::test]
    async fn simulated_submit_resolves_with_a_receipt() {
        let transport = SimulatedTransport;
        let receipt = transport
            .submit(payload())
            .await
            .expect("simulated submission should succeed");
        assert_eq!(receipt.reference.len(), REFERENCE_LENGTH);
    }
}
