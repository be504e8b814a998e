use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::content::{self, ServiceListing};
use crate::forms::analytics::{AnalyticsError, AnalyticsEvent, AnalyticsSink};
use crate::forms::domain::Urgency;
use crate::forms::quote::QuoteFlow;
use crate::forms::service::{FlowSettings, FormService};
use crate::forms::transport::{FormSubmission, FormTransport, TransportError};

#[derive(Default)]
pub(super) struct RecordingTransport {
    submissions: Mutex<Vec<FormSubmission>>,
}

impl RecordingTransport {
    pub(super) fn submissions(&self) -> Vec<FormSubmission> {
        self.submissions
            .lock()
            .expect("transport mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl FormTransport for RecordingTransport {
    async fn submit(&self, submission: &FormSubmission) -> Result<(), TransportError> {
        self.submissions
            .lock()
            .expect("transport mutex poisoned")
            .push(submission.clone());
        Ok(())
    }
}

/// Counts attempts and answers every one with the configured failure.
pub(super) struct FailingTransport {
    attempts: Mutex<usize>,
    failure: fn() -> TransportError,
}

impl FailingTransport {
    pub(super) fn rejecting() -> Self {
        Self {
            attempts: Mutex::new(0),
            failure: || TransportError::Rejected { status: 500 },
        }
    }

    pub(super) fn offline() -> Self {
        Self {
            attempts: Mutex::new(0),
            failure: || TransportError::Network("connection refused".to_string()),
        }
    }

    pub(super) fn attempts(&self) -> usize {
        *self.attempts.lock().expect("transport mutex poisoned")
    }
}

#[async_trait]
impl FormTransport for FailingTransport {
    async fn submit(&self, _submission: &FormSubmission) -> Result<(), TransportError> {
        *self.attempts.lock().expect("transport mutex poisoned") += 1;
        Err((self.failure)())
    }
}

#[derive(Default)]
pub(super) struct RecordingAnalytics {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl RecordingAnalytics {
    pub(super) fn events(&self) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .expect("analytics mutex poisoned")
            .clone()
    }
}

impl AnalyticsSink for RecordingAnalytics {
    fn track(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        self.events
            .lock()
            .expect("analytics mutex poisoned")
            .push(event);
        Ok(())
    }
}

pub(super) fn settings() -> FlowSettings {
    FlowSettings {
        region_prefix: "HP".to_string(),
        availability_delay: Duration::ZERO,
    }
}

pub(super) fn service_with<T: FormTransport + 'static>(
    transport: Arc<T>,
    analytics: Arc<RecordingAnalytics>,
) -> FormService<T, RecordingAnalytics> {
    FormService::new(transport, analytics, settings())
}

pub(super) fn plumbing() -> ServiceListing {
    content::lookup("plumbing").expect("plumbing listing")
}

/// Fills every stage of a plumbing quote and leaves it on the contact stage.
pub(super) async fn plumbing_quote_at_contact<T: FormTransport + 'static>(
    service: &FormService<T, RecordingAnalytics>,
) -> QuoteFlow {
    let mut flow = service.open_quote(&plumbing());
    flow.draft_mut().expect("editable").postcode = "HP13 1AB".to_string();
    service.advance_quote(&mut flow).await.expect("postcode accepted");

    let draft = flow.draft_mut().expect("editable");
    draft.service_type = "Emergency Plumbing / Leak".to_string();
    draft.urgency = Some(Urgency::AsSoonAsPossible);
    service.advance_quote(&mut flow).await.expect("details accepted");

    let draft = flow.draft_mut().expect("editable");
    draft.name = "Jane Smith".to_string();
    draft.email = "jane@example.com".to_string();
    draft.phone = "07700 900000".to_string();
    flow
}
