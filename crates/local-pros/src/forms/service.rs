use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::analytics::{AnalyticsEvent, AnalyticsSink};
use super::contact::{ContactFlow, UnsubscribeRequest};
use super::domain::QuoteRequestDraft;
use super::error::FlowError;
use super::quote::{QuoteFlow, QuoteStage, QuoteTarget};
use super::transport::{FormSubmission, FormTransport, TransportError};
use crate::config::FormsConfig;
use crate::content::ServiceListing;
use crate::telemetry::ANALYTICS_TARGET;

pub const QUOTE_REJECTED_MESSAGE: &str = "Submission failed. Please try again.";
pub const QUOTE_NETWORK_MESSAGE: &str = "Network error. Please try again.";
pub const CONTACT_FAILED_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Runtime knobs shared by every flow the service drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSettings {
    pub region_prefix: String,
    pub availability_delay: Duration,
}

impl FlowSettings {
    pub fn from_config(config: &FormsConfig) -> Self {
        Self {
            region_prefix: config.region_prefix.clone(),
            availability_delay: config.availability_delay,
        }
    }
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            region_prefix: "HP".to_string(),
            availability_delay: Duration::ZERO,
        }
    }
}

/// What happened to a draft that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    /// Honeypot was filled; nothing was sent.
    Discarded,
}

/// Drives quote and contact flows against a transport and analytics sink.
pub struct FormService<T, A> {
    transport: Arc<T>,
    analytics: Arc<A>,
    settings: FlowSettings,
}

impl<T, A> FormService<T, A>
where
    T: FormTransport + 'static,
    A: AnalyticsSink + 'static,
{
    pub fn new(transport: Arc<T>, analytics: Arc<A>, settings: FlowSettings) -> Self {
        Self {
            transport,
            analytics,
            settings,
        }
    }

    pub fn settings(&self) -> &FlowSettings {
        &self.settings
    }

    /// A fresh quote draft for the chosen service, starting at the postcode stage.
    pub fn open_quote(&self, listing: &ServiceListing) -> QuoteFlow {
        QuoteFlow::new(
            QuoteTarget::from_listing(listing),
            self.settings.region_prefix.clone(),
        )
    }

    pub fn resume_quote(
        &self,
        listing: &ServiceListing,
        stage: QuoteStage,
        draft: QuoteRequestDraft,
    ) -> QuoteFlow {
        QuoteFlow::resume(
            QuoteTarget::from_listing(listing),
            self.settings.region_prefix.clone(),
            stage,
            draft,
        )
    }

    /// Advances one stage. Passing the postcode stage includes the
    /// availability pause before details are shown.
    pub async fn advance_quote(&self, flow: &mut QuoteFlow) -> Result<QuoteStage, FlowError> {
        let from = flow.stage();
        let next = flow.advance().inspect_err(|err| {
            debug!(service = %flow.target().service_id, stage = %from, error = %err, "quote stage rejected");
        })?;

        if from == QuoteStage::Postcode && !self.settings.availability_delay.is_zero() {
            tokio::time::sleep(self.settings.availability_delay).await;
        }
        debug!(service = %flow.target().service_id, %from, to = %next, "quote advanced");
        Ok(next)
    }

    pub async fn submit_quote(&self, flow: &mut QuoteFlow) -> Result<SubmitOutcome, FlowError> {
        flow.prepare_submission()?;

        if flow.is_bot() {
            info!(service = %flow.target().service_id, "discarding quote with honeypot filled");
            return Ok(SubmitOutcome::Discarded);
        }

        let submission = FormSubmission::quote(flow);
        match self.transport.submit(&submission).await {
            Ok(()) => {
                let postcode = flow.draft().postcode.trim().to_string();
                flow.confirm();
                info!(service = %flow.target().service_id, %postcode, "quote request delivered");
                self.track(AnalyticsEvent::quote_request(
                    &flow.target().service_name,
                    &postcode,
                ));
                Ok(SubmitOutcome::Delivered)
            }
            Err(err) => {
                let message = match err {
                    TransportError::Network(_) => QUOTE_NETWORK_MESSAGE,
                    TransportError::Rejected { .. } | TransportError::Client(_) => {
                        QUOTE_REJECTED_MESSAGE
                    }
                };
                flow.record_submit_failure(message);
                warn!(service = %flow.target().service_id, error = %err, "quote request failed");
                Err(FlowError::Transport(err))
            }
        }
    }

    pub async fn submit_contact(
        &self,
        flow: &mut ContactFlow,
    ) -> Result<SubmitOutcome, FlowError> {
        flow.prepare_submission()?;

        if flow.is_bot() {
            info!("discarding contact request with honeypot filled");
            return Ok(SubmitOutcome::Discarded);
        }

        let submission = FormSubmission::contact(flow);
        match self.transport.submit(&submission).await {
            Ok(()) => {
                let topic = flow.draft().topic.trim().to_string();
                flow.complete();
                info!(%topic, "contact request delivered");
                self.track(AnalyticsEvent::contact_submit(&topic));
                Ok(SubmitOutcome::Delivered)
            }
            Err(err) => {
                flow.record_submit_failure(CONTACT_FAILED_MESSAGE);
                warn!(error = %err, "contact request failed");
                Err(FlowError::Transport(err))
            }
        }
    }

    pub async fn submit_unsubscribe(&self, request: &UnsubscribeRequest) -> Result<(), FlowError> {
        request.validate().map_err(FlowError::Invalid)?;
        let submission = FormSubmission::unsubscribe(request);
        self.transport.submit(&submission).await.map_err(|err| {
            warn!(error = %err, "unsubscribe request failed");
            FlowError::Transport(err)
        })?;
        info!("unsubscribe request delivered");
        Ok(())
    }

    fn track(&self, event: AnalyticsEvent) {
        if let Err(err) = self.analytics.track(event) {
            warn!(target: ANALYTICS_TARGET, error = %err, "analytics event dropped");
        }
    }
}
