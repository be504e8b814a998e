use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use super::contact::{ContactFlow, UnsubscribeRequest};
use super::domain::FormName;
use super::quote::QuoteFlow;
use crate::config::FormsConfig;

/// A finished draft, flattened to the key/value pairs the form backend expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSubmission {
    form_name: FormName,
    fields: Vec<(&'static str, String)>,
}

impl FormSubmission {
    pub fn new(form_name: FormName) -> Self {
        Self {
            form_name,
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((key, value.into()));
        self
    }

    pub fn quote(flow: &QuoteFlow) -> Self {
        let draft = flow.draft();
        let urgency = draft.urgency.unwrap_or_default();
        Self::new(FormName::QuoteRequest)
            .with_field("subject", flow.subject())
            .with_field("postcode", draft.postcode.trim())
            .with_field("serviceType", draft.service_type.trim())
            .with_field("urgency", urgency.label())
            .with_field("description", draft.description.trim())
            .with_field("name", draft.name.trim())
            .with_field("email", draft.email.trim())
            .with_field("phone", draft.phone.trim())
    }

    pub fn contact(flow: &ContactFlow) -> Self {
        let draft = flow.draft();
        Self::new(FormName::Contact)
            .with_field("subject", flow.subject())
            .with_field("name", draft.name.trim())
            .with_field("email", draft.email.trim())
            .with_field("serviceType", draft.topic.trim())
            .with_field("message", draft.message.trim())
    }

    /// Sent through the contact form with filler values for its other fields.
    pub fn unsubscribe(request: &UnsubscribeRequest) -> Self {
        Self::new(FormName::Contact)
            .with_field("subject", "Unsubscribe Request")
            .with_field("email", request.email.trim())
            .with_field("name", "Unsubscribe User")
            .with_field(
                "message",
                "User requested to unsubscribe via website form.",
            )
            .with_field("serviceType", "other")
    }

    pub fn form_name(&self) -> FormName {
        self.form_name
    }

    /// Looks up a value by its wire key, including `form-name`.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.pairs()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }

    /// Wire pairs in submission order, starting with the form discriminator.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        std::iter::once(("form-name", self.form_name.as_str())).chain(
            self.fields
                .iter()
                .map(|(key, value)| (*key, value.as_str())),
        )
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("form endpoint answered with status {status}")]
    Rejected { status: u16 },
    #[error("form endpoint unreachable: {0}")]
    Network(String),
    #[error("form client could not be built: {0}")]
    Client(String),
}

/// Delivers submissions to the external form-processing endpoint.
#[async_trait]
pub trait FormTransport: Send + Sync {
    async fn submit(&self, submission: &FormSubmission) -> Result<(), TransportError>;
}

/// Posts form-encoded submissions over HTTP; only a 2xx status counts as delivered.
#[derive(Debug, Clone)]
pub struct HttpFormTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpFormTransport {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("local-pros/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| TransportError::Client(err.to_string()))?;
        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &FormsConfig) -> Result<Self, TransportError> {
        Self::new(config.endpoint.clone(), config.timeout)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl FormTransport for HttpFormTransport {
    async fn submit(&self, submission: &FormSubmission) -> Result<(), TransportError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, mime::APPLICATION_WWW_FORM_URLENCODED.as_ref())
            .body(submission.encode())
            .send()
            .await
            .map_err(|err| {
                warn!(form = %submission.form_name(), error = %err, "form endpoint unreachable");
                TransportError::Network(err.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            debug!(form = %submission.form_name(), %status, "submission delivered");
            Ok(())
        } else {
            warn!(form = %submission.form_name(), %status, "form endpoint rejected submission");
            Err(TransportError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
