use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use url::Url;

use crate::config::AnalyticsConfig;
use crate::telemetry::ANALYTICS_TARGET;

/// Named event with string properties, as recorded by the analytics collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub properties: BTreeMap<String, String>,
    pub occurred_at: DateTime<Utc>,
}

impl AnalyticsEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: BTreeMap::new(),
            occurred_at: Utc::now(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn quote_request(service: &str, postcode: &str) -> Self {
        Self::new("quote_request")
            .with("service", service)
            .with("postcode", postcode)
    }

    pub fn contact_submit(topic: &str) -> Self {
        Self::new("form_submit")
            .with("form_name", "contact_form")
            .with("topic", topic)
    }
}

/// Outbound analytics hook. Delivery is best effort; callers never fail on it.
pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("analytics collector unavailable: {0}")]
    Unavailable(String),
}

/// Logs every event on the `analytics` target and, when a collector URL is
/// configured, forwards it as JSON on a background task.
#[derive(Debug, Clone)]
pub struct HttpAnalyticsSink {
    client: reqwest::Client,
    endpoint: Option<Url>,
}

impl HttpAnalyticsSink {
    pub fn new(endpoint: Option<Url>) -> Result<Self, AnalyticsError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|err| AnalyticsError::Unavailable(err.to_string()))?;
        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &AnalyticsConfig) -> Result<Self, AnalyticsError> {
        Self::new(config.endpoint.clone())
    }

    pub fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }
}

impl AnalyticsSink for HttpAnalyticsSink {
    fn track(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        info!(
            target: ANALYTICS_TARGET,
            event = %event.name,
            properties = ?event.properties,
            "event tracked"
        );

        let Some(endpoint) = self.endpoint.clone() else {
            return Ok(());
        };

        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|err| AnalyticsError::Unavailable(err.to_string()))?;
        let client = self.client.clone();
        runtime.spawn(async move {
            let outcome = client.post(endpoint).json(&event).send().await;
            match outcome {
                Ok(response) if response.status().is_success() => {}
                Ok(response) => {
                    warn!(target: ANALYTICS_TARGET, status = %response.status(), "collector rejected event")
                }
                Err(err) => warn!(target: ANALYTICS_TARGET, error = %err, "collector unreachable"),
            }
        });
        Ok(())
    }
}
