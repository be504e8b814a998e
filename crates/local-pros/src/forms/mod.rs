//! Lead capture: field validation, the staged quote request, the contact
//! request, and delivery of finished drafts to the form-processing endpoint.

pub mod analytics;
pub mod contact;
pub mod domain;
pub mod error;
pub mod quote;
pub mod service;
pub mod transport;
pub mod validation;

#[cfg(test)]
mod tests;

pub use analytics::{AnalyticsError, AnalyticsEvent, AnalyticsSink, HttpAnalyticsSink};
pub use contact::{ContactFlow, ContactStatus, UnsubscribeRequest, PREFILLED_TOPIC};
pub use domain::{ContactRequestDraft, Field, FieldErrors, FormName, QuoteRequestDraft, Urgency};
pub use error::FlowError;
pub use quote::{QuoteFlow, QuoteStage, QuoteTarget};
pub use service::{
    FlowSettings, FormService, SubmitOutcome, CONTACT_FAILED_MESSAGE, QUOTE_NETWORK_MESSAGE,
    QUOTE_REJECTED_MESSAGE,
};
pub use transport::{FormSubmission, FormTransport, HttpFormTransport, TransportError};
pub use validation::{
    is_uk_postcode, validate_email, validate_phone, validate_postcode, ValidationError,
};
