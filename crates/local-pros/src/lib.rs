//! Domain library behind the Wycombe Local Pros referral site: static service
//! content, field validation, and the quote/contact request flows that hand
//! finished drafts to an external form-processing endpoint.

pub mod config;
pub mod consent;
pub mod content;
pub mod error;
pub mod forms;
pub mod telemetry;
