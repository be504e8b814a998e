//! Four-stage quote request flow: postcode, job details, contact details,
//! confirmation. Advancing is gated on the current stage's fields; moving
//! back keeps everything already entered.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::{Field, FieldErrors, QuoteRequestDraft};
use super::error::FlowError;
use super::validation::{
    validate_choice, validate_email, validate_min_length, validate_phone, validate_postcode,
    ValidationError,
};
use crate::content::ServiceListing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStage {
    Postcode,
    Details,
    Contact,
    Confirmed,
}

impl QuoteStage {
    pub fn as_str(self) -> &'static str {
        match self {
            QuoteStage::Postcode => "postcode",
            QuoteStage::Details => "details",
            QuoteStage::Contact => "contact",
            QuoteStage::Confirmed => "confirmed",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "postcode" => Some(QuoteStage::Postcode),
            "details" => Some(QuoteStage::Details),
            "contact" => Some(QuoteStage::Contact),
            "confirmed" => Some(QuoteStage::Confirmed),
            _ => None,
        }
    }

    /// One-based position shown in the progress indicator.
    pub fn step(self) -> u8 {
        match self {
            QuoteStage::Postcode => 1,
            QuoteStage::Details => 2,
            QuoteStage::Contact => 3,
            QuoteStage::Confirmed => 4,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            QuoteStage::Details => Some(QuoteStage::Postcode),
            QuoteStage::Contact => Some(QuoteStage::Details),
            QuoteStage::Postcode | QuoteStage::Confirmed => None,
        }
    }
}

impl fmt::Display for QuoteStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The service a quote is being requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteTarget {
    pub service_id: String,
    pub service_name: String,
    pub subtypes: Vec<String>,
}

impl QuoteTarget {
    pub fn from_listing(listing: &ServiceListing) -> Self {
        Self {
            service_id: listing.id().to_string(),
            service_name: listing.service_name().to_string(),
            subtypes: listing.subtypes.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Subtype recorded when the service offers no specific job types.
    pub fn generic_subtype(&self) -> String {
        format!("General {}", self.service_name)
    }
}

const URGENCY_REQUIRED: &str = "Please select when you need this done";
const SUBTYPE_REQUIRED: &str = "Please select a service type";

#[derive(Debug, Clone)]
pub struct QuoteFlow {
    target: QuoteTarget,
    region_prefix: String,
    stage: QuoteStage,
    draft: QuoteRequestDraft,
    errors: FieldErrors,
    submit_error: Option<String>,
}

impl QuoteFlow {
    /// Starts a fresh draft at the postcode stage.
    pub fn new(target: QuoteTarget, region_prefix: impl Into<String>) -> Self {
        Self::resume(
            target,
            region_prefix,
            QuoteStage::Postcode,
            QuoteRequestDraft::default(),
        )
    }

    /// Rebuilds a flow from a draft carried between requests.
    pub fn resume(
        target: QuoteTarget,
        region_prefix: impl Into<String>,
        stage: QuoteStage,
        draft: QuoteRequestDraft,
    ) -> Self {
        Self {
            target,
            region_prefix: region_prefix.into(),
            stage,
            draft,
            errors: FieldErrors::new(),
            submit_error: None,
        }
    }

    pub fn stage(&self) -> QuoteStage {
        self.stage
    }

    pub fn target(&self) -> &QuoteTarget {
        &self.target
    }

    pub fn draft(&self) -> &QuoteRequestDraft {
        &self.draft
    }

    /// Field edits are only accepted before confirmation.
    pub fn draft_mut(&mut self) -> Option<&mut QuoteRequestDraft> {
        if self.stage == QuoteStage::Confirmed {
            None
        } else {
            Some(&mut self.draft)
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn region_prefix(&self) -> &str {
        &self.region_prefix
    }

    pub fn is_confirmed(&self) -> bool {
        self.stage == QuoteStage::Confirmed
    }

    /// Subject line the form backend files the request under.
    pub fn subject(&self) -> String {
        format!(
            "Quote Request for {} in {}",
            self.target.service_name,
            self.draft.postcode.trim()
        )
    }

    pub fn confirmation_postcode(&self) -> String {
        self.draft.postcode.trim().to_uppercase()
    }

    pub(crate) fn is_bot(&self) -> bool {
        !self.draft.bot_field.trim().is_empty()
    }

    /// Checks one stage's fields against the current draft.
    pub fn validate_stage(&self, stage: QuoteStage) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        match stage {
            QuoteStage::Postcode => {
                errors.check(
                    Field::Postcode,
                    validate_postcode(&self.draft.postcode, &self.region_prefix),
                );
            }
            QuoteStage::Details => {
                if self.target.subtypes.is_empty() {
                    let generic = self.target.generic_subtype();
                    errors.check(
                        Field::ServiceType,
                        validate_choice(
                            &self.draft.service_type,
                            [generic.as_str()],
                            SUBTYPE_REQUIRED,
                        ),
                    );
                } else {
                    errors.check(
                        Field::ServiceType,
                        validate_choice(
                            &self.draft.service_type,
                            self.target.subtypes.iter().map(String::as_str),
                            SUBTYPE_REQUIRED,
                        ),
                    );
                }
                if self.draft.urgency.is_none() {
                    errors.check(
                        Field::Urgency,
                        Err(ValidationError::Unselected(URGENCY_REQUIRED)),
                    );
                }
            }
            QuoteStage::Contact => {
                errors.check(
                    Field::Name,
                    validate_min_length(&self.draft.name, "Name", 2),
                );
                errors.check(Field::Email, validate_email(&self.draft.email));
                errors.check(Field::Phone, validate_phone(&self.draft.phone));
            }
            QuoteStage::Confirmed => {}
        }
        errors.into_result()
    }

    /// Moves from `Postcode` to `Details` or from `Details` to `Contact` when
    /// the current stage validates. Leaving `Contact` requires a submission.
    pub fn advance(&mut self) -> Result<QuoteStage, FlowError> {
        let next = match self.stage {
            QuoteStage::Postcode => QuoteStage::Details,
            QuoteStage::Details => QuoteStage::Contact,
            stage @ (QuoteStage::Contact | QuoteStage::Confirmed) => {
                return Err(FlowError::WrongStage {
                    stage: stage.as_str(),
                    action: "advance",
                });
            }
        };

        if self.stage == QuoteStage::Details {
            self.assign_generic_subtype();
        }

        match self.validate_stage(self.stage) {
            Ok(()) => {
                self.errors = FieldErrors::new();
                self.submit_error = None;
                self.stage = next;
                Ok(next)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(FlowError::Invalid(errors))
            }
        }
    }

    /// Steps back one stage, keeping every value entered so far.
    pub fn back(&mut self) -> QuoteStage {
        if let Some(previous) = self.stage.previous() {
            self.stage = previous;
            self.errors = FieldErrors::new();
            self.submit_error = None;
        }
        self.stage
    }

    /// Validates every stage before the draft may leave the process. On
    /// failure the flow rewinds to the earliest stage that no longer passes.
    pub(crate) fn prepare_submission(&mut self) -> Result<(), FlowError> {
        if self.stage != QuoteStage::Contact {
            return Err(FlowError::WrongStage {
                stage: self.stage.as_str(),
                action: "submit",
            });
        }

        self.assign_generic_subtype();
        self.submit_error = None;

        for stage in [QuoteStage::Postcode, QuoteStage::Details, QuoteStage::Contact] {
            if let Err(errors) = self.validate_stage(stage) {
                self.stage = stage;
                self.errors = errors.clone();
                return Err(FlowError::Invalid(errors));
            }
        }

        self.errors = FieldErrors::new();
        Ok(())
    }

    pub(crate) fn confirm(&mut self) {
        self.stage = QuoteStage::Confirmed;
        self.errors = FieldErrors::new();
        self.submit_error = None;
    }

    pub(crate) fn record_submit_failure(&mut self, message: impl Into<String>) {
        self.submit_error = Some(message.into());
    }

    fn assign_generic_subtype(&mut self) {
        if self.target.subtypes.is_empty() {
            self.draft.service_type = self.target.generic_subtype();
        }
    }
}
