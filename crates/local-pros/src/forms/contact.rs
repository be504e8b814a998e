use serde::{Deserialize, Serialize};

use super::domain::{ContactRequestDraft, Field, FieldErrors};
use super::error::FlowError;
use super::validation::{validate_choice, validate_email, validate_min_length, ValidationError};
use crate::content::contact_topics;

/// Topic assigned when the form is opened for a preset subject.
pub const PREFILLED_TOPIC: &str = "other";

const MESSAGE_MIN_CHARS: usize = 10;

fn check_email(raw: &str) -> Result<(), ValidationError> {
    validate_email(raw).map_err(|_| ValidationError::ContactEmailFormat)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    Editing,
    Submitted,
}

/// Single-stage contact request, optionally tied to a support subject.
#[derive(Debug, Clone)]
pub struct ContactFlow {
    draft: ContactRequestDraft,
    prefilled_subject: Option<String>,
    status: ContactStatus,
    errors: FieldErrors,
    submit_error: Option<String>,
}

impl Default for ContactFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFlow {
    pub fn new() -> Self {
        Self::resume(ContactRequestDraft::default(), None)
    }

    /// Opens the form pre-associated with a subject chosen elsewhere.
    pub fn with_subject(subject: impl Into<String>) -> Self {
        let draft = ContactRequestDraft {
            topic: PREFILLED_TOPIC.to_string(),
            ..ContactRequestDraft::default()
        };
        Self::resume(draft, Some(subject.into()))
    }

    pub fn resume(draft: ContactRequestDraft, prefilled_subject: Option<String>) -> Self {
        let prefilled_subject = prefilled_subject
            .map(|subject| subject.trim().to_string())
            .filter(|subject| !subject.is_empty());
        Self {
            draft,
            prefilled_subject,
            status: ContactStatus::Editing,
            errors: FieldErrors::new(),
            submit_error: None,
        }
    }

    pub fn draft(&self) -> &ContactRequestDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ContactRequestDraft {
        &mut self.draft
    }

    pub fn prefilled_subject(&self) -> Option<&str> {
        self.prefilled_subject.as_deref()
    }

    pub fn status(&self) -> ContactStatus {
        self.status
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn subject(&self) -> String {
        let name = self.draft.name.trim();
        match &self.prefilled_subject {
            Some(subject) => format!("{subject} from {name}"),
            None => format!("New Website Inquiry from {name}"),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let topics = contact_topics();
        let mut errors = FieldErrors::new();
        errors.check(Field::Name, validate_min_length(&self.draft.name, "Name", 2));
        errors.check(Field::Email, check_email(&self.draft.email));
        errors.check(
            Field::Topic,
            validate_choice(
                &self.draft.topic,
                topics.iter().map(|topic| topic.value),
                "Please select a topic",
            ),
        );
        errors.check(
            Field::Message,
            validate_min_length(&self.draft.message, "Message", MESSAGE_MIN_CHARS).map_err(|_| {
                ValidationError::MessageTooShort {
                    min: MESSAGE_MIN_CHARS,
                }
            }),
        );
        errors.into_result()
    }

    pub(crate) fn is_bot(&self) -> bool {
        !self.draft.bot_field.trim().is_empty()
    }

    pub(crate) fn prepare_submission(&mut self) -> Result<(), FlowError> {
        if self.status == ContactStatus::Submitted {
            return Err(FlowError::WrongStage {
                stage: "submitted",
                action: "submit",
            });
        }
        self.submit_error = None;
        match self.validate() {
            Ok(()) => {
                self.errors = FieldErrors::new();
                Ok(())
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(FlowError::Invalid(errors))
            }
        }
    }

    /// Marks the request delivered and clears the entered values.
    pub(crate) fn complete(&mut self) {
        self.status = ContactStatus::Submitted;
        self.draft = ContactRequestDraft {
            topic: if self.prefilled_subject.is_some() {
                PREFILLED_TOPIC.to_string()
            } else {
                String::new()
            },
            ..ContactRequestDraft::default()
        };
        self.errors = FieldErrors::new();
    }

    pub(crate) fn record_submit_failure(&mut self, message: impl Into<String>) {
        self.submit_error = Some(message.into());
    }
}

/// Email-only request to leave the mailing list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsubscribeRequest {
    pub email: String,
}

impl UnsubscribeRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(Field::Email, check_email(&self.email));
        errors.into_result()
    }
}
