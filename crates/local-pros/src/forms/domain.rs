use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Discriminator the form backend uses to route a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormName {
    Contact,
    QuoteRequest,
}

impl FormName {
    pub fn as_str(self) -> &'static str {
        match self {
            FormName::Contact => "contact",
            FormName::QuoteRequest => "quote-request",
        }
    }
}

impl fmt::Display for FormName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every input the site's forms can flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Field {
    Postcode,
    ServiceType,
    Urgency,
    Description,
    Name,
    Email,
    Phone,
    Topic,
    Message,
}

impl Field {
    /// Name of the input carrying this field in submitted forms.
    pub fn form_key(self) -> &'static str {
        match self {
            Field::Postcode => "postcode",
            Field::ServiceType | Field::Topic => "serviceType",
            Field::Urgency => "urgency",
            Field::Description => "description",
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }
}

/// Field-scoped validation failures, at most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, field: Field, outcome: Result<(), ValidationError>) {
        if let Err(err) = outcome {
            self.0.entry(field).or_insert(err);
        }
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// Display text for a field's error, if any.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, err) in other.0 {
            self.0.entry(field).or_insert(err);
        }
    }

    pub(crate) fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, err) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.form_key(), err)?;
            first = false;
        }
        Ok(())
    }
}

/// How soon the customer needs the work done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Urgency {
    #[default]
    #[serde(rename = "As soon as possible")]
    AsSoonAsPossible,
    #[serde(rename = "Within 1 week")]
    WithinOneWeek,
    #[serde(rename = "Within 1 month")]
    WithinOneMonth,
    #[serde(rename = "Flexible")]
    Flexible,
}

impl Urgency {
    pub const ALL: [Urgency; 4] = [
        Urgency::AsSoonAsPossible,
        Urgency::WithinOneWeek,
        Urgency::WithinOneMonth,
        Urgency::Flexible,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Urgency::AsSoonAsPossible => "As soon as possible",
            Urgency::WithinOneWeek => "Within 1 week",
            Urgency::WithinOneMonth => "Within 1 month",
            Urgency::Flexible => "Flexible",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|urgency| urgency.label().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Field values gathered by the quote flow for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequestDraft {
    pub postcode: String,
    pub service_type: String,
    /// `None` when the visitor cleared or tampered with the choice.
    pub urgency: Option<Urgency>,
    pub description: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Honeypot input that people never see.
    pub bot_field: String,
}

impl Default for QuoteRequestDraft {
    fn default() -> Self {
        Self {
            postcode: String::new(),
            service_type: String::new(),
            urgency: Some(Urgency::default()),
            description: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            bot_field: String::new(),
        }
    }
}

/// Field values gathered by the contact form for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequestDraft {
    pub name: String,
    pub email: String,
    pub topic: String,
    pub message: String,
    pub bot_field: String,
}
