use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use chrono::Datelike;
use local_pros::consent::ConsentState;
use local_pros::content::legal::LegalDocument;
use local_pros::content::{
    self, Faq, HowItWorksStep, ServiceCategory, ServiceListing, Testimonial, SUPPORT_EMAIL,
};
use local_pros::error::AppError;
use local_pros::forms::{
    ContactFlow, ContactStatus, Field, FieldErrors, QuoteFlow, Urgency,
};

const SITE_NAME: &str = "Wycombe Local Pros";
/// Prefix whose area has its own named hint.
const HOME_REGION: &str = "HP";
const HOME_DESCRIPTION: &str = "Find trusted local tradespeople in High Wycombe. Get free quotes from vetted professionals for roofing, plumbing, electrical, and cleaning services in HP postcodes.";
pub(crate) const UNSUBSCRIBE_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

pub(crate) fn render<T: Template>(template: &T, status: StatusCode) -> Result<Response, AppError> {
    let body = template
        .render()
        .map_err(|err| AppError::Render(err.to_string()))?;
    Ok((status, Html(body)).into_response())
}

pub(crate) struct NavLink {
    pub(crate) href: String,
    pub(crate) label: &'static str,
}

/// Header, footer, and consent banner shared by every page.
pub(crate) struct Chrome {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) solid_header: bool,
    pub(crate) show_consent: bool,
    pub(crate) return_to: String,
    pub(crate) year: i32,
    pub(crate) popular_links: Vec<NavLink>,
    pub(crate) other_links: Vec<NavLink>,
    pub(crate) support_email: &'static str,
}

impl Chrome {
    pub(crate) fn new(title: &str, description: &str, path: &str, consent: ConsentState) -> Self {
        let link = |service: &'static ServiceCategory| NavLink {
            href: service_href(service.id),
            label: service.title,
        };
        Self {
            title: format!("{title} | {SITE_NAME}"),
            description: description.to_string(),
            solid_header: false,
            show_consent: consent.shows_prompt(),
            return_to: path.to_string(),
            year: chrono::Local::now().year(),
            popular_links: content::popular_services().map(link).collect(),
            other_links: content::other_services().map(link).collect(),
            support_email: SUPPORT_EMAIL,
        }
    }

    /// Pages without a hero image get an opaque header.
    pub(crate) fn solid(mut self) -> Self {
        self.solid_header = true;
        self
    }
}

fn service_href(id: &str) -> String {
    format!("/service/{id}")
}

#[derive(Template)]
#[template(path = "home.html")]
pub(crate) struct HomeTemplate {
    pub(crate) chrome: Chrome,
    pub(crate) all: Vec<&'static ServiceCategory>,
    pub(crate) popular: Vec<&'static ServiceCategory>,
    pub(crate) others: Vec<&'static ServiceCategory>,
    pub(crate) steps: Vec<&'static HowItWorksStep>,
    pub(crate) testimonials: Vec<&'static Testimonial>,
}

impl HomeTemplate {
    pub(crate) fn new(consent: ConsentState) -> Self {
        Self {
            chrome: Chrome::new(
                "Trusted Tradesmen in High Wycombe",
                HOME_DESCRIPTION,
                "/",
                consent,
            ),
            all: content::all_services().iter().collect(),
            popular: content::popular_services().collect(),
            others: content::other_services().collect(),
            steps: content::how_it_works().iter().collect(),
            testimonials: content::testimonials().iter().collect(),
        }
    }
}

pub(crate) struct LegalSectionView {
    pub(crate) heading: &'static str,
    pub(crate) paragraphs: Vec<&'static str>,
}

#[derive(Template)]
#[template(path = "legal.html")]
pub(crate) struct LegalTemplate {
    pub(crate) chrome: Chrome,
    pub(crate) heading: &'static str,
    pub(crate) summary: &'static str,
    pub(crate) sections: Vec<LegalSectionView>,
}

impl LegalTemplate {
    pub(crate) fn new(document: &'static LegalDocument, path: &str, consent: ConsentState) -> Self {
        Self {
            chrome: Chrome::new(document.title, document.summary, path, consent).solid(),
            heading: document.title,
            summary: document.summary,
            sections: document
                .sections
                .iter()
                .map(|section| LegalSectionView {
                    heading: section.heading,
                    paragraphs: section.paragraphs.to_vec(),
                })
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub(crate) struct NotFoundTemplate {
    pub(crate) chrome: Chrome,
}

impl NotFoundTemplate {
    pub(crate) fn new(path: &str, consent: ConsentState) -> Self {
        Self {
            chrome: Chrome::new("Service Not Found", HOME_DESCRIPTION, path, consent).solid(),
        }
    }
}

pub(crate) struct ChoiceView {
    pub(crate) value: String,
    pub(crate) label: String,
    pub(crate) selected: bool,
}

fn message(errors: &FieldErrors, field: Field) -> String {
    errors.message(field).unwrap_or_default()
}

/// Render state of the quote widget, with every draft value carried forward
/// in hidden inputs on the stages that do not show it.
pub(crate) struct QuoteView {
    pub(crate) action: String,
    pub(crate) stage: &'static str,
    pub(crate) step: u8,
    pub(crate) service_name: String,
    pub(crate) region_prefix: String,
    pub(crate) area_hint: String,
    pub(crate) postcode: String,
    pub(crate) service_type: String,
    pub(crate) urgency: String,
    pub(crate) urgency_lower: String,
    pub(crate) description: String,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) has_subtypes: bool,
    pub(crate) subtypes: Vec<ChoiceView>,
    pub(crate) urgencies: Vec<ChoiceView>,
    pub(crate) placeholder: &'static str,
    pub(crate) postcode_error: String,
    pub(crate) service_type_error: String,
    pub(crate) urgency_error: String,
    pub(crate) name_error: String,
    pub(crate) email_error: String,
    pub(crate) phone_error: String,
    pub(crate) submit_error: String,
    pub(crate) confirmation_postcode: String,
}

impl QuoteView {
    pub(crate) fn from_flow(flow: &QuoteFlow) -> Self {
        let target = flow.target();
        let draft = flow.draft();
        let errors = flow.errors();
        let urgency = draft.urgency.map(Urgency::label).unwrap_or_default();

        Self {
            action: format!("{}/quote", service_href(&target.service_id)),
            stage: flow.stage().as_str(),
            step: flow.stage().step(),
            service_name: target.service_name.clone(),
            region_prefix: flow.region_prefix().to_string(),
            area_hint: area_hint(flow.region_prefix()),
            postcode: draft.postcode.clone(),
            service_type: draft.service_type.clone(),
            urgency: urgency.to_string(),
            urgency_lower: urgency.to_lowercase(),
            description: draft.description.clone(),
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            has_subtypes: !target.subtypes.is_empty(),
            subtypes: target
                .subtypes
                .iter()
                .map(|subtype| ChoiceView {
                    value: subtype.clone(),
                    label: subtype.clone(),
                    selected: *subtype == draft.service_type,
                })
                .collect(),
            urgencies: Urgency::ALL
                .iter()
                .map(|option| ChoiceView {
                    value: option.label().to_string(),
                    label: option.label().to_string(),
                    selected: draft.urgency == Some(*option),
                })
                .collect(),
            placeholder: content::description_placeholder(&target.service_name),
            postcode_error: message(errors, Field::Postcode),
            service_type_error: message(errors, Field::ServiceType),
            urgency_error: message(errors, Field::Urgency),
            name_error: message(errors, Field::Name),
            email_error: message(errors, Field::Email),
            phone_error: message(errors, Field::Phone),
            submit_error: flow.submit_error().unwrap_or_default().to_string(),
            confirmation_postcode: flow.confirmation_postcode(),
        }
    }
}

/// Postcode-stage hint naming the serviced area.
fn area_hint(region_prefix: &str) -> String {
    if region_prefix.eq_ignore_ascii_case(HOME_REGION) {
        "We only serve High Wycombe (HP10-HP15).".to_string()
    } else {
        format!("We only serve {region_prefix} postcodes.")
    }
}

#[derive(Template)]
#[template(path = "service.html")]
pub(crate) struct ServiceTemplate {
    pub(crate) chrome: Chrome,
    pub(crate) category: &'static ServiceCategory,
    pub(crate) hero_title: &'static str,
    pub(crate) cost_range: &'static str,
    pub(crate) cost_description: &'static str,
    pub(crate) factors: Vec<&'static str>,
    pub(crate) info_box: &'static str,
    pub(crate) promise: &'static str,
    pub(crate) faqs: Vec<&'static Faq>,
    pub(crate) quote: QuoteView,
}

impl ServiceTemplate {
    pub(crate) fn new(listing: &ServiceListing, flow: &QuoteFlow, consent: ConsentState) -> Self {
        let guide = listing.guide;
        let path = service_href(listing.id());
        Self {
            chrome: Chrome::new(guide.hero_title, guide.cost_description, &path, consent),
            category: listing.category,
            hero_title: guide.hero_title,
            cost_range: guide.cost_range,
            cost_description: guide.cost_description,
            factors: guide.factors.to_vec(),
            info_box: guide.info_box,
            promise: guide.promise,
            faqs: guide.faqs.iter().collect(),
            quote: QuoteView::from_flow(flow),
        }
    }
}

pub(crate) struct TopicLink {
    pub(crate) href: String,
    pub(crate) label: &'static str,
    pub(crate) selected: bool,
}

/// What the support page shows under the topic grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SupportPanel {
    Prompt,
    Contact,
    Unsubscribe,
}

pub(crate) struct ContactView {
    pub(crate) heading: String,
    pub(crate) subject: String,
    pub(crate) topic_id: String,
    pub(crate) topics: Vec<ChoiceView>,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) message: String,
    pub(crate) message_placeholder: String,
    pub(crate) name_error: String,
    pub(crate) email_error: String,
    pub(crate) topic_error: String,
    pub(crate) message_error: String,
    pub(crate) submit_error: String,
    pub(crate) submitted: bool,
}

impl ContactView {
    pub(crate) fn from_flow(flow: &ContactFlow, topic_id: &str) -> Self {
        let draft = flow.draft();
        let errors = flow.errors();
        let subject = flow.prefilled_subject().unwrap_or_default().to_string();
        Self {
            heading: if subject.is_empty() {
                "Send us a message".to_string()
            } else {
                subject.clone()
            },
            message_placeholder: if subject.is_empty() {
                "Describe what you need help with...".to_string()
            } else {
                format!(
                    "Please provide details about your {}...",
                    subject.to_lowercase()
                )
            },
            subject,
            topic_id: topic_id.to_string(),
            topics: content::contact_topics()
                .into_iter()
                .map(|topic| ChoiceView {
                    value: topic.value.to_string(),
                    label: topic.label.to_string(),
                    selected: topic.value == draft.topic,
                })
                .collect(),
            name: draft.name.clone(),
            email: draft.email.clone(),
            message: draft.message.clone(),
            name_error: message(errors, Field::Name),
            email_error: message(errors, Field::Email),
            topic_error: message(errors, Field::Topic),
            message_error: message(errors, Field::Message),
            submit_error: flow.submit_error().unwrap_or_default().to_string(),
            submitted: flow.status() == ContactStatus::Submitted,
        }
    }
}

#[derive(Default)]
pub(crate) struct UnsubscribeView {
    pub(crate) email: String,
    pub(crate) email_error: String,
    pub(crate) submit_error: String,
    pub(crate) done: bool,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub(crate) struct ContactTemplate {
    pub(crate) chrome: Chrome,
    pub(crate) topics: Vec<TopicLink>,
    pub(crate) panel: SupportPanel,
    pub(crate) contact: ContactView,
    pub(crate) unsubscribe: UnsubscribeView,
}

impl ContactTemplate {
    pub(crate) fn new(
        selected: Option<&str>,
        panel: SupportPanel,
        contact: ContactView,
        unsubscribe: UnsubscribeView,
        consent: ConsentState,
    ) -> Self {
        Self {
            chrome: Chrome::new(
                "Contact Us",
                "Get in touch with the Wycombe Local Pros support team.",
                "/contact",
                consent,
            )
            .solid(),
            topics: content::support_topics()
                .iter()
                .map(|topic| TopicLink {
                    href: format!("/contact?topic={}", topic.id),
                    label: topic.label,
                    selected: selected == Some(topic.id),
                })
                .collect(),
            panel,
            contact,
            unsubscribe,
        }
    }
}
