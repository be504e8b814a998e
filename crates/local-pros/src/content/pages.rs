use serde::Serialize;

use super::catalog::all_services;

pub const SUPPORT_EMAIL: &str = "support@wycombelocalpros.co.uk";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

pub fn testimonials() -> &'static [Testimonial] {
    &[
        Testimonial {
            name: "Sarah M.",
            location: "Downley - HP13 • Roofing",
            text: "Sorted the slipped slate straight away. Immense relief.",
            rating: 5,
        },
        Testimonial {
            name: "James T.",
            location: "Hazlemere - HP15 • Plumbing",
            text: "Fixed the boiler for a fair price too.",
            rating: 5,
        },
        Testimonial {
            name: "Emily R.",
            location: "Flackwell Heath - HP10 • Cleaning",
            text: "The kitchen hasn't looked this clean in years! Highly recommend.",
            rating: 5,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HowItWorksStep {
    pub title: &'static str,
    pub detail: &'static str,
}

pub fn how_it_works() -> &'static [HowItWorksStep] {
    &[
        HowItWorksStep {
            title: "1. Tell us what you need",
            detail: "Pick a service, enter your postcode, and describe the job in a few words.",
        },
        HowItWorksStep {
            title: "2. We find a Pro",
            detail: "We match your request with up to three vetted tradespeople in High Wycombe.",
        },
        HowItWorksStep {
            title: "3. They contact you",
            detail: "Your matched pros get in touch by phone or email with a free quote.",
        },
    ]
}

/// What choosing a support topic does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportAction {
    /// Open the contact form pre-associated with the given subject.
    Subject(&'static str),
    /// Open the email-only unsubscribe form.
    Unsubscribe,
    /// Send the visitor back to the home page to start a quote.
    RedirectHome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportTopic {
    pub id: &'static str,
    pub label: &'static str,
    pub action: SupportAction,
}

pub fn support_topics() -> &'static [SupportTopic] {
    &[
        SupportTopic {
            id: "unsubscribe",
            label: "Unsubscribe",
            action: SupportAction::Unsubscribe,
        },
        SupportTopic {
            id: "estimate",
            label: "Cost Estimate",
            action: SupportAction::RedirectHome,
        },
        SupportTopic {
            id: "contractor",
            label: "Contractor Inquiries",
            action: SupportAction::Subject("Contractor Partnership"),
        },
        SupportTopic {
            id: "general",
            label: "General Inquiry / Feedback",
            action: SupportAction::Subject("General Inquiry"),
        },
    ]
}

pub fn support_topic(id: &str) -> Option<&'static SupportTopic> {
    support_topics().iter().find(|topic| topic.id == id)
}

/// An option in the contact form's topic selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactTopic {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn contact_topics() -> Vec<ContactTopic> {
    let mut topics: Vec<ContactTopic> = all_services()
        .iter()
        .map(|service| ContactTopic {
            value: service.id,
            label: service.title,
        })
        .collect();
    topics.extend([
        ContactTopic {
            value: "other",
            label: "Other / General Inquiry",
        },
        ContactTopic {
            value: "contractor",
            label: "Contractor Partnership",
        },
        ContactTopic {
            value: "billing",
            label: "Billing / Admin",
        },
    ]);
    topics
}

/// Example text shown in the quote form's description box.
pub fn description_placeholder(service_name: &str) -> &'static str {
    let name = service_name.to_lowercase();
    if name.contains("roof") {
        "E.g., Replacing 5 tiles on a pitched roof..."
    } else if name.contains("plumb") {
        "E.g., Leaking tap in kitchen..."
    } else if name.contains("electric") {
        "E.g., Install new sockets in living room..."
    } else if name.contains("clean") && !name.contains("window") {
        "E.g., Weekly clean for 3 bed house..."
    } else if name.contains("garden") {
        "E.g., Lawn mowing and hedge trimming..."
    } else if name.contains("window") {
        "E.g., External clean for semi-detached..."
    } else {
        "Describe your project..."
    }
}
