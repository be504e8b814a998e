//! Read-only content backing the site: service categories, job subtypes,
//! cost guides, and the supporting copy for the home, support, and legal pages.

mod catalog;
mod guides;
pub mod legal;
mod pages;

use serde::Serialize;

pub use catalog::{all_services, other_services, popular_services, subtypes, ServiceCategory};
pub use guides::{guide, Faq, ServiceGuide};
pub use pages::{
    contact_topics, description_placeholder, how_it_works, support_topic, support_topics,
    testimonials, ContactTopic, HowItWorksStep, SupportAction, SupportTopic, Testimonial,
    SUPPORT_EMAIL,
};

/// Everything the site knows about one service, resolved from its identifier.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceListing {
    pub category: &'static ServiceCategory,
    pub subtypes: &'static [&'static str],
    pub guide: &'static ServiceGuide,
}

impl ServiceListing {
    pub fn id(&self) -> &'static str {
        self.category.id
    }

    /// Name used in quote copy and submission subjects.
    pub fn service_name(&self) -> &'static str {
        self.guide.title
    }
}

/// Resolves a service identifier, returning `None` for unknown services.
pub fn lookup(id: &str) -> Option<ServiceListing> {
    let category = all_services().iter().find(|category| category.id == id)?;
    let guide = guide(id)?;
    Some(ServiceListing {
        category,
        subtypes: subtypes(id),
        guide,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_resolves_to_a_listing() {
        for category in all_services() {
            let listing = lookup(category.id).expect("listing for category");
            assert_eq!(listing.id(), category.id);
            assert_eq!(listing.guide.id, category.id);
            assert!(!listing.guide.factors.is_empty());
        }
    }

    #[test]
    fn unknown_service_is_not_found() {
        assert!(lookup("chimney-sweep").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn plumbing_listing_uses_guide_title_for_quotes() {
        let listing = lookup("plumbing").expect("plumbing listed");
        assert_eq!(listing.service_name(), "Plumbing");
        assert_eq!(listing.category.title, "Plumbers");
        assert!(listing.category.popular);
        assert!(listing.subtypes.contains(&"Boiler Service / Repair"));
    }

    #[test]
    fn popular_and_other_services_partition_the_catalogue() {
        let popular = popular_services().count();
        let others = other_services().count();
        assert_eq!(popular, 3);
        assert_eq!(popular + others, all_services().len());
    }
}
