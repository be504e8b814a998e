//! Privacy policy and terms of use, kept as structured copy so both pages
//! share one layout.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalDocument {
    pub title: &'static str,
    pub summary: &'static str,
    pub sections: &'static [LegalSection],
}

pub fn privacy_policy() -> &'static LegalDocument {
    &PRIVACY
}

pub fn terms_of_use() -> &'static LegalDocument {
    &TERMS
}

static PRIVACY: LegalDocument = LegalDocument {
    title: "Privacy Policy",
    summary: "Wycombe Local Pros operates a Lead Generation Service. This policy explains what personal data we collect when you request a quote or contact us, and what we do with it.",
    sections: &[
        LegalSection {
            heading: "1. Information We Collect",
            paragraphs: &[
                "We collect the following types of personal data when you use our Quote Request forms or Contact forms:",
                "Identity Data: first name and last name.",
                "Contact Data: email address, telephone number, and property address/postcode (essential for local service matching).",
                "Project Data: details about the service you require, urgency, and specific job descriptions.",
                "Technical Data: IP address, browser type, and usage data collected via essential cookies to ensure site performance and security.",
            ],
        },
        LegalSection {
            heading: "2. How We Use Your Information",
            paragraphs: &[
                "We use your data strictly under the lawful bases of Contractual Necessity (to fulfil your request) and Legitimate Interests (to operate our business).",
                "Specifically, we use it to match your service request with suitable local professionals in our network, transmit your Quote Request details to up to 3 vetted contractors, communicate with you regarding the status of your request, improve our website, and comply with legal obligations and prevent fraud.",
            ],
        },
        LegalSection {
            heading: "3. Sharing Your Information (Core Business Function)",
            paragraphs: &[
                "By submitting a quote request, you consent to us sharing your personal data with third parties.",
                "Service Providers (Contractors): we send your name, phone number, email, and job details to independent tradespeople within the High Wycombe area so they can contact you to provide the service you requested.",
                "Technical Service Providers: we use trusted third-party vendors for website hosting, form processing, and email delivery.",
                "We do not sell your data to marketing agencies or unrelated third parties.",
            ],
        },
        LegalSection {
            heading: "4. Data Security",
            paragraphs: &[
                "All form submissions are transmitted over encrypted connections and access to submitted requests is limited to staff who need it.",
            ],
        },
        LegalSection {
            heading: "5. Data Retention",
            paragraphs: &[
                "We keep quote and contact requests only as long as needed to fulfil them and to meet legal or accounting requirements.",
            ],
        },
        LegalSection {
            heading: "6. Your Legal Rights",
            paragraphs: &[
                "Under the UK General Data Protection Regulation (UK GDPR), you may request access to, correction of, or erasure of your personal data, object to processing, or request restriction of processing.",
                "To exercise any of these rights, please contact us at support@wycombelocalpros.co.uk.",
            ],
        },
        LegalSection {
            heading: "7. Third-Party Links",
            paragraphs: &[
                "Our site may link to contractor or partner websites. We are not responsible for their privacy practices.",
            ],
        },
        LegalSection {
            heading: "8. Contact Us",
            paragraphs: &["Email: support@wycombelocalpros.co.uk"],
        },
    ],
};

static TERMS: LegalDocument = LegalDocument {
    title: "Terms of Use",
    summary: "Wycombe Local Pros is a referral service connecting homeowners in High Wycombe with independent tradespeople. Please read these terms before using the site.",
    sections: &[
        LegalSection {
            heading: "1. Acceptance of Terms",
            paragraphs: &[
                "By accessing the site or submitting a form you agree to be bound by these Terms of Use.",
            ],
        },
        LegalSection {
            heading: "2. Description of Service",
            paragraphs: &[
                "We pass your request to independent contractors in our network who may contact you with a quote. We do not carry out any work ourselves.",
            ],
        },
        LegalSection {
            heading: "3. Relationship Between Parties",
            paragraphs: &[
                "No Contract for Work: Wycombe Local Pros is not a party to any agreement for work, services, or materials. Any contract for services is formed directly and exclusively between You and the Contractor.",
                "There is no partnership, joint venture, employee-employer, or franchiser-franchisee relationship between Wycombe Local Pros and any Contractor.",
                "No Guarantee: while we endeavour to partner with reputable, vetted professionals, we do not guarantee the quality, safety, or legality of the work performed, nor the truth or accuracy of Contractor listings.",
            ],
        },
        LegalSection {
            heading: "4. Limitation of Liability",
            paragraphs: &[
                "Please read this section carefully. We are not liable for indirect, incidental, special, consequential, or punitive damages.",
                "We are not liable for damages resulting from the conduct of any Contractor, including poor workmanship, property damage, theft, delay, or failure to complete work, nor for personal injury or emotional distress arising from your interactions with Contractors.",
            ],
        },
        LegalSection {
            heading: "5. User Obligations",
            paragraphs: &[
                "You agree to provide accurate, current, and complete information in the Quote Request forms, to use the Site only for genuine inquiries for home improvement services, and to treat Contractors with respect and courtesy.",
            ],
        },
        LegalSection {
            heading: "6. Intellectual Property",
            paragraphs: &[
                "All site content, branding, and cost guides remain the property of Wycombe Local Pros.",
            ],
        },
        LegalSection {
            heading: "7. Changes to Terms",
            paragraphs: &[
                "We may update these terms from time to time. Continued use of the site means you accept the revised terms.",
            ],
        },
        LegalSection {
            heading: "8. Governing Law",
            paragraphs: &[
                "These terms are governed by the laws of England and Wales.",
                "Questions regarding these Terms? Contact us at support@wycombelocalpros.co.uk.",
            ],
        },
    ],
};
