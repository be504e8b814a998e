use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Cost-guide page content for a single service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceGuide {
    pub id: &'static str,
    pub title: &'static str,
    pub hero_title: &'static str,
    pub cost_range: &'static str,
    pub cost_description: &'static str,
    pub factors: &'static [&'static str],
    pub info_box: &'static str,
    pub promise: &'static str,
    pub faqs: &'static [Faq],
}

const GUIDES: &[ServiceGuide] = &[
    ServiceGuide {
        id: "roofing",
        title: "Roofing",
        hero_title: "Prices & Costs for Roofing in High Wycombe",
        cost_range: "£250 - £6,000+",
        cost_description: "Minor repairs start from £150. Full replacements can range from £5,000 to £12,000 depending on materials and roof size.",
        factors: &[
            "Type of roof (Tile, Slate, Flat)",
            "Accessibility",
            "Extent of damage",
            "Materials used",
        ],
        info_box: "Roofing costs in High Wycombe vary significantly based on the age of the property and the specific issue.",
        promise: "We connect you with pre-vetted local experts who specialise in expert roof repairs and maintenance.",
        faqs: &[Faq {
            question: "Do I need planning permission?",
            answer: "Usually not for standard replacements, but conservation areas in Wycombe may have restrictions.",
        }],
    },
    ServiceGuide {
        id: "plumbing",
        title: "Plumbing",
        hero_title: "Prices & Costs for Plumbing in High Wycombe",
        cost_range: "£80 - £450",
        cost_description: "Standard call-outs typically cost £80-£120 per hour. Boiler services are around £90.",
        factors: &[
            "Emergency vs Scheduled",
            "Parts required",
            "Accessibility",
            "System type",
        ],
        info_box: "Emergency plumbers often charge a premium for out-of-hours calls in the HP area.",
        promise: "Our network of Gas Safe registered engineers ensures safety and quality work for every plumbing job.",
        faqs: &[],
    },
    ServiceGuide {
        id: "electrical",
        title: "Electrical",
        hero_title: "Prices & Costs for Electricians in High Wycombe",
        cost_range: "£150 - £800",
        cost_description: "Minor work like adding a socket costs £100-£150. Consumer unit replacements average £500-£800.",
        factors: &[
            "Wiring condition",
            "Certification requirements",
            "Number of circuits",
            "Wall chasing",
        ],
        info_box: "Always ensure your electrician provides a Part P certificate for major electrical work.",
        promise: "Safety first. We connect you with NAPIT or NICEIC registered electricians.",
        faqs: &[],
    },
    ServiceGuide {
        id: "builders",
        title: "Builders",
        hero_title: "Prices & Costs for Building Work in High Wycombe",
        cost_range: "£1,500 - £50,000+",
        cost_description: "Structural wall removals often start from £1,500. Extensions typically cost between £1,800 and £2,500 per square metre in High Wycombe.",
        factors: &[
            "Structural complexity",
            "Materials",
            "Building control fees",
            "Ground conditions",
        ],
        info_box: "Large projects in Buckinghamshire often require planning permission and architect drawings before construction starts.",
        promise: "From small renovations to large extensions, we match you with reliable local builders who understand Wycombe property types.",
        faqs: &[
            Faq {
                question: "How long does an extension take?",
                answer: "A standard single-storey extension usually takes 8-12 weeks from foundations to finish.",
            },
            Faq {
                question: "Do you handle planning permission?",
                answer: "Most of our builders can recommend local architects or handle the submission of plans to Wycombe District Council.",
            },
        ],
    },
    ServiceGuide {
        id: "painters",
        title: "Painters & Decorators",
        hero_title: "Prices & Costs for Painting in High Wycombe",
        cost_range: "£250 - £3,500",
        cost_description: "Painting a single medium room (walls & ceiling) typically costs £250-£450. Full exterior painting for a 3-bed semi ranges from £1,500 to £2,800.",
        factors: &[
            "Surface preparation needed",
            "Paint quality",
            "Room height/accessibility",
            "Wallpaper stripping",
        ],
        info_box: "Preparation is 70% of a good paint job. High-quality trade paints used by pros will last much longer than DIY equivalents.",
        promise: "Transform your home with professional decorators who take pride in a flawless finish and clean workspace.",
        faqs: &[Faq {
            question: "Is paint included in the quote?",
            answer: "Usually, decorators will quote for labor and materials separately or provide a total price including high-quality trade paint.",
        }],
    },
    ServiceGuide {
        id: "flooring",
        title: "Flooring",
        hero_title: "Prices & Costs for Flooring in High Wycombe",
        cost_range: "£20 - £90 /sqm",
        cost_description: "Carpet fitting averages £15-£25 per sqm. High-end engineered wood or tiling can range from £60 to £120 per sqm including subfloor prep.",
        factors: &[
            "Subfloor condition",
            "Material type",
            "Room shape/waste",
            "Furniture removal",
        ],
        info_box: "Don't forget to factor in the cost of underlay and door trimming, which are often charged as extras.",
        promise: "Get the perfect finish underfoot. We connect you with local flooring specialists for carpet, wood, and tile.",
        faqs: &[Faq {
            question: "Can you install over existing flooring?",
            answer: "It depends on the material, but usually, old carpet or tiles must be removed to ensure a level and long-lasting finish.",
        }],
    },
    ServiceGuide {
        id: "cleaning",
        title: "Domestic Cleaning",
        hero_title: "Prices & Costs for House Cleaning in High Wycombe",
        cost_range: "£16 - £25 /hr",
        cost_description: "Regular weekly cleans typically range from £16 to £20 per hour.",
        factors: &[
            "Frequency",
            "Property size",
            "Pets",
            "Deep clean requirements",
        ],
        info_box: "Independent cleaners in Wycombe often use your supplies to keep costs down.",
        promise: "Enjoy a spotless home with trusted, vetted local cleaners.",
        faqs: &[],
    },
    ServiceGuide {
        id: "garden",
        title: "Garden Maintenance",
        hero_title: "Prices & Costs for Gardeners in High Wycombe",
        cost_range: "£20 - £45 /hr",
        cost_description: "Maintenance like lawn mowing starts from £20/hr. Tree work is quoted as a fixed price.",
        factors: &["Garden size", "Condition", "Waste removal", "Tools needed"],
        info_box: "Waste removal is often a key cost factor for gardening jobs in Wycombe.",
        promise: "From regular lawn care to full clearances, find local gardeners.",
        faqs: &[],
    },
    ServiceGuide {
        id: "window",
        title: "Window Cleaning",
        hero_title: "Prices & Costs for Window Cleaning in High Wycombe",
        cost_range: "£15 - £60",
        cost_description: "External clean for a 3-bed semi-detached costs £15-£25.",
        factors: &[
            "Number of windows",
            "Accessibility",
            "Conservatories",
            "Frequency",
        ],
        info_box: "Most modern cleaners use the \"Reach and Wash\" pure water system.",
        promise: "Get sparkling windows with reliable local window cleaners.",
        faqs: &[],
    },
    ServiceGuide {
        id: "locksmith",
        title: "Locksmith Services",
        hero_title: "Prices & Costs for Locksmiths in High Wycombe",
        cost_range: "£75 - £200",
        cost_description: "Emergency call-outs (gain entry) typically cost £85-£120. Standard Euro cylinder lock replacements start from £75 including parts.",
        factors: &[
            "Time of day (Emergency/Out of hours)",
            "Lock standard (BS3621)",
            "Number of locks",
            "Door type (uPVC vs Timber)",
        ],
        info_box: "Always check if your insurance policy requires British Standard (BS3621) locks on external doors.",
        promise: "Regain access and secure your home with vetted, local locksmiths available 24/7.",
        faqs: &[
            Faq {
                question: "Is there a call-out charge?",
                answer: "Most emergency locksmiths charge a call-out fee, especially for out-of-hours work. Ask for a total estimate before booking.",
            },
            Faq {
                question: "Do you repair uPVC door locks?",
                answer: "Yes, our specialists deal with jammed mechanisms and gearboxes on uPVC doors daily.",
            },
        ],
    },
];

pub fn guide(id: &str) -> Option<&'static ServiceGuide> {
    GUIDES.iter().find(|guide| guide.id == id)
}
