use serde::Serialize;

/// A service offered through the referral network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Icon identifier understood by the site stylesheet.
    pub icon: &'static str,
    pub image: &'static str,
    pub popular: bool,
}

const SERVICES: &[ServiceCategory] = &[
    ServiceCategory {
        id: "roofing",
        title: "Roofing",
        description: "Expert roof repairs, replacements, and maintenance.",
        icon: "home",
        image: "https://images.unsplash.com/photo-1632759145351-1d592919f522?auto=format&fit=crop&q=80&w=800",
        popular: true,
    },
    ServiceCategory {
        id: "plumbing",
        title: "Plumbers",
        description: "Emergency leaks, boiler servicing, and bathroom installs.",
        icon: "droplet",
        image: "https://images.unsplash.com/photo-1607472586893-edb57bdc0e39?auto=format&fit=crop&q=80&w=800",
        popular: true,
    },
    ServiceCategory {
        id: "electrical",
        title: "Electricians",
        description: "Safety inspections, rewiring, and lighting installation.",
        icon: "zap",
        image: "https://images.unsplash.com/photo-1621905251189-08b45d6a269e?auto=format&fit=crop&q=80&w=800",
        popular: true,
    },
    ServiceCategory {
        id: "builders",
        title: "Builders",
        description: "Extensions, wall removals, and structural renovations.",
        icon: "hammer",
        image: "https://images.unsplash.com/photo-1503387762-592deb58ef4e?auto=format&fit=crop&q=80&w=800",
        popular: false,
    },
    ServiceCategory {
        id: "painters",
        title: "Painters",
        description: "Interior and exterior decorating and wallpapering.",
        icon: "paintbrush",
        image: "https://images.unsplash.com/photo-1589939705384-5185137a7f0f?auto=format&fit=crop&q=80&w=800",
        popular: false,
    },
    ServiceCategory {
        id: "flooring",
        title: "Flooring",
        description: "Carpet, laminate, wood, and tile installations.",
        icon: "layers",
        image: "https://images.unsplash.com/photo-1581858726788-75bc0f6a952d?auto=format&fit=crop&q=80&w=800",
        popular: false,
    },
    ServiceCategory {
        id: "cleaning",
        title: "Cleaning",
        description: "Regular house cleaning and deep cleans.",
        icon: "sparkles",
        image: "https://images.unsplash.com/photo-1714479120969-436c216a3cd4?q=80&w=173&auto=format&fit=crop",
        popular: false,
    },
    ServiceCategory {
        id: "garden",
        title: "Gardening",
        description: "Lawn mowing, hedge trimming and clearance.",
        icon: "shovel",
        image: "https://images.unsplash.com/photo-1558904541-efa843a96f01?auto=format&fit=crop&q=80&w=800",
        popular: false,
    },
    ServiceCategory {
        id: "window",
        title: "Windows",
        description: "Professional internal and external window cleaning.",
        icon: "app-window",
        image: "https://images.unsplash.com/photo-1632927063333-df848f5f916a?fm=jpg&q=60&w=3000",
        popular: false,
    },
    ServiceCategory {
        id: "locksmith",
        title: "Locksmiths",
        description: "Emergency entry, lock changes, and home security upgrades.",
        icon: "key",
        image: "https://images.unsplash.com/photo-1558002038-1091a166111c?auto=format&fit=crop&q=80&w=800",
        popular: false,
    },
];

pub fn all_services() -> &'static [ServiceCategory] {
    SERVICES
}

/// The headline services featured at the top of the home page.
pub fn popular_services() -> impl Iterator<Item = &'static ServiceCategory> {
    SERVICES.iter().filter(|service| service.popular)
}

pub fn other_services() -> impl Iterator<Item = &'static ServiceCategory> {
    SERVICES.iter().filter(|service| !service.popular)
}

/// Job subtypes offered in the quote form, empty for unknown services.
pub fn subtypes(id: &str) -> &'static [&'static str] {
    match id {
        "roofing" => &[
            "Roof Repair / Maintenance",
            "New Roof Installation",
            "Flat Roof Repair / Replacement",
            "Chimney Work",
            "Guttering, Fascias & Soffits",
            "Other",
        ],
        "plumbing" => &[
            "Emergency Plumbing / Leak",
            "Boiler Service / Repair",
            "New Boiler Installation",
            "Bathroom Installation",
            "Blocked Drains / Toilet",
            "Radiators / Heating",
            "Other",
        ],
        "electrical" => &[
            "Electrical Safety Check (EICR)",
            "Fuse Box / Consumer Unit",
            "Lighting Installation",
            "Rewiring",
            "Socket Installation",
            "EV Charger Installation",
            "Other",
        ],
        "builders" => &[
            "House Extension",
            "Loft Conversion",
            "Garage Conversion",
            "Wall Removal / Internal Alterations",
            "Brickwork / Repointing",
            "New Build Construction",
            "Other",
        ],
        "painters" => &[
            "Interior Painting (Walls/Ceilings)",
            "Exterior Painting",
            "Wallpapering",
            "Door & Skirting Painting",
            "Commercial Decorating",
            "Other",
        ],
        "flooring" => &[
            "Carpet Fitting",
            "Laminate Flooring",
            "Real Wood / Engineered Wood",
            "Luxury Vinyl Tile (LVT)",
            "Floor Tiling",
            "Sanding & Refinishing",
            "Other",
        ],
        "cleaning" => &[
            "Regular Weekly/Fortnightly Clean",
            "One-off Deep Clean",
            "End of Tenancy Clean",
            "Carpet Cleaning",
            "Oven Cleaning",
        ],
        "garden" => &[
            "Lawn Mowing & General Maintenance",
            "Garden Clearance",
            "Hedge Trimming",
            "Patio / Driveway Cleaning",
            "Tree Surgery",
            "Landscaping / Design",
        ],
        "window" => &[
            "External Window Cleaning",
            "Internal & External Cleaning",
            "Conservatory Cleaning",
            "Gutter Cleaning",
        ],
        "locksmith" => &[
            "Emergency Door Opening",
            "Lock Change / Replacement",
            "Window Lock Repair",
            "uPVC Door Repair",
            "Smart Lock Installation",
            "Security Survey",
        ],
        _ => &[],
    }
}
