pub const BRAND: &str = "4688 Post-Productions";
pub const CONTACT_EMAIL: &str = "contact@4688postproductions.com";
pub const VIMEO_PROFILE: &str = "https://vimeo.com/4688postproductions";
pub const HERO_VIDEO: &str = "https://player.vimeo.com/external/403155936.sd.mp4?s=86cdad3d7d23f68fdcb62293a3e2fc2d1d4a6947&profile_id=164&oauth2_token_id=57447761";
pub const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1622737133809-d95047b9e673?auto=format&fit=crop&q=80";

pub struct Anchor {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SECTION_SERVICES: &str = "services";
pub const SECTION_PORTFOLIO: &str = "portfolio";
pub const SECTION_ABOUT: &str = "about";
pub const SECTION_PRICING: &str = "pricing";
pub const SECTION_CONTACT: &str = "contact";

/// Ids of the sections the landing page renders, top to bottom.
pub const SECTION_IDS: &[&str] = &[
    SECTION_SERVICES,
    SECTION_PORTFOLIO,
    SECTION_ABOUT,
    SECTION_PRICING,
    SECTION_CONTACT,
];

/// In-page links shown in the nav, in display order.
pub const NAV_ANCHORS: &[Anchor] = &[
    Anchor { id: SECTION_SERVICES, label: "SERVICES" },
    Anchor { id: SECTION_PORTFOLIO, label: "PORTFOLIO" },
    Anchor { id: SECTION_ABOUT, label: "ABOUT" },
    Anchor { id: SECTION_PRICING, label: "PRICING" },
    Anchor { id: SECTION_CONTACT, label: "CONTACT" },
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Wedding Film Editing",
        description: "Transform your wedding footage into an emotional cinematic journey that tells your love story.",
        features: &["7-10 Days preview delivery", "Custom color grading", "Licensed music selection"],
    },
    Service {
        title: "Mitzvah Highlights",
        description: "Craft memorable highlight reels that capture the joy and significance of this special milestone.",
        features: &["7-10 Days preview available", "Motion graphics included", "Multiple edit versions"],
    },
    Service {
        title: "Color Grading",
        description: "Professional color correction and grading to give your videos a cinematic look and feel.",
        features: &["Custom LUT creation", "HDR optimization", "Scene matching"],
    },
];

pub struct Work {
    pub image: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub link: &'static str,
}

pub const PORTFOLIO: &[Work] = &[
    Work {
        image: "https://images.unsplash.com/photo-1606800052052-a08af7148866?auto=format&fit=crop&q=80",
        title: "Kayleen & John",
        category: "Wedding Highlight Film",
        link: "https://vimeo.com/1046792239",
    },
    Work {
        image: "https://images.unsplash.com/photo-1519741497674-611481863552?auto=format&fit=crop&q=80",
        title: "David's Bar Mitzvah",
        category: "Celebration Highlights",
        link: "https://vimeo.com/1046792239",
    },
    Work {
        image: "https://images.unsplash.com/photo-1537633552985-df8429e8048b?auto=format&fit=crop&q=80",
        title: "Kayleen & John",
        category: "Cinematic Edit",
        link: "https://vimeo.com/1046792239",
    },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "At 4688 Post-Productions, we transform raw footage into compelling visual stories. Our expert editing team specializes in crafting emotional narratives that resonate with viewers.",
    "Using industry-leading software and techniques, we ensure every frame is perfectly timed, every transition is smooth, and every moment is enhanced to its fullest potential.",
];

pub const STATS: &[(&str, &str)] = &[
    ("5", "Years Experience"),
    ("500+", "Projects Completed"),
    ("100%", "Client Satisfaction"),
];

pub struct Package {
    pub name: &'static str,
    /// Starting price in whole dollars.
    pub price: u32,
    pub features: &'static [&'static str],
}

impl Package {
    pub fn starting_at(&self) -> String {
        format!("${}", self.price)
    }
}

pub struct PackageGroup {
    pub title: &'static str,
    pub accent: &'static str,
    pub packages: &'static [Package],
}

pub const PACKAGE_GROUPS: &[PackageGroup] = &[
    PackageGroup {
        title: "Wedding",
        accent: "Films",
        packages: &[
            Package {
                name: "Highlight Only",
                price: 265,
                features: &["4-6 Minutes Highlight", "Cinematic Highlight Film", "Professional Editing", "Digital Delivery"],
            },
            Package {
                name: "Short Film",
                price: 300,
                features: &["8-15 Minutes Film", "Cinematic Film", "Professional Editing", "Digital Delivery"],
            },
            Package {
                name: "Highlight & Short Film",
                price: 400,
                features: &["Complete Ceremony Coverage", "Full Reception Events", "Digital Delivery"],
            },
            Package {
                name: "Full Film",
                price: 300,
                features: &["45-90 Minutes Film", "Complete Ceremony Coverage", "Full Reception Events", "Digital Delivery"],
            },
            Package {
                name: "Highlight & Full Film",
                price: 400,
                features: &["Complete Ceremony Coverage", "Full Reception Events", "Digital Delivery"],
            },
            Package {
                name: "The Complete Package",
                price: 500,
                features: &["Highlight, Short Film & Full Film", "Complete Ceremony Coverage", "Full Reception Events", "Digital Delivery"],
            },
        ],
    },
    PackageGroup {
        title: "Mitzvah",
        accent: "Films",
        packages: &[
            Package {
                name: "Highlight",
                price: 250,
                features: &["Cinematic Highlight Film", "Professional Editing", "Digital Delivery"],
            },
            Package {
                name: "Full Film",
                price: 250,
                features: &["Complete Ceremony Coverage", "Full Party Coverage", "Digital Delivery"],
            },
            Package {
                name: "Highlight & Full Film",
                price: 350,
                features: &["Cinematic Highlight Film", "Complete Ceremony Coverage", "Full Party Coverage", "Digital Delivery"],
            },
        ],
    },
];
