//! Compiled-in copy for every section.

pub const COMPANY: &str = "MNS Corrosions Solutions";
pub const BRAND: &str = "Sri Ram AAC Blocks";

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Who We Are",
        anchor: "who-we-are",
    },
    NavLink {
        label: "Why Choose Us",
        anchor: "why-choose-us",
    },
    NavLink {
        label: "Products",
        anchor: "products",
    },
    NavLink {
        label: "Technical Data",
        anchor: "technical-data",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct AccentCard {
    pub key: &'static str,
    pub label: &'static str,
    pub headline: &'static str,
    pub detail: &'static str,
}

pub mod hero {
    use super::{AccentCard, Stat};

    pub const HIGHLIGHT: &str = "Sri Ram AAC Block Ecosystem";
    pub const TITLE: &str = "Building the Future with Strength & Innovation";
    pub const SUBTITLE: &str = "Premium quality construction materials from MNS Corrosions Solutions. \
        Sri Ram AAC Blocks & Advanced Joint Mortars for durable, sustainable structures.";
    pub const BACKGROUND: &str = "/images/hero-bg.png";

    pub const PRIMARY_CTA: (&str, &str) = ("Explore Products", "products");
    pub const SECONDARY_CTA: (&str, &str) = ("Contact Us", "contact");

    pub const STATS: [Stat; 3] = [
        Stat {
            label: "Projects Delivered",
            value: "450+",
        },
        Stat {
            label: "Monthly Production",
            value: "50 MT",
        },
        Stat {
            label: "On-time Dispatch",
            value: "99.2%",
        },
    ];

    pub const ACCENTS: [AccentCard; 2] = [
        AccentCard {
            key: "thermal",
            label: "Thermal Comfort",
            headline: "38% better insulation",
            detail: "AAC blocks regulate indoor temperature and reduce HVAC loads.",
        },
        AccentCard {
            key: "lightweight",
            label: "Ultra Lightweight",
            headline: "Up to 4x lighter",
            detail: "Boost structural efficiency and speed up every install crew.",
        },
    ];
}

#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub mod who_we_are {
    use super::{Feature, Milestone, Stat};

    pub const BADGE: &str = "Legacy In Motion";
    pub const TITLE: &str = "Who We Are";
    pub const LEAD: &str = "Engineering materials that stay resilient, from foundation to finish.";

    pub const MISSION_KICKER: &str = "Mission Control";
    pub const MISSION_TITLE: &str = "Our Goals & Promise";
    pub const MISSION_GOALS: [Feature; 3] = [
        Feature {
            icon: "ShieldCheck",
            title: "Innovative Solutions",
            description: "Deliver steel-slag engineered mixes that resist corrosion, chemicals, and time.",
        },
        Feature {
            icon: "History",
            title: "Long-Lasting Performance",
            description: "Every batch is tested for structural integrity across humidity, salinity, and stress.",
        },
        Feature {
            icon: "Building2",
            title: "Sustainable Future",
            description: "Closed-loop manufacturing reduces waste while boosting thermal efficiency onsite.",
        },
    ];

    pub const BACKGROUND_TITLE: &str = "Background & Values";
    pub const BACKGROUND: &str = "Since 2000, we've purpose-built materials that outlast harsh climates without \
        compromising on speed or sustainability. Sri Ram AAC Blocks evolved into MNS Corrosions Solutions with \
        the same obsession for detail, only scaled with better tech and cleaner production cycles.";

    pub const MILESTONES: [Milestone; 3] = [
        Milestone {
            year: "2000",
            title: "Origins",
            description: "Launched Sri Ram AAC Blocks with a promise of honest quality.",
        },
        Milestone {
            year: "2012",
            title: "Innovation",
            description: "Integrated steel-slag composites for corrosion-proof mixes.",
        },
        Milestone {
            year: "2024",
            title: "Sambhavisnu RC Era",
            description: "Expanded as MNS Corrosions Solutions under Sambhavisnu Research Centers to scale \
                sustainable manufacturing.",
        },
    ];

    pub const STATS: [Stat; 3] = [
        Stat {
            label: "Years of Trust",
            value: "24+",
        },
        Stat {
            label: "Sq.ft Built",
            value: "3.5M",
        },
        Stat {
            label: "Partner Projects",
            value: "480+",
        },
    ];

    pub const MISSION_IMAGE: (&str, &str) = ("/images/mission-control.png", "Mission Control Goals");
}

pub mod why_choose_us {
    use super::Feature;

    pub const BADGE: &str = "Dual-Core Promise";
    pub const TITLE: &str = "Why Choose Us";
    pub const LEAD: &str =
        "We bring innovation and sustainability together to provide the best construction solutions.";
    pub const BADGES: [&str; 3] = [
        "Patent Approved Tech",
        "Coastal Grade Durability",
        "Export Ready Quality Check",
    ];

    pub const FEATURES: [Feature; 6] = [
        Feature {
            icon: "Factory",
            title: "NIT Joint Innovated",
            description: "Product mix innovated in collaboration with NIT, ensuring technical superiority.",
        },
        Feature {
            icon: "Award",
            title: "Indian Patent Approved",
            description: "Recognized and approved product with Indian Patent, validating our innovation.",
        },
        Feature {
            icon: "Globe",
            title: "World's 1st Corrosion Resistant",
            description: "First solution made of sustainable material offering exceptional corrosion resistance.",
        },
        Feature {
            icon: "Droplets",
            title: "Best for Coastal Areas",
            description: "Ideal solution for sea shore areas and sulphur-rich lands due to high resistance.",
        },
        Feature {
            icon: "Shield",
            title: "Export Quality",
            description: "Manufacturing standards meeting international export quality requirements.",
        },
        Feature {
            icon: "CheckCircle2",
            title: "Chemical Resistance",
            description: "Superior resistance to chemical attacks, ensuring longevity of structures.",
        },
    ];
}

#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub label: &'static str,
    pub copy: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Product {
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub weight: &'static str,
}

pub mod products {
    use super::{Highlight, Product};

    pub const BADGE: &str = "Product Ecosystem";
    pub const TITLE: &str = "Our Products";
    pub const LEAD: &str =
        "Discover our range of high-performance, sustainable building materials designed for durability.";
    pub const CTA: &str = "Enquire Now";

    pub const HIGHLIGHTS: [Highlight; 3] = [
        Highlight {
            label: "Steel Slag Infused",
            copy: "Corrosion-proof bonding matrices",
        },
        Highlight {
            label: "Thermal Stable",
            copy: "Keeps interiors 4-5°C cooler",
        },
        Highlight {
            label: "Site Ready",
            copy: "Consistent batches, zero surprises",
        },
    ];

    pub const CATALOG: [Product; 6] = [
        Product {
            name: "Joint Mortar",
            description: "Advanced joint mortar formulated with high-reactive steel slag for superior bonding \
                and durability.",
            features: &[
                "Excellent chemical & corrosion resistance",
                "Ideal for harsh/coastal environments",
                "Strong adhesion & minimal shrinkage",
                "Eco-friendly materials",
            ],
            weight: "40KG",
        },
        Product {
            name: "Tile Adhesive",
            description: "Premium tile adhesive enriched with processed steel slag for exceptional bonding strength.",
            features: &[
                "Superior chemical & corrosion resistance",
                "Ideal for wet, saline, or industrial areas",
                "Smooth application & high coverage",
                "Resists cracks & moisture",
            ],
            weight: "20/40KG",
        },
        Product {
            name: "Concrete Mix",
            description: "High-performance concrete mix blended with refined steel slag for exceptional strength \
                and density.",
            features: &[
                "Outstanding resistance to chemicals/seawater",
                "Smooth workability & superior compaction",
                "Eco-friendly & sustainable",
                "Long-lasting structural stability",
            ],
            weight: "50/500/1000KG",
        },
        Product {
            name: "Stone Adhesive",
            description: "Specialized stone adhesive formulated with activated steel slag for superior bonding \
                on stones.",
            features: &[
                "Excellent moisture & corrosion resistance",
                "Firm grip without shrinkage",
                "Perfect for granite, marble, heavy stone",
                "Eco-conscious formulation",
            ],
            weight: "40KG",
        },
        Product {
            name: "Tile Adhesive Plus",
            description: "Next-generation formulation infused with high-reactive steel slag for Bahubali-level \
                strength.",
            features: &[
                "Ultra-fast bonding & setting",
                "Extreme chemical & corrosion resistance",
                "Smooth spread & crack-free finish",
                "Speed, strength, and sustainability",
            ],
            weight: "20/40KG",
        },
        Product {
            name: "Plaster / Binder",
            description: "Specially formulated construction material used to create smooth, strong, and durable \
                wall and ceiling surfaces with high adhesion.",
            features: &[
                "Strong bonding with walls and ceilings",
                "Smooth and fine finish for painting",
                "Reduced shrinkage and cracking",
                "Long-lasting durability in interior & exterior applications",
                "Excellent workability and moisture resistance",
            ],
            weight: "50/500/1000KG",
        },
    ];
}

#[derive(Debug, Clone, Copy)]
pub struct QuickFact {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub sub: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TestRow {
    pub property: &'static str,
    pub method: &'static str,
    pub result: &'static str,
}

pub mod technical_data {
    use super::{QuickFact, TestRow};

    pub const BADGE: &str = "Lab Certified";
    pub const TITLE: &str = "Technical Data";
    pub const LEAD: &str = "Our products are tested rigorously to meet and exceed industry standards.";
    pub const COLUMNS: [&str; 3] = ["Property", "Test Method", "Result"];

    pub const QUICK_FACTS: [QuickFact; 3] = [
        QuickFact {
            icon: "Shield",
            title: "Compressive Strength",
            value: "16.8 / 38.38 N/mm²",
            sub: "Tested @ M10 / M35",
        },
        QuickFact {
            icon: "Thermometer",
            title: "Thermal Conductivity",
            value: "0.12 W/mK",
            sub: "Keeps interiors cooler",
        },
        QuickFact {
            icon: "Droplets",
            title: "Water Absorption",
            value: "3.95% avg",
            sub: "Ultra low porosity",
        },
    ];

    pub const ROWS: [TestRow; 4] = [
        TestRow {
            property: "COMPRESSIVE STRENGTH",
            method: "M10/M35",
            result: "16.8 / 38.38 (N/MM²)",
        },
        TestRow {
            property: "DURABILITY CHECKING / ENHANCEMENT",
            method: "ACID TEST (M35)",
            result: "25.5 (14 DAYS) / 41.3 (60 DAYS)",
        },
        TestRow {
            property: "SEA WATER ATTACK TEST",
            method: "M35",
            result: "23.5 (14D) / 25 (60D)",
        },
        TestRow {
            property: "WATER ABSORPTION TEST",
            method: "M35",
            result: "3.95 AVG",
        },
    ];
}

pub mod testimonials {
    pub const TITLE: &str = "Customer Reviews";
    pub const LEAD: &str = "See what our satisfied customers have to say about our products.";
    pub const STARS: usize = 5;
    pub const QUOTE: &str = "I recently used the BRICS joint motor. The quality of this motor is really excellent. \
        The writing and application is also good. It fills the gaps between the walls well. So, there is no \
        crack or damage. The color of the paint is also beautiful. In particular, the water resistance and \
        adhesion strength are good.";
    pub const AUTHOR: &str = "Bala Murugan";
    pub const AUTHOR_ROLE: &str = "Satisfied Customer";
    pub const AVATAR: &str = "https://api.dicebear.com/9.x/micah/svg?seed=Destiny";
}

#[derive(Debug, Clone, Copy)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactCard {
    pub key: &'static str,
    pub icon: &'static str,
    pub heading: &'static str,
    pub links: &'static [ContactLink],
    /// Plain lines shown when there is nothing to link to.
    pub lines: &'static [&'static str],
}

pub mod contact {
    use super::{ContactCard, ContactLink};

    pub const TITLE: &str = "Get in Touch";
    pub const LEAD: &str = "Have questions about our products or need a quote? Reach out to us today!";
    pub const BADGES: [&str; 3] = ["Response < 12 hrs", "Pan-India Dispatch", "Dedicated Tech Team"];

    pub const CARDS: [ContactCard; 3] = [
        ContactCard {
            key: "phone",
            icon: "Phone",
            heading: "Call Us",
            links: &[
                ContactLink {
                    label: "+91 90807 81191",
                    href: "tel:+919080781191",
                },
                ContactLink {
                    label: "+91 94431 30850",
                    href: "tel:+919443130850",
                },
            ],
            lines: &[],
        },
        ContactCard {
            key: "email",
            icon: "Mail",
            heading: "Email Us",
            links: &[ContactLink {
                label: "malathibrickindustry@gmail.com",
                href: "mailto:malathibrickindustry@gmail.com",
            }],
            lines: &[],
        },
        ContactCard {
            key: "address",
            icon: "MapPin",
            heading: "Visit Us",
            links: &[],
            lines: &[
                "394/4 BHARATHIYAR ROAD, THALATHERU,",
                "KARAIKAL 609605,",
                "TAMIL NADU, INDIA",
            ],
        },
    ];

    pub const WHATSAPP_LABEL: &str = "Chat on WhatsApp";
    pub const WHATSAPP_URL: &str = "https://wa.me/919080781191";
    pub const MAP_TITLE: &str = "Google Map";
    pub const MAP_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3917.263587278836!2d79.8281853\
        !3d10.943450700000001!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3a551735c2640dd3%3A0x3ee55cffbc488d8c\
        !2sSri%20Ram%20AAC%20Blocks%20and%20Tiles!5e0!3m2!1sen!2sin!4v1764345673315!5m2!1sen!2sin";
}

pub mod footer {
    pub const TAGLINE: &str = "Designed for Excellence.";

    pub fn copyright(year: i32) -> String {
        format!("© {year} {}. All rights reserved.", super::COMPANY)
    }
}
