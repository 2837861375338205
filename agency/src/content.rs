//! Static marketing copy for the page sections.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Icon names. The client maps each one to an inline SVG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Users,
    Award,
    Target,
    Home,
    Cart,
    Building,
    TrendingUp,
    Check,
    Message,
    Phone,
    Mail,
    MapPin,
    Bed,
    Car,
    Maximize,
}

/// A titled blurb with an icon, used by the about, services and reasons grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    /// Optional colour modifier for the card (`service-card--{tone}`).
    pub tone: Option<&'static str>,
}

/// In-page navigation anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?auto=format&fit=crop&w=1920&q=80";

/// Every section id the scroll observer reveals.
pub const SECTION_IDS: &[&str] = &["home", "about", "services", "properties", "why-choose-us", "contact"];

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "Properties", href: "#properties" },
    NavLink { label: "Contact", href: "#contact" },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "About Us", href: "#about" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "Properties", href: "#properties" },
];

pub const FOOTER_SERVICES: &[&str] = &["Buy Property", "Sell Property", "Rent Property", "Investment"];

pub const ABOUT_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: Icon::Users,
        title: "Expert Team",
        description: "Professional real estate experts at your service",
        tone: None,
    },
    Highlight {
        icon: Icon::Award,
        title: "Trusted Service",
        description: "Proven track record of successful transactions",
        tone: None,
    },
    Highlight {
        icon: Icon::Target,
        title: "Smart Investments",
        description: "Strategic guidance for profitable real estate decisions",
        tone: None,
    },
];

pub const SERVICES: &[Highlight] = &[
    Highlight {
        icon: Icon::Home,
        title: "Buy",
        description: "Find your perfect home with our expert guidance",
        tone: Some("blue"),
    },
    Highlight {
        icon: Icon::Cart,
        title: "Sell",
        description: "Get the best value for your property",
        tone: Some("green"),
    },
    Highlight {
        icon: Icon::Building,
        title: "Rent",
        description: "Quality rental properties for every budget",
        tone: Some("purple"),
    },
    Highlight {
        icon: Icon::TrendingUp,
        title: "Invest",
        description: "Smart investment opportunities in real estate",
        tone: Some("amber"),
    },
];

pub const REASONS: &[Highlight] = &[
    Highlight {
        icon: Icon::Check,
        title: "Trusted Service",
        description: "Years of reliable and transparent service in real estate",
        tone: None,
    },
    Highlight {
        icon: Icon::Check,
        title: "Local Expertise",
        description: "Deep knowledge of local market trends and opportunities",
        tone: None,
    },
    Highlight {
        icon: Icon::Check,
        title: "Smart Investments",
        description: "Strategic guidance for profitable real estate decisions",
        tone: None,
    },
    Highlight {
        icon: Icon::Check,
        title: "24/7 Support",
        description: "Always available to assist you with any queries or concerns",
        tone: None,
    },
];
