use log::Level;

use crate::host::{MetaKey, MetaTag};

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose transitions while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const SITE_TITLE: &str = "Tixible — Innovating Tomorrow, Today";

pub const OG_IMAGE: &str = "https://i.postimg.cc/qvXVFdrv/Chat-GPT-Image-Aug-7-2025-04-31-04-PM.png";
pub const PREVIEW_IMAGE: &str = "https://i.postimg.cc/FKPsd24g/Chat-GPT-Image-Sep-1-2025-10-08-48-PM.png";

pub const META_TAGS: &[MetaTag] = &[
    MetaTag {
        key: MetaKey::Name("description"),
        content: "Tixible builds simple, AI-powered apps for learning, music, and everyday life in Africa.",
    },
    MetaTag {
        key: MetaKey::Name("keywords"),
        content: "education, music, AI, low-data, Tixible",
    },
    MetaTag {
        key: MetaKey::Property("og:title"),
        content: SITE_TITLE,
    },
    MetaTag {
        key: MetaKey::Property("og:description"),
        content: "AI-powered learning and discovery tools designed for Africa.",
    },
    MetaTag {
        key: MetaKey::Property("og:type"),
        content: "website",
    },
    MetaTag {
        key: MetaKey::Property("og:image"),
        content: OG_IMAGE,
    },
];

/// Section anchors used by in-page navigation.
pub mod sections {
    pub const HOME: &str = "home";
    pub const PROJECTS: &str = "projects";
    pub const ABOUT: &str = "about";
    pub const TESTIMONIALS: &str = "testimonials";
    pub const CONTACT: &str = "contact";
    pub const MAIN: &str = "maincontent";
}

pub const NAV_PANEL_ID: &str = "mobile-nav-panel";

// Simulated submission delays, milliseconds
pub const NEWSLETTER_DELAY_MS: u32 = 600;
pub const CONTACT_DELAY_MS: u32 = 800;

pub const NEWSLETTER_SUCCESS: &str = "Thanks — you’re on the waitlist!";
pub const CONTACT_SUCCESS: &str = "Message sent — we will reply soon.";
pub const CONTACT_MISSING_FIELDS: &str = "Please fill all fields.";

pub const CONTACT_EMAIL: &str = "infotixible@gmail.com";
pub const LOCATION: &str = "Abuja, Nigeria";
