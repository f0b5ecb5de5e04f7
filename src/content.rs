// SPDX-License-Identifier: MPL-2.0
//! Static studio content: services catalog, about copy, contact details,
//! and the fixed option lists used by the join form.
//!
//! Marketing copy is the studio's own wording and is not translated; UI
//! chrome around it goes through [`crate::i18n`].

/// One entry of the services catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    /// Short name used for the join form's domain checkboxes.
    pub short_name: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub points: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        short_name: "AI Graphics",
        title: "AI Graphic Designing & Prompt Engineering",
        icon: "🎨",
        points: &[
            "AI-powered graphic design",
            "Branding & visual identity creation",
            "Custom AI art & creative prompts",
            "Social media creatives & ad banners",
        ],
    },
    Service {
        short_name: "Web & UI/UX",
        title: "Web Designing & UI/UX Designing (Figma & Prototyping)",
        icon: "💻",
        points: &[
            "Responsive website development",
            "UI/UX design for websites & mobile apps",
            "Interactive prototypes in Figma",
            "Landing page creation",
            "Portfolio & e-commerce websites",
        ],
    },
    Service {
        short_name: "Digital Marketing",
        title: "Digital Marketing & Content Creation",
        icon: "📢",
        points: &[
            "Social media management",
            "SEO & SEM campaigns",
            "Influencer collaborations",
            "Blog, script & copywriting",
            "Video editing & reels production",
        ],
    },
    Service {
        short_name: "Analytics & Research",
        title: "Research, Analytics & Consultancy",
        icon: "📊",
        points: &[
            "Market research & competitor analysis",
            "Data-driven strategy building",
            "Business growth consultation",
            "Trend forecasting",
        ],
    },
    Service {
        short_name: "Cybersecurity",
        title: "Cybersecurity Solutions & Auditing",
        icon: "🛡️",
        points: &[
            "Website & app vulnerability testing",
            "Data protection & encryption solutions",
            "Cyber risk assessment",
            "Security training & awareness programs",
        ],
    },
];

pub const STUDIO_NAME: &str = "Àkanní";

pub const HERO_TITLE: &str = "Welcome to Àkanní";
pub const HERO_TAGLINE: &str = "We craft innovative solutions to transform your business ideas into reality. \
Your vision, our expertise.";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "At Àkanní, we turn digital dreams into reality. We are a multi-disciplinary freelance \
platform offering end-to-end creative and technical solutions under one roof. Whether you're a \
startup, entrepreneur, or an established business, our goal is to help you stand out, grow, and \
thrive in the digital space.",
    "Founded in December 2024, Àkanní was built on three core values: accessibility, \
affordability, and excellence. We believe every idea deserves a chance to shine, and we make \
that possible through collaboration, innovation, and personalized service.",
    "At the heart of what we do lies a simple promise: we don't just deliver services, we \
co-create with our clients.",
];

pub const JOIN_TITLE: &str = "Be a Part of Àkanní";
pub const JOIN_BLURB: &str = "Join our community today and explore amazing features. \
Discover, connect, and grow with us on this journey.";

pub const FOOTER_TAGLINE: &str = "One stop solution for all content needs";
pub const FOOTER_MOTTO: &str = "Create, Elevate, Innovate";
pub const CONTACT_ADDRESS: &str = "Kothrud, Pune 411038";
pub const CONTACT_PHONE: &str = "+9004138118";
pub const CONTACT_EMAIL: &str = "team.akkani@gmail.com";

/// Degree choices offered by the join form. The last entry unlocks a
/// free-text field.
pub const DEGREE_OPTIONS: &[&str] = &[
    "High School",
    "Diploma",
    "B.Sc",
    "B.Com",
    "B.A",
    "B.Tech",
    "M.Sc",
    "M.Com",
    "M.A",
    "MBA",
    OTHER_DEGREE,
];

pub const OTHER_DEGREE: &str = "Other";

/// Short names of the services, in catalog order.
pub fn domain_names() -> impl Iterator<Item = &'static str> {
    SERVICES.iter().map(|service| service.short_name)
}

/// Blog placeholder entries: (title, summary).
pub const BLOG_POSTS: &[(&str, &str)] = &[
    (
        "Prompting for brand-safe AI art",
        "How we keep generated visuals on-brand across a campaign.",
    ),
    (
        "From Figma to production",
        "Our handoff checklist for responsive landing pages.",
    ),
    (
        "A small-business security audit",
        "The five checks we run before any website goes live.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_services_each_with_points() {
        assert_eq!(SERVICES.len(), 5);
        assert!(SERVICES.iter().all(|service| !service.points.is_empty()));
    }

    #[test]
    fn other_degree_is_last_option() {
        assert_eq!(DEGREE_OPTIONS.last(), Some(&OTHER_DEGREE));
    }

    #[test]
    fn domain_names_follow_catalog_order() {
        let names: Vec<_> = domain_names().collect();
        assert_eq!(names.first(), Some(&"AI Graphics"));
        assert_eq!(names.len(), SERVICES.len());
    }
}
