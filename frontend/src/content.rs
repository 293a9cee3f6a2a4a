//! Copy and contact details shown on the page.

use crate::components::icons::Icon;

pub const GYM_NAME: &str = "SK-27 GYM";
pub const LOCALITY: &str = "HAUZ KHAS VILLAGE";
pub const TAGLINE: &str = "BEYOND THE LIMITS";

pub const PHONE_DISPLAY: &str = "099070 50705";
const PHONE_DIAL: &str = "09907050705";

pub const ADDRESS: &str =
    "Building no 30, near Deer Park, Hauz Khas Village, Deer Park, Hauz Khas, New Delhi, Delhi 110016";
const MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

pub fn tel_href() -> String {
    format!("tel:{}", PHONE_DIAL)
}

pub fn map_url() -> String {
    format!("{}{}", MAP_SEARCH_BASE, urlencoding::encode(ADDRESS))
}

pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { name: "Home", href: "#home" },
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Services", href: "#services" },
    NavLink { name: "FAQ", href: "#faq" },
    NavLink { name: "Contact", href: "#contact" },
];

pub const HIGHLIGHTS: [&str; 4] = [
    "Most Luxurious Setup",
    "Expert Personal Trainers",
    "Soft Spoken & Behaved Staff",
    "High-End Imported Machines",
];

pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        icon: Icon::Dumbbell,
        title: "Strength Floor",
        desc: "Equipped with world-class imported machinery for targeted hypertrophy.",
    },
    Service {
        icon: Icon::Timer,
        title: "Elite HIIT",
        desc: "Tactical metabolic conditioning zones designed for maximum efficiency.",
    },
    Service {
        icon: Icon::HeartPulse,
        title: "Cardio Zone",
        desc: "A curated range of treadmills and cycles with high-end tech integration.",
    },
    Service {
        icon: Icon::Target,
        title: "Personal Prep",
        desc: "1-on-1 transformation coaching tailored to your individual anatomy.",
    },
    Service {
        icon: Icon::Users,
        title: "Group Synergy",
        desc: "Premium group training experiences focused on functional mobility.",
    },
    Service {
        icon: Icon::Award,
        title: "Nutrition Lab",
        desc: "Personalized diet protocols to fuel your evolution beyond the gym floor.",
    },
];

pub struct Review {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
}

impl Review {
    /// First character of the reviewer's name, as written.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

pub const REVIEWS: [Review; 3] = [
    Review {
        name: "Taniyaa rawat",
        role: "Elite Member",
        content: "Most luxurious place to visit worth for the money excellent staff service.",
    },
    Review {
        name: "Mihika Bhaumik",
        role: "Athlete",
        content: "The equipment is high quality and the space is well designed.",
    },
    Review {
        name: "k",
        role: "Regular Member",
        content: "The all employees here are so soft spoken and well-behaved.",
    },
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [FaqEntry; 4] = [
    FaqEntry {
        question: "What are the operating hours?",
        answer: "We are open Monday to Saturday from 6:00 AM to 11:00 PM. On Sundays, we open early at 5:00 AM for early risers.",
    },
    FaqEntry {
        question: "Do you offer personal training?",
        answer: "Yes, we have a team of certified elite trainers specialized in bodybuilding, functional fitness, and body transformation.",
    },
    FaqEntry {
        question: "Is there a trial session available?",
        answer: "Absolutely! Contact our enrollment desk at 099070 50705 to book your first elite experience session.",
    },
    FaqEntry {
        question: "What makes SK-27 different from local gyms?",
        answer: "Our focus on imported high-end machinery, luxury ambiance, and a high standard of professional staff behavior sets us apart.",
    },
];

pub const HOURS: [&str; 2] = [
    "Mon - Sat: 6:00 AM – 11:00 PM",
    "Sun: 5:00 AM – 11:00 PM",
];

pub const GOALS: [&str; 4] = [
    "SELECT YOUR GOAL",
    "WEIGHT LOSS",
    "STRENGTH TRAINING",
    "FLEXIBILITY",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_url_encodes_the_address() {
        assert_eq!(
            map_url(),
            "https://www.google.com/maps/search/Building%20no%2030%2C%20near%20Deer%20Park%2C%20Hauz%20Khas%20Village%2C%20Deer%20Park%2C%20Hauz%20Khas%2C%20New%20Delhi%2C%20Delhi%20110016"
        );
    }

    #[test]
    fn tel_link_dials_without_spaces() {
        assert_eq!(tel_href(), "tel:09907050705");
        assert_eq!(PHONE_DISPLAY.replace(' ', ""), PHONE_DIAL);
    }

    #[test]
    fn nav_links_are_in_page_anchors() {
        assert!(NAV_LINKS.iter().all(|link| link.href.starts_with('#')));
    }

    #[test]
    fn review_initial_keeps_case() {
        assert_eq!(REVIEWS[0].initial(), "T");
        assert_eq!(REVIEWS[2].initial(), "k");
        let anonymous = Review { name: "", role: "", content: "" };
        assert_eq!(anonymous.initial(), "");
    }
}
