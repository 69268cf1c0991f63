//! Hardcoded copy for the hero, team prompt and footer.

use crate::effects::{RotatingText, Typewriter};
use crate::navigation::NavLink;
use std::time::Duration;

pub const CLUB_NAME: &str = "AI Club";
pub const COLLEGE_NAME: &str = "Tech University Engineering College";

pub const HERO_DESCRIPTION: &str = "Join our vibrant community of AI enthusiasts, innovators, and future technologists. \
Learn, build, and grow with hands-on workshops, cutting-edge projects, and industry connections.";

pub const HERO_BADGE: RotatingText = RotatingText::new(
    &["Innovate", "Learn", "Build", "Grow"],
    Duration::from_millis(2000),
);

pub const HERO_TAGLINES: Typewriter = Typewriter::new(
    &[
        "Innovating the Future with Artificial Intelligence",
        "Building Tomorrow's Technology Today",
        "Empowering Students Through AI & ML",
    ],
    Duration::from_millis(50),
    Duration::from_millis(2000),
)
.erasing_at(Duration::from_millis(25));

pub const CALLS_TO_ACTION: [&str; 2] = ["Join Our Club", "Explore More"];

/// A headline number in the hero's statistics row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: i64,
    pub suffix: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat { label: "Members", value: 500, suffix: "+" },
    Stat { label: "Events", value: 50, suffix: "+" },
    Stat { label: "Projects", value: 100, suffix: "+" },
];

pub const TEAM_HEADING: &str = "Meet Our Team";

pub const SAMPLE_PROMPTS: [&str; 3] = [
    "Hello GPT !! can you please display the pillars of our club ?",
    "Show the team roster and highlight the club's strengths and expertise areas.",
    "List team members and summarize the club pillars (innovation, research, education).",
];

pub const FOOTER_ABOUT: &str = "Empowering students to innovate and excel in the field of artificial \
intelligence through hands-on learning and collaboration.";
pub const FOOTER_MOTTO: &str = "Join us in shaping the future of AI, one project at a time.";

pub const QUICK_LINKS: [NavLink; 6] = [
    NavLink { name: "Home", href: "#home" },
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Objectives", href: "#objectives" },
    NavLink { name: "Team", href: "#team" },
    NavLink { name: "Privacy Policy", href: "#" },
    NavLink { name: "Terms of Service", href: "#" },
];

pub const RESOURCES: [NavLink; 5] = [
    NavLink { name: "Join the Club", href: "#" },
    NavLink { name: "Upcoming Events", href: "#activities" },
    NavLink { name: "Projects Gallery", href: "#" },
    NavLink { name: "Blog Archive", href: "#editorials" },
    NavLink { name: "FAQs", href: "#" },
];

pub const CONTACT_EMAIL: &str = "aiclub@university.edu";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
pub const CONTACT_ADDRESS: &str = "Tech University Campus, Building A, Room 301";

pub const COPYRIGHT: &str = "© 2025 AI Club. All rights reserved.";
