//! Team roster records and the category filter behind the team showcase.

use crate::error::SiteError;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Fixed classification tags partitioning the roster.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Faculty,
    Student,
    Core,
}

/// A single team-member record. Records are compiled-in constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub linkedin: Option<&'static str>,
    pub image: Option<&'static str>,
}

impl TeamMember {
    /// First letter of every space-separated word in the name ("Dr. Sarah Johnson" -> "DSJ").
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// The category selection driving the roster view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RosterFilter {
    #[default]
    All,
    Category(Category),
}

impl RosterFilter {
    /// Tab order used by the showcase.
    pub const ALL: [RosterFilter; 4] = [
        RosterFilter::All,
        RosterFilter::Category(Category::Faculty),
        RosterFilter::Category(Category::Student),
        RosterFilter::Category(Category::Core),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Members",
            Self::Category(Category::Faculty) => "Faculty Coordinators",
            Self::Category(Category::Student) => "Student Leaders",
            Self::Category(Category::Core) => "Core Team",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|filter| filter == self)
            .unwrap_or_default()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn matches(&self, member: &TeamMember) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => member.category == *category,
        }
    }
}

impl FromStr for RosterFilter {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        Category::from_str(s)
            .map(Self::Category)
            .map_err(|_| SiteError::UnknownCategory(s.to_string()))
    }
}

/// Stable filter over the roster. The source slice is never modified.
pub fn filter_members(members: &[TeamMember], filter: RosterFilter) -> Vec<TeamMember> {
    match filter {
        RosterFilter::All => members.to_vec(),
        RosterFilter::Category(_) => members
            .iter()
            .filter(|member| filter.matches(member))
            .copied()
            .collect(),
    }
}

/// Plain accessor for the compiled-in roster.
pub fn team_members() -> &'static [TeamMember] {
    &TEAM_MEMBERS
}

const TEAM_MEMBERS: [TeamMember; 8] = [
    TeamMember {
        id: 1,
        name: "Dr. Sarah Johnson",
        role: "Faculty Coordinator",
        category: Category::Faculty,
        description: "Expert in Machine Learning and Neural Networks with 15+ years of experience.",
        linkedin: Some("https://linkedin.com"),
        image: Some("/images/team/professional_headsho_4369a320.jpg"),
    },
    TeamMember {
        id: 2,
        name: "Prof. Michael Chen",
        role: "Technical Advisor",
        category: Category::Faculty,
        description: "Specialist in Computer Vision and Deep Learning Research.",
        linkedin: Some("https://linkedin.com"),
        image: Some("/images/team/professional_headsho_bd905e93.jpg"),
    },
    TeamMember {
        id: 3,
        name: "Alex Kumar",
        role: "President",
        category: Category::Student,
        description: "Leading the club with passion for AI innovation and student engagement.",
        linkedin: Some("https://linkedin.com"),
        image: Some("/images/team/professional_headsho_1a188f46.jpg"),
    },
    TeamMember {
        id: 4,
        name: "Emma Rodriguez",
        role: "Vice President",
        category: Category::Student,
        description: "Coordinating events and workshops to bring AI learning to everyone.",
        linkedin: Some("https://linkedin.com"),
        image: Some("/images/team/professional_headsho_a08f802c.jpg"),
    },
    TeamMember {
        id: 5,
        name: "Priya Sharma",
        role: "Technical Lead",
        category: Category::Core,
        description: "Managing technical projects and mentoring new members in AI development.",
        linkedin: Some("https://linkedin.com"),
        image: Some("/images/team/professional_headsho_c5f5bb4e.jpg"),
    },
    TeamMember {
        id: 6,
        name: "David Lee",
        role: "Events Coordinator",
        category: Category::Core,
        description: "Organizing hackathons, workshops, and industry collaboration events.",
        linkedin: Some("https://linkedin.com"),
        image: Some("/images/team/professional_headsho_2a542e66.jpg"),
    },
    TeamMember {
        id: 7,
        name: "Sofia Martinez",
        role: "Research Lead",
        category: Category::Core,
        description: "Leading research initiatives in NLP and AI ethics.",
        linkedin: Some("https://linkedin.com"),
        image: Some("/images/team/professional_headsho_663fd3f2.jpg"),
    },
    TeamMember {
        id: 8,
        name: "Ryan Patel",
        role: "Community Manager",
        category: Category::Core,
        description: "Building and nurturing our vibrant AI community.",
        linkedin: Some("https://linkedin.com"),
        image: Some("/images/team/professional_headsho_a04e9f0c.jpg"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_returns_full_roster_in_order() {
        let members = team_members();
        let filtered = filter_members(members, RosterFilter::All);
        assert_eq!(filtered.len(), members.len());
        assert_eq!(filtered.as_slice(), members);
    }

    #[test]
    fn test_category_filters_partition_roster() {
        let members = team_members();
        let mut total = 0;
        for category in Category::iter() {
            let filtered = filter_members(members, RosterFilter::Category(category));
            assert!(filtered.iter().all(|m| m.category == category));
            total += filtered.len();
        }
        assert_eq!(total, members.len());
    }

    #[test]
    fn test_filter_is_stable() {
        let core = filter_members(team_members(), RosterFilter::Category(Category::Core));
        let ids: Vec<u32> = core.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        for filter in RosterFilter::ALL {
            let once = filter_members(team_members(), filter);
            let twice = filter_members(&once, filter);
            assert_eq!(once, twice, "filter {:?} should be idempotent", filter);
        }
    }

    #[test]
    fn test_filter_leaves_source_untouched() {
        let before = team_members().to_vec();
        let _ = filter_members(team_members(), RosterFilter::Category(Category::Student));
        assert_eq!(before.as_slice(), team_members());
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<u32> = team_members().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), team_members().len());
    }

    #[test]
    fn test_initials() {
        let members = team_members();
        assert_eq!(members[0].initials(), "DSJ");
        assert_eq!(members[2].initials(), "AK");
    }

    #[test]
    fn test_filter_cycle_wraps() {
        assert_eq!(RosterFilter::All.previous(), RosterFilter::Category(Category::Core));
        assert_eq!(RosterFilter::Category(Category::Core).next(), RosterFilter::All);
        let mut filter = RosterFilter::All;
        for _ in 0..RosterFilter::ALL.len() {
            filter = filter.next();
        }
        assert_eq!(filter, RosterFilter::All);
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("all".parse::<RosterFilter>().unwrap(), RosterFilter::All);
        assert_eq!(
            "faculty".parse::<RosterFilter>().unwrap(),
            RosterFilter::Category(Category::Faculty)
        );
        assert!(matches!(
            "alumni".parse::<RosterFilter>(),
            Err(SiteError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = RosterFilter::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            ["All Members", "Faculty Coordinators", "Student Leaders", "Core Team"]
        );
    }
}
