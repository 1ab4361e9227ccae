use crate::schema::PromptTemplate;
use serde::{Deserialize, Serialize};

/// Virtual team members the dashboard can switch between.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum VirtualRole {
    #[default]
    General,
    Lakimies,
    Talous,
    Myynti,
    Strategi,
    Koodari,
    Viestinta,
    Valmentaja,
}

/// Which prompts a role shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleFilter {
    Favorites,
    Categories(&'static [&'static str]),
}

pub struct RoleEntry {
    pub role: VirtualRole,
    pub label: &'static str,
    pub description: &'static str,
    pub filter: RoleFilter,
}

pub const ROLE_CATEGORIES: &[RoleEntry] = &[
    RoleEntry {
        role: VirtualRole::General,
        label: "General Assistant",
        description: "Ready to help with day-to-day tasks.",
        filter: RoleFilter::Favorites,
    },
    RoleEntry {
        role: VirtualRole::Lakimies,
        label: "Lakimies (Legal)",
        description: "Specialized in Finnish contract law and compliance.",
        filter: RoleFilter::Categories(&["Legal"]),
    },
    RoleEntry {
        role: VirtualRole::Talous,
        label: "Talouspäällikkö (Finance)",
        description: "Expert in Verohallinto rules, VAT, and YEL.",
        filter: RoleFilter::Categories(&["Admin"]),
    },
    RoleEntry {
        role: VirtualRole::Myynti,
        label: "Myyntitykki (Sales)",
        description: "Persuasive copywriter for B2B growth.",
        filter: RoleFilter::Categories(&["Sales"]),
    },
    RoleEntry {
        role: VirtualRole::Strategi,
        label: "Strategi (Strategy)",
        description: "Visionary planning and problem solving.",
        filter: RoleFilter::Categories(&["Strategy"]),
    },
    RoleEntry {
        role: VirtualRole::Koodari,
        label: "Koodari (Coding)",
        description: "Technical architecture and code quality.",
        filter: RoleFilter::Categories(&["Coding"]),
    },
    RoleEntry {
        role: VirtualRole::Viestinta,
        label: "Viestintä (Communication)",
        description: "Clear communication and storytelling.",
        filter: RoleFilter::Categories(&["Writing", "Communication"]),
    },
    RoleEntry {
        role: VirtualRole::Valmentaja,
        label: "Valmentaja (Coach)",
        description: "Productivity hacks and learning models.",
        filter: RoleFilter::Categories(&["Productivity"]),
    },
];

impl VirtualRole {
    pub fn all() -> impl Iterator<Item = VirtualRole> {
        ROLE_CATEGORIES.iter().map(|entry| entry.role)
    }

    fn entry(&self) -> &'static RoleEntry {
        ROLE_CATEGORIES
            .iter()
            .find(|entry| entry.role == *self)
            .unwrap_or(&ROLE_CATEGORIES[0])
    }

    pub fn label(&self) -> &'static str {
        self.entry().label
    }

    pub fn description(&self) -> &'static str {
        self.entry().description
    }

    pub fn filter(&self) -> RoleFilter {
        self.entry().filter
    }
}

impl RoleFilter {
    pub fn matches(&self, prompt: &PromptTemplate) -> bool {
        match self {
            RoleFilter::Favorites => prompt.is_favorite,
            RoleFilter::Categories(categories) => categories.contains(&prompt.category.as_str()),
        }
    }
}

/// Prompts recommended for a role, in library order.
pub fn prompts_for_role(prompts: &[PromptTemplate], role: VirtualRole) -> Vec<&PromptTemplate> {
    let filter = role.filter();
    prompts.iter().filter(|p| filter.matches(p)).collect()
}

/// Case-insensitive match on title, text or category. An empty term matches everything.
pub fn search_prompts<'a>(prompts: &'a [PromptTemplate], term: &str) -> Vec<&'a PromptTemplate> {
    let needle = term.to_lowercase();
    prompts
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.text.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
        .collect()
}
