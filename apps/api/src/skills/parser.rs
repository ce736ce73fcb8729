//! Skill parser — reads `Label: a, b, c` lines into fixed categories.
//!
//! Labels are matched exactly (case-sensitive). Unknown labels, lines without
//! a colon, and dash placeholders contribute nothing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Placeholders the model writes for an empty category.
const EMPTY_MARKERS: [&str; 2] = ["—", "-"];

/// The closed set of skill categories, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "Languages")]
    Languages,
    #[serde(rename = "Frameworks/Tools")]
    FrameworksTools,
    #[serde(rename = "Concepts / Topics")]
    ConceptsTopics,
    #[serde(rename = "Others")]
    Others,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Languages,
        SkillCategory::FrameworksTools,
        SkillCategory::ConceptsTopics,
        SkillCategory::Others,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Languages => "Languages",
            SkillCategory::FrameworksTools => "Frameworks/Tools",
            SkillCategory::ConceptsTopics => "Concepts / Topics",
            SkillCategory::Others => "Others",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }
}

/// Categories that were never assigned (absent or dash only) are left out.
pub type CategoryMap = BTreeMap<SkillCategory, Vec<String>>;

pub fn parse_skill_reply(reply: &str) -> CategoryMap {
    let mut categories = CategoryMap::new();

    for line in reply.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        let Some(category) = SkillCategory::from_label(label.trim()) else {
            continue;
        };

        let value = value.trim();
        if EMPTY_MARKERS.contains(&value) {
            continue;
        }

        let skills: Vec<String> = value
            .split(',')
            .map(|skill| skill.trim().to_string())
            .collect();

        // Last occurrence wins, even when every item is blank.
        categories.insert(category, skills);
    }

    categories
}

/// Renders categories in the same line format the model is asked to produce.
pub fn render_categories(categories: &CategoryMap) -> String {
    categories
        .iter()
        .map(|(category, skills)| format!("{}: {}", category.label(), skills.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}
