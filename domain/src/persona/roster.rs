//! Predefined persona catalog and team presets.
//!
//! The catalog mirrors the roles users can pick from when assembling a crew.
//! Specs are static data; [`PersonaSpec::build`] turns one into a live
//! [`Persona`] with a fresh identifier.

use crate::persona::entities::Persona;

/// Static description of a predefined persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonaSpec {
    pub role: &'static str,
    pub goal: &'static str,
    pub expertise: &'static str,
}

impl PersonaSpec {
    /// Instantiate a persona from this spec.
    pub fn build(&self) -> Persona {
        Persona::new(self.role, self.goal, self.expertise)
    }
}

/// All predefined personas, in display order.
pub const PREDEFINED: &[PersonaSpec] = &[
    PersonaSpec {
        role: "Research Specialist",
        goal: "Conduct comprehensive research on any topic and provide structured, factual insights with citations.",
        expertise: "Research, Analysis, Fact-checking",
    },
    PersonaSpec {
        role: "Creative Writer",
        goal: "Create engaging and well-crafted content for stories, articles, and marketing.",
        expertise: "Writing, Storytelling, Content",
    },
    PersonaSpec {
        role: "Data Analyst",
        goal: "Analyze datasets, identify patterns, and generate insights and visuals.",
        expertise: "Data Analysis, Statistics, Visualization",
    },
    PersonaSpec {
        role: "Technical Expert",
        goal: "Provide technical solutions on development, architecture, and troubleshooting.",
        expertise: "Programming, Architecture, Problem-solving",
    },
    PersonaSpec {
        role: "Marketing Strategist",
        goal: "Develop strategies, analyze trends, and plan campaigns.",
        expertise: "Marketing, Strategy, Brand",
    },
    PersonaSpec {
        role: "Financial Advisor",
        goal: "Provide financial analysis, investment advice, and budgeting strategies.",
        expertise: "Finance, Investment, Economics",
    },
    PersonaSpec {
        role: "Project Manager",
        goal: "Plan and coordinate projects, manage timelines, and ensure delivery.",
        expertise: "Project Management, Planning, Coordination",
    },
    PersonaSpec {
        role: "UX Designer",
        goal: "Design intuitive experiences and optimize interfaces.",
        expertise: "UX/UI, Research, Prototyping",
    },
    PersonaSpec {
        role: "Legal Consultant",
        goal: "Provide legal insights, contract analysis, and compliance guidance.",
        expertise: "Legal Analysis, Compliance, Risk",
    },
    PersonaSpec {
        role: "Quality Assurance",
        goal: "Review for accuracy and completeness, identify issues, and ensure quality.",
        expertise: "Quality Control, Testing, Review",
    },
];

/// Look up a predefined persona by role name (case-insensitive).
pub fn find(role: &str) -> Option<&'static PersonaSpec> {
    PREDEFINED
        .iter()
        .find(|spec| spec.role.eq_ignore_ascii_case(role))
}

/// Build a named team preset.
///
/// Known presets: `default`, `research`, `business`.
pub fn team_preset(name: &str) -> Option<Vec<Persona>> {
    let roles: &[&str] = match name.to_ascii_lowercase().as_str() {
        "default" => &[
            "Research Specialist",
            "Technical Expert",
            "Creative Writer",
            "Quality Assurance",
        ],
        "research" => &["Research Specialist", "Data Analyst", "Quality Assurance"],
        "business" => &[
            "Marketing Strategist",
            "Financial Advisor",
            "Project Manager",
        ],
        _ => return None,
    };

    Some(
        roles
            .iter()
            .map(|role| find(role).expect("preset roles exist in catalog").build())
            .collect(),
    )
}

/// Names of the known team presets.
pub fn preset_names() -> &'static [&'static str] {
    &["default", "research", "business"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_roles() {
        assert_eq!(PREDEFINED.len(), 10);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert!(find("research specialist").is_some());
        assert!(find("RESEARCH SPECIALIST").is_some());
        assert!(find("Sous Chef").is_none());
    }

    #[test]
    fn test_presets_resolve() {
        for name in preset_names() {
            let team = team_preset(name).unwrap();
            assert!(!team.is_empty(), "preset {name} is empty");
        }
        assert!(team_preset("unknown").is_none());
    }

    #[test]
    fn test_default_preset_order() {
        let team = team_preset("default").unwrap();
        let roles: Vec<_> = team.iter().map(|p| p.role()).collect();
        assert_eq!(
            roles,
            vec![
                "Research Specialist",
                "Technical Expert",
                "Creative Writer",
                "Quality Assurance"
            ]
        );
    }
}
