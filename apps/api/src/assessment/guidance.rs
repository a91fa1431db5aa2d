//! Canned guidance attached to a result: insights, next steps, alternative paths, role matches.
//!
//! Insights come from a fixed rule table. Every rule is evaluated on its own, in table
//! order, against unrounded scores; rules are not mutually exclusive.

use serde::{Deserialize, Serialize};

use crate::assessment::scoring::{to_percent, Dimension, Recommendation, ScoreBreakdown};

// ────────────────────────────────────────────────────────────────────────────
// Insights
// ────────────────────────────────────────────────────────────────────────────

pub struct InsightRule {
    pub predicate: fn(&ScoreBreakdown) -> bool,
    pub message: &'static str,
}

fn strong_personality(s: &ScoreBreakdown) -> bool {
    s.personality >= 75.0
}

fn strong_technical(s: &ScoreBreakdown) -> bool {
    s.technical >= 80.0
}

fn high_will(s: &ScoreBreakdown) -> bool {
    s.dimension(Dimension::Will) >= 80.0
}

fn high_interest(s: &ScoreBreakdown) -> bool {
    s.dimension(Dimension::Interest) >= 80.0
}

fn weak_technical(s: &ScoreBreakdown) -> bool {
    s.technical < 60.0
}

fn weak_personality(s: &ScoreBreakdown) -> bool {
    s.personality < 50.0
}

pub const INSIGHT_RULES: &[InsightRule] = &[
    InsightRule {
        predicate: strong_personality,
        message: "Strong interpersonal orientation and leadership mindset",
    },
    InsightRule {
        predicate: strong_technical,
        message: "Solid understanding of cross-functional business concepts",
    },
    InsightRule {
        predicate: high_will,
        message: "High drive and proactive leadership tendencies",
    },
    InsightRule {
        predicate: high_interest,
        message: "Strong alignment with cross-functional career goals",
    },
    InsightRule {
        predicate: weak_technical,
        message: "Need to build familiarity with agile methodologies and business frameworks",
    },
    InsightRule {
        predicate: weak_personality,
        message: "May benefit from developing interpersonal and influence skills",
    },
];

pub fn evaluate_insights(breakdown: &ScoreBreakdown) -> Vec<String> {
    INSIGHT_RULES
        .iter()
        .filter(|rule| (rule.predicate)(breakdown))
        .map(|rule| rule.message.to_string())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Next steps + alternatives
// ────────────────────────────────────────────────────────────────────────────

pub fn next_steps(recommendation: Recommendation) -> Vec<String> {
    let steps: &[&str] = match recommendation {
        Recommendation::Proceed => &[
            "Enroll in Agile/Scrum or Leadership Foundations course",
            "Seek cross-functional projects to shadow or lead",
            "Learn stakeholder communication frameworks",
            "Build a portfolio of cross-departmental collaboration examples",
        ],
        Recommendation::Conditional => &[
            "Start with foundational business and leadership courses",
            "Practice influence and communication skills",
            "Gain experience in project coordination roles",
        ],
        Recommendation::ExploreAlternatives => &[
            "Explore alternative career paths that better match your profile",
            "Consider developing core business skills first",
        ],
    };
    steps.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerAlternative {
    pub title: String,
    pub focus: String,
}

const ALTERNATIVES: &[(&str, &str)] = &[
    (
        "Business Analyst",
        "Focus on requirements and process improvement",
    ),
    ("UX Strategist", "Bridge user needs with business goals"),
    (
        "Change Management Coordinator",
        "Drive organizational transformations",
    ),
    (
        "Specialized Team Lead",
        "Lead within a specific functional area",
    ),
];

/// Same list regardless of tier.
pub fn career_alternatives() -> Vec<CareerAlternative> {
    ALTERNATIVES
        .iter()
        .map(|(title, focus)| CareerAlternative {
            title: title.to_string(),
            focus: focus.to_string(),
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Role matches
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrength {
    Strong,
    Moderate,
    Weak,
}

impl MatchStrength {
    pub fn from_match(score: u32) -> Self {
        match score {
            s if s >= 70 => MatchStrength::Strong,
            s if s >= 50 => MatchStrength::Moderate,
            _ => MatchStrength::Weak,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleMatch {
    pub title: String,
    pub description: String,
    pub match_score: u32,
    pub strength: MatchStrength,
}

#[derive(Debug, Clone, Copy)]
enum RoleSource {
    OverallDimension,
    Dimension(Dimension),
    Technical,
    Personality,
}

impl RoleSource {
    fn value(self, breakdown: &ScoreBreakdown) -> f64 {
        match self {
            RoleSource::OverallDimension => breakdown.overall_dimension,
            RoleSource::Dimension(d) => breakdown.dimension(d),
            RoleSource::Technical => breakdown.technical,
            RoleSource::Personality => breakdown.personality,
        }
    }
}

const ROLES: &[(&str, &str, RoleSource)] = &[
    (
        "Product Manager",
        "Own product lifecycle, cross-functional alignment",
        RoleSource::OverallDimension,
    ),
    (
        "Program Manager",
        "Drive large, multi-team initiatives",
        RoleSource::Dimension(Dimension::Will),
    ),
    (
        "Business Operations Lead",
        "Solve org-wide challenges",
        RoleSource::Dimension(Dimension::Cognitive),
    ),
    (
        "Agile Coach",
        "Enable agile transformations",
        RoleSource::Technical,
    ),
    (
        "Innovation Manager",
        "Drive change across silos",
        RoleSource::Personality,
    ),
    (
        "Strategy Consultant",
        "Advise on cross-functional solutions",
        RoleSource::OverallDimension,
    ),
];

/// Roles this path unlocks, each matched against the rounded score it draws on.
pub fn role_matches(breakdown: &ScoreBreakdown) -> Vec<RoleMatch> {
    ROLES
        .iter()
        .map(|(title, description, source)| {
            let match_score = to_percent(source.value(breakdown));
            RoleMatch {
                title: title.to_string(),
                description: description.to_string(),
                match_score,
                strength: MatchStrength::from_match(match_score),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn breakdown(personality: f64, technical: f64, will: f64, interest: f64) -> ScoreBreakdown {
        let dimensions: BTreeMap<Dimension, f64> = [
            (Dimension::Will, will),
            (Dimension::Interest, interest),
            (Dimension::Skill, 0.0),
            (Dimension::Cognitive, 50.0),
            (Dimension::Ability, 0.0),
            (Dimension::RealWorld, 50.0),
        ]
        .into_iter()
        .collect();
        let overall_dimension = dimensions.values().sum::<f64>() / 6.0;
        ScoreBreakdown {
            personality,
            technical,
            overall_dimension,
            overall: (personality + technical + overall_dimension) / 3.0,
            dimensions,
        }
    }

    #[test]
    fn test_all_positive_rules_fire_in_table_order() {
        let insights = evaluate_insights(&breakdown(80.0, 100.0, 80.0, 100.0));
        assert_eq!(
            insights,
            vec![
                "Strong interpersonal orientation and leadership mindset",
                "Solid understanding of cross-functional business concepts",
                "High drive and proactive leadership tendencies",
                "Strong alignment with cross-functional career goals",
            ]
        );
    }

    #[test]
    fn test_weak_rules_fire_together() {
        let insights = evaluate_insights(&breakdown(0.0, 0.0, 0.0, 0.0));
        assert_eq!(
            insights,
            vec![
                "Need to build familiarity with agile methodologies and business frameworks",
                "May benefit from developing interpersonal and influence skills",
            ]
        );
    }

    #[test]
    fn test_thresholds_use_unrounded_values() {
        // 74.6 would display as 75 but must not trigger the >= 75 rule
        let insights = evaluate_insights(&breakdown(74.6, 66.7, 60.0, 60.0));
        assert!(insights.is_empty(), "got {insights:?}");
    }

    #[test]
    fn test_rules_are_not_mutually_exclusive() {
        // strong personality + weak technical
        let insights = evaluate_insights(&breakdown(90.0, 33.3, 100.0, 20.0));
        assert_eq!(insights.len(), 3);
        assert_eq!(insights[0], INSIGHT_RULES[0].message);
        assert_eq!(insights[1], INSIGHT_RULES[2].message);
        assert_eq!(insights[2], INSIGHT_RULES[4].message);
    }

    #[test]
    fn test_next_steps_per_tier() {
        assert_eq!(next_steps(Recommendation::Proceed).len(), 4);
        assert_eq!(next_steps(Recommendation::Conditional).len(), 3);
        let explore = next_steps(Recommendation::ExploreAlternatives);
        assert_eq!(explore.len(), 2);
        assert!(explore[0].starts_with("Explore alternative career paths"));
    }

    #[test]
    fn test_alternatives_are_split_pairs() {
        let alternatives = career_alternatives();
        assert_eq!(alternatives[1].title, "UX Strategist");
        assert_eq!(alternatives[1].focus, "Bridge user needs with business goals");
    }

    #[test]
    fn test_role_matches_follow_sources() {
        let matches = role_matches(&breakdown(90.0, 100.0 / 3.0, 60.0, 0.0));
        let by_title = |t: &str| matches.iter().find(|m| m.title == t).unwrap().clone();

        assert_eq!(by_title("Innovation Manager").match_score, 90);
        assert_eq!(by_title("Innovation Manager").strength, MatchStrength::Strong);
        assert_eq!(by_title("Program Manager").match_score, 60);
        assert_eq!(by_title("Program Manager").strength, MatchStrength::Moderate);
        assert_eq!(by_title("Agile Coach").match_score, 33);
        assert_eq!(by_title("Agile Coach").strength, MatchStrength::Weak);
        assert_eq!(
            by_title("Product Manager").match_score,
            by_title("Strategy Consultant").match_score
        );
    }

    #[test]
    fn test_match_strength_boundaries() {
        assert_eq!(MatchStrength::from_match(70), MatchStrength::Strong);
        assert_eq!(MatchStrength::from_match(69), MatchStrength::Moderate);
        assert_eq!(MatchStrength::from_match(50), MatchStrength::Moderate);
        assert_eq!(MatchStrength::from_match(49), MatchStrength::Weak);
    }
}
