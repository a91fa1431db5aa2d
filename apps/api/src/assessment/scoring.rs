//! Readiness scoring: response set → sub-scores, WISCAR dimensions, recommendation tier.
//!
//! Scoring is total. Missing scaled answers count as rank 0 (worst case), missing or
//! non-ideal situational answers count as the neutral 50. All aggregation happens on
//! unrounded values; `AssessmentResult` rounds once for presentation.
//!
//! `AppState` holds an `Arc<dyn Scorer>`; `WiscarScorer` is the rule-table backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::assessment::catalog::{
    Catalog, Question, QuestionKind, AGILE_DEFINITION, CONFLICT_FIRST_STEP, KPI_PURPOSE,
    PREFERRED_ENVIRONMENT, PRODUCT_OWNER_DUTY,
};
use crate::assessment::error::RulesError;
use crate::assessment::guidance::{
    career_alternatives, evaluate_insights, next_steps, role_matches, CareerAlternative,
    RoleMatch,
};
use crate::assessment::responses::ResponseSet;

const ALIGNED_SCORE: f64 = 100.0;
const NEUTRAL_SCORE: f64 = 50.0;

// ────────────────────────────────────────────────────────────────────────────
// Rule table
// ────────────────────────────────────────────────────────────────────────────

/// The six WISCAR dimensions, in framework order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

#[derive(Debug, Clone)]
pub enum DimensionSource {
    /// `100 * rank / scale_max`, missing → 0.
    Scaled(&'static str),
    /// 100 when the answer equals `ideal`, otherwise (including missing) 50.
    Aligned {
        question_id: &'static str,
        ideal: &'static str,
    },
}

/// Which questions feed which score. Checked against the catalog at startup.
#[derive(Debug, Clone)]
pub struct ScoringRules {
    pub scale_max: u8,
    pub personality_items: Vec<&'static str>,
    /// (question id, correct literal)
    pub answer_key: Vec<(&'static str, &'static str)>,
    pub dimensions: Vec<(Dimension, DimensionSource)>,
}

impl ScoringRules {
    pub fn leadership() -> Self {
        Self {
            scale_max: 5,
            personality_items: vec!["psych_1", "psych_2", "psych_3", "psych_4"],
            answer_key: vec![
                ("tech_1", AGILE_DEFINITION),
                ("tech_2", PRODUCT_OWNER_DUTY),
                ("tech_3", KPI_PURPOSE),
            ],
            dimensions: vec![
                (Dimension::Will, DimensionSource::Scaled("will_1")),
                (Dimension::Interest, DimensionSource::Scaled("interest_1")),
                (Dimension::Skill, DimensionSource::Scaled("skill_1")),
                (
                    Dimension::Cognitive,
                    DimensionSource::Aligned {
                        question_id: "cognitive_1",
                        ideal: CONFLICT_FIRST_STEP,
                    },
                ),
                (Dimension::Ability, DimensionSource::Scaled("ability_1")),
                (
                    Dimension::RealWorld,
                    DimensionSource::Aligned {
                        question_id: "realworld_1",
                        ideal: PREFERRED_ENVIRONMENT,
                    },
                ),
            ],
        }
    }

    /// Every referenced question must exist with the expected kind, scale length and options.
    pub fn validate_against(&self, catalog: &Catalog) -> Result<(), RulesError> {
        let scaled_ids = self.personality_items.iter().copied().chain(
            self.dimensions.iter().filter_map(|(_, source)| match source {
                DimensionSource::Scaled(id) => Some(*id),
                DimensionSource::Aligned { .. } => None,
            }),
        );
        for id in scaled_ids {
            let question = lookup(catalog, id, QuestionKind::Scaled)?;
            if question.options.len() != usize::from(self.scale_max) {
                return Err(RulesError::ScaleMismatch {
                    question_id: id.to_string(),
                    expected: self.scale_max,
                    actual: question.options.len(),
                });
            }
        }

        let literals = self.answer_key.iter().copied().chain(
            self.dimensions.iter().filter_map(|(_, source)| match source {
                DimensionSource::Aligned { question_id, ideal } => Some((*question_id, *ideal)),
                DimensionSource::Scaled(_) => None,
            }),
        );
        for (id, literal) in literals {
            let question = lookup(catalog, id, QuestionKind::Choice)?;
            if !question.has_option(literal) {
                return Err(RulesError::MissingLiteral {
                    question_id: id.to_string(),
                    literal: literal.to_string(),
                });
            }
        }

        Ok(())
    }
}

fn lookup<'c>(
    catalog: &'c Catalog,
    id: &str,
    expected: QuestionKind,
) -> Result<&'c Question, RulesError> {
    let question = catalog
        .find(id)
        .ok_or_else(|| RulesError::UnknownQuestion(id.to_string()))?;
    if question.kind != expected {
        return Err(RulesError::WrongKind {
            question_id: id.to_string(),
            expected,
        });
    }
    Ok(question)
}

// ────────────────────────────────────────────────────────────────────────────
// Unrounded breakdown
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    Proceed,
    Conditional,
    ExploreAlternatives,
}

impl Recommendation {
    /// Lower bound of each tier is inclusive.
    pub fn from_overall(overall: f64) -> Self {
        match overall {
            s if s >= 70.0 => Recommendation::Proceed,
            s if s >= 40.0 => Recommendation::Conditional,
            _ => Recommendation::ExploreAlternatives,
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Recommendation::Proceed => "Strong alignment - Pursue this path!",
            Recommendation::Conditional => "Moderate alignment - Consider with preparation",
            Recommendation::ExploreAlternatives => "Low alignment - Explore alternatives",
        }
    }
}

/// Full-precision scores, each in `[0, 100]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub personality: f64,
    pub technical: f64,
    pub dimensions: BTreeMap<Dimension, f64>,
    pub overall_dimension: f64,
    pub overall: f64,
}

impl ScoreBreakdown {
    pub fn dimension(&self, dimension: Dimension) -> f64 {
        self.dimensions.get(&dimension).copied().unwrap_or(0.0)
    }

    pub fn recommendation(&self) -> Recommendation {
        Recommendation::from_overall(self.overall)
    }
}

pub fn compute_breakdown(rules: &ScoringRules, responses: &ResponseSet) -> ScoreBreakdown {
    let scale_max = f64::from(rules.scale_max);
    let rank_percent = |id: &str| 100.0 * responses.rank(id).unwrap_or(0) as f64 / scale_max;

    let personality = mean(rules.personality_items.iter().map(|id| rank_percent(*id)));

    let technical = mean(rules.answer_key.iter().map(|(id, correct)| {
        if responses.choice(id) == Some(*correct) {
            100.0
        } else {
            0.0
        }
    }));

    let dimensions: BTreeMap<Dimension, f64> = rules
        .dimensions
        .iter()
        .map(|(dimension, source)| {
            let score = match source {
                DimensionSource::Scaled(id) => rank_percent(*id),
                DimensionSource::Aligned { question_id, ideal } => {
                    if responses.choice(question_id) == Some(*ideal) {
                        ALIGNED_SCORE
                    } else {
                        NEUTRAL_SCORE
                    }
                }
            };
            (*dimension, score)
        })
        .collect();

    let overall_dimension = mean(dimensions.values().copied());
    let overall = (personality + technical + overall_dimension) / 3.0;

    ScoreBreakdown {
        personality,
        technical,
        dimensions,
        overall_dimension,
        overall,
    }
}

/// Mean of percentages; an empty rule list scores 0.
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Rounds a percentage once, at the presentation boundary.
pub fn to_percent(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Presented result + scorer backends
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub personality_score: u32,
    pub technical_score: u32,
    pub dimension_scores: BTreeMap<Dimension, u32>,
    pub overall_dimension_score: u32,
    pub overall_score: u32,
    pub recommendation: Recommendation,
    pub headline: String,
    pub insights: Vec<String>,
    pub next_steps: Vec<String>,
    pub alternatives: Vec<CareerAlternative>,
    pub role_matches: Vec<RoleMatch>,
    pub scorer_backend: String, // for transparency
}

impl AssessmentResult {
    pub fn from_breakdown(breakdown: &ScoreBreakdown, scorer_backend: &str) -> Self {
        let recommendation = breakdown.recommendation();
        Self {
            personality_score: to_percent(breakdown.personality),
            technical_score: to_percent(breakdown.technical),
            dimension_scores: breakdown
                .dimensions
                .iter()
                .map(|(d, v)| (*d, to_percent(*v)))
                .collect(),
            overall_dimension_score: to_percent(breakdown.overall_dimension),
            overall_score: to_percent(breakdown.overall),
            recommendation,
            headline: recommendation.headline().to_string(),
            insights: evaluate_insights(breakdown),
            next_steps: next_steps(recommendation),
            alternatives: career_alternatives(),
            role_matches: role_matches(breakdown),
            scorer_backend: scorer_backend.to_string(),
        }
    }
}

/// Pure, deterministic scorer. Implement this to swap scoring backends.
///
/// Carried in `AppState` as `Arc<dyn Scorer>`.
pub trait Scorer: Send + Sync {
    fn score(&self, responses: &ResponseSet) -> AssessmentResult;
}

/// Rule-table scorer over the WISCAR framework.
pub struct WiscarScorer {
    rules: ScoringRules,
}

impl WiscarScorer {
    /// Rules must already be validated against the catalog the responses come from.
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }
}

impl Scorer for WiscarScorer {
    fn score(&self, responses: &ResponseSet) -> AssessmentResult {
        let breakdown = compute_breakdown(&self.rules, responses);
        AssessmentResult::from_breakdown(&breakdown, "wiscar")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
