//! Question catalog: the fixed, ordered questionnaire for the Cross-Functional Leadership path.
//!
//! The catalog is built once at startup and never mutated. Scoring refers to questions by id
//! and to the designated answer literals below.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::assessment::error::{AnswerError, CatalogError};
use crate::assessment::responses::{AnswerValue, ResponseSet};

pub const AGILE_DEFINITION: &str =
    "A project management approach focused on delivering working software in short iterations";
pub const PRODUCT_OWNER_DUTY: &str = "Managing the product backlog and defining user stories";
pub const KPI_PURPOSE: &str = "Measure and track progress toward business objectives";
pub const CONFLICT_FIRST_STEP: &str =
    "Schedule a meeting with both departments to understand their perspectives";
pub const PREFERRED_ENVIRONMENT: &str =
    "Fast-paced, cross-functional teams with ambiguous challenges";

const AGREEMENT: &[&str] = &[
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];
const FREQUENCY: &[&str] = &["Never", "Rarely", "Sometimes", "Often", "Always"];
const ALIGNMENT: &[&str] = &["Not at all", "Slightly", "Moderately", "Very much", "Completely"];
const PROFICIENCY: &[&str] = &["Poor", "Fair", "Good", "Very Good", "Excellent"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Answered with a rank in `1..=options.len()`; options are the rank labels, low→high.
    Scaled,
    /// Answered with one of the option literals.
    Choice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub category: String,
    pub prompt: String,
    pub kind: QuestionKind,
    pub options: Vec<String>,
}

impl Question {
    pub fn scaled(id: &str, category: &str, prompt: &str, labels: &[&str]) -> Self {
        Self::build(id, category, prompt, QuestionKind::Scaled, labels)
    }

    pub fn choice(id: &str, category: &str, prompt: &str, options: &[&str]) -> Self {
        Self::build(id, category, prompt, QuestionKind::Choice, options)
    }

    fn build(id: &str, category: &str, prompt: &str, kind: QuestionKind, options: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            category: category.to_string(),
            prompt: prompt.to_string(),
            kind,
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    /// Top rank of a scaled question. Saturates for absurdly long scales.
    pub fn scale_max(&self) -> Option<u8> {
        match self.kind {
            QuestionKind::Scaled => Some(u8::try_from(self.options.len()).unwrap_or(u8::MAX)),
            QuestionKind::Choice => None,
        }
    }

    pub fn has_option(&self, literal: &str) -> bool {
        self.options.iter().any(|o| o == literal)
    }

    /// Checks that `value` lies in this question's answer domain.
    pub fn accepts(&self, value: &AnswerValue) -> Result<(), AnswerError> {
        match (self.kind, value) {
            (QuestionKind::Scaled, AnswerValue::Rank(rank)) => {
                let max = self.scale_max().unwrap_or(0);
                if *rank < 1 || *rank > i64::from(max) {
                    return Err(AnswerError::RankOutOfRange {
                        question_id: self.id.clone(),
                        rank: *rank,
                        max,
                    });
                }
                Ok(())
            }
            (QuestionKind::Choice, AnswerValue::Choice(literal)) => {
                if self.has_option(literal) {
                    Ok(())
                } else {
                    Err(AnswerError::UnrecognizedOption {
                        question_id: self.id.clone(),
                        value: literal.clone(),
                    })
                }
            }
            (expected, _) => Err(AnswerError::KindMismatch {
                question_id: self.id.clone(),
                expected,
            }),
        }
    }
}

/// Ordered, validated question sequence. Never empty, ids unique.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateId(question.id.clone()));
            }
            if question.options.is_empty() {
                return Err(CatalogError::NoOptions(question.id.clone()));
            }
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn find(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    pub fn validate_answer(&self, question_id: &str, value: &AnswerValue) -> Result<(), AnswerError> {
        self.find(question_id)
            .ok_or_else(|| AnswerError::UnknownQuestion(question_id.to_string()))?
            .accepts(value)
    }

    /// Validates every entry of an externally supplied response set.
    pub fn validate_responses(&self, responses: &ResponseSet) -> Result<(), AnswerError> {
        responses
            .iter()
            .try_for_each(|(id, value)| self.validate_answer(id, value))
    }

    /// Catalog ids that have no answer in `responses`, in catalog order.
    pub fn unanswered(&self, responses: &ResponseSet) -> Vec<String> {
        self.questions
            .iter()
            .filter(|q| !responses.contains(&q.id))
            .map(|q| q.id.clone())
            .collect()
    }
}

/// The thirteen-question Cross-Functional Leadership readiness questionnaire.
pub fn leadership_catalog() -> Result<Catalog, CatalogError> {
    const PERSONALITY: &str = "Interest & Personality";
    const KNOWLEDGE: &str = "Technical Knowledge";

    Catalog::new(vec![
        // Psychometric
        Question::scaled(
            "psych_1",
            PERSONALITY,
            "I enjoy bringing people from different teams together to solve problems.",
            AGREEMENT,
        ),
        Question::scaled(
            "psych_2",
            PERSONALITY,
            "I prefer structured tasks over ambiguous, high-level problem spaces.",
            AGREEMENT,
        ),
        Question::scaled(
            "psych_3",
            PERSONALITY,
            "I am energized by influencing without formal authority.",
            AGREEMENT,
        ),
        Question::scaled(
            "psych_4",
            PERSONALITY,
            "I bounce back quickly from interpersonal conflict.",
            AGREEMENT,
        ),
        // Technical & aptitude
        Question::choice(
            "tech_1",
            KNOWLEDGE,
            "Which of the following best describes Agile methodology?",
            &[
                AGILE_DEFINITION,
                "A programming language used for web development",
                "A type of database management system",
                "A marketing strategy for software products",
            ],
        ),
        Question::choice(
            "tech_2",
            KNOWLEDGE,
            "What is a key responsibility of a Product Owner in Scrum?",
            &[
                "Writing code for the product",
                PRODUCT_OWNER_DUTY,
                "Conducting daily standup meetings",
                "Testing the final product",
            ],
        ),
        Question::choice(
            "tech_3",
            KNOWLEDGE,
            "KPIs (Key Performance Indicators) are primarily used to:",
            &[
                KPI_PURPOSE,
                "Assign tasks to team members",
                "Schedule meetings and events",
                "Create user interface designs",
            ],
        ),
        // WISCAR
        Question::scaled(
            "will_1",
            "Will & Drive",
            "How often do you proactively seek leadership opportunities?",
            FREQUENCY,
        ),
        Question::scaled(
            "interest_1",
            "Interest & Alignment",
            "How much does cross-functional leadership align with your career goals?",
            ALIGNMENT,
        ),
        Question::scaled(
            "skill_1",
            "Current Skills",
            "Rate your current stakeholder management skills.",
            PROFICIENCY,
        ),
        Question::choice(
            "cognitive_1",
            "Cognitive Readiness",
            "You're leading a project where two departments have conflicting priorities. What's your first step?",
            &[
                CONFLICT_FIRST_STEP,
                "Make a decision based on which department has more seniority",
                "Escalate the issue to upper management immediately",
                "Choose the solution that seems most cost-effective",
            ],
        ),
        Question::scaled(
            "ability_1",
            "Learning Ability",
            "I actively seek feedback to improve my performance.",
            AGREEMENT,
        ),
        Question::choice(
            "realworld_1",
            "Real-World Fit",
            "Which work environment appeals to you most?",
            &[
                PREFERRED_ENVIRONMENT,
                "Structured, predictable tasks within a single department",
                "Independent work with minimal collaboration",
                "Creative projects with flexible deadlines",
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leadership_catalog_is_valid_and_ordered() {
        let catalog = leadership_catalog().unwrap();
        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.questions()[0].id, "psych_1");
        assert_eq!(catalog.questions()[12].id, "realworld_1");
    }

    #[test]
    fn test_scaled_questions_use_five_point_scales() {
        let catalog = leadership_catalog().unwrap();
        for q in catalog.questions().iter().filter(|q| q.kind == QuestionKind::Scaled) {
            assert_eq!(q.scale_max(), Some(5), "question {}", q.id);
        }
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(Catalog::new(vec![]).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let q = Question::scaled("a", "c", "p", AGREEMENT);
        let err = Catalog::new(vec![q.clone(), q]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("a".to_string()));
    }

    #[test]
    fn test_question_without_options_rejected() {
        let q = Question::choice("empty", "c", "p", &[]);
        let err = Catalog::new(vec![q]).unwrap_err();
        assert_eq!(err, CatalogError::NoOptions("empty".to_string()));
    }

    #[test]
    fn test_rank_bounds_enforced() {
        let catalog = leadership_catalog().unwrap();
        assert!(catalog.validate_answer("will_1", &AnswerValue::Rank(1)).is_ok());
        assert!(catalog.validate_answer("will_1", &AnswerValue::Rank(5)).is_ok());
        assert_eq!(
            catalog.validate_answer("will_1", &AnswerValue::Rank(0)),
            Err(AnswerError::RankOutOfRange {
                question_id: "will_1".to_string(),
                rank: 0,
                max: 5,
            })
        );
        assert!(catalog.validate_answer("will_1", &AnswerValue::Rank(6)).is_err());
        assert!(catalog.validate_answer("will_1", &AnswerValue::Rank(-1)).is_err());
        assert_eq!(
            catalog.validate_answer("will_1", &AnswerValue::Rank(300)),
            Err(AnswerError::RankOutOfRange {
                question_id: "will_1".to_string(),
                rank: 300,
                max: 5,
            })
        );
    }

    #[test]
    fn test_choice_literal_must_match_exactly() {
        let catalog = leadership_catalog().unwrap();
        assert!(catalog
            .validate_answer("tech_3", &AnswerValue::from(KPI_PURPOSE))
            .is_ok());
        let err = catalog
            .validate_answer("tech_3", &AnswerValue::from("measure and track progress"))
            .unwrap_err();
        assert!(matches!(err, AnswerError::UnrecognizedOption { .. }));
    }

    #[test]
    fn test_kind_mismatch_and_unknown_id() {
        let catalog = leadership_catalog().unwrap();
        assert_eq!(
            catalog.validate_answer("tech_1", &AnswerValue::Rank(1)),
            Err(AnswerError::KindMismatch {
                question_id: "tech_1".to_string(),
                expected: QuestionKind::Choice,
            })
        );
        assert_eq!(
            catalog.validate_answer("nope", &AnswerValue::Rank(1)),
            Err(AnswerError::UnknownQuestion("nope".to_string()))
        );
    }

    #[test]
    fn test_unanswered_lists_in_catalog_order() {
        let catalog = leadership_catalog().unwrap();
        let mut responses = ResponseSet::new();
        for q in catalog.questions().iter().skip(2) {
            let value = match q.kind {
                QuestionKind::Scaled => AnswerValue::Rank(3),
                QuestionKind::Choice => AnswerValue::Choice(q.options[0].clone()),
            };
            responses.insert(q.id.clone(), value);
        }
        assert_eq!(catalog.unanswered(&responses), vec!["psych_1", "psych_2"]);
        assert!(catalog.validate_responses(&responses).is_ok());
    }
}
