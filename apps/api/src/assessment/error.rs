use thiserror::Error;
use uuid::Uuid;

use crate::assessment::catalog::QuestionKind;

/// Structural problems found while building a catalog.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("catalog must contain at least one question")]
    Empty,

    #[error("duplicate question id '{0}'")]
    DuplicateId(String),

    #[error("question '{0}' has no options")]
    NoOptions(String),
}

/// Why an answer was declined. Nothing is written when one of these is returned.
#[derive(Debug, Error, PartialEq)]
pub enum AnswerError {
    #[error("unknown question '{0}'")]
    UnknownQuestion(String),

    #[error("rank {rank} for question '{question_id}' is outside 1..={max}")]
    RankOutOfRange {
        question_id: String,
        rank: i64,
        max: u8,
    },

    #[error("question '{question_id}' expects a {expected:?} answer")]
    KindMismatch {
        question_id: String,
        expected: QuestionKind,
    },

    #[error("'{value}' is not an option of question '{question_id}'")]
    UnrecognizedOption { question_id: String, value: String },
}

/// Mismatch between the scoring rule table and the catalog it scores.
#[derive(Debug, Error, PartialEq)]
pub enum RulesError {
    #[error("scoring rule references unknown question '{0}'")]
    UnknownQuestion(String),

    #[error("scoring rule expects question '{question_id}' to be {expected:?}")]
    WrongKind {
        question_id: String,
        expected: QuestionKind,
    },

    #[error("question '{question_id}' has {actual} scale points, scoring expects {expected}")]
    ScaleMismatch {
        question_id: String,
        expected: u8,
        actual: usize,
    },

    #[error("designated answer '{literal}' is not an option of question '{question_id}'")]
    MissingLiteral { question_id: String, literal: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Error, PartialEq)]
pub enum CollectorError {
    #[error("invalid answer: {0}")]
    InvalidAnswer(#[from] AnswerError),

    #[error("cannot move {direction:?} from position {position}")]
    NavigationBoundary { position: usize, direction: Direction },

    #[error("question '{question_id}' must be answered before advancing")]
    Unanswered { question_id: String },

    #[error("assessment incomplete, unanswered: {missing:?}")]
    Incomplete { missing: Vec<String> },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session {0} not found")]
    NotFound(Uuid),

    #[error("session limit of {0} reached")]
    CapacityExceeded(usize),

    #[error(transparent)]
    Collector(#[from] CollectorError),
}
