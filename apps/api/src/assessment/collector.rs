use std::sync::Arc;

use crate::assessment::catalog::{Catalog, Question};
use crate::assessment::error::{CollectorError, Direction};
use crate::assessment::responses::{AnswerValue, ResponseSet};

/// Linear cursor over the catalog that records one answer per question.
///
/// Position always stays within `0..catalog.len()`; a failed move leaves it untouched.
#[derive(Debug, Clone)]
pub struct Collector {
    catalog: Arc<Catalog>,
    position: usize,
    responses: ResponseSet,
}

impl Collector {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            position: 0,
            responses: ResponseSet::new(),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.catalog.len()
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn current_question(&self) -> &Question {
        // position < len and the catalog is never empty
        &self.catalog.questions()[self.position]
    }

    pub fn progress(&self) -> f64 {
        (self.position + 1) as f64 / self.catalog.len() as f64
    }

    /// Inserts or overwrites the answer for `question_id`. Does not move the cursor.
    pub fn record_answer(
        &mut self,
        question_id: &str,
        value: AnswerValue,
    ) -> Result<(), CollectorError> {
        self.catalog.validate_answer(question_id, &value)?;
        self.responses.insert(question_id, value);
        Ok(())
    }

    pub fn advance(&mut self) -> Result<usize, CollectorError> {
        let current = self.current_question();
        if !self.responses.contains(&current.id) {
            return Err(CollectorError::Unanswered {
                question_id: current.id.clone(),
            });
        }
        if self.position + 1 >= self.catalog.len() {
            return Err(CollectorError::NavigationBoundary {
                position: self.position,
                direction: Direction::Forward,
            });
        }
        self.position += 1;
        Ok(self.position)
    }

    pub fn retreat(&mut self) -> Result<usize, CollectorError> {
        if self.position == 0 {
            return Err(CollectorError::NavigationBoundary {
                position: 0,
                direction: Direction::Backward,
            });
        }
        self.position -= 1;
        Ok(self.position)
    }

    /// On the last question with every catalog id answered.
    pub fn is_complete(&self) -> bool {
        self.position + 1 == self.catalog.len() && self.catalog.unanswered(&self.responses).is_empty()
    }

    /// Snapshot of the response set for scoring. The collector keeps its own copy.
    pub fn finish(&self) -> Result<ResponseSet, CollectorError> {
        if !self.is_complete() {
            return Err(CollectorError::Incomplete {
                missing: self.catalog.unanswered(&self.responses),
            });
        }
        Ok(self.responses.clone())
    }
}
