use thiserror::Error;

use crate::model::ProblemRecord;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BankError {
    /// Session progression rotates modulo the bank size, so an empty bank
    /// would have no well-defined active problem.
    #[error("problem bank must contain at least one record")]
    Empty,
}

/// Ordered, read-only set of practice items presented in rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemBank {
    problems: Vec<ProblemRecord>,
}

impl ProblemBank {
    /// # Errors
    ///
    /// Returns `BankError::Empty` if no records are given.
    pub fn new(problems: Vec<ProblemRecord>) -> Result<Self, BankError> {
        if problems.is_empty() {
            return Err(BankError::Empty);
        }
        Ok(Self { problems })
    }

    /// The five compiled-in matrix pairs the widget ships with. Three are
    /// genuine inverse pairs; two multiply to something other than the
    /// identity.
    #[must_use]
    pub fn builtin() -> Self {
        let problems = vec![
            ProblemRecord::new(
                ["3", "1", "2", "0", "2", "-1", "1", "-1", "1"],
                ["1/3", "0", "-1/3", "-1/6", "1/2", "2/3", "1/6", "1/2", "1/3"],
                ["1", "0", "0", "0", "1", "0", "0", "0", "1"],
            ),
            ProblemRecord::new(
                ["1", "2", "0", "0", "1", "1", "1", "0", "1"],
                ["2", "-2", "2", "0", "1", "-1", "-1", "2", "0"],
                ["2", "0", "0", "-1", "3", "-1", "1", "0", "2"],
            ),
            ProblemRecord::new(
                ["2", "0", "0", "1", "1", "0", "3", "2", "1"],
                ["1/2", "0", "0", "-1/2", "1", "0", "-1", "-2", "1"],
                ["1", "0", "0", "0", "1", "0", "0", "0", "1"],
            ),
            ProblemRecord::new(
                ["1", "1", "1", "0", "1", "1", "0", "0", "1"],
                ["2", "-1", "0", "0", "1", "-1", "0", "0", "1"],
                ["2", "0", "0", "0", "1", "0", "0", "0", "1"],
            ),
            ProblemRecord::new(
                ["2", "1", "-1", "-1", "1", "0", "1", "1", "1"],
                ["1/3", "-1/3", "-1/3", "1/3", "2/3", "-1/3", "0", "0", "1"],
                ["1", "0", "0", "0", "1", "0", "0", "0", "1"],
            ),
        ];

        Self { problems }
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range. Callers derive the index modulo
    /// `count()`, so an out-of-range index is a programming defect.
    #[must_use]
    pub fn get(&self, index: usize) -> &ProblemRecord {
        &self.problems[index]
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.problems.len()
    }
}
