use serde::{Deserialize, Serialize};

/// Per-cell correctness tag assigned during answer checking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellVerdict {
    /// Not yet checked, or edited since the last check.
    #[default]
    Unset,
    Correct,
    Incorrect,
}

impl CellVerdict {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, CellVerdict::Correct)
    }
}
