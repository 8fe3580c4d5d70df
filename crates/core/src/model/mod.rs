mod problem;
mod verdict;

pub use problem::{CELL_COUNT, IDENTITY_TOKENS, ProblemRecord};
pub use verdict::CellVerdict;
