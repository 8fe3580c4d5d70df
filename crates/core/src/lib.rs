#![forbid(unsafe_code)]

pub mod bank;
pub mod model;
pub mod session;

pub use bank::{BankError, ProblemBank};
pub use model::{CELL_COUNT, CellVerdict, IDENTITY_TOKENS, ProblemRecord};
pub use session::PracticeSession;
