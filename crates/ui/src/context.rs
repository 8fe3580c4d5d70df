use std::sync::Arc;

use practice_core::{PracticeSession, ProblemBank};

/// What the composition root (e.g. `crates/app`) must provide to the UI.
pub trait UiApp: Send + Sync {
    fn problem_bank(&self) -> ProblemBank;

    /// Index of the problem to open on launch, taken modulo the bank size.
    fn start_index(&self) -> usize;
}

#[derive(Clone)]
pub struct AppContext {
    bank: Arc<ProblemBank>,
    start_index: usize,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            bank: Arc::new(app.problem_bank()),
            start_index: app.start_index(),
        }
    }

    #[must_use]
    pub fn problem_bank(&self) -> &ProblemBank {
        &self.bank
    }

    /// Create the session the widget owns for its whole lifetime. The session
    /// is mutated only through its own operations; views re-read it after
    /// each event instead of keeping derived copies.
    #[must_use]
    pub fn start_session(&self) -> PracticeSession {
        PracticeSession::new((*self.bank).clone()).with_start_index(self.start_index)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
