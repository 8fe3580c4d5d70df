use crate::bank::ProblemBank;
use crate::model::{CELL_COUNT, CellVerdict, ProblemRecord};

/// Mutable state for one learner working through the problem bank.
///
/// Every operation is a total function: malformed or empty input is accepted
/// into the answer buffer and simply compared for exact string equality at
/// check time. Nothing here parses numbers or normalizes tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeSession {
    bank: ProblemBank,
    active_index: usize,
    answers: [String; CELL_COUNT],
    verdicts: [CellVerdict; CELL_COUNT],
    locked: bool,
    solution_revealed: bool,
    completed: Vec<bool>,
}

impl PracticeSession {
    #[must_use]
    pub fn new(bank: ProblemBank) -> Self {
        let completed = vec![false; bank.count()];
        Self {
            bank,
            active_index: 0,
            answers: std::array::from_fn(|_| String::new()),
            verdicts: [CellVerdict::Unset; CELL_COUNT],
            locked: false,
            solution_revealed: false,
            completed,
        }
    }

    /// Start on a caller-chosen problem, taken modulo the bank size.
    #[must_use]
    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.active_index = start_index % self.bank.count();
        self
    }

    //
    // ─── READ ACCESSORS ────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn problem_count(&self) -> usize {
        self.bank.count()
    }

    #[must_use]
    pub fn current_problem(&self) -> &ProblemRecord {
        self.bank.get(self.active_index)
    }

    #[must_use]
    pub fn answers(&self) -> &[String; CELL_COUNT] {
        &self.answers
    }

    #[must_use]
    pub fn verdicts(&self) -> &[CellVerdict; CELL_COUNT] {
        &self.verdicts
    }

    #[must_use]
    pub fn locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn solution_revealed(&self) -> bool {
        self.solution_revealed
    }

    #[must_use]
    pub fn completed(&self) -> &[bool] {
        &self.completed
    }

    /// True when the active problem is the last one in the bank, at which
    /// point advancing wraps back to the start.
    #[must_use]
    pub fn is_last_problem(&self) -> bool {
        self.active_index + 1 == self.bank.count()
    }

    //
    // ─── OPERATIONS ────────────────────────────────────────────────────────────
    //

    /// Overwrite one answer cell. Rejected (no-op) while the session is
    /// locked. Editing a cell clears its stale verdict.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`; cell indices come from the fixed 3×3 grid, so
    /// an out-of-range index is a programming defect.
    pub fn set_cell(&mut self, index: usize, value: impl Into<String>) {
        if self.locked {
            return;
        }
        self.answers[index] = value.into();
        self.verdicts[index] = CellVerdict::Unset;
    }

    /// Grade every cell against the expected product. Returns true when all
    /// nine cells are correct, which also locks the session, reveals the
    /// solution panel, and marks the problem completed.
    pub fn check(&mut self) -> bool {
        let expected = self.bank.get(self.active_index).expected_product();
        for (verdict, (answer, expected)) in self
            .verdicts
            .iter_mut()
            .zip(self.answers.iter().zip(expected.iter()))
        {
            *verdict = if answer == expected {
                CellVerdict::Correct
            } else {
                CellVerdict::Incorrect
            };
        }

        let all_correct = self.verdicts.iter().all(|verdict| verdict.is_correct());
        if all_correct {
            self.locked = true;
            self.solution_revealed = true;
            self.completed[self.active_index] = true;
        } else {
            self.locked = false;
            self.solution_revealed = false;
        }
        all_correct
    }

    /// Fill in the expected product and show the solution without grading.
    ///
    /// The skipped problem is deliberately not marked completed, so its
    /// progress dot stays unfilled until the learner advances past it.
    pub fn reveal(&mut self) {
        let expected = self.bank.get(self.active_index).expected_product().clone();
        self.answers = expected;
        self.verdicts = [CellVerdict::Correct; CELL_COUNT];
        self.locked = true;
        self.solution_revealed = true;
    }

    /// Mark the active problem completed and rotate to the next one.
    pub fn advance(&mut self) {
        self.completed[self.active_index] = true;
        self.active_index = (self.active_index + 1) % self.bank.count();
        self.reset_problem_state();
    }

    /// Return to the first problem and forget all progress.
    pub fn reset_all(&mut self) {
        self.active_index = 0;
        self.completed.fill(false);
        self.reset_problem_state();
    }

    fn reset_problem_state(&mut self) {
        self.answers = std::array::from_fn(|_| String::new());
        self.verdicts = [CellVerdict::Unset; CELL_COUNT];
        self.locked = false;
        self.solution_revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IDENTITY_TOKENS;

    fn session() -> PracticeSession {
        PracticeSession::new(ProblemBank::builtin())
    }

    fn fill_identity(session: &mut PracticeSession) {
        for (index, token) in IDENTITY_TOKENS.iter().enumerate() {
            session.set_cell(index, *token);
        }
    }

    #[test]
    fn new_session_starts_blank_on_first_problem() {
        let session = session();

        assert_eq!(session.active_index(), 0);
        assert!(session.answers().iter().all(String::is_empty));
        assert!(
            session
                .verdicts()
                .iter()
                .all(|verdict| *verdict == CellVerdict::Unset)
        );
        assert!(!session.locked());
        assert!(!session.solution_revealed());
        assert!(session.completed().iter().all(|done| !done));
    }

    #[test]
    fn start_index_wraps_modulo_bank_size() {
        let session = session().with_start_index(7);
        assert_eq!(session.active_index(), 2);
    }

    #[test]
    fn correct_identity_submission_solves_first_problem() {
        let mut session = session();
        fill_identity(&mut session);

        assert!(session.check());
        assert!(
            session
                .verdicts()
                .iter()
                .all(|verdict| verdict.is_correct())
        );
        assert!(session.locked());
        assert!(session.solution_revealed());
        assert!(session.completed()[0]);
    }

    #[test]
    fn identity_submission_fails_non_inverse_problem() {
        let mut session = session();
        session.advance();
        assert_eq!(session.active_index(), 1);

        fill_identity(&mut session);
        assert!(!session.check());
        // Entry 1's product is [2,0,0,-1,3,-1,1,0,2]; the identity matches
        // none of its cells except where grading says otherwise per cell.
        assert!(!session.locked());
        assert!(!session.solution_revealed());
        assert_eq!(session.verdicts()[0], CellVerdict::Incorrect);
        assert_eq!(session.verdicts()[1], CellVerdict::Correct);
    }

    #[test]
    fn cells_are_graded_independently() {
        let mut session = session();
        session.set_cell(0, "1");
        session.set_cell(1, "wrong");

        session.check();

        assert_eq!(session.verdicts()[0], CellVerdict::Correct);
        assert_eq!(session.verdicts()[1], CellVerdict::Incorrect);
        // Untouched cells are empty and graded against their expected token.
        assert_eq!(session.verdicts()[4], CellVerdict::Incorrect);
    }

    #[test]
    fn no_numeric_normalization_happens() {
        let mut session = session();
        fill_identity(&mut session);
        session.set_cell(0, "1.0");

        session.check();

        assert_eq!(session.verdicts()[0], CellVerdict::Incorrect);
    }

    #[test]
    fn editing_is_rejected_while_locked() {
        let mut session = session();
        fill_identity(&mut session);
        session.check();
        assert!(session.locked());

        session.set_cell(0, "scribble");
        assert_eq!(session.answers()[0], "1");
    }

    #[test]
    fn editing_a_cell_clears_its_verdict() {
        let mut session = session();
        session.check();
        assert_eq!(session.verdicts()[3], CellVerdict::Incorrect);

        session.set_cell(3, "0");
        assert_eq!(session.verdicts()[3], CellVerdict::Unset);
        assert_eq!(session.verdicts()[4], CellVerdict::Incorrect);
    }

    #[test]
    fn reveal_fills_solution_without_completing() {
        let mut session = session();
        session.set_cell(0, "junk");

        session.reveal();

        assert_eq!(session.answers(), session.current_problem().expected_product());
        assert!(
            session
                .verdicts()
                .iter()
                .all(|verdict| verdict.is_correct())
        );
        assert!(session.locked());
        assert!(session.solution_revealed());
        assert!(!session.completed()[0]);
    }

    #[test]
    fn advance_is_a_full_rotation() {
        let mut session = session();
        let count = session.problem_count();
        let mut visited = Vec::new();

        for _ in 0..count {
            visited.push(session.active_index());
            session.advance();
        }

        assert_eq!(session.active_index(), 0);
        visited.sort_unstable();
        assert_eq!(visited, (0..count).collect::<Vec<_>>());
    }

    #[test]
    fn advance_from_last_problem_wraps_and_completes_it() {
        let mut session = session().with_start_index(4);
        assert!(session.is_last_problem());

        session.set_cell(0, "stale");
        session.advance();

        assert_eq!(session.active_index(), 0);
        assert!(session.completed()[4]);
        assert!(session.answers().iter().all(String::is_empty));
        assert!(!session.locked());
    }

    #[test]
    fn advance_keeps_earlier_completed_flags() {
        let mut session = session();
        session.advance();
        session.advance();

        assert_eq!(session.completed(), &[true, true, false, false, false]);
    }

    #[test]
    fn reset_all_forgets_everything() {
        let mut session = session();
        session.advance();
        session.advance();
        session.set_cell(0, "partial");

        session.reset_all();

        assert_eq!(session.active_index(), 0);
        assert!(session.completed().iter().all(|done| !done));
        assert!(session.answers().iter().all(String::is_empty));
        assert!(!session.locked());
        assert!(!session.solution_revealed());
    }
}
