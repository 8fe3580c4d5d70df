use practice_core::{CellVerdict, PracticeSession};

pub const INVERSE_MESSAGE: &str = "You've correctly identified that A × B equals the identity \
     matrix, confirming these matrices are inverses!";

pub const NOT_INVERSE_MESSAGE: &str = "Great work! You've correctly found the product of A × B. \
     Notice that it's not the identity matrix, meaning these matrices are not inverses of each \
     other!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerCellVm {
    pub value: String,
    pub status_class: &'static str,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeVm {
    pub matrix_a: Vec<String>,
    pub matrix_b: Vec<String>,
    pub cells: Vec<AnswerCellVm>,
    pub dot_classes: Vec<&'static str>,
    pub show_solution: bool,
    pub outcome_message: &'static str,
    pub advance_label: &'static str,
    pub is_last_problem: bool,
}

fn status_class(verdict: CellVerdict) -> &'static str {
    match verdict {
        CellVerdict::Unset => "answer-cell",
        CellVerdict::Correct => "answer-cell answer-cell--correct",
        CellVerdict::Incorrect => "answer-cell answer-cell--incorrect",
    }
}

#[must_use]
pub fn map_practice(session: &PracticeSession) -> PracticeVm {
    let problem = session.current_problem();
    let locked = session.locked();

    let cells = session
        .answers()
        .iter()
        .zip(session.verdicts().iter())
        .map(|(value, verdict)| AnswerCellVm {
            value: value.clone(),
            status_class: status_class(*verdict),
            disabled: locked,
        })
        .collect();

    let active = session.active_index();
    let dot_classes = session
        .completed()
        .iter()
        .enumerate()
        .map(|(index, done)| {
            if *done {
                "progress-dot progress-dot--done"
            } else if index == active {
                "progress-dot progress-dot--active"
            } else {
                "progress-dot"
            }
        })
        .collect();

    let outcome_message = if problem.is_inverse() {
        INVERSE_MESSAGE
    } else {
        NOT_INVERSE_MESSAGE
    };

    let is_last_problem = session.is_last_problem();
    let advance_label = if is_last_problem {
        "Start Over"
    } else {
        "Next Problem"
    };

    PracticeVm {
        matrix_a: problem.matrix_a().to_vec(),
        matrix_b: problem.matrix_b().to_vec(),
        cells,
        dot_classes,
        show_solution: session.solution_revealed(),
        outcome_message,
        advance_label,
        is_last_problem,
    }
}
