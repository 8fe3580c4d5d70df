use dioxus::prelude::*;
use practice_core::IDENTITY_TOKENS;

use crate::context::AppContext;
use crate::views::MatrixGrid;
use crate::vm::map_practice;

/// The matrix-inverse practice widget: explainer, progress dots, the two
/// matrices, the answer grid, and the result panel.
///
/// The widget owns a single `PracticeSession` for its whole lifetime. Every
/// handler mutates the session through one controller operation and the view
/// re-reads the state on the next render; no derived state is cached.
#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_signal(move || ctx.start_session());

    let vm = map_practice(&session.read());
    let identity_cells: Vec<String> = IDENTITY_TOKENS
        .iter()
        .map(|token| (*token).to_string())
        .collect();

    let dots = vm.dot_classes.iter().map(|class| {
        rsx! {
            span { class: "{class}" }
        }
    });

    let answer_cells = vm.cells.iter().enumerate().map(|(index, cell)| {
        let value = cell.value.clone();
        let class = cell.status_class;
        let disabled = cell.disabled;
        rsx! {
            input {
                class: "{class}",
                r#type: "text",
                value: "{value}",
                disabled: disabled,
                oninput: move |evt| session.write().set_cell(index, evt.value()),
            }
        }
    });

    rsx! {
        div { class: "page practice-page",
            header { class: "view-header",
                h2 { class: "view-title", "Verifying Matrix Inverses" }
                p { class: "view-subtitle",
                    "Test your understanding of matrix inverses and their properties!"
                }
            }
            div { class: "view-divider" }

            section { class: "explainer-panel",
                h3 { class: "explainer-title", "What are Matrix Inverses?" }
                p {
                    "Two matrices A and B are multiplicative inverses of each other if and only if:"
                }
                p { class: "explainer-formula", "A × B = B × A = I" }
                p {
                    "Where I is the identity matrix (1's on the main diagonal, 0's elsewhere)."
                }
                div { class: "matrix-row",
                    figure { class: "matrix-figure",
                        figcaption { "3×3 Identity Matrix:" }
                        MatrixGrid { cells: identity_cells }
                    }
                }
            }

            section { class: "practice-panel",
                div { class: "practice-heading",
                    h3 { class: "practice-title", "Practice" }
                    div { class: "progress-dots",
                        {dots}
                    }
                }
                p { "Check if the following two 3×3 matrices are inverses of each other:" }

                div { class: "matrix-row",
                    figure { class: "matrix-figure",
                        figcaption { "Matrix A:" }
                        MatrixGrid { cells: vm.matrix_a.clone() }
                    }
                    figure { class: "matrix-figure",
                        figcaption { "Matrix B:" }
                        MatrixGrid { cells: vm.matrix_b.clone() }
                    }
                }

                div { class: "answer-section",
                    h4 { class: "answer-title", "Step 1: Calculate A × B" }
                    p { "Fill in the result of A × B in the table below:" }
                    div { class: "matrix matrix--answer",
                        span { class: "matrix-bracket matrix-bracket--left", aria_hidden: "true" }
                        div { class: "answer-grid",
                            {answer_cells}
                        }
                        span { class: "matrix-bracket matrix-bracket--right", aria_hidden: "true" }
                    }
                }

                if !vm.show_solution {
                    div { class: "practice-actions",
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| {
                                session.write().check();
                            },
                            "Check"
                        }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| session.write().reveal(),
                            "Skip"
                        }
                    }
                }

                if vm.show_solution {
                    div { class: "result-panel",
                        h4 { class: "result-title", "Great Job!" }
                        p { class: "result-message", "{vm.outcome_message}" }
                        button {
                            class: "btn btn-primary result-advance",
                            r#type: "button",
                            onclick: move |_| {
                                let mut session = session.write();
                                if session.is_last_problem() {
                                    session.reset_all();
                                } else {
                                    session.advance();
                                }
                            },
                            "{vm.advance_label}"
                        }
                    }
                }
            }

            p { class: "view-footnote",
                "Understanding matrix inverses is crucial for linear algebra and many applications!"
            }
        }
    }
}
