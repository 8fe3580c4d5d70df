use dioxus::prelude::*;

/// A bracketed 3×3 matrix of static tokens, row-major.
#[component]
pub fn MatrixGrid(cells: Vec<String>) -> Element {
    let entries = cells.iter().map(|cell| {
        rsx! {
            span { class: "matrix-cell", "{cell}" }
        }
    });

    rsx! {
        div { class: "matrix",
            span { class: "matrix-bracket matrix-bracket--left", aria_hidden: "true" }
            div { class: "matrix-grid",
                {entries}
            }
            span { class: "matrix-bracket matrix-bracket--right", aria_hidden: "true" }
        }
    }
}
