use super::test_harness::setup_view_harness;

#[test]
fn practice_view_renders_first_problem() {
    let mut harness = setup_view_harness(0);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Verifying Matrix Inverses"),
        "missing title in {html}"
    );
    assert!(
        html.contains("What are Matrix Inverses?"),
        "missing explainer in {html}"
    );
    // Problem 0's matrices include fractional tokens.
    assert!(html.contains("1/3"), "missing matrix token in {html}");
    assert!(html.contains("-1/6"), "missing matrix token in {html}");
    assert!(html.contains("Check"), "missing check button in {html}");
    assert!(html.contains("Skip"), "missing skip button in {html}");
}

#[test]
fn practice_view_renders_one_dot_per_problem() {
    let mut harness = setup_view_harness(0);
    harness.rebuild();
    let html = harness.render();

    let dots = html.matches("class=\"progress-dot").count();
    assert_eq!(dots, 5, "expected 5 progress dots in {html}");
    assert!(
        html.contains("progress-dot--active"),
        "missing active dot in {html}"
    );
}

#[test]
fn practice_view_respects_start_index() {
    let mut harness = setup_view_harness(1);
    harness.rebuild();
    let html = harness.render();

    // Problem 1's matrix B starts with 2, -2, 2.
    assert!(html.contains("-2"), "missing matrix token in {html}");
    // The result panel stays hidden until the solution is revealed.
    assert!(!html.contains("Great Job!"), "result panel leaked in {html}");
}
