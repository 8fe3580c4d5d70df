use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use practice_core::ProblemBank;

use crate::context::{UiApp, build_app_context};
use crate::views::PracticeView;

#[derive(Clone)]
struct TestApp {
    bank: ProblemBank,
    start_index: usize,
}

impl UiApp for TestApp {
    fn problem_bank(&self) -> ProblemBank {
        self.bank.clone()
    }

    fn start_index(&self) -> usize {
        self.start_index
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { PracticeView {} }
}

pub struct Harness {
    pub dom: VirtualDom,
}

impl Harness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(start_index: usize) -> Harness {
    let app = Arc::new(TestApp {
        bank: ProblemBank::builtin(),
        start_index,
    });

    let dom = VirtualDom::new_with_props(ViewHarness, ViewHarnessProps { app });

    Harness { dom }
}
