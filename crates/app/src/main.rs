use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use practice_core::ProblemBank;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidStartIndex { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidStartIndex { raw } => {
                write!(f, "invalid --start-index value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    bank: ProblemBank,
    start_index: usize,
}

impl UiApp for DesktopApp {
    fn problem_bank(&self) -> ProblemBank {
        self.bank.clone()
    }

    fn start_index(&self) -> usize {
        self.start_index
    }
}

struct Args {
    start_index: usize,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--start-index <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --start-index 0   (taken modulo the problem count)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MATRIX_PRACTICE_START");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut start_index = std::env::var("MATRIX_PRACTICE_START")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(0);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--start-index" => {
                    let value = require_value(args, "--start-index")?;
                    start_index = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidStartIndex { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { start_index })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        bank: ProblemBank::builtin(),
        start_index: parsed.start_index,
    });
    let context = build_app_context(&app);

    // Explicitly not always-on-top; some dev setups default to a modal-like
    // window otherwise.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Matrix Practice")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
