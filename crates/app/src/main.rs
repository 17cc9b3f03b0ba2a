use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::QuestionBankService;
use storage::repository::Storage;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

const DEFAULT_TITLE: &str = "Physics test";

#[derive(Debug, Error)]
enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("unknown subcommand: {0}")]
    UnknownCommand(String),
    #[error("invalid --title value: title must not be empty")]
    EmptyTitle,
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    title: String,
    question_bank: Arc<QuestionBankService>,
}

impl UiApp for DesktopApp {
    fn test_title(&self) -> String {
        self.title.clone()
    }

    fn question_bank(&self) -> Arc<QuestionBankService> {
        Arc::clone(&self.question_bank)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--questions <path>] [--title <text>]");
    eprintln!("  cargo run -p app -- check [--questions <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --questions  built-in question bank");
    eprintln!("  --title      {DEFAULT_TITLE}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PHYSICS_TEST_QUESTIONS, PHYSICS_TEST_TITLE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Args {
    questions: Option<PathBuf>,
    title: String,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut questions = std::env::var("PHYSICS_TEST_QUESTIONS")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut title = std::env::var("PHYSICS_TEST_TITLE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    questions = Some(PathBuf::from(require_value(args, "--questions")?));
                }
                "--title" => {
                    let value = require_value(args, "--title")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyTitle);
                    }
                    title = value;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { questions, title })
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();
}

async fn open_storage(questions: Option<&PathBuf>) -> Result<Storage, Box<dyn std::error::Error>> {
    let storage = match questions {
        Some(path) => Storage::json_file(path).await?,
        None => Storage::builtin()?,
    };
    Ok(storage)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Launch the UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            print_usage();
            ArgsError::UnknownCommand(first.to_string())
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).inspect_err(|_| print_usage())?;

    init_tracing();

    let storage = open_storage(parsed.questions.as_ref()).await?;
    let question_bank = Arc::new(QuestionBankService::new(Arc::clone(&storage.questions)));

    match cmd {
        Command::Ui => {
            // Fail before opening a window if the bank cannot be read.
            let count = question_bank.load_questions().await?.len();
            info!(questions = count, title = %parsed.title, "launching test window");

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                title: parsed.title.clone(),
                question_bank,
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(parsed.title)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Check => {
            let questions = question_bank.load_questions().await?;
            let source = parsed
                .questions
                .as_ref()
                .map_or_else(|| "built-in bank".to_string(), |path| path.display().to_string());
            println!("{source}: {} valid questions", questions.len());
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
