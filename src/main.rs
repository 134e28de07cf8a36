use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use spamzero::{
    config,
    domain::ScanMode,
    headless::scan_once,
    infrastructure::{
        directories,
        logging::{self, Console},
    },
    scan::{resolve_timezone, InputPanel, ResultView},
    service::{ClassificationService, HttpClassifier},
    tui::run_tui,
};

#[derive(Parser)]
#[command(name = "spamzero")]
#[command(about = "Scan a message or a Gmail inbox with the SpamZero classifier", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive scan form (default)
    Tui,

    /// Classify a single message and print the verdict
    Message {
        #[arg(long)]
        email: String,
        #[arg(long)]
        text: String,
    },

    /// Scan the mailbox behind the classifier and print the report
    Inbox {
        #[arg(long)]
        email: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_config().context("configuration error")?;
    let paths = directories::ensure_directories(&config.directories)?;

    let console = match cli.cmd {
        None | Some(Command::Tui) => Console::Off,
        Some(_) => Console::Stderr,
    };
    logging::init_tracing(&config, &paths, console)?;

    let timezone = resolve_timezone(&config.timezone);
    let classifier = HttpClassifier::from_config(&config.service)?;
    tracing::info!(base_url = %classifier.base_url(), "classification service configured");
    let service: Arc<dyn ClassificationService> = Arc::new(classifier);

    let panel = match cli.cmd {
        None | Some(Command::Tui) => {
            run_tui(service, timezone).await?;
            return Ok(ExitCode::SUCCESS);
        }
        Some(Command::Message { email, text }) => {
            InputPanel::with_fields(ScanMode::Message, email, text)
        }
        Some(Command::Inbox { email }) => InputPanel::with_fields(ScanMode::Inbox, email, ""),
    };

    let Some(view) = scan_once(service.as_ref(), &panel, timezone).await else {
        eprintln!("An email address is required, and message scans also need --text.");
        return Ok(ExitCode::from(2));
    };

    for line in view.to_lines() {
        println!("{line}");
    }
    Ok(match view {
        ResultView::Error(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
