use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use assessment_recommender::cli::Commands;
use assessment_recommender::connector::api::{Container, ContainerConfig, Router};
use assessment_recommender::connector::tui;
use assessment_recommender::DEFAULT_BASE_URL;

#[derive(Parser)]
#[command(name = "assessment-recommender")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Where the recommendation API is listening
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Answer from a built-in offline catalog instead of the API
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

const TUI_LOG_FILE: &str = "assessment-recommender.log";

/// Where the TUI writes its log, since log lines would tear through the
/// alternate screen.
fn tui_log_path() -> PathBuf {
    std::env::temp_dir().join(TUI_LOG_FILE)
}

fn open_log_file(path: &Path) -> Result<Mutex<File>> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    Ok(Mutex::new(file))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    if matches!(cli.command, Commands::Tui { .. }) {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(false)
            .with_ansi(false)
            .with_writer(open_log_file(&tui_log_path())?)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    let container = Container::new(ContainerConfig {
        base_url: cli.base_url,
        mock: cli.mock,
    });

    if let Commands::Tui { top_k } = cli.command {
        tui::run(&container, top_k).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output.text);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
