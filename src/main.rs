//! Sentiment Console - Entry Point

use clap::{ArgGroup, Parser};
use sentiment_console::client::HttpClassifier;
use sentiment_console::config::{self, CliOverrides, KeyBindings};
use sentiment_console::headless::{self, Report};
use sentiment_console::model::{AnalysisMode, AppError};
use sentiment_console::orchestrator::Orchestrator;
use sentiment_console::source::BatchSource;
use sentiment_console::view::{self, ColorConfig, Palette, TuiOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

/// Sentiment Console - terminal client for a sentiment classification service
#[derive(Parser, Debug)]
#[command(name = "senti")]
#[command(version)]
#[command(about = "Classify text sentiment through a remote service")]
#[command(group(ArgGroup::new("headless").args(["text", "batch_file", "info"])))]
pub struct Args {
    /// Base URL of the classification service
    #[arg(long, value_name = "URL")]
    pub server_url: Option<String>,

    /// Mode to start in
    #[arg(long, value_parser = clap::value_parser!(AnalysisMode))]
    pub mode: Option<AnalysisMode>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Analyze one text, print the result and exit
    #[arg(long)]
    pub text: Option<String>,

    /// Analyze one text per line of FILE ("-" for stdin), print and exit
    #[arg(long, value_name = "FILE")]
    pub batch_file: Option<String>,

    /// Print what the service reports about itself and exit
    #[arg(long)]
    pub info: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            server_url: self.server_url.clone(),
            request_timeout_secs: self.timeout,
            default_mode: self.mode,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("senti: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = config::resolve(args.config.clone(), args.overrides())?;

    sentiment_console::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(AppError::Runtime)?;
    let client = HttpClassifier::new(&config.server_url, config.request_timeout())?;

    if args.info {
        return Ok(emit(runtime.block_on(headless::service_info(&client))));
    }
    if let Some(text) = &args.text {
        let report = runtime.block_on(headless::analyze(&client, AnalysisMode::Single, text));
        return Ok(emit(report));
    }
    if let Some(arg) = &args.batch_file {
        let block = BatchSource::from_arg(arg).read()?;
        let report = runtime.block_on(headless::analyze(&client, AnalysisMode::Batch, &block));
        return Ok(emit(report));
    }

    let options = TuiOptions {
        palette: Palette::new(ColorConfig::from_env_and_args(args.no_color)),
        server: config.server_url.clone(),
        key_bindings: KeyBindings::default(),
    };
    view::run_interactive(
        Orchestrator::new(config.default_mode),
        Arc::new(client),
        runtime.handle().clone(),
        options,
    )?;

    Ok(ExitCode::SUCCESS)
}

/// Print a headless report and map it to the exit status.
fn emit(report: Report) -> ExitCode {
    match report {
        Report::Rendered(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Report::Failed(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
