//! CLI entry point for the bikeshare explorer.
//!
//! Prompts for a city, month and weekday, then reports travel-time, station,
//! duration and rider statistics for the matching trips.

use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bikeshare_explorer::catalog::CityCatalog;
use bikeshare_explorer::session::Session;
use bikeshare_explorer::source::CsvSource;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_explorer")]
#[command(about = "Explore US bikeshare trip data interactively", long_about = None)]
struct Cli {
    /// Directory holding the city CSV files
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// JSON file mapping city names to CSV file names
    #[arg(short, long)]
    catalog: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging setup: quiet stderr (the prompts share the terminal) + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_explorer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_explorer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => CityCatalog::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => CityCatalog::default(),
    };
    info!(data_dir = %cli.data_dir.display(), cities = ?catalog.cities().collect::<Vec<_>>(), "Starting");

    let source = CsvSource::new(&cli.data_dir);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match Session::new(&catalog, source, stdin.lock(), stdout.lock()).run() {
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => info!("Input closed, exiting"),
        result => result?,
    }

    info!("Session finished");
    Ok(())
}
