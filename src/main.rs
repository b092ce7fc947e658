//! CLI entry point for the events CSV to JSON converter.
//!
//! With no arguments it reads the two listing exports from `data/` and writes
//! `data/events.json`. Flags override the paths and the assumed year.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use events_csv_to_json::logging::env_filter;
use events_csv_to_json::normalize::DEFAULT_YEAR;
use events_csv_to_json::output::render_report;
use events_csv_to_json::pipeline::{
    self, ConvertConfig, DEFAULT_EVENTS_PATH, DEFAULT_HACKATHONS_PATH, DEFAULT_OUTPUT_PATH,
};
use tracing_subscriber::{
    Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "events_csv_to_json")]
#[command(
    about = "Convert AI event and hackathon CSV listings into one JSON array",
    long_about = None
)]
struct Cli {
    /// Conferences listing CSV
    #[arg(long, default_value = DEFAULT_EVENTS_PATH)]
    events: PathBuf,

    /// Hackathons listing CSV
    #[arg(long, default_value = DEFAULT_HACKATHONS_PATH)]
    hackathons: PathBuf,

    /// JSON file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Year assumed for listing dates, which carry none
    #[arg(short, long, default_value_t = DEFAULT_YEAR)]
    year: i32,

    /// Number of records echoed in the summary
    #[arg(short, long, default_value_t = 5)]
    sample: usize,
}

impl Cli {
    fn config(&self) -> ConvertConfig {
        ConvertConfig {
            events_path: self.events.clone(),
            hackathons_path: self.hackathons.clone(),
            output_path: self.output.clone(),
            year: self.year,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/events_csv_to_json.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("events_csv_to_json.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", LevelFilter::INFO));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(env_filter("RUST_LOG_JSON", LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    println!("Parsing CSV files...");
    let (events, summary) = pipeline::run(&cli.config())?;
    print!("{}", render_report(&summary, &events, cli.sample));

    Ok(())
}
