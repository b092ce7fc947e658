//! One full conversion: parse both listings, merge, write the JSON output.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::event::{Event, Source};
use crate::merge::merge_events;
use crate::normalize::DEFAULT_YEAR;
use crate::output::{RunSummary, write_json};
use crate::parser::read_table;

pub const DEFAULT_EVENTS_PATH: &str =
    "data/Generative AI Events [by cerebralvalley.ai] - 2025 Events.csv";
pub const DEFAULT_HACKATHONS_PATH: &str =
    "data/Generative AI Events [by cerebralvalley.ai] - 2025 Hackathons.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "data/events.json";

/// Input and output locations plus the year assumed for undated listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub events_path: PathBuf,
    pub hackathons_path: PathBuf,
    pub output_path: PathBuf,
    pub year: i32,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            events_path: PathBuf::from(DEFAULT_EVENTS_PATH),
            hackathons_path: PathBuf::from(DEFAULT_HACKATHONS_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            year: DEFAULT_YEAR,
        }
    }
}

/// Runs the conversion and returns the written records with their counts.
///
/// # Errors
///
/// Fails if either input cannot be read or the output cannot be written.
/// Malformed rows never fail the run.
#[tracing::instrument(skip(config), fields(year = config.year))]
pub fn run(config: &ConvertConfig) -> Result<(Vec<Event>, RunSummary)> {
    info!("Parsing CSV files");

    let mut missing_headers = Vec::new();
    let events = load_table(
        &config.events_path,
        Source::EventsCsv,
        config.year,
        &mut missing_headers,
    )?;
    let hackathons = load_table(
        &config.hackathons_path,
        Source::HackathonsCsv,
        config.year,
        &mut missing_headers,
    )?;

    let mut summary = RunSummary {
        events: events.len(),
        hackathons: hackathons.len(),
        output: config.output_path.display().to_string(),
        missing_headers,
        ..Default::default()
    };

    let unique = merge_events(events, hackathons);
    summary.unique = unique.len();

    info!(
        events = summary.events,
        hackathons = summary.hackathons,
        unique = summary.unique,
        "Tables merged"
    );

    write_json(&config.output_path, &unique)?;

    Ok((unique, summary))
}

/// Reads one table, noting its path in `missing_headers` if it has no header.
fn load_table(
    path: &Path,
    source: Source,
    year: i32,
    missing_headers: &mut Vec<String>,
) -> Result<Vec<Event>> {
    match read_table(path, source, year)? {
        Some(events) => Ok(events),
        None => {
            missing_headers.push(path.display().to_string());
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_fixed_paths() {
        let config = ConvertConfig::default();
        assert_eq!(config.output_path, PathBuf::from("data/events.json"));
        assert!(
            config
                .events_path
                .ends_with("Generative AI Events [by cerebralvalley.ai] - 2025 Events.csv")
        );
        assert_eq!(config.year, 2025);
    }

    #[test]
    fn test_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConvertConfig {
            events_path: dir.path().join("missing.csv"),
            hackathons_path: dir.path().join("missing_too.csv"),
            output_path: dir.path().join("events.json"),
            year: DEFAULT_YEAR,
        };

        assert!(run(&config).is_err());
        assert!(!config.output_path.exists());
    }
}
