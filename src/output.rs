//! Output persistence and the run report.
//!
//! Writes the merged records as a pretty-printed JSON array and renders the
//! human-readable summary printed after a run.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::event::Event;

/// Counts collected over one conversion run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub events: usize,
    pub hackathons: usize,
    pub unique: usize,
    pub output: String,
    /// Input files in which no header line was found.
    pub missing_headers: Vec<String>,
}

/// Serializes records as a JSON array indented by two spaces.
pub fn to_json(events: &[Event]) -> Result<String> {
    Ok(serde_json::to_string_pretty(events)?)
}

/// Writes records to `path`, creating the parent directory if needed.
///
/// Any existing file is replaced.
pub fn write_json(path: &Path, events: &[Event]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let json = to_json(events)?;
    debug!(path = %path.display(), bytes = json.len(), "Writing JSON output");
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), records = events.len(), "Output written");
    Ok(())
}

/// Renders the run report: header problems, counts, output path, then up to
/// `sample` records.
pub fn render_report(summary: &RunSummary, events: &[Event], sample: usize) -> String {
    let mut out = String::new();
    for path in &summary.missing_headers {
        let _ = writeln!(out, "Could not find header in {}", path);
    }
    let _ = writeln!(out, "Parsed {} events", summary.events);
    let _ = writeln!(out, "Parsed {} hackathons", summary.hackathons);
    let _ = writeln!(out, "Total unique events: {}", summary.unique);
    let _ = writeln!(out, "Saved to {}", summary.output);

    if sample > 0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "Sample events:");
        for (i, event) in events.iter().take(sample).enumerate() {
            let _ = writeln!(
                out,
                "{}. {} - {} - {}",
                i + 1,
                event.title,
                event.start_date,
                event.location
            );
        }
    }

    out
}
