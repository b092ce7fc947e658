//! Row parser for the events and hackathons listing tables.
//!
//! Both exports carry a few lines of preamble before the real header row, so
//! the header is located by the column names it must contain and only the
//! lines after it are read. Each data line is split as a single CSV record.

use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use crate::event::{Event, Source};
use crate::normalize::{clean_location, parse_date_range};

/// Rows with fewer fields than this are ignored.
const MIN_FIELDS: usize = 6;

/// Column names that identify the header line of a table.
pub fn header_markers(source: Source) -> &'static [&'static str] {
    match source {
        Source::EventsCsv => &["Month", "Event", "Date"],
        Source::HackathonsCsv => &["Month", "Event", "Start Date"],
    }
}

/// Index of the first line containing every header marker of `source`.
pub fn find_header<'a, I>(lines: I, source: Source) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let markers = header_markers(source);
    lines
        .into_iter()
        .position(|line| markers.iter().all(|m| line.contains(m)))
}

/// Splits one line into fields, honouring quoted fields.
pub fn split_record(line: &str) -> Option<StringRecord> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => Some(record),
        _ => None,
    }
}

/// Month column value carried forward to rows that leave it blank.
#[derive(Debug, Default, Clone)]
pub struct MonthContext {
    current: String,
}

impl MonthContext {
    /// Records a row's month cell and returns the month in effect for it.
    pub fn observe(&mut self, cell: &str) -> &str {
        let cell = cell.trim();
        if !cell.is_empty() {
            self.current = cell.to_string();
        }
        &self.current
    }
}

/// Parses the rows of one table, or `None` if it has no recognizable header.
///
/// Rows that are blank, short, untitled or undated are skipped.
pub fn parse_rows(content: &str, source: Source, year: i32) -> Option<Vec<Event>> {
    let lines: Vec<&str> = content.lines().collect();

    let Some(header) = find_header(lines.iter().copied(), source) else {
        warn!(source = ?source, "Could not find header line, no rows parsed");
        return None;
    };
    debug!(source = ?source, line = header + 1, "Header line found");

    let mut events = Vec::new();
    let mut months = MonthContext::default();

    for (idx, line) in lines.iter().enumerate().skip(header + 1) {
        let line_no = idx + 1;

        if line.trim().is_empty() {
            continue;
        }

        let Some(row) = split_record(line) else {
            debug!(line = line_no, "Unreadable row skipped");
            continue;
        };

        if row.len() < MIN_FIELDS {
            debug!(line = line_no, fields = row.len(), "Short row skipped");
            continue;
        }

        let title = row[1].trim();
        if title.is_empty() {
            continue;
        }

        let month = months.observe(&row[0]);

        let dates = match source {
            Source::EventsCsv => parse_date_range(&row[2], year),
            Source::HackathonsCsv => {
                let (start, _) = parse_date_range(&row[2], year);
                let (end, _) = parse_date_range(&row[3], year);
                (start, end.or(start))
            }
        };

        let (Some(start), Some(end)) = dates else {
            debug!(
                line = line_no,
                title,
                month,
                "Row without a parseable date skipped"
            );
            continue;
        };

        let event = Event::new(
            source,
            events.len() + 1,
            title,
            start,
            end,
            clean_location(&row[4]),
        )
        .with_time(&row[3])
        .with_link(&row[5]);

        events.push(event);
    }

    Some(events)
}

/// Parses the rows of one table. A table without a header yields no records.
pub fn parse_table(content: &str, source: Source, year: i32) -> Vec<Event> {
    parse_rows(content, source, year).unwrap_or_default()
}

/// Reads a table file, returning `None` when it has no header line.
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 text.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_table(path: impl AsRef<Path>, source: Source, year: i32) -> Result<Option<Vec<Event>>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let events = parse_rows(&content, source, year);
    if let Some(events) = &events {
        info!(count = events.len(), "Table parsed");
    }
    Ok(events)
}

/// Reads and parses a table file, treating a missing header as an empty table.
pub fn parse_csv_file(path: impl AsRef<Path>, source: Source, year: i32) -> Result<Vec<Event>> {
    Ok(read_table(path, source, year)?.unwrap_or_default())
}

/// Parses the conferences listing.
pub fn parse_events_csv(path: impl AsRef<Path>, year: i32) -> Result<Vec<Event>> {
    parse_csv_file(path, Source::EventsCsv, year)
}

/// Parses the hackathons listing.
pub fn parse_hackathons_csv(path: impl AsRef<Path>, year: i32) -> Result<Vec<Event>> {
    parse_csv_file(path, Source::HackathonsCsv, year)
}
