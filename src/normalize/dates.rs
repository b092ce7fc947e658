//! Parser for the free-text date fragments found in the listings.
//!
//! Recognized shapes, tried in this order:
//!
//! * `24 October` (day first, single day)
//! * `November 17-19` (day range within one month)
//! * `November 17` (month first, single day)
//!
//! Month names are full English names in any letter case. The listings carry
//! no year, so every date lands in the year handed in by the caller.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Year assumed for every date when none is configured.
pub const DEFAULT_YEAR: i32 = 2025;

static DAY_MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\s+(\w+)$").expect("valid day-month pattern"));

static MONTH_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s+([0-9]+)$").expect("valid month-day pattern"));

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Parses a date fragment into a `(start, end)` pair.
///
/// Returns `(None, None)` when the fragment is empty or matches none of the
/// known shapes. Single-day shapes return the same date twice.
pub fn parse_date_range(fragment: &str, year: i32) -> (Option<NaiveDate>, Option<NaiveDate>) {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return (None, None);
    }

    if let Some(date) = parse_day_month(fragment, year) {
        return (Some(date), Some(date));
    }

    if fragment.contains('-') {
        if let Some((start, end)) = parse_month_day_range(fragment, year) {
            return (Some(start), Some(end));
        }
    }

    if let Some(date) = parse_month_day(fragment, year) {
        return (Some(date), Some(date));
    }

    (None, None)
}

fn parse_day_month(fragment: &str, year: i32) -> Option<NaiveDate> {
    let caps = DAY_MONTH.captures(fragment)?;
    date_from_parts(year, &caps[2], &caps[1])
}

/// Only the first two whitespace tokens count, so trailing notes after the
/// range are tolerated.
fn parse_month_day_range(fragment: &str, year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let mut tokens = fragment.split_whitespace();
    let month = tokens.next()?;
    let days = tokens.next()?;

    let (first, last) = days.split_once('-')?;
    if last.contains('-') {
        return None;
    }

    let start = date_from_parts(year, month, first)?;
    let end = date_from_parts(year, month, last)?;
    Some((start, end))
}

fn parse_month_day(fragment: &str, year: i32) -> Option<NaiveDate> {
    let caps = MONTH_DAY.captures(fragment)?;
    date_from_parts(year, &caps[1], &caps[2])
}

fn date_from_parts(year: i32, month: &str, day: &str) -> Option<NaiveDate> {
    let month = month_number(month)?;
    let day = day_number(day)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// 1-based month for a full English month name.
pub fn month_number(name: &str) -> Option<u32> {
    let name = name.to_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == name)
        .map(|idx| idx as u32 + 1)
}

// one or two ASCII digits
fn day_number(day: &str) -> Option<u32> {
    if day.is_empty() || day.len() > 2 || !day.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    day.parse().ok()
}
