//! Combines the parsed tables into the final record list.

use std::collections::HashSet;

use tracing::debug;

use crate::event::Event;

/// Drops every record whose `(title, startDate)` was already seen, keeping
/// the first occurrence and the input order.
pub fn dedupe(events: Vec<Event>) -> Vec<Event> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(events.len());

    for event in events {
        let (title, start) = event.dedup_key();
        if seen.insert((title.to_string(), start)) {
            unique.push(event);
        } else {
            debug!(id = %event.id, title = %event.title, "Duplicate dropped");
        }
    }

    unique
}

/// Concatenates conferences and hackathons (in that order) and deduplicates.
pub fn merge_events(events: Vec<Event>, hackathons: Vec<Event>) -> Vec<Event> {
    let mut all = events;
    all.extend(hackathons);
    let total = all.len();

    let unique = dedupe(all);
    debug!(total, duplicates = total - unique.len(), "Merged tables");
    unique
}
