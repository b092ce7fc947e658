/// Placeholder for rows without a location.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Reduces a raw location such as `"San Francisco, CA"` to its city.
///
/// Surrounding whitespace and quote characters are removed, and only the
/// part before the first comma is kept.
pub fn clean_location(raw: &str) -> String {
    if raw.is_empty() {
        return UNKNOWN_LOCATION.to_string();
    }

    let location = raw.trim().trim_matches('"').trim_matches('\'');

    match location.split_once(',') {
        Some((city, _)) => city.trim().to_string(),
        None => location.trim().to_string(),
    }
}
