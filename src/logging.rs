//! Log filter construction shared by the binary's tracing layers.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Filter built from `directives`, falling back to `default` when they are
/// absent or contain nothing usable.
pub fn filter_from_directives(directives: Option<&str>, default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Filter read from the environment variable `var`.
pub fn env_filter(var: &str, default: LevelFilter) -> EnvFilter {
    let directives = std::env::var(var).ok();
    filter_from_directives(directives.as_deref(), default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_when_unset() {
        let filter = filter_from_directives(None, LevelFilter::INFO);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));

        let filter = filter_from_directives(Some(""), LevelFilter::DEBUG);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_env_level_overrides_default() {
        let filter = filter_from_directives(Some("debug"), LevelFilter::INFO);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = filter_from_directives(Some("warn"), LevelFilter::INFO);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_target_directive_is_kept() {
        let filter = filter_from_directives(Some("events_csv_to_json=trace"), LevelFilter::INFO);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }
}
