//! Log filter shared by the binaries

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset, empty or unparsable
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Filter built from `RUST_LOG`, falling back to [`DEFAULT_LOG_LEVEL`]
///
/// A bare level such as `RUST_LOG=debug` applies to every target.
pub fn env_filter() -> EnvFilter {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_default_level_is_info() {
        assert_eq!(filter_from(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(filter_from(Some("  ")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_bare_level_wins() {
        assert_eq!(filter_from(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(filter_from(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_target_directives_kept() {
        assert_eq!(
            filter_from(Some("cant_translate=trace")).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }
}
