//! Subscriber setup for binaries.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build a filter from `RUST_LOG`-style directives, defaulting to `warn` when
/// none are given.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;
    use tracing_subscriber::prelude::*;

    fn enabled_under(filter: EnvFilter, level: Level) -> bool {
        let subscriber = tracing_subscriber::registry().with(filter);
        tracing::subscriber::with_default(subscriber, || match level {
            Level::DEBUG => tracing::enabled!(Level::DEBUG),
            Level::INFO => tracing::enabled!(Level::INFO),
            Level::WARN => tracing::enabled!(Level::WARN),
            _ => tracing::enabled!(Level::TRACE),
        })
    }

    #[test]
    fn test_default_filter_is_warn() {
        let filter = env_filter(None);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
        assert!(enabled_under(env_filter(None), Level::WARN));
        assert!(!enabled_under(env_filter(None), Level::INFO));
    }

    #[test]
    fn test_rust_log_debug_enables_debug_events() {
        let filter = env_filter(Some("debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
        assert!(enabled_under(env_filter(Some("debug")), Level::DEBUG));
        assert!(enabled_under(env_filter(Some("debug")), Level::INFO));
    }

    #[test]
    fn test_crate_scoped_directive_is_honoured() {
        assert!(enabled_under(
            env_filter(Some("connect_four=debug")),
            Level::DEBUG
        ));
    }

    #[test]
    fn test_unparsable_directives_fall_back_to_warn() {
        assert!(!enabled_under(env_filter(Some("connect_four=loud")), Level::INFO));
    }
}
