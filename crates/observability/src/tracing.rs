//! Subscriber construction and `RUST_LOG` handling.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or does not parse.
pub const DEFAULT_FILTER: &str = "info";

/// Builds the filter from a `RUST_LOG`-style directive string.
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a JSON subscriber writing to stderr, so stdout carries only the
/// program's own transcript. Returns quietly when a subscriber is already set.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_from(directives.as_deref()))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn missing_directives_fall_back_to_info() {
        assert_eq!(filter_from(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn explicit_directives_are_honoured() {
        assert_eq!(
            filter_from(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn init_twice_does_not_panic() {
        init();
        init();
    }
}
