//! Logging bootstrap for suites and tools built on this crate.

use tracing_subscriber::EnvFilter;

use crate::config::Settings;

const LOG_FILTER_ENV: &str = "BOOKSTORE_LOG";
const DEFAULT_FILTER: &str = "info";

/// Filter directive derived from settings. An explicit `BOOKSTORE_LOG`
/// wins; disabled logging turns everything off.
pub fn filter_directive(settings: &Settings) -> String {
    if !settings.logging_enabled {
        return "off".to_string();
    }
    std::env::var(LOG_FILTER_ENV).unwrap_or_else(|_| DEFAULT_FILTER.to_string())
}

/// Install the global fmt subscriber. Safe to call from every test; only the
/// first call in a process takes effect.
pub fn init(settings: &Settings) {
    let filter = EnvFilter::try_new(filter_directive(settings))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_test_writer()
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(base_url = %settings.base_url, "logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_logging_filters_everything() {
        let settings = Settings {
            logging_enabled: false,
            ..Settings::default()
        };
        assert_eq!(filter_directive(&settings), "off");
    }
}
