//! Suite configuration, resolved once at startup and passed by reference.
//!
//! Sources are layered: built-in defaults, then `config/suite.toml`, then a
//! `.env` file, then `BOOKSTORE_*` environment variables. Later layers win.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

const CONFIG_DIR_ENV: &str = "BOOKSTORE_CONFIG_DIR";
const ENV_PREFIX: &str = "BOOKSTORE";
const CONFIG_FILE: &str = "suite.toml";

/// Runtime settings shared by the HTTP client, the fixture store and the
/// logging bootstrap.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "Settings::default_base_url")]
    pub base_url: String,
    #[serde(default = "Settings::default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "Settings::default_logging_enabled")]
    pub logging_enabled: bool,
    /// Directory holding the fixture JSON files. `None` selects the
    /// workspace `test-data/` directory.
    #[serde(default)]
    pub fixture_dir: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the layered sources.
    pub fn load() -> anyhow::Result<Self> {
        // A missing `.env` is fine.
        let _ = dotenvy::dotenv();

        let config_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => std::env::current_dir()
                .context("unable to resolve current directory")?
                .join("config"),
        };

        Self::load_from(config_dir.join(CONFIG_FILE))
    }

    /// Load settings using `file` as the file layer. The file is optional.
    pub fn load_from(file: PathBuf) -> anyhow::Result<Self> {
        Self::layered(file, None)
    }

    /// Resolve `file` under the `BOOKSTORE_*` overrides found in `env`, or
    /// in the process environment when `env` is `None`.
    fn layered(file: PathBuf, env: Option<config::Map<String, String>>) -> anyhow::Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::from(file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .context("failed to build configuration")?;

        let settings: Settings = cfg
            .try_deserialize()
            .context("failed to deserialize configuration")?;

        tracing::debug!(
            base_url = %settings.base_url,
            timeout_ms = settings.request_timeout_ms,
            logging = settings.logging_enabled,
            "configuration resolved"
        );
        Ok(settings)
    }

    /// Defaults with a different base URL, for suites that run against a
    /// local server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    fn default_base_url() -> String {
        "https://fakerestapi.azurewebsites.net/api/v1".to_string()
    }

    fn default_request_timeout_ms() -> u64 {
        30_000
    }

    fn default_logging_enabled() -> bool {
        true
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            request_timeout_ms: Self::default_request_timeout_ms(),
            logging_enabled: Self::default_logging_enabled(),
            fixture_dir: None,
        }
    }
}
