//! Tracing initialisation and log configuration for test harnesses.
//!
//! Call [`init_tracing`] once at harness start to configure the global
//! subscriber with an `EnvFilter` and optional JSON formatting.
//!
//! Safe to call more than once; the global subscriber can only be set once per
//! process, so later calls are silently ignored.

use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable naming the default log level.
pub const LOG_LEVEL_ENV: &str = "SVCTEST_LOG";

/// Environment variable selecting the log format (`json` or text).
pub const LOG_FORMAT_ENV: &str = "SVCTEST_LOG_FORMAT";

/// Logging configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Emit newline-delimited JSON instead of human-readable lines.
    pub json: bool,
    /// Default verbosity when `RUST_LOG` is not set.
    pub level: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            json: false,
            level: Level::INFO,
        }
    }
}

impl LogConfig {
    /// Read [`LOG_LEVEL_ENV`] and [`LOG_FORMAT_ENV`].
    pub fn from_env() -> Self {
        let level = std::env::var(LOG_LEVEL_ENV).ok();
        let format = std::env::var(LOG_FORMAT_ENV).ok();
        Self::from_values(level.as_deref(), format.as_deref())
    }

    /// Build a config from raw setting values.
    ///
    /// Unknown levels fall back to `INFO`; any format other than `json`
    /// (case-insensitive) selects text output.
    pub fn from_values(level: Option<&str>, format: Option<&str>) -> Self {
        let default = Self::default();
        let level = level
            .and_then(|raw| Level::from_str(raw.trim()).ok())
            .unwrap_or(default.level);
        let json = format.is_some_and(|raw| raw.trim().eq_ignore_ascii_case("json"));
        Self { json, level }
    }
}

/// Initialise the global tracing subscriber.
///
/// Respects `RUST_LOG` for fine-grained filtering and falls back to
/// `config.level` when it is not set.
pub fn init_tracing(config: &LogConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false))
            .try_init()
            .ok();
    }
}
