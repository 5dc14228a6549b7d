//! Logging setup
//!
//! Diagnostics go through `tracing` and are written to stderr so they never
//! mix with listings on stdout. The filter comes from `GALR_LOG`, then the
//! `log_level` config key, then [`DEFAULT_LOG_LEVEL`].

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "GALR_LOG";

/// Level used when nothing else is configured
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Pick the filter directive from the environment value and config value
#[must_use]
pub fn resolve_directive(env_value: Option<&str>, config_level: Option<&str>) -> String {
    env_value
        .or(config_level)
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_LOG_LEVEL)
        .to_string()
}

/// Install the global subscriber
///
/// Invalid directives fall back to [`DEFAULT_LOG_LEVEL`]. Calling this more
/// than once keeps the first subscriber.
pub fn init(config_level: Option<&str>) {
    let env_value = std::env::var(LOG_ENV).ok();
    let directive = resolve_directive(env_value.as_deref(), config_level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    tracing::debug!(%directive, "logging initialized");
}
