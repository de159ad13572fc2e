use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::app::settings::{ensure_dirs_exist, user_cache_dir, Settings};

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "VILE_LOG";

/// Install the global `tracing` subscriber.
///
/// The filter comes from `VILE_LOG`, falling back to `settings.log_level`.
/// Output goes to stderr, or to a daily-rotated file under the cache
/// directory when `settings.log_to_file` is set; keep the returned guard
/// alive so buffered file output is flushed. Installing twice is a no-op.
pub fn init(settings: &Settings) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .with_context(|| format!("invalid log level `{}`", settings.log_level))?;

    if settings.log_to_file {
        let dir = user_cache_dir().context("could not determine a cache directory for logs")?;
        ensure_dirs_exist()
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let appender = tracing_appender::rolling::daily(&dir, "vile.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .try_init();
        return Ok(Some(guard));
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(None)
}
