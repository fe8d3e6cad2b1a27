//! Observability setup: structured logging.
//!
//! **Important**: This module never writes to stdout, which is reserved for
//! application output (the `--json` record). Logs go to a JSONL file when a
//! destination is configured, and to stderr otherwise.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const ENV_LOG_PATH: &str = "VERSTAMP_LOG_PATH";
const ENV_LOG_DIR: &str = "VERSTAMP_LOG_DIR";
const LOG_FILE_SUFFIX: &str = ".jsonl";

/// Guard that must be held for the lifetime of the application to ensure
/// buffered log lines are flushed on exit.
pub struct ObservabilityGuard {
    _log_guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Where log lines land.
#[derive(Clone, Debug, PartialEq, Eq)]
struct LogTarget {
    dir: PathBuf,
    file_name: String,
}

/// Initialize logging.
///
/// Returns a guard that must be held for the application lifetime.
pub fn init_observability(
    config_log_dir: Option<PathBuf>,
    env_filter: EnvFilter,
) -> Result<ObservabilityGuard> {
    let (writer, log_guard) = match resolve_log_target(config_log_dir) {
        Some(target) => {
            let appender = tracing_appender::rolling::daily(&target.dir, &target.file_name);
            tracing_appender::non_blocking(appender)
        }
        // No destination configured: stderr, NOT stdout.
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
        .init();

    tracing::debug!("observability initialized");

    Ok(ObservabilityGuard {
        _log_guard: log_guard,
    })
}

/// Build an `EnvFilter` based on CLI flags and environment.
///
/// Priority: quiet flag > verbose flag > RUST_LOG env > default_level
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }

    if verbose > 0 {
        let level = match verbose {
            1 => "debug",
            _ => "trace",
        };
        return EnvFilter::new(level);
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Resolve the log destination from environment and config.
///
/// Priority: `VERSTAMP_LOG_PATH` > `VERSTAMP_LOG_DIR` > config `log_dir`.
/// Returns `None` (stderr fallback) when nothing is configured or the
/// chosen directory cannot be created.
fn resolve_log_target(config_dir: Option<PathBuf>) -> Option<LogTarget> {
    let path_override = std::env::var_os(ENV_LOG_PATH).map(PathBuf::from);
    let dir_override = std::env::var_os(ENV_LOG_DIR).map(PathBuf::from);

    let target = resolve_log_target_with(path_override, dir_override, config_dir)?;

    if let Err(err) = std::fs::create_dir_all(&target.dir) {
        eprintln!(
            "Warning: failed to create log directory {}: {err}. Falling back to stderr logging.",
            target.dir.display()
        );
        return None;
    }

    Some(target)
}

fn resolve_log_target_with(
    path_override: Option<PathBuf>,
    dir_override: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> Option<LogTarget> {
    if let Some(path) = path_override {
        let file_name = path.file_name()?.to_str()?.to_string();
        let dir = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
        return Some(LogTarget { dir, file_name });
    }

    let file_name = format!("{}{LOG_FILE_SUFFIX}", env!("CARGO_PKG_NAME"));

    if let Some(dir) = dir_override {
        return Some(LogTarget { dir, file_name });
    }

    config_dir.map(|dir| LogTarget { dir, file_name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_filter_quiet_overrides() {
        let filter = env_filter(true, 0, "info");
        assert_eq!(filter.to_string(), "error");
    }

    #[test]
    fn env_filter_verbose_maps_to_debug_and_trace() {
        let debug_filter = env_filter(false, 1, "info");
        assert_eq!(debug_filter.to_string(), "debug");

        let trace_filter = env_filter(false, 2, "info");
        assert_eq!(trace_filter.to_string(), "trace");
    }

    #[test]
    fn path_override_wins() {
        let target = resolve_log_target_with(
            Some(PathBuf::from("/tmp/logs/custom.jsonl")),
            Some(PathBuf::from("/tmp/other")),
            None,
        )
        .unwrap();
        assert_eq!(target.dir, PathBuf::from("/tmp/logs"));
        assert_eq!(target.file_name, "custom.jsonl");
    }

    #[test]
    fn dir_override_appends_file_name() {
        let target =
            resolve_log_target_with(None, Some(PathBuf::from("/tmp/logs")), None).unwrap();
        assert_eq!(target.dir, PathBuf::from("/tmp/logs"));
        assert_eq!(target.file_name, format!("verstamp{LOG_FILE_SUFFIX}"));
    }

    #[test]
    fn config_dir_is_last_resort() {
        let target =
            resolve_log_target_with(None, None, Some(PathBuf::from("/tmp/from-config"))).unwrap();
        assert_eq!(target.dir, PathBuf::from("/tmp/from-config"));
    }

    #[test]
    fn nothing_configured_means_stderr() {
        assert!(resolve_log_target_with(None, None, None).is_none());
    }
}
