//! Tracing subscriber setup for the `duel` binary.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

pub const LOG_FILE: &str = "duel.log";

/// Installs the global subscriber: stderr always, plus a per-session file
/// when enabled.
///
/// The returned guard flushes the file writer on drop, so keep it alive for
/// the whole process.
pub fn setup_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard, session_dir) = if config.log_to_file {
        let session_dir = session_log_dir(config);
        std::fs::create_dir_all(&session_dir)
            .with_context(|| format!("failed to create log directory {}", session_dir.display()))?;

        let appender = tracing_appender::rolling::never(&session_dir, LOG_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_writer(writer).with_ansi(false);
        (Some(layer), Some(guard), Some(session_dir))
    } else {
        (None, None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    if let Some(dir) = session_dir {
        tracing::info!("Log file: {}", dir.join(LOG_FILE).display());
    }

    Ok(guard)
}

/// `<log dir>/<session id>`, with the session id defaulting to a timestamp.
pub fn session_log_dir(config: &LoggingConfig) -> PathBuf {
    let session_id = config.session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{timestamp}")
    });

    config
        .log_dir
        .clone()
        .unwrap_or_else(default_log_dir)
        .join(session_id)
}

/// Platform cache directory, falling back to the system temp dir.
fn default_log_dir() -> PathBuf {
    ProjectDirs::from("", "", "duel")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("duel").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_dir_nests_under_configured_dir() {
        let config = LoggingConfig {
            session_id: Some("evening".into()),
            log_to_file: true,
            log_dir: Some(PathBuf::from("/var/log/duel")),
        };
        assert_eq!(
            session_log_dir(&config),
            PathBuf::from("/var/log/duel/evening")
        );
    }

    #[test]
    fn session_id_defaults_to_timestamp() {
        let config = LoggingConfig {
            log_dir: Some(PathBuf::from("/logs")),
            ..LoggingConfig::default()
        };
        let dir = session_log_dir(&config);
        let name = dir.file_name().and_then(|n| n.to_str()).unwrap();
        assert!(
            name.starts_with("session_"),
            "unexpected session dir: {name}"
        );
        assert_eq!(dir.parent(), Some(std::path::Path::new("/logs")));
    }
}
