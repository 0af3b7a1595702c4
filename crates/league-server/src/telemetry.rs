//! Tracing initialization

use crate::config::{LogFormat, ServerConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name prefix of the daily log files
pub const LOG_FILE_PREFIX: &str = "league-server.log";

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(level: &str) -> String {
    format!(
        "league_server={level},league_engine={level},league_repository={level},tower_http=debug"
    )
}

/// Install the global subscriber: console always, plus a daily rolling file
/// in `log_dir` when configured, both in the configured [`LogFormat`]
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init_tracing(config: &ServerConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&config.log_level)));

    let (writer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    // Exactly one of each pair is set, depending on the configured format
    let json = config.log_format == LogFormat::Json;
    let console_text = (!json).then(|| tracing_subscriber::fmt::layer());
    let console_json = json.then(|| tracing_subscriber::fmt::layer().json());
    let file_text = writer.clone().filter(|_| !json).map(|w| {
        tracing_subscriber::fmt::layer().with_writer(w).with_ansi(false)
    });
    let file_json = writer.filter(|_| json).map(|w| {
        tracing_subscriber::fmt::layer().json().with_writer(w).with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_text)
        .with(console_json)
        .with(file_text)
        .with(file_json)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(guard)
}
