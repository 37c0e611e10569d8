//! Logging - tracing subscriber setup
//!
//! Stderr output filtered by `RUST_LOG` (or the configured level), plus an
//! optional daily rolling file in the data directory.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::domain::config::LogConfig;
use crate::utils::config_store::app_data_dir;

/// Prefix of the rolling log files
const LOG_FILE_PREFIX: &str = "vital-stats.log";

/// Install the global subscriber
///
/// Keep the returned guard alive for the whole process, otherwise buffered
/// file output is lost on exit.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let (file_layer, guard) = if config.file {
        match app_data_dir() {
            Ok(dir) => {
                let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer().with_ansi(false).with_writer(writer);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("File logging disabled: {e}");
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}
