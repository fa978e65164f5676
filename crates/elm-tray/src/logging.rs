//! Tracing subscriber setup.
//!
//! Human-readable output on stdout, plus optional JSON lines in a daily
//! rolling file when `logging.log_to_file` is enabled.

use crate::config::LoggingConfig;

use std::path::Path;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_NAME: &str = "elm-tray.log";

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the configured filter. The returned guard flushes the
/// file writer on drop and must be held for the life of the process.
pub(crate) fn init(config: &LoggingConfig, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    let appender = log_dir
        .filter(|_| config.log_to_file)
        .map(|dir| {
            RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_FILE_NAME)
                .build(dir)
        })
        .transpose();

    // The subscriber is not installed yet, so a bad log dir goes to stderr.
    let appender = appender.unwrap_or_else(|e| {
        eprintln!("File logging disabled: {e}");
        None
    });

    let (file_layer, guard) = match appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().json().with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}
