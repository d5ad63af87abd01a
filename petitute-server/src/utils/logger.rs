//! Logging Infrastructure
//!
//! Console output always; when a log directory is given, application logs
//! also roll daily into `<dir>/petitute.YYYY-MM-DD`.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `level` when set. A `log_dir` that does
/// not exist is ignored with a warning.
pub fn init_logger_with_file(level: &str, log_dir: Option<&str>) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false);

    let mut missing_dir = None;
    let file_layer = match log_dir {
        Some(dir) if Path::new(dir).is_dir() => {
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, "petitute");
            Some(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(appender)),
            )
        }
        Some(dir) => {
            missing_dir = Some(dir);
            None
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = missing_dir {
        tracing::warn!(log_dir = %dir, "Log directory does not exist, file logging disabled");
    }
}
