//! Logging setup: coloured stderr plus a JSON rolling log file.

use anyhow::Result;
use std::ffi::OsStr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Installs the global subscriber.
///
/// Stderr honours `RUST_LOG` (default `info`), the JSON file honours
/// `RUST_LOG_JSON` (default `debug`). The returned guard flushes the file
/// writer on drop and must be held for the life of the process.
pub fn init(log_file_path: &str) -> Result<WorkerGuard> {
    let path = Path::new(log_file_path);
    let log_dir = path.parent().unwrap_or(Path::new("logs"));
    let log_file_name = path
        .file_name()
        .unwrap_or(OsStr::new("tsa_wait_proxy.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .try_init()?;

    Ok(guard)
}
