//! Tracing initialization: fmt layer to stderr, optionally appended to a log file as well.

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::writer::MakeWriterExt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
    Registry,
};

/// Initializes the global tracing subscriber.
/// Level comes from RUST_LOG (e.g. info, debug, github_client=debug); defaults to info.
/// Stdout is reserved for command output, so logs go to stderr.
pub fn init_tracing(log_file_path: Option<&str>) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let base = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_file(false)
        .with_line_number(false);

    let registry = Registry::default().with(env_filter);
    let result = match log_file_path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let writer = io::stderr.and(Arc::new(file));
            registry.with(base.with_writer(writer)).try_init()
        }
        None => registry.with(base.with_writer(io::stderr)).try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))
}
