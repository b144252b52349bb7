//! Process-wide log sink for pipeline stages.
//!
//! Library code only emits `tracing` events; nothing in `io` installs a
//! subscriber. Binaries call [`init`] (or [`init_with_file`]) once at startup.
//! Tests and embedding callers can build their own subscriber from [`layer`]
//! and scope it with `tracing::subscriber::with_default`.
//!
//! Every line follows `[<timestamp>: <LEVEL>: <module>: <message>]`, e.g.
//!
//! ```text
//! [2026-10-17 09:14:03,512: INFO: config: YAML file loaded successfully path=config/config.yaml keys=4]
//! ```

use std::fmt;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Event formatter producing the bracketed single-line template.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketFormat;

impl<S, N> FormatEvent<S, N> for BracketFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        // `module_path` is `None` for events created through the `log` bridge.
        let module = meta
            .module_path()
            .and_then(|path| path.rsplit("::").next())
            .unwrap_or_else(|| meta.target());
        write!(
            writer,
            "[{}: {}: {}: ",
            Local::now().format(TIMESTAMP_FORMAT),
            meta.level(),
            module
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer, "]")
    }
}

/// Formatted layer writing to `writer`.
pub fn layer<S, W>(writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .event_format(BracketFormat)
        .with_writer(writer)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to stderr.
///
/// Reads `RUST_LOG`; defaults to `info`.
pub fn init() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(layer(std::io::stderr))
        .init();
}

/// Like [`init`], and also append every line to `log_file`.
///
/// Creates the parent directory (conventionally `logs/`) if needed.
pub fn init_with_file(log_file: &Path) -> Result<()> {
    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("open log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(layer(std::io::stderr))
        .with(layer(Mutex::new(file)))
        .try_init()
        .context("install tracing subscriber")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::test_support::capture_logs;
    use tracing::{info, warn};

    #[test]
    fn lines_follow_bracket_template() {
        let (_, logs) = capture_logs(|| info!(path = "params.yaml", "loaded"));
        let line = logs.trim_end();

        assert!(line.starts_with('['), "{line}");
        assert!(line.ends_with(']'), "{line}");
        assert!(line.contains(": INFO: tests: loaded path=\"params.yaml\"]"), "{line}");
    }

    #[test]
    fn one_line_per_event() {
        let (_, logs) = capture_logs(|| {
            info!("first");
            warn!("second");
        });
        let lines: Vec<&str> = logs.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains(": WARN: tests: second]"));
    }
}
