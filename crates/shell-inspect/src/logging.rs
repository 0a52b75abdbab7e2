//! Subscriber setup for the inspector.

use std::env;
use std::fs::{File, OpenOptions};
use std::io;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::Layered;
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

type BoxError = Box<dyn std::error::Error>;
type BoxedLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync>;

/// Output encoding for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, BoxError> {
        if value.eq_ignore_ascii_case("pretty") {
            Ok(LogFormat::Pretty)
        } else if value.eq_ignore_ascii_case("json") {
            Ok(LogFormat::Json)
        } else {
            Err("Invalid SHELL_LOG_FORMAT (expected 'json' or 'pretty')".into())
        }
    }
}

fn open_log_file(path: &str) -> Result<File, BoxError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| format!("Failed to open log file: {err}").into())
}

fn build_filter(level: &str) -> Result<EnvFilter, BoxError> {
    if level.eq_ignore_ascii_case("off") {
        return Ok(EnvFilter::default().add_directive(LevelFilter::OFF.into()));
    }
    EnvFilter::try_new(level).map_err(|err| format!("Invalid log filter: {err}").into())
}

fn fmt_layer<W>(writer: W, format: LogFormat, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi);
    match format {
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

/// Install the global subscriber.
///
/// `level` wins over `SHELL_TRACE`; with neither set, logging is off.
/// `SHELL_LOG_FORMAT` picks `pretty` (default) or `json`, and
/// `SHELL_LOG_FILE` adds a second, uncolored output.
pub fn init(level: Option<&str>) -> Result<(), BoxError> {
    let level = level
        .map(str::to_string)
        .or_else(|| env::var("SHELL_TRACE").ok())
        .unwrap_or_else(|| "off".to_string());
    let filter = build_filter(&level)?;

    let format = env::var("SHELL_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    let format = LogFormat::parse(&format)?;

    let mut layers = vec![fmt_layer(io::stderr, format, true)];
    if let Ok(path) = env::var("SHELL_LOG_FILE") {
        layers.push(fmt_layer(open_log_file(&path)?, format, false));
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(layers)
        .try_init()
        .map_err(|err| format!("Failed to initialize logging: {err}").into())
}
