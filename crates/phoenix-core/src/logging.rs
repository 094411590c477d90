//! Tracing setup shared by the phoenix binary and its tests
//!
//! Every event goes to stderr so stdout stays clean for reports. The filter
//! is resolved in order: `RUST_LOG`, then `PHOENIX_LOG`, then the level
//! chosen on the command line.

use std::io;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const CRATES: [&str; 2] = ["phoenix", "phoenix_core"];
const PHOENIX_LOG_ENV_VAR: &str = "PHOENIX_LOG";

/// Log the time since `$start` at trace level, plus optional fields.
///
/// ```rust,ignore
/// let start = Instant::now();
/// let tree = run(graph, source)?;
/// trace_time!(start, "bfs_shortest_paths", source = source);
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Install the global subscriber.
///
/// `log_level` wins over `verbose`. It may be a bare level (`info`) applied
/// to both phoenix crates, or a full directive string passed through as is.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = env_filter(&cli_directives(verbose, log_level));

    // Exactly one of the two layers is present
    let json = log_json.then(|| {
        fmt::layer()
            .json()
            .with_writer(io::stderr)
            .with_ansi(false)
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
    });
    let compact = (!log_json).then(|| {
        fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(io::stderr)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(compact)
        .try_init()?;
    Ok(())
}

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(PHOENIX_LOG_ENV_VAR))
        .unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn cli_directives(verbose: bool, log_level: Option<&str>) -> String {
    match log_level {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => per_crate(level),
        None if verbose => per_crate("debug"),
        None => per_crate("warn"),
    }
}

fn per_crate(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
