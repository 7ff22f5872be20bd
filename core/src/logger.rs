//----------------------------------------------------------------------------------------- std lib
use std::io::Write;
use std::time::Instant;
//--------------------------------------------------------------------------------- other libraries
use env_logger::fmt::style::Style;
use log::info;
use once_cell::sync::Lazy;
use tracing_subscriber::layer::SubscriberExt as _;

use crate::format_duration;

// This will get initialized below.
/// Returns the init [`Instant`]
pub static INIT_INSTANT: Lazy<Instant> = Lazy::new(Instant::now);

/// The filter used when `RUST_LOG` is unset: everything off except chorus and its sub-crates.
#[must_use]
pub fn default_filter(filter: log::LevelFilter) -> String {
    format!("off,chorus={filter}")
}

/// The single letter a record's level is shown as.
const fn level_letter(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "E",
        log::Level::Warn => "W",
        log::Level::Info => "I",
        log::Level::Debug => "D",
        log::Level::Trace => "T",
    }
}

//---------------------------------------------------------------------------------------------------- Logger init function
#[allow(clippy::module_name_repetitions)]
/// Initializes the logger.
///
/// This enables console logging on all the internals of `Chorus`.
///
/// Functionality is provided by [`log`].
///
/// If `RUST_LOG` is set it is used as is, otherwise only chorus crates log, at `filter`.
///
/// # Panics
/// This must only be called _once_.
#[cfg(not(tarpaulin_include))]
pub fn init_logger(filter: log::LevelFilter) {
    // Initialize timer.
    let now = Lazy::force(&INIT_INSTANT);

    let env = std::env::var("RUST_LOG").ok().filter(|e| !e.is_empty());
    let filters = env.clone().unwrap_or_else(|| default_filter(filter));

    env_logger::Builder::new()
        .format(move |buf, record| {
            let level = buf.default_level_style(record.level()).bold();
            let dimmed = Style::new().dimmed();
            writeln!(
                buf,
                // Longest PATH in the repo: `storage/src/catalog/queries/popularity.rs` - `41` characters
                // Longest file in the repo: `storage/src/catalog/crud/playlist.rs`      - `3` digits
                //
                //      Longest PATH ---|        |--- Longest file
                //                      |        |
                //                      v        v
                "| {level}{}{level:#} | {dimmed}{}{dimmed:#} | {dimmed}{: >41} @ {: <3}{dimmed:#} | {}",
                level_letter(record.level()),
                format_duration(&now.elapsed()),
                record.file_static().unwrap_or("???"),
                record.line().unwrap_or(0),
                record.args(),
            )
        })
        .write_style(env_logger::WriteStyle::Always)
        .parse_filters(&filters)
        .init();

    match env {
        Some(env) => info!("Log Level (RUST_LOG) ... {env}"),
        None => info!("Log Level (Flag) ... {filter}"),
    }
}

/// Initializes the tracing layer.
///
/// Spans from chorus crates are written to stderr in the compact format. With the
/// `verbose_tracing` feature every crate's spans are written.
#[must_use]
pub fn init_tracing() -> impl tracing::Subscriber + Send + Sync {
    #[cfg(not(feature = "verbose_tracing"))]
    let filter = tracing_subscriber::EnvFilter::builder().parse_lossy("off,chorus=trace");
    #[cfg(feature = "verbose_tracing")]
    let filter = tracing_subscriber::EnvFilter::builder().parse_lossy("trace");

    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .compact()
            .with_writer(std::io::stderr),
    )
}
