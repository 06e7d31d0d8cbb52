//! Diagnostic logging on stderr.
//!
//! The binaries print their summaries on stdout and leave stderr to
//! `tracing`, so piping the output never mixes the two.

use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for a `-v` count, used when `RUST_LOG` is unset.
#[must_use]
pub fn filter_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info,linkgraph=info",
        2 => "info,linkgraph=debug",
        _ => "debug,linkgraph=trace",
    }
}

/// Whether events carry their source file and line at this verbosity.
#[must_use]
pub fn shows_source_location(verbose: u8) -> bool {
    verbose >= 3
}

/// Install the global subscriber. Calls after the first are no-ops.
pub fn init(verbose: u8) {
    let directive = std::env::var("RUST_LOG").unwrap_or_else(|_| filter_for(verbose).to_string());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_file(shows_source_location(verbose))
                .with_line_number(shows_source_location(verbose))
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
#[path = "tests/logging.rs"]
mod tests;
