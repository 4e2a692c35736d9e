//! Runs the capability tour against standard output.
//!
//! Usage:
//!
//! ```text
//! solid-tour
//! ```
//!
//! There are no flags. Set `RUST_LOG` (for example `solid_tour=debug`) to
//! see diagnostics on standard error.

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use solid_tour::{
    console::StdoutConsole,
    telemetry::{self, TelemetryConfig},
    tour::{Tour, TourError},
};

fn main() -> ExitCode {
    if let Err(err) = telemetry::init(&TelemetryConfig::default()) {
        // Logging is optional; the tour still runs.
        drop(writeln!(std::io::stderr(), "telemetry disabled: {err}"));
    }

    match Tour::new(Arc::new(StdoutConsole::new())).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "tour failed");
            // The subscriber may be missing, so report on stderr as well.
            drop(report_failure(&err, &mut std::io::stderr()));
            ExitCode::FAILURE
        }
    }
}

fn report_failure(err: &TourError, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "tour failed: {err}")
}
