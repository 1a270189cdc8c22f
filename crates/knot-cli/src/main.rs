//! Knot CLI binary.

use anyhow::Result;
use knot_cli::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the knot CLI.
///
/// Every command is a single synchronous computation, so no async runtime is
/// involved.
fn main() -> Result<()> {
    // Controlled via RUST_LOG, e.g. RUST_LOG=knot=debug,knot_cli=debug.
    // Logs go to stderr so `--json` output on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("knot=warn,knot_cli=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting knot CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    tracing::debug!("Knot CLI completed successfully");
    Ok(())
}
