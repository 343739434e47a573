//! Loki Terminal - a minimal VTE-based terminal emulator.
//!
//! Main entry point for the application.

use anyhow::{Context, Result};
use tracing::info;

use loki_terminal::app;

/// Initialize the logging system.
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("loki_terminal=info,warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();

    info!("Loki Terminal v{} starting up", env!("CARGO_PKG_VERSION"));
}

fn main() -> Result<()> {
    // Force the cairo software renderer before the toolkit touches the
    // display; GL context creation is not reliable on headless hosts.
    std::env::set_var("GDK_RENDERING", "cairo");

    init_logging();

    gtk4::init().context("Failed to initialize GTK")?;

    let exit_code = app::run();
    std::process::exit(exit_code.into())
}
