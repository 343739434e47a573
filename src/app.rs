//! Application identity and event-loop entry.

use std::time::Instant;

use gtk4::prelude::*;
use gtk4::{gio, glib, Application};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::window;

/// Reverse-DNS application id registered with the desktop environment.
pub const APP_ID: &str = "com.example.loki-terminal";

/// Application startup time for performance monitoring
static STARTUP_TIME: Lazy<Instant> = Lazy::new(Instant::now);

/// Build the application and connect its activation handler.
pub fn build() -> Application {
    let app = Application::builder()
        .application_id(APP_ID)
        .flags(gio::ApplicationFlags::default())
        .build();

    app.connect_activate(|app| {
        window::build(app);
        debug!("Window presented in {:?}", STARTUP_TIME.elapsed());
    });

    app
}

/// Run the event loop and return its exit status.
///
/// Command-line arguments are forwarded to the toolkit parser, which may
/// consume standard display-related flags.
pub fn run() -> glib::ExitCode {
    let _ = *STARTUP_TIME;
    build().run()
}
