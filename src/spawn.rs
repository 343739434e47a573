//! Shell launch into the terminal widget's PTY.
//!
//! The spawn is asynchronous: the widget allocates the PTY, forks, and calls
//! back on the main loop with the child pid or an error. The callback owns a
//! handle to the window; on failure it reports to standard error and closes.

use gtk4::prelude::*;
use gtk4::{gio, glib, ApplicationWindow};
use tracing::{debug, warn};
use vte4::prelude::*;
use vte4::{PtyFlags, Terminal};

/// Fallback when `SHELL` is unset or empty.
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// The user's shell, from `SHELL` with a bash fallback.
pub fn user_shell() -> String {
    match std::env::var("SHELL") {
        Ok(shell) if !shell.is_empty() => shell,
        _ => DEFAULT_SHELL.to_string(),
    }
}

/// Argument vector for the shell: the executable alone, no login flag and no
/// command.
pub fn shell_command() -> Vec<String> {
    vec![user_shell()]
}

/// Snapshot the process environment as `NAME=value` pairs.
///
/// Entries that are not valid UTF-8 cannot cross the spawn interface and are
/// dropped with a warning.
pub fn capture_environment() -> Vec<String> {
    glib::environ()
        .into_iter()
        .filter_map(|entry| match entry.into_string() {
            Ok(pair) => Some(pair),
            Err(raw) => {
                warn!(?raw, "dropping non-UTF-8 environment entry");
                None
            }
        })
        .collect()
}

/// Launch the user's shell in the terminal's PTY, rooted at the home
/// directory.
///
/// The completion callback runs exactly once on the main loop. Closing an
/// already-closed window is a toolkit no-op, so an error arriving after the
/// user closed the window is harmless.
pub fn spawn_shell(term: &Terminal, window: &ApplicationWindow) {
    let argv = shell_command();
    let envv = capture_environment();
    let workdir = glib::home_dir();

    debug!(shell = %argv[0], "spawning shell");

    let argv_refs: Vec<&str> = argv.iter().map(String::as_str).collect();
    let envv_refs: Vec<&str> = envv.iter().map(String::as_str).collect();

    let window = window.clone();
    term.spawn_async(
        PtyFlags::DEFAULT,
        workdir.to_str(),
        &argv_refs,
        &envv_refs,
        glib::SpawnFlags::SEARCH_PATH,
        || {},
        -1,
        None::<&gio::Cancellable>,
        move |result| match result {
            Ok(pid) => debug!(?pid, "shell running"),
            Err(err) => {
                eprintln!("Failed to spawn shell: {err}");
                window.close();
            }
        },
    );
}
