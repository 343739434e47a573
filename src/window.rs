//! Window composition and lifecycle.
//!
//! Builds the widget tree (window → vertical box → scrolled region →
//! terminal), wires the child-exited signal, and hands the presented window
//! to the shell spawner.

use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Orientation, ScrolledWindow};
use tracing::debug;
use vte4::prelude::*;

use crate::{actions, spawn, terminal};

/// Window title shown by the desktop environment.
pub const TITLE: &str = "Loki Terminal";

/// Initial content width in logical pixels.
pub const DEFAULT_WIDTH: i32 = 800;

/// Initial content height in logical pixels.
pub const DEFAULT_HEIGHT: i32 = 600;

/// Activation handler: build, configure, and present the main window.
pub fn build(app: &Application) {
    let window = ApplicationWindow::builder()
        .application(app)
        .title(TITLE)
        .default_width(DEFAULT_WIDTH)
        .default_height(DEFAULT_HEIGHT)
        .build();

    let main_box = gtk4::Box::new(Orientation::Vertical, 0);
    window.set_child(Some(&main_box));

    let scrolled = ScrolledWindow::new();
    scrolled.set_vexpand(true);
    main_box.append(&scrolled);

    let term = terminal::build();
    scrolled.set_child(Some(&term));

    // Close the window when the shell ends, whatever its status; the
    // application quits once its last window is gone.
    {
        let window = window.clone();
        term.connect_child_exited(move |_, status| {
            debug!(status, "shell exited");
            window.close();
        });
    }

    actions::register(app, &window, &term);

    // Present before spawning so the terminal has a realized size for the
    // initial PTY dimensions.
    window.present();

    spawn::spawn_shell(&term, &window);
}
