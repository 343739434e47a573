//! Copy/paste actions and their keyboard accelerators.
//!
//! Plain Ctrl+C / Ctrl+V stay with the terminal itself (SIGINT and literal
//! control characters), so the clipboard pair binds with Shift.

use gtk4::gio::SimpleAction;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow};
use vte4::prelude::*;
use vte4::{Format, Terminal};

/// Accelerators bound to `win.copy`.
pub const COPY_ACCELS: [&str; 1] = ["<Control><Shift>c"];

/// Accelerators bound to `win.paste`.
pub const PASTE_ACCELS: [&str; 1] = ["<Control><Shift>v"];

/// Register the window-scoped copy/paste actions and bind their
/// application-scoped accelerators.
pub fn register(app: &Application, window: &ApplicationWindow, term: &Terminal) {
    let copy = SimpleAction::new("copy", None);
    {
        let term = term.clone();
        copy.connect_activate(move |_, _| {
            term.copy_clipboard_format(Format::Text);
        });
    }
    window.add_action(&copy);

    let paste = SimpleAction::new("paste", None);
    {
        let term = term.clone();
        paste.connect_activate(move |_, _| {
            term.paste_clipboard();
        });
    }
    window.add_action(&paste);

    app.set_accels_for_action("win.copy", &COPY_ACCELS);
    app.set_accels_for_action("win.paste", &PASTE_ACCELS);
}
