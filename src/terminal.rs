//! Terminal widget construction and visual configuration.

use gtk4::pango::FontDescription;
use vte4::prelude::*;
use vte4::Terminal;

use crate::theme;

/// Font handed to the widget: family keyword plus point size.
pub const FONT: &str = "Monospace 12";

/// Lines of history retained for scrolling.
pub const SCROLLBACK_LINES: i64 = 10_000;

/// Create a terminal widget with the fixed visual configuration applied.
pub fn build() -> Terminal {
    let term = Terminal::new();
    configure(&term);
    term
}

/// Apply font, scrollback depth, mouse policy, and colors.
fn configure(term: &Terminal) {
    let font = FontDescription::from_string(FONT);
    term.set_font(Some(&font));

    term.set_scrollback_lines(SCROLLBACK_LINES as _);
    term.set_mouse_autohide(true);

    theme::apply(term);
}
