//! Solarized Dark palette for the terminal widget.
//!
//! Sixteen indexed entries plus foreground and background, kept as hex
//! literals and parsed once at configuration time.

use gtk4::gdk::RGBA;
use tracing::warn;
use vte4::prelude::*;
use vte4::Terminal;

/// Default text color.
pub const FOREGROUND: &str = "#839496";

/// Terminal background.
pub const BACKGROUND: &str = "#002b36";

/// ANSI palette entries 0-15, in index order.
#[rustfmt::skip]
pub const PALETTE: [&str; 16] = [
    "#073642", "#dc322f", "#859900", "#b58900",
    "#268bd2", "#d33682", "#2aa198", "#eee8d5",
    "#002b36", "#cb4b16", "#586e75", "#657b83",
    "#839496", "#6c71c4", "#93a1a1", "#fdf6e3",
];

/// Parse a hex color, substituting transparent for a bad literal so the
/// remaining entries still apply.
fn parse_color(spec: &str) -> RGBA {
    RGBA::parse(spec).unwrap_or_else(|_| {
        warn!(spec, "unparsable palette color, using transparent");
        RGBA::TRANSPARENT
    })
}

/// Set foreground, background, and the 16-color palette on the widget.
pub fn apply(term: &Terminal) {
    let foreground = parse_color(FOREGROUND);
    let background = parse_color(BACKGROUND);
    let palette: Vec<RGBA> = PALETTE.iter().copied().map(parse_color).collect();
    let palette_refs: Vec<&RGBA> = palette.iter().collect();

    term.set_colors(Some(&foreground), Some(&background), &palette_refs);
}
