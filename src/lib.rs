//! Loki Terminal - a minimal VTE-based terminal emulator.
//!
//! A thin GTK4 shell around the `vte4` terminal widget: the widget owns the
//! pseudo-terminal, escape-sequence parsing, scrollback, selection, and
//! clipboard; this crate owns the window composition, the copy/paste action
//! map, and the shell lifecycle.

pub mod actions;
pub mod app;
pub mod spawn;
pub mod terminal;
pub mod theme;
pub mod window;
