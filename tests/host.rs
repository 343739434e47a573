//! Integration tests for Loki Terminal.
//!
//! These cover the spawn inputs and the fixed visual constants through the
//! public library surface. Behavior that needs a realized display (widget
//! realization, present-before-spawn ordering, clipboard round trips) is out
//! of reach for a headless test run and is exercised manually.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test host
//! ```

use loki_terminal::{actions, spawn, terminal, theme};
use pretty_assertions::assert_eq as pretty_eq;
use serial_test::serial;

// ============================================================================
// Shell Selection
// ============================================================================

mod shell_selection {
    use super::*;

    #[test]
    #[serial]
    fn honors_shell_variable() {
        std::env::set_var("SHELL", "/usr/bin/zsh");
        pretty_eq!(spawn::shell_command(), vec!["/usr/bin/zsh".to_string()]);
    }

    #[test]
    #[serial]
    fn defaults_to_bash_without_shell_variable() {
        std::env::remove_var("SHELL");
        pretty_eq!(spawn::shell_command(), vec!["/bin/bash".to_string()]);
    }

    #[test]
    #[serial]
    fn treats_empty_shell_variable_as_unset() {
        std::env::set_var("SHELL", "");
        pretty_eq!(spawn::user_shell(), spawn::DEFAULT_SHELL);
    }
}

// ============================================================================
// Environment Capture
// ============================================================================

mod environment_capture {
    use super::*;

    #[test]
    #[serial]
    fn captures_every_inserted_pair() {
        let pairs = [("LOKI_IT_ALPHA", "1"), ("LOKI_IT_BETA", "two words")];
        for (name, value) in pairs {
            std::env::set_var(name, value);
        }

        let env = spawn::capture_environment();
        for (name, value) in pairs {
            let expected = format!("{name}={value}");
            assert!(env.contains(&expected), "missing {expected}");
            std::env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn capture_is_a_point_in_time_snapshot() {
        std::env::set_var("LOKI_IT_SNAPSHOT", "before");
        let env = spawn::capture_environment();
        std::env::set_var("LOKI_IT_SNAPSHOT", "after");

        assert!(env.contains(&"LOKI_IT_SNAPSHOT=before".to_string()));
        assert!(!env.contains(&"LOKI_IT_SNAPSHOT=after".to_string()));
        std::env::remove_var("LOKI_IT_SNAPSHOT");
    }
}

// ============================================================================
// Visual Configuration
// ============================================================================

mod visual_configuration {
    use super::*;

    #[test]
    fn palette_is_solarized_dark() {
        let expected = [
            "#073642", "#dc322f", "#859900", "#b58900", "#268bd2", "#d33682",
            "#2aa198", "#eee8d5", "#002b36", "#cb4b16", "#586e75", "#657b83",
            "#839496", "#6c71c4", "#93a1a1", "#fdf6e3",
        ];
        pretty_eq!(theme::PALETTE, expected);
        pretty_eq!(theme::FOREGROUND, "#839496");
        pretty_eq!(theme::BACKGROUND, "#002b36");
    }

    #[test]
    fn font_is_monospace_twelve() {
        let font = gtk4::pango::FontDescription::from_string(terminal::FONT);
        pretty_eq!(
            font.family().map(|family| family.to_string()),
            Some("Monospace".to_string())
        );
        pretty_eq!(font.size(), 12 * gtk4::pango::SCALE);
    }

    #[test]
    fn scrollback_is_ten_thousand_lines() {
        pretty_eq!(terminal::SCROLLBACK_LINES, 10_000);
    }
}

// ============================================================================
// Accelerators
// ============================================================================

mod accelerators {
    use super::*;

    #[test]
    fn copy_and_paste_bindings() {
        pretty_eq!(actions::COPY_ACCELS, ["<Control><Shift>c"]);
        pretty_eq!(actions::PASTE_ACCELS, ["<Control><Shift>v"]);
    }
}
