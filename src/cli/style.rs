//! Terminal styling helpers.
//!
//! Thin wrappers over owo-colors; output goes through anstream so colors
//! degrade cleanly on non-TTY streams.

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;
use std::fmt::Display;

/// Check mark used in summary lines.
pub const CHECK: &str = "✓";

/// Styling extensions for display values.
pub trait Stylize: Display + Sized {
    /// Bold, for headings and key phrases.
    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    /// Cyan, for names and counts the eye should land on.
    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    /// Green, for completed work.
    fn success(&self) -> String {
        self.green().to_string()
    }

    /// Yellow, for cautions and skips.
    fn warn(&self) -> String {
        self.yellow().to_string()
    }

    /// Red, for destructive or fatal notices.
    fn danger(&self) -> String {
        self.red().to_string()
    }

    /// Dimmed, for secondary detail.
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }
}

impl<T: Display> Stylize for T {}

/// Green check mark.
pub fn check() -> String {
    CHECK.green().to_string()
}

/// Spinner style for network fetches.
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
}
