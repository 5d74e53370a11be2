//! Colors for CLI output
//!
//! Centralizes the ANSI codes used for progress and summary lines.
//! Colors are disabled when `NO_COLOR` is set or stdout is not a terminal.

/// ANSI escape sequences.
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const GRAY: &str = "\x1b[37m";
}

/// Theme configuration for CLI output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: &'static str,
    /// Warnings such as skipped segments
    pub warning: &'static str,
    /// Error color
    pub error: &'static str,
    /// Success color
    pub success: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: ansi::GRAY,
            warning: ansi::YELLOW,
            error: ansi::RED,
            success: ansi::GREEN,
        }
    }
}

impl Theme {
    /// Theme that emits no escape codes at all.
    pub fn plain() -> Self {
        Self {
            text_primary: "",
            warning: "",
            error: "",
            success: "",
        }
    }

    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    pub fn warning_text(&self, text: &str) -> String {
        paint(self.warning, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

fn paint(color: &str, text: &str) -> String {
    if color.is_empty() {
        text.to_string()
    } else {
        format!("{}{}{}", color, text, ansi::RESET)
    }
}

/// Theme for the current process.
pub fn current_theme() -> Theme {
    if std::env::var_os("NO_COLOR").is_some() || !atty::is(atty::Stream::Stdout) {
        Theme::plain()
    } else {
        Theme::default()
    }
}
