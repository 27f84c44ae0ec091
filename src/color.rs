//! Color and formatting utilities for terminal output

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";

    pub const RED: &'static str = "\x1b[31m";
    pub const GREEN: &'static str = "\x1b[32m";
}

/// Apply color to text if terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Check if the current environment supports ANSI colors
pub fn supports_formatting() -> bool {
    // Check if colors are explicitly disabled
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Disable formatting when running tests
    if cfg!(test) {
        return false;
    }

    match std::env::var("TERM") {
        Ok(term) => term != "dumb" && !term.is_empty(),
        Err(_) => false,
    }
}
