use colored::Colorize;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::RwLock;

use nestora_config::{Config, Theme};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputPreferences {
    pub theme: Theme,
    pub color_enabled: bool,
    pub plain_output: bool,
    pub high_contrast: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::Iconic,
            color_enabled: true,
            plain_output: false,
            high_contrast: false,
        }
    }
}

impl OutputPreferences {
    pub fn from_config(config: &Config) -> Self {
        Self {
            theme: config.theme,
            color_enabled: config.ui_color_enabled,
            plain_output: config.accessibility.plain_output,
            high_contrast: config.accessibility.high_contrast,
        }
    }

    /// Icons are dropped for the plain theme and for screen-reader friendly output.
    pub fn use_icons(&self) -> bool {
        self.theme == Theme::Iconic && !self.plain_output
    }
}

static PREFERENCES: Lazy<RwLock<OutputPreferences>> =
    Lazy::new(|| RwLock::new(OutputPreferences::default()));

pub fn set_preferences(prefs: OutputPreferences) {
    if let Ok(mut guard) = PREFERENCES.write() {
        *guard = prefs;
    }
}

pub fn preferences() -> OutputPreferences {
    PREFERENCES.read().map(|guard| *guard).unwrap_or_default()
}

fn prefix(kind: MessageKind, prefs: &OutputPreferences) -> &'static str {
    match (kind, prefs.use_icons()) {
        (MessageKind::Success, true) => "✔ ",
        (MessageKind::Warning, true) => "⚠ ",
        (MessageKind::Error, true) => "✖ ",
        (MessageKind::Hint, true) => "› ",
        (MessageKind::Success, false) => "OK: ",
        (MessageKind::Warning, false) => "WARNING: ",
        (MessageKind::Error, false) => "ERROR: ",
        (MessageKind::Hint, false) => "HINT: ",
        (MessageKind::Info | MessageKind::Section, _) => "",
    }
}

pub(crate) fn apply_style(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", message.to_string().trim()),
        _ => format!("{}{}", prefix(kind, prefs), message),
    };

    if prefs.plain_output || !prefs.color_enabled {
        return formatted;
    }

    if prefs.high_contrast {
        return match kind {
            MessageKind::Info | MessageKind::Hint => formatted,
            _ => formatted.bold().to_string(),
        };
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Hint => formatted.bright_cyan().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = preferences();
    let formatted = apply_style(kind, message, &prefs);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub fn blank_line() {
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> OutputPreferences {
        OutputPreferences {
            theme: Theme::Plain,
            color_enabled: false,
            ..OutputPreferences::default()
        }
    }

    #[test]
    fn plain_theme_uses_text_labels() {
        let prefs = plain();
        assert_eq!(apply_style(MessageKind::Warning, "careful", &prefs), "WARNING: careful");
        assert_eq!(apply_style(MessageKind::Section, " Units ", &prefs), "=== Units ===");
        assert_eq!(apply_style(MessageKind::Info, "hello", &prefs), "hello");
    }

    #[test]
    fn plain_output_overrides_iconic_theme() {
        let prefs = OutputPreferences {
            plain_output: true,
            ..OutputPreferences::default()
        };
        assert_eq!(apply_style(MessageKind::Success, "saved", &prefs), "OK: saved");
    }
}
