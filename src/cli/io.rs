use std::{fmt, str::FromStr};

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::core::CommandError;
use crate::cli::output;

pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Non-fatal problems: rejected input, integrity findings, blocked saves.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// Yes/no question; Enter accepts `default`.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Prompt for a non-empty line of text.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CommandError> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("Value cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(CommandError::from)?;
    Ok(value.trim().to_string())
}

/// Prompt for text that may be left blank.
pub fn prompt_optional_text(
    theme: &ColorfulTheme,
    prompt: &str,
) -> Result<Option<String>, CommandError> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(CommandError::from)?;
    let trimmed = value.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

/// Prompt until the input parses with `parse`; the error text is shown inline.
pub fn prompt_parsed<T>(
    theme: &ColorfulTheme,
    prompt: &str,
    parse: fn(&str) -> Result<T, CommandError>,
) -> Result<T, CommandError> {
    let raw: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), String> {
            parse(input.trim()).map(|_| ()).map_err(|err| err.to_string())
        })
        .interact_text()
        .map_err(CommandError::from)?;
    parse(raw.trim())
}

/// Prompt for any value implementing [`FromStr`].
pub fn prompt_number<T>(theme: &ColorfulTheme, prompt: &str) -> Result<T, CommandError>
where
    T: Clone + FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    Input::<T>::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()
        .map_err(CommandError::from)
}

/// Numbered pick list; `None` when the user escapes.
pub fn select_index(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[String],
) -> Result<Option<usize>, CommandError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(CommandError::from)
}
