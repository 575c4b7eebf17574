//! Core CLI loop, dispatch, and shell context helpers.

use std::{io, path::PathBuf, sync::Arc};

use chrono::NaiveDate;
use dialoguer::theme::ColorfulTheme;

use nestora_config::{Config, ConfigError, ConfigManager, Theme};
use nestora_core::{CoreError, PropertyStore};
use nestora_domain::Displayable;
use nestora_storage_json::JsonPropertyStorage;

pub use crate::errors::CliError;

use super::commands;
use super::io as cli_io;
use super::output::{self, OutputPreferences};
use super::registry::{CommandEntry, CommandRegistry};
use super::shell::tokenize;
use super::system_clock::SystemClock;
pub use crate::cli::shell_context::{CliMode, ShellContext};
use crate::utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_app_dir(mode, utils::app_data_dir())
    }

    /// Builds a session rooted at `app_dir`: loads the config, then the data file.
    pub fn with_app_dir(mode: CliMode, app_dir: PathBuf) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager = ConfigManager::with_base_dir(&app_dir)?;
        let config = match config_manager.load() {
            Ok(config) => config,
            Err(err) => {
                cli_io::print_warning(format!(
                    "Could not read {} ({}); using default settings.",
                    config_manager.config_path().display(),
                    err
                ));
                Config::default()
            }
        };
        output::set_preferences(OutputPreferences::from_config(&config));

        let data_path = config.resolve_data_file(&app_dir);
        let storage = JsonPropertyStorage::new(data_path.clone());
        let store = PropertyStore::new(Box::new(storage), Arc::new(SystemClock));

        let mut context = ShellContext {
            mode,
            registry,
            store,
            config,
            config_manager,
            app_dir,
            data_path,
            theme: ColorfulTheme::default(),
            last_command: None,
            running: true,
            save_blocked: false,
        };
        context.load_store();
        Ok(context)
    }

    fn load_store(&mut self) {
        let existed = self.data_path.exists();
        match self.store.load() {
            Ok(_) if !existed => cli_io::print_info("No saved data found. Starting fresh."),
            Ok(count) => cli_io::print_success(format!(
                "Loaded {} propert{} from {}.",
                count,
                if count == 1 { "y" } else { "ies" },
                self.data_path.display()
            )),
            Err(err) => {
                self.save_blocked = true;
                tracing::error!(error = %err, path = %self.data_path.display(), "data file load failed");
                cli_io::print_error(format!("Failed to load saved data: {}", err));
                cli_io::print_hint(
                    "Starting with an empty portfolio; changes will not be written over the unreadable file.",
                );
            }
        }
        for warning in self.store.warnings() {
            tracing::warn!(%warning, "data integrity");
            cli_io::print_warning(warning);
        }
    }

    pub(crate) fn prompt(&self) -> String {
        "nestora> ".to_string()
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    /// Theme used for status markers; plain output always uses text labels.
    pub(crate) fn status_theme(&self) -> Theme {
        if self.config.accessibility.plain_output {
            Theme::Plain
        } else {
            self.config.theme
        }
    }

    pub(crate) fn can_prompt(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    /// Tokenizes and dispatches one input line. Blank lines and `#` comments are skipped.
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(LoopControl::Continue);
        }
        let tokens = match tokenize(line) {
            Ok(tokens) => tokens,
            Err(message) => {
                cli_io::print_warning(message);
                return Ok(LoopControl::Continue);
            }
        };
        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };

        self.last_command = Some(line.to_string());
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        let control = self.dispatch(&raw.to_lowercase(), raw, &args)?;
        if control == LoopControl::Exit {
            self.running = false;
        }
        Ok(control)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = self.registry.closest(input, 3) {
            cli_io::print_hint(format!("Did you mean `{}`?", best));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit Nestora?", true)
            .map_err(|err| CliError::Input(err.to_string()))
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::Cancelled => {
                cli_io::print_info("Operation cancelled.");
                Ok(())
            }
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Core(CoreError::NotFound(message)) => {
                cli_io::print_error(format!("Invalid selection: {}", message));
                cli_io::print_hint("Use the `list` subcommands to see valid numbers.");
                Ok(())
            }
            other => {
                cli_io::print_error(other.to_string());
                Ok(())
            }
        }
    }

    /// Writes the tree after a mutation. Failures are reported, never fatal.
    pub(crate) fn persist(&self) {
        if self.save_blocked {
            cli_io::print_warning(
                "Change kept in memory only: the data file could not be read at startup.",
            );
            return;
        }
        if let Err(err) = self.store.save() {
            cli_io::print_error(format!("Failed to save data: {}", err));
            cli_io::print_hint("The change is kept for this session; it will be retried on the next save.");
        }
    }

    pub(crate) fn require_properties(&self) -> CommandResult {
        if self.store.is_empty() {
            return Err(CommandError::Message(
                "No properties available. Please add a property first.".into(),
            ));
        }
        Ok(())
    }

    /// Resolves a 1-based property number from `arg`, or asks for one interactively.
    pub(crate) fn select_property(&self, arg: Option<&str>) -> Result<usize, CommandError> {
        self.require_properties()?;
        if let Some(raw) = arg {
            let index = parse_position("property", raw)?;
            self.store.property(index)?;
            return Ok(index);
        }
        if !self.can_prompt() {
            return Err(CommandError::InvalidArguments("missing property number".into()));
        }
        self.pick("Select a property", &self.property_labels())
    }

    /// Pick-list entries, in the same wording `property list` prints.
    fn property_labels(&self) -> Vec<String> {
        self.store
            .properties()
            .iter()
            .map(Displayable::display_label)
            .collect()
    }

    pub(crate) fn select_unit(&self, property: usize, arg: Option<&str>) -> Result<usize, CommandError> {
        let units = &self.store.property(property)?.units;
        if units.is_empty() {
            return Err(CommandError::Message(
                "No units available in this property.".into(),
            ));
        }
        if let Some(raw) = arg {
            let index = parse_position("unit", raw)?;
            self.store.unit(property, index)?;
            return Ok(index);
        }
        if !self.can_prompt() {
            return Err(CommandError::InvalidArguments("missing unit number".into()));
        }
        let labels: Vec<String> = units
            .iter()
            .map(|unit| format!("Unit {}", unit.unit_number))
            .collect();
        self.pick("Select a unit", &labels)
    }

    pub(crate) fn select_lease(
        &self,
        property: usize,
        unit: usize,
        arg: Option<&str>,
    ) -> Result<usize, CommandError> {
        let leases = &self.store.unit(property, unit)?.leases;
        if leases.is_empty() {
            return Err(CommandError::Message("No leases found for this unit.".into()));
        }
        if let Some(raw) = arg {
            let index = parse_position("lease", raw)?;
            self.store.lease(property, unit, index)?;
            return Ok(index);
        }
        if !self.can_prompt() {
            return Err(CommandError::InvalidArguments("missing lease number".into()));
        }
        let labels: Vec<String> = leases
            .iter()
            .map(|lease| format!("{} [{}]", lease.tenant.full_name, lease.status))
            .collect();
        self.pick("Select a lease", &labels)
    }

    fn pick(&self, prompt: &str, labels: &[String]) -> Result<usize, CommandError> {
        cli_io::select_index(&self.theme, prompt, labels)?.ok_or(CommandError::Cancelled)
    }

    /// Persists the in-memory config and re-applies output preferences.
    pub(crate) fn save_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        output::set_preferences(OutputPreferences::from_config(&self.config));
        Ok(())
    }
}

/// Converts a 1-based position typed by the user into an index.
pub(crate) fn parse_position(label: &str, input: &str) -> Result<usize, CommandError> {
    match input.trim().parse::<usize>() {
        Ok(position) if position >= 1 => Ok(position - 1),
        _ => Err(CommandError::InvalidArguments(format!(
            "{} number must be a positive integer (got `{}`)",
            label, input
        ))),
    }
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", input))
    })
}

/// Parses `YYYY-MM`. Range checking of the month is left to the core.
pub(crate) fn parse_month(input: &str) -> Result<(i32, u32), CommandError> {
    let invalid =
        || CommandError::InvalidArguments(format!("invalid month `{}` (use YYYY-MM)", input));
    let (year, month) = input.trim().split_once('-').ok_or_else(invalid)?;
    if year.len() != 4 {
        return Err(invalid());
    }
    let year = year.parse::<i32>().map_err(|_| invalid())?;
    let month = month.parse::<u32>().map_err(|_| invalid())?;
    Ok((year, month))
}

pub(crate) fn parse_amount(label: &str, input: &str) -> Result<f64, CommandError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid {} `{}`", label, input)))
}

pub(crate) fn parse_count(label: &str, input: &str) -> Result<u32, CommandError> {
    input.trim().parse::<u32>().map_err(|_| {
        CommandError::InvalidArguments(format!(
            "{} must be a whole number (got `{}`)",
            label, input
        ))
    })
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error("operation cancelled")]
    Cancelled,
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
pub(crate) fn process_script(app_dir: PathBuf, lines: &[&str]) -> Result<ShellContext, CliError> {
    let mut app = ShellContext::with_app_dir(CliMode::Script, app_dir)?;
    for line in lines {
        match app.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => app.report_error(err)?,
        }
    }
    Ok(app)
}
