use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;

use nestora_config::{Config, ConfigManager};
use nestora_core::PropertyStore;

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Session state shared by every command handler.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub store: PropertyStore,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub app_dir: PathBuf,
    pub data_path: PathBuf,
    pub theme: ColorfulTheme,
    pub last_command: Option<String>,
    pub running: bool,
    /// Set when the data file existed but could not be read; saving would clobber it.
    pub(crate) save_blocked: bool,
}

impl ShellContext {
    pub fn status(&self) -> String {
        format!(
            "ShellContext {{ running: {}, properties: {}, data: {}, last_command: {:?} }}",
            self.running,
            self.store.properties().len(),
            self.data_path.display(),
            self.last_command
        )
    }
}
