pub mod config;
pub mod lease;
pub mod menu;
pub mod payment;
pub mod property;
pub mod report;
pub mod system;
pub mod unit;

use crate::cli::registry::{CommandEntry, CommandRegistry};

const ROOT_COMMAND_ORDER: &[&str] = &[
    "menu",
    "property",
    "unit",
    "lease",
    "payment",
    "rent-roll",
    "config",
    "help",
    "version",
    "exit",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(menu::definitions());
    commands.extend(property::definitions());
    commands.extend(unit::definitions());
    commands.extend(lease::definitions());
    commands.extend(payment::definitions());
    commands.extend(report::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let mut entries = all_entries();
    entries.sort_by_key(|entry| {
        ROOT_COMMAND_ORDER
            .iter()
            .position(|name| entry.name.eq_ignore_ascii_case(name))
            .unwrap_or(ROOT_COMMAND_ORDER.len())
    });
    for entry in entries {
        registry.register(entry);
    }
}
