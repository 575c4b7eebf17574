use nestora_config::model::CONFIG_KEYS;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change preferences",
        "config [show|set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        return show_config(context);
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: config set <{}> <value>",
                    CONFIG_KEYS.join("|")
                )));
            }
            let key = args[1].to_ascii_lowercase();
            let value = args[2..].join(" ");
            set_config_value(context, &key, value.trim())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config subcommand `{}`",
            other
        ))),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    output::section("Configuration");
    for key in CONFIG_KEYS {
        let value = context.config.get(key)?;
        io::print_info(format!("  {:<28} {}", key, value));
    }
    io::print_info(format!(
        "  {:<28} {}",
        "(config file)",
        context.config_manager.config_path().display()
    ));
    Ok(())
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    updated.set(key, value)?;
    let previous = std::mem::replace(&mut context.config, updated);
    if let Err(err) = context.save_config() {
        context.config = previous;
        return Err(err);
    }
    tracing::info!(key, "configuration updated");
    io::print_success(format!("{} set to {}.", key, context.config.get(key)?));
    if key == "data_file" {
        io::print_hint(format!(
            "The new data file ({}) is used from the next session.",
            context.config.resolve_data_file(&context.app_dir).display()
        ));
    }
    Ok(())
}
