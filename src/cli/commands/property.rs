use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::formatters;
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const USAGE: &str = "property <add <name> <address>|list>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "property",
        "Add or list properties",
        USAGE,
        cmd_property,
    )]
}

fn cmd_property(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(action) = args.first() else {
        return Err(CommandError::InvalidArguments(format!("usage: {}", USAGE)));
    };
    match action.to_lowercase().as_str() {
        "add" => handle_add(context, &args[1..]),
        "list" => handle_list(context),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown property subcommand `{}`",
            other
        ))),
    }
}

pub(crate) fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (name, address) = match args {
        [name, address @ ..] if !address.is_empty() => {
            (name.trim().to_string(), address.join(" ").trim().to_string())
        }
        [] if context.can_prompt() => {
            output::section("Add New Property");
            (
                io::prompt_text(&context.theme, "Property name")?,
                io::prompt_text(&context.theme, "Property address")?,
            )
        }
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: property add <name> <address>".into(),
            ))
        }
    };
    if name.is_empty() || address.is_empty() {
        return Err(CommandError::InvalidArguments(
            "property name and address cannot be empty".into(),
        ));
    }

    let property = context.store.add_property(name, address);
    io::print_success(format!("Property `{}` added.", property.name));
    context.persist();
    Ok(())
}

pub(crate) fn handle_list(context: &mut ShellContext) -> CommandResult {
    output::section("Properties");
    let properties = context.store.properties();
    if properties.is_empty() {
        io::print_info("No properties found.");
        return Ok(());
    }
    for (index, property) in properties.iter().enumerate() {
        io::print_info(formatters::property_line(index + 1, property));
    }
    Ok(())
}
