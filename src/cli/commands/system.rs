use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Save and exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_version(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("Nestora {}", meta.version));
    let mut rows = meta.rows();
    rows.push(("Data file", context.data_path.display().to_string()));
    rows.push((
        "Config file",
        context.config_manager.config_path().display().to_string(),
    ));
    for (label, value) in rows {
        io::print_info(format!("  {:<12} {}", label, value));
    }
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(command) = args.first().map(|name| name.to_lowercase()) {
        if let Some(command) = context.command(&command) {
            help::print_command(command);
        } else {
            context.suggest_command(args[0]);
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

pub(crate) fn cmd_exit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.persist();
    io::print_info("Goodbye!");
    Err(CommandError::ExitRequested)
}
