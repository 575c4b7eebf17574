use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::formatters;
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "rent-roll",
        "Show expected, collected and outstanding rent for active leases",
        "rent-roll",
        cmd_rent_roll,
    )]
}

pub(crate) fn cmd_rent_roll(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Rent Roll Report");
    context.require_properties()?;

    let report = context.store.rent_roll();
    if report.is_empty() {
        io::print_info("No active leases.");
    }
    let lines =
        formatters::render_rent_roll(&report, context.currency_symbol(), context.status_theme());
    for line in lines {
        io::print_info(line);
    }
    Ok(())
}
