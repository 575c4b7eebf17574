use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};

/// Typical first session, shown under the command table.
const WALKTHROUGH: &[&str] = &[
    "property add \"Maple Court\" 12 Maple Ave",
    "unit add 1 1A 2 1.5 850",
    "lease create 1 1 \"Alice Smith\" alice@example.com 555-0100 2024-01-01 2024-12-31 1000 1000",
    "payment record 1 1 1 2024-01 1000",
    "rent-roll",
];

pub fn print_overview(registry: &CommandRegistry) {
    output::section("Available commands");
    let width = registry
        .names()
        .map(str::len)
        .max()
        .unwrap_or_default();
    for entry in registry.list() {
        io::print_info(format!(
            "  {:<width$}  {}",
            entry.name,
            entry.description,
            width = width
        ));
    }
    output::blank_line();
    io::print_info("Example session:");
    for line in WALKTHROUGH {
        io::print_info(format!("  {line}"));
    }
    io::print_hint("property#, unit# and lease# are the positions printed by the list commands.");
}

pub fn print_command(entry: &CommandEntry) {
    output::section(format!("Help: {}", entry.name));
    io::print_info(entry.description);
    io::print_info(format!("Usage: {}", entry.usage));
}
