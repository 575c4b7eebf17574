use chrono::NaiveDate;

use nestora_domain::Tenant;

use crate::cli::core::{parse_amount, parse_date, CommandError, CommandResult, ShellContext};
use crate::cli::formatters;
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const USAGE: &str = "lease <create <property#> <unit#> <tenant name> <email> <phone> <start YYYY-MM-DD> <end YYYY-MM-DD> <rent> <deposit>|list <property#> <unit#>>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "lease",
        "Create a lease for a unit or list its leases",
        USAGE,
        cmd_lease,
    )]
}

fn cmd_lease(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(action) = args.first() else {
        return Err(CommandError::InvalidArguments(format!("usage: {}", USAGE)));
    };
    match action.to_lowercase().as_str() {
        "create" | "add" => handle_create(context, &args[1..]),
        "list" => handle_list(context, &args[1..]),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown lease subcommand `{}`",
            other
        ))),
    }
}

struct LeaseInput {
    property: usize,
    unit: usize,
    tenant: Tenant,
    start_date: NaiveDate,
    end_date: NaiveDate,
    monthly_rent: f64,
    security_deposit: f64,
}

pub(crate) fn handle_create(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let input = if args.is_empty() && context.can_prompt() {
        prompt_lease(context)?
    } else {
        parse_lease(context, args)?
    };

    let symbol = context.currency_symbol().to_string();
    let lease = context.store.create_lease(
        input.property,
        input.unit,
        input.tenant,
        input.start_date,
        input.end_date,
        input.monthly_rent,
        input.security_deposit,
    )?;
    io::print_success(format!(
        "Lease created for {} at {}/month.",
        lease.tenant.full_name,
        formatters::money(lease.monthly_rent, &symbol)
    ));
    context.persist();
    Ok(())
}

fn parse_lease(context: &ShellContext, args: &[&str]) -> Result<LeaseInput, CommandError> {
    let [property, unit, name, email, phone, start, end, rent, deposit] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: lease create <property#> <unit#> <tenant name> <email> <phone> <start> <end> <rent> <deposit>".into(),
        ));
    };
    let property = context.select_property(Some(*property))?;
    let unit = context.select_unit(property, Some(*unit))?;
    if name.trim().is_empty() {
        return Err(CommandError::InvalidArguments(
            "tenant name cannot be empty".into(),
        ));
    }
    Ok(LeaseInput {
        property,
        unit,
        tenant: Tenant::new(name.trim(), email.trim(), phone.trim()),
        start_date: parse_date(start)?,
        end_date: parse_date(end)?,
        monthly_rent: parse_amount("monthly rent", rent)?,
        security_deposit: parse_amount("security deposit", deposit)?,
    })
}

fn prompt_lease(context: &ShellContext) -> Result<LeaseInput, CommandError> {
    output::section("Create Lease");
    let property = context.select_property(None)?;
    let unit = context.select_unit(property, None)?;
    let theme = &context.theme;

    let full_name = io::prompt_text(theme, "Tenant full name")?;
    let email = io::prompt_text(theme, "Tenant email")?;
    let phone = io::prompt_text(theme, "Tenant phone")?;
    Ok(LeaseInput {
        property,
        unit,
        tenant: Tenant::new(full_name, email, phone),
        start_date: io::prompt_parsed(theme, "Lease start date (YYYY-MM-DD)", parse_date)?,
        end_date: io::prompt_parsed(theme, "Lease end date (YYYY-MM-DD)", parse_date)?,
        monthly_rent: io::prompt_number(theme, "Monthly rent")?,
        security_deposit: io::prompt_number(theme, "Security deposit")?,
    })
}

pub(crate) fn handle_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let property = context.select_property(args.first().copied())?;
    let unit_index = context.select_unit(property, args.get(1).copied())?;
    let unit = context.store.unit(property, unit_index)?;
    output::section(format!("Leases for Unit {}", unit.unit_number));
    if unit.leases.is_empty() {
        io::print_info("No leases found for this unit.");
        return Ok(());
    }
    let symbol = context.currency_symbol();
    for (index, lease) in unit.leases.iter().enumerate() {
        io::print_info(formatters::lease_line(index + 1, lease, symbol));
    }
    Ok(())
}
