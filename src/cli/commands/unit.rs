use crate::cli::core::{parse_amount, parse_count, CommandError, CommandResult, ShellContext};
use crate::cli::formatters;
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const USAGE: &str = "unit <add <property#> <unit> <bedrooms> <bathrooms> <sqft>|list <property#>>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "unit",
        "Add units to a property or list them",
        USAGE,
        cmd_unit,
    )]
}

fn cmd_unit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(action) = args.first() else {
        return Err(CommandError::InvalidArguments(format!("usage: {}", USAGE)));
    };
    match action.to_lowercase().as_str() {
        "add" => handle_add(context, &args[1..]),
        "list" => handle_list(context, &args[1..]),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown unit subcommand `{}`",
            other
        ))),
    }
}

struct UnitInput {
    property: usize,
    unit_number: String,
    bedrooms: u32,
    bathrooms: f64,
    square_feet: u32,
}

pub(crate) fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let input = if args.is_empty() && context.can_prompt() {
        prompt_unit(context)?
    } else {
        parse_unit(context, args)?
    };

    let property_name = context.store.property(input.property)?.name.clone();
    let unit = context.store.add_unit(
        input.property,
        input.unit_number,
        input.bedrooms,
        input.bathrooms,
        input.square_feet,
    )?;
    io::print_success(format!(
        "Unit {} added to `{}`.",
        unit.unit_number, property_name
    ));
    context.persist();
    Ok(())
}

fn parse_unit(context: &ShellContext, args: &[&str]) -> Result<UnitInput, CommandError> {
    let [property, unit_number, bedrooms, bathrooms, square_feet] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: unit add <property#> <unit> <bedrooms> <bathrooms> <sqft>".into(),
        ));
    };
    let property = context.select_property(Some(*property))?;
    if unit_number.trim().is_empty() {
        return Err(CommandError::InvalidArguments(
            "unit number cannot be empty".into(),
        ));
    }
    Ok(UnitInput {
        property,
        unit_number: unit_number.trim().to_string(),
        bedrooms: parse_count("bedrooms", bedrooms)?,
        bathrooms: parse_amount("bathrooms", bathrooms)?,
        square_feet: parse_count("square feet", square_feet)?,
    })
}

fn prompt_unit(context: &ShellContext) -> Result<UnitInput, CommandError> {
    output::section("Add New Unit");
    let property = context.select_property(None)?;
    Ok(UnitInput {
        property,
        unit_number: io::prompt_text(&context.theme, "Unit number")?,
        bedrooms: io::prompt_number(&context.theme, "Number of bedrooms")?,
        bathrooms: io::prompt_number(&context.theme, "Number of bathrooms")?,
        square_feet: io::prompt_number(&context.theme, "Square feet")?,
    })
}

pub(crate) fn handle_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let property = context.select_property(args.first().copied())?;
    let property = context.store.property(property)?;
    output::section(format!("Units in {} ({})", property.name, property.address));
    if property.units.is_empty() {
        io::print_info("No units found for this property.");
        return Ok(());
    }
    for (index, unit) in property.units.iter().enumerate() {
        io::print_info(formatters::unit_line(index + 1, unit));
    }
    Ok(())
}
