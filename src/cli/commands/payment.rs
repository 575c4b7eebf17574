use crate::cli::core::{parse_amount, parse_month, CommandError, CommandResult, ShellContext};
use crate::cli::formatters;
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const USAGE: &str = "payment <record <property#> <unit#> <lease#> <YYYY-MM> <amount> [notes]|list <property#> <unit#> <lease#>>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "payment",
        "Record a rent payment or list a lease's payments",
        USAGE,
        cmd_payment,
    )]
}

fn cmd_payment(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(action) = args.first() else {
        return Err(CommandError::InvalidArguments(format!("usage: {}", USAGE)));
    };
    match action.to_lowercase().as_str() {
        "record" | "add" => handle_record(context, &args[1..]),
        "list" => handle_list(context, &args[1..]),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown payment subcommand `{}`",
            other
        ))),
    }
}

struct PaymentInput {
    property: usize,
    unit: usize,
    lease: usize,
    year: i32,
    month: u32,
    amount_paid: f64,
    notes: Option<String>,
}

pub(crate) fn handle_record(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let input = if args.is_empty() && context.can_prompt() {
        prompt_payment(context)?
    } else {
        parse_payment(context, args)?
    };

    let symbol = context.currency_symbol().to_string();
    let theme = context.status_theme();
    let payment = context.store.record_payment(
        input.property,
        input.unit,
        input.lease,
        input.year,
        input.month,
        input.amount_paid,
        input.notes,
    )?;
    io::print_success(format!(
        "Payment recorded for {}: {} of {} [{}].",
        payment.month,
        formatters::money(payment.amount_paid, &symbol),
        formatters::money(payment.amount_due, &symbol),
        formatters::status_icon(payment.status, theme)
    ));
    context.persist();
    Ok(())
}

fn parse_payment(context: &ShellContext, args: &[&str]) -> Result<PaymentInput, CommandError> {
    let [property, unit, lease, month, amount, notes @ ..] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: payment record <property#> <unit#> <lease#> <YYYY-MM> <amount> [notes]".into(),
        ));
    };
    let property = context.select_property(Some(*property))?;
    let unit = context.select_unit(property, Some(*unit))?;
    let lease = context.select_lease(property, unit, Some(*lease))?;
    let (year, month) = parse_month(month)?;
    let notes = notes.join(" ");
    Ok(PaymentInput {
        property,
        unit,
        lease,
        year,
        month,
        amount_paid: parse_amount("amount paid", amount)?,
        notes: (!notes.trim().is_empty()).then(|| notes.trim().to_string()),
    })
}

fn prompt_payment(context: &ShellContext) -> Result<PaymentInput, CommandError> {
    output::section("Record Rent Payment");
    let property = context.select_property(None)?;
    let unit = context.select_unit(property, None)?;
    let lease = context.select_lease(property, unit, None)?;
    let theme = &context.theme;
    let (year, month) = io::prompt_parsed(theme, "Payment month (YYYY-MM)", parse_month)?;
    Ok(PaymentInput {
        property,
        unit,
        lease,
        year,
        month,
        amount_paid: io::prompt_number(theme, "Amount paid")?,
        notes: io::prompt_optional_text(theme, "Notes (optional)")?,
    })
}

pub(crate) fn handle_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let property = context.select_property(args.first().copied())?;
    let unit = context.select_unit(property, args.get(1).copied())?;
    let lease_index = context.select_lease(property, unit, args.get(2).copied())?;
    let lease = context.store.lease(property, unit, lease_index)?;
    output::section(format!("Payments for {}", lease.tenant.full_name));
    if lease.rent_history.is_empty() {
        io::print_info("No payments recorded yet.");
        return Ok(());
    }
    let symbol = context.currency_symbol();
    let theme = context.status_theme();
    for (index, payment) in lease.rent_history.iter().enumerate() {
        io::print_info(formatters::payment_line(index + 1, payment, symbol, theme));
    }
    Ok(())
}
