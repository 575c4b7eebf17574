use crate::cli::core::{parse_position, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::menus::{MainMenu, MenuAction};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

use super::{lease, payment, property, report, system, unit};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "menu",
        "Open the guided main menu",
        "menu [1-9]",
        cmd_menu,
    )]
}

fn cmd_menu(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(raw) = args.first() {
        let action = MenuAction::from_choice(parse_position("menu", raw)? + 1).ok_or_else(|| {
            CommandError::InvalidArguments("Invalid choice, please try again.".into())
        })?;
        return run_action(context, action);
    }

    if !context.can_prompt() {
        output::section("Main menu");
        for item in MainMenu::items() {
            io::print_info(item);
        }
        io::print_hint("Run `menu <number>` or the equivalent command.");
        return Ok(());
    }

    loop {
        let Some(action) = MainMenu::new(&context.theme).show()? else {
            return Ok(());
        };
        match run_action(context, action) {
            Ok(()) => {}
            Err(CommandError::ExitRequested) => return Err(CommandError::ExitRequested),
            Err(err) => context
                .report_error(err)
                .map_err(|err| CommandError::Message(err.to_string()))?,
        }
    }
}

fn run_action(context: &mut ShellContext, action: MenuAction) -> CommandResult {
    tracing::debug!(command = action.command(), "menu action");
    match action {
        MenuAction::AddProperty => property::handle_add(context, &[]),
        MenuAction::ListProperties => property::handle_list(context),
        MenuAction::AddUnit => unit::handle_add(context, &[]),
        MenuAction::ListUnits => unit::handle_list(context, &[]),
        MenuAction::CreateLease => lease::handle_create(context, &[]),
        MenuAction::ListLeases => lease::handle_list(context, &[]),
        MenuAction::RecordPayment => payment::handle_record(context, &[]),
        MenuAction::RentRoll => report::cmd_rent_roll(context, &[]),
        MenuAction::Exit => system::cmd_exit(context, &[]),
    }
}
