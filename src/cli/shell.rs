//! Line sources for the shell: a rustyline editor for people, stdin for scripts.

use std::{
    borrow::Cow,
    io::{self, BufRead},
};

use colored::Colorize;
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context, Editor, Helper, KeyEvent,
};

use crate::cli::core::{CliError, CliMode, LoopControl, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output;

/// Environment variable that switches the shell to line-by-line stdin processing.
pub const SCRIPT_ENV: &str = "NESTORA_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = match std::env::var_os(SCRIPT_ENV) {
        Some(_) => CliMode::Script,
        None => CliMode::Interactive,
    };
    let mut context = ShellContext::new(mode)?;

    let outcome = if mode == CliMode::Script {
        run_script(&mut context)
    } else {
        run_interactive(&mut context)
    };
    tracing::debug!(status = %context.status(), "shell finished");
    outcome
}

/// Splits a command line the way a POSIX shell would, honouring quotes.
pub(crate) fn tokenize(line: &str) -> Result<Vec<String>, String> {
    shell_words::split(line).map_err(|err| format!("could not parse command: {err}"))
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    for line in io::stdin().lock().lines() {
        let line = line?;
        if step(context, &line)? == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor: Editor<CommandHelper, DefaultHistory> = Editor::new()?;
    editor.set_helper(Some(CommandHelper::new(context.command_names())));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    output::section("Welcome to Nestora");
    cli_io::print_info("Type `menu` for the guided menu, or `help` to list commands.");

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) if line.trim().is_empty() => {}
            Ok(line) => {
                let _ = editor.add_history_entry(line.trim());
                if step(context, &line)? == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) if context.confirm_exit()? => break,
            Err(ReadlineError::Interrupted) => {}
            Err(ReadlineError::Eof) => {
                cli_io::print_info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

/// Runs one line; command failures are reported and the session carries on.
fn step(context: &mut ShellContext, line: &str) -> Result<LoopControl, CliError> {
    match context.process_line(line) {
        Ok(control) => Ok(control),
        Err(err) => {
            context.report_error(err)?;
            Ok(LoopControl::Continue)
        }
    }
}

/// Completes and hints the command word; arguments are free text.
struct CommandHelper {
    commands: Vec<&'static str>,
}

impl CommandHelper {
    fn new(mut commands: Vec<&'static str>) -> Self {
        commands.sort_unstable();
        commands.dedup();
        Self { commands }
    }

    fn matching<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.commands
            .iter()
            .copied()
            .filter(move |name| name.starts_with(prefix))
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let typed = &line[..pos];
        if typed.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let needle = typed.to_ascii_lowercase();
        let candidates = self
            .matching(&needle)
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if line.is_empty() || pos < line.len() || line.contains(char::is_whitespace) {
            return None;
        }
        let needle = line.to_ascii_lowercase();
        let mut found = self.matching(&needle);
        match (found.next(), found.next()) {
            (Some(only), None) if only.len() > line.len() => Some(only[line.len()..].to_string()),
            _ => None,
        }
    }
}

impl Highlighter for CommandHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        if output::preferences().color_enabled {
            Cow::Owned(hint.dimmed().to_string())
        } else {
            Cow::Borrowed(hint)
        }
    }
}

impl Validator for CommandHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbalanced_quotes_are_reported() {
        let err = tokenize("property add \"Maple").unwrap_err();
        assert!(err.starts_with("could not parse command"));
    }

    #[test]
    fn quoted_arguments_stay_together() {
        let tokens = tokenize("property add \"Maple Court\" '12 Maple Ave'").unwrap();
        assert_eq!(tokens, vec!["property", "add", "Maple Court", "12 Maple Ave"]);
    }
}
