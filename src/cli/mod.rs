pub mod commands;
pub mod core;
pub mod formatters;
pub mod help;
pub mod io;
pub mod menus;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;
pub mod system_clock;

pub use shell::run_cli;
