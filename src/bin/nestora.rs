use std::process;

use nestora::{cli, init};

fn main() {
    init();

    if let Err(err) = cli::run_cli() {
        tracing::error!(error = %err, "shell terminated");
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
