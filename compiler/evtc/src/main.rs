//! Evt interpreter CLI.
//!
//! `evt [FILE]` runs FILE, or standard input when no file is given.

use evtc::{init_tracing, run_program, InterpreterConfig, RunError};

fn main() {
    init_tracing();

    let config = match InterpreterConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Usage: evt [FILE]");
            std::process::exit(2);
        }
    };

    let stdout = std::io::stdout().lock();
    let stderr = std::io::stderr().lock();
    match run_program(&config, stdout, stderr) {
        Ok(summary) => {
            tracing::debug!(lines = summary.lines, errors = summary.errors, "done");
        }
        // An unreadable input file is reported but is not a failing exit.
        Err(e @ RunError::Open { .. }) => eprintln!("{e}"),
        Err(e @ RunError::Io(_)) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
