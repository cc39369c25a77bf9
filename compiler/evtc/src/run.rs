//! Running a configured program from its input source.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::config::{InputSource, InterpreterConfig};
use crate::interpreter::{Interpreter, RunSummary};

/// Failures that stop a run before or while reading its input.
///
/// Errors in the program itself are not among them; those are reported
/// line by line and counted in [`RunSummary::errors`].
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Error: Can't open file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Run the program named by `config`, writing its output to `out` and
/// its diagnostics to `err`.
pub fn run_program<W: Write, E: Write>(
    config: &InterpreterConfig,
    out: W,
    err: E,
) -> Result<RunSummary, RunError> {
    let interpreter = Interpreter::new(out, err);
    let summary = match &config.input {
        InputSource::Stdin => {
            tracing::debug!("reading program from stdin");
            interpreter.run(io::stdin().lock())?
        }
        InputSource::File(path) => {
            tracing::debug!(path = %path.display(), "reading program from file");
            let file = File::open(path).map_err(|source| RunError::Open {
                path: path.clone(),
                source,
            })?;
            interpreter.run(BufReader::new(file))?
        }
    };
    Ok(summary)
}
