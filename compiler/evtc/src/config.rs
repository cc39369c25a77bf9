//! Command-line configuration for the `evt` binary.
//!
//! Logging is configured separately, from the environment (see
//! [`init_tracing`](crate::init_tracing)).

use std::path::PathBuf;

use thiserror::Error;

/// Where the program text comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InputSource {
    /// Read standard input.
    #[default]
    Stdin,
    /// Read the named file.
    File(PathBuf),
}

/// Settings for one interpreter run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterpreterConfig {
    pub input: InputSource,
}

/// Rejected command-line arguments.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("expected at most one input file, got {count} arguments")]
    TooManyArguments { count: usize },
}

impl InterpreterConfig {
    /// Build a configuration from the arguments after the program name.
    ///
    /// No argument reads standard input; one argument names the input file.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        match args.as_slice() {
            [] => Ok(InterpreterConfig::default()),
            [path] => Ok(InterpreterConfig {
                input: InputSource::File(PathBuf::from(path)),
            }),
            _ => Err(ConfigError::TooManyArguments { count: args.len() }),
        }
    }
}

#[cfg(test)]
mod tests;
