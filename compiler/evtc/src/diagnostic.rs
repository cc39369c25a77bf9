//! Interpreter errors and their line-numbered form.

use std::fmt;

use evt_expr::ExprError;
use thiserror::Error;

/// Why a single line of the program was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterpError {
    /// Building or evaluating the line's expression failed.
    #[error(transparent)]
    Expr(#[from] ExprError),
    /// A statement's expression was not terminated by a `;` word.
    #[error("Missing token (;) in expression")]
    MissingSemicolon,
    /// The first word of a statement is not a command.
    #[error("invalid command {command}")]
    InvalidCommand { command: String },
    /// A declaration used a type other than `int` or `string`.
    #[error("Invalid data type '{type_name}'")]
    InvalidDataType { type_name: String },
    /// A name was declared twice.
    #[error("{name} already declared")]
    AlreadyDeclared { name: String },
    /// `set` targeted a name that was never declared.
    #[error("{name} is not declared")]
    NotDeclared { name: String },
    /// The value's type does not fit the target variable.
    #[error("{name} invalid assignment")]
    InvalidAssignment { name: String },
}

impl InterpError {
    /// Shorthand for the malformed-line case shared with the expression core.
    #[cold]
    pub fn missing_token() -> Self {
        InterpError::Expr(ExprError::MissingToken)
    }
}

/// An [`InterpError`] attributed to a 1-based source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineError {
    pub line: usize,
    pub error: InterpError,
}

impl LineError {
    pub fn new(line: usize, error: InterpError) -> Self {
        LineError { line, error }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: at line {}: {}", self.line, self.error)
    }
}

impl std::error::Error for LineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
