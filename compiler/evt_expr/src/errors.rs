//! Error type shared by tree construction and evaluation.
//!
//! The taxonomy is flat: every failure aborts the whole build or
//! evaluation call, and none of them carry a line number. Callers that
//! know where the expression came from attach that themselves.

use thiserror::Error;

/// Result of building or evaluating an expression.
pub type ExprResult<T> = Result<T, ExprError>;

/// A failure raised by [`build`](crate::build) or [`evaluate`](crate::evaluate).
///
/// The `Display` output is the message shown to users after the
/// `Error: at line N: ` prefix.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum ExprError {
    /// A required token was absent: the root, either operand of an
    /// operator, or a child reached during evaluation.
    #[error("Missing token in expression")]
    MissingToken,
    /// Tokens remained after a complete expression was built.
    #[error("Extra token in expression")]
    ExtraToken,
    /// An operator operand evaluated to something other than an integer.
    #[error("invalid type for expression")]
    InvalidType,
    /// A bare token that is not a literal, a declared variable, or an operator.
    #[error("{name} is not declared")]
    UndeclaredIdentifier {
        /// The offending token, verbatim.
        name: String,
    },
}

impl ExprError {
    /// Build an [`ExprError::UndeclaredIdentifier`] for `name`.
    #[cold]
    pub fn undeclared(name: impl Into<String>) -> Self {
        ExprError::UndeclaredIdentifier { name: name.into() }
    }
}
