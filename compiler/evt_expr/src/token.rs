//! Lazy token classification.
//!
//! Tokens stay plain text inside the tree. Their role is only decided
//! when the evaluator reaches them, because telling a declared variable
//! apart from an unknown word needs the variable table, which the builder
//! never sees.

use crate::value::{Value, VariableLookup};

/// The two binary operators. The set is closed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `*`
    Mul,
    /// `+`
    Add,
}

impl BinaryOp {
    /// Recognize an operator token. Only an exact `*` or `+` matches.
    #[inline]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "*" => Some(BinaryOp::Mul),
            "+" => Some(BinaryOp::Add),
            _ => None,
        }
    }

    /// The operator's source symbol.
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Mul => "*",
            BinaryOp::Add => "+",
        }
    }

    /// Apply the operator with two's-complement wrapping on overflow.
    #[inline]
    pub fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            BinaryOp::Mul => left.wrapping_mul(right),
            BinaryOp::Add => left.wrapping_add(right),
        }
    }
}

/// What a token means in the context of one variable table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// Contains a `"`; the payload is the token minus its first and last character.
    StringLiteral(&'a str),
    /// Parses fully as a base-10 integer.
    IntLiteral(i64),
    /// Names a declared variable; the payload is its current value.
    Variable(&'a Value),
    /// `*` or `+`.
    Operator(BinaryOp),
    /// None of the above.
    Unrecognized,
}

/// Classify `token` against `vars`.
///
/// The first matching rule wins: quoted string, integer literal,
/// declared variable, operator, then unrecognized.
pub fn classify<'a, V>(token: &'a str, vars: &'a V) -> TokenKind<'a>
where
    V: VariableLookup + ?Sized,
{
    if token.contains('"') {
        return TokenKind::StringLiteral(strip_enclosing(token));
    }
    if let Some(n) = parse_int_literal(token) {
        return TokenKind::IntLiteral(n);
    }
    if let Some(value) = vars.lookup(token) {
        return TokenKind::Variable(value);
    }
    match BinaryOp::from_token(token) {
        Some(op) => TokenKind::Operator(op),
        None => TokenKind::Unrecognized,
    }
}

/// Whether `token` makes its node an operator application during building.
#[inline]
pub fn is_operator(token: &str) -> bool {
    BinaryOp::from_token(token).is_some()
}

/// Parse a base-10 integer with an optional sign. Out-of-range text is not a literal.
#[inline]
pub fn parse_int_literal(token: &str) -> Option<i64> {
    token.parse::<i64>().ok()
}

/// Drop the first and the last character, whatever they are.
///
/// A one-character token has nothing left after its first character is
/// removed, so it strips to the empty string.
fn strip_enclosing(token: &str) -> &str {
    let mut chars = token.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

#[cfg(test)]
mod tests;
