//! Line-level syntax: declarations, commands, and expression tokenization.
//!
//! Words are separated by single spaces. Runs of spaces produce empty
//! words, which declarations reject and expressions skip.

use evt_expr::Value;

use crate::diagnostic::InterpError;

/// Terminator word for declarations and expressions.
const TERMINATOR: &str = ";";

/// A declared variable type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VarType {
    Int,
    Str,
}

impl VarType {
    /// Recognize a type keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "int" => Some(VarType::Int),
            "string" => Some(VarType::Str),
            _ => None,
        }
    }

    /// Value a freshly declared variable starts with.
    pub fn default_value(self) -> Value {
        match self {
            VarType::Int => Value::Int(0),
            VarType::Str => Value::Str(String::new()),
        }
    }
}

/// `<type> <name> ;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Type keyword as written; validated when the declaration is applied.
    pub type_name: &'a str,
    pub name: &'a str,
}

/// Parse one line of a declaration block. Blank lines yield `None`.
pub fn parse_declaration(line: &str) -> Result<Option<Declaration<'_>>, InterpError> {
    if line.is_empty() {
        return Ok(None);
    }
    if !line.ends_with(TERMINATOR) {
        return Err(InterpError::missing_token());
    }
    let words: Vec<&str> = line.split(' ').collect();
    match words.as_slice() {
        &[type_name, name, TERMINATOR] => Ok(Some(Declaration { type_name, name })),
        _ => Err(InterpError::missing_token()),
    }
}

/// What a statement does with its expression's value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// `set <name> <expr> ;`
    Set { name: &'a str },
    /// `print <expr> ;`
    Print,
    /// `println <expr> ;`
    Println,
}

/// A statement with its expression split into tokens for the tree builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statement<'a> {
    pub command: Command<'a>,
    pub tokens: Vec<String>,
}

/// Parse one line of a statement block. Blank lines yield `None`.
pub fn parse_statement(line: &str) -> Result<Option<Statement<'_>>, InterpError> {
    if line.is_empty() {
        return Ok(None);
    }
    let words: Vec<&str> = line.split(' ').collect();
    let (command, start) = match words[0] {
        "set" => {
            let name = *words.get(1).ok_or(InterpError::MissingSemicolon)?;
            (Command::Set { name }, 2)
        }
        "print" => (Command::Print, 1),
        "println" => (Command::Println, 1),
        other => {
            return Err(InterpError::InvalidCommand {
                command: other.to_string(),
            })
        }
    };
    let tokens = expression_tokens(line, &words[start..])?;
    Ok(Some(Statement { command, tokens }))
}

/// Split the expression part of `line` into tokens.
///
/// `words` is the line's word list starting at the expression. When the
/// expression starts with a quote, the whole quoted span of the line,
/// spaces included, is one token; the rest of the line is ignored.
/// Otherwise every non-empty word up to the `;` word is a token.
pub fn expression_tokens(line: &str, words: &[&str]) -> Result<Vec<String>, InterpError> {
    let first = words.first().ok_or(InterpError::MissingSemicolon)?;
    if first.starts_with('"') {
        return quoted_token(line).map(|token| vec![token.to_string()]);
    }
    let end = words
        .iter()
        .position(|w| *w == TERMINATOR)
        .ok_or(InterpError::MissingSemicolon)?;
    Ok(words[..end]
        .iter()
        .filter(|w| !w.is_empty())
        .map(|w| (*w).to_string())
        .collect())
}

/// The span from the line's first `"` through the next `"`, inclusive.
fn quoted_token(line: &str) -> Result<&str, InterpError> {
    let open = line.find('"').ok_or_else(InterpError::missing_token)?;
    let close = line[open + 1..]
        .find('"')
        .ok_or_else(InterpError::missing_token)?;
    Ok(&line[open..=open + 1 + close])
}
