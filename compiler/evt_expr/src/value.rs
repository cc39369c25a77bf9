//! Runtime values and the read-only variable view.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

use rustc_hash::FxHashMap;

/// A typed value produced by evaluation or stored in a variable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// Signed integer. Arithmetic on it wraps on overflow.
    Int(i64),
    /// String value, stored without its quotes.
    Str(String),
}

impl Value {
    /// The declaration keyword for this value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Str(_) => "string",
        }
    }

    /// The integer payload, if this is an [`Value::Int`].
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Str(_) => None,
        }
    }

    /// The string payload, if this is a [`Value::Str`].
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Int(_) => None,
            Value::Str(s) => Some(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// Read-only access to the variables visible to an expression.
///
/// The table belongs to whoever runs the program. Evaluation borrows it
/// for one call and only ever looks names up, so values always reflect
/// the latest assignment made by the owner.
pub trait VariableLookup {
    /// The current value bound to `name`, if it is declared.
    fn lookup(&self, name: &str) -> Option<&Value>;
}

impl VariableLookup for BTreeMap<String, Value> {
    #[inline]
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<S: BuildHasher> VariableLookup for HashMap<String, Value, S> {
    #[inline]
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// An empty table, for expressions that reference no variables.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoVariables;

impl VariableLookup for NoVariables {
    #[inline]
    fn lookup(&self, _name: &str) -> Option<&Value> {
        None
    }
}

impl<T: VariableLookup + ?Sized> VariableLookup for &T {
    #[inline]
    fn lookup(&self, name: &str) -> Option<&Value> {
        (**self).lookup(name)
    }
}

/// Fast-hashing variable table for callers that don't need name order.
pub type FxVariables = FxHashMap<String, Value>;
