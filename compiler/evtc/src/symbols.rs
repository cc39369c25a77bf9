//! The program's symbol table: current values plus where each name appeared.

use std::collections::BTreeMap;
use std::io::{self, Write};

use evt_expr::{token::parse_int_literal, Value, VariableLookup};
use rustc_hash::FxHashMap;

use crate::diagnostic::InterpError;
use crate::statement::{Declaration, VarType};

/// Declared variables in name order, with the lines each one appeared on.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    values: BTreeMap<String, Value>,
    appearances: FxHashMap<String, Vec<usize>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a declaration found on `line`.
    ///
    /// The line is recorded as an appearance of the name before any check,
    /// so a rejected redeclaration still shows up in the dump.
    pub fn declare(&mut self, decl: &Declaration<'_>, line: usize) -> Result<(), InterpError> {
        self.appearances
            .entry(decl.name.to_string())
            .or_default()
            .push(line);
        if self.values.contains_key(decl.name) {
            return Err(InterpError::AlreadyDeclared {
                name: decl.name.to_string(),
            });
        }
        let var_type =
            VarType::from_keyword(decl.type_name).ok_or_else(|| InterpError::InvalidDataType {
                type_name: decl.type_name.to_string(),
            })?;
        self.values
            .insert(decl.name.to_string(), var_type.default_value());
        Ok(())
    }

    /// Store `value` into the declared variable `name`.
    ///
    /// String variables only take strings. Integer variables take integers,
    /// or strings whose text is an integer literal.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), InterpError> {
        let slot = self
            .values
            .get_mut(name)
            .ok_or_else(|| InterpError::NotDeclared {
                name: name.to_string(),
            })?;
        let coerced = match (&*slot, value) {
            (Value::Str(_), value @ Value::Str(_)) | (Value::Int(_), value @ Value::Int(_)) => {
                Some(value)
            }
            (Value::Int(_), Value::Str(text)) => parse_int_literal(&text).map(Value::Int),
            (Value::Str(_), Value::Int(_)) => None,
        };
        *slot = coerced.ok_or_else(|| InterpError::InvalidAssignment {
            name: name.to_string(),
        })?;
        Ok(())
    }

    /// Record `line` for every declared name occurring as a word of `text`.
    pub fn record_appearances(&mut self, text: &str, line: usize) {
        let words: Vec<&str> = text.split_whitespace().collect();
        for name in self.values.keys() {
            if words.contains(&name.as_str()) {
                self.appearances.entry(name.clone()).or_default().push(line);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Lines `name` appeared on, in order.
    pub fn appearances(&self, name: &str) -> &[usize] {
        self.appearances
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Declared variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Write the end-of-run symbol table dump.
    pub fn write_dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\nSymbol Table Dump\n")?;
        for (name, value) in self.iter() {
            writeln!(out, "\t{name}")?;
            writeln!(out, "\t\t{}", value.type_name())?;
            match value {
                Value::Str(s) => writeln!(out, "\t\t\"{s}\"")?,
                Value::Int(n) => writeln!(out, "\t\t{n}")?,
            }
            write!(out, "\t\tAppeared on lines ")?;
            for line in self.appearances(name) {
                write!(out, "{line} ")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

impl VariableLookup for SymbolTable {
    #[inline]
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}
