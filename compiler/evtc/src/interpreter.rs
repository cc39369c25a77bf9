//! Line-by-line program execution.
//!
//! A program is a series of `var ... begin ... end` sections sharing one
//! symbol table. Text outside a section is ignored. A bad line is
//! reported with its line number and skipped; from then on the run is in
//! failed mode, which keeps reporting errors but suppresses program
//! output and the final symbol dump.

use std::io::{self, BufRead, Write};

use evt_expr::{build, evaluate, Value};

use crate::diagnostic::{InterpError, LineError};
use crate::statement::{parse_declaration, parse_statement, Command, Statement};
use crate::symbols::SymbolTable;

/// Where the interpreter is within the section structure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Section {
    /// Between sections; waiting for `var`.
    Outside,
    /// After `var`; reading declarations until `begin`.
    Declarations,
    /// After `begin`; executing statements until `end`.
    Body,
}

/// Whether any line has failed so far.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Failed,
}

/// Totals for a finished run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read.
    pub lines: usize,
    /// Lines reported as errors.
    pub errors: usize,
}

/// Executes program text, writing program output to `out` and
/// diagnostics to `err`.
pub struct Interpreter<W, E> {
    symbols: SymbolTable,
    out: W,
    err: E,
    section: Section,
    mode: Mode,
    summary: RunSummary,
}

impl<W: Write, E: Write> Interpreter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Interpreter {
            symbols: SymbolTable::new(),
            out,
            err,
            section: Section::Outside,
            mode: Mode::Normal,
            summary: RunSummary::default(),
        }
    }

    /// Run a whole program, then write the symbol dump unless a line failed.
    pub fn run<R: BufRead>(mut self, input: R) -> io::Result<RunSummary> {
        for line in input.lines() {
            self.feed_line(&line?)?;
        }
        self.finish()
    }

    /// Process the next line of program text.
    pub fn feed_line(&mut self, raw: &str) -> io::Result<()> {
        self.summary.lines += 1;
        let line_no = self.summary.lines;
        let line = raw.trim();
        match self.section {
            Section::Outside => {
                if line == "var" {
                    tracing::debug!(line = line_no, "entering declarations");
                    self.section = Section::Declarations;
                }
                Ok(())
            }
            Section::Declarations if line.eq_ignore_ascii_case("begin") => {
                tracing::debug!(line = line_no, "entering body");
                self.section = Section::Body;
                Ok(())
            }
            Section::Declarations => match self.declare(line, line_no) {
                Ok(()) => Ok(()),
                Err(error) => self.report(line_no, error),
            },
            Section::Body if line.eq_ignore_ascii_case("end") => {
                tracing::debug!(line = line_no, "leaving section");
                self.section = Section::Outside;
                Ok(())
            }
            Section::Body => {
                self.symbols.record_appearances(line, line_no);
                match self.execute(line) {
                    Ok(effect) => self.apply(effect),
                    Err(error) => self.report(line_no, error),
                }
            }
        }
    }

    /// Write the symbol dump (when no line failed) and return the totals.
    pub fn finish(mut self) -> io::Result<RunSummary> {
        if self.mode == Mode::Normal {
            self.symbols.write_dump(&mut self.out)?;
        }
        self.out.flush()?;
        self.err.flush()?;
        tracing::debug!(
            lines = self.summary.lines,
            errors = self.summary.errors,
            "run finished"
        );
        Ok(self.summary)
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    fn declare(&mut self, line: &str, line_no: usize) -> Result<(), InterpError> {
        match parse_declaration(line)? {
            Some(decl) => self.symbols.declare(&decl, line_no),
            None => Ok(()),
        }
    }

    fn execute(&mut self, line: &str) -> Result<Effect, InterpError> {
        let Some(Statement { command, tokens }) = parse_statement(line)? else {
            return Ok(Effect::None);
        };
        tracing::trace!(?command, ?tokens, "executing statement");
        let tree = build(tokens)?;
        let value = evaluate(&tree, &self.symbols)?;
        match command {
            Command::Set { name } => {
                self.symbols.assign(name, value)?;
                Ok(Effect::None)
            }
            Command::Print => Ok(Effect::Output {
                value,
                newline: false,
            }),
            Command::Println => Ok(Effect::Output {
                value,
                newline: true,
            }),
        }
    }

    fn apply(&mut self, effect: Effect) -> io::Result<()> {
        match effect {
            Effect::Output { .. } if self.mode == Mode::Failed => Ok(()),
            Effect::Output { value, newline: true } => writeln!(self.out, "{value}"),
            Effect::Output {
                value,
                newline: false,
            } => write!(self.out, "{value}"),
            Effect::None => Ok(()),
        }
    }

    /// Report a failed line and switch to failed mode.
    fn report(&mut self, line_no: usize, error: InterpError) -> io::Result<()> {
        let error = LineError::new(line_no, error);
        tracing::debug!(%error, "line failed");
        self.summary.errors += 1;
        self.mode = Mode::Failed;
        writeln!(self.err, "{error}")
    }
}

/// What a successfully executed statement asks the interpreter to do.
enum Effect {
    None,
    Output { value: Value, newline: bool },
}

#[cfg(test)]
mod tests;
