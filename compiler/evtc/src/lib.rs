//! Evtc - line interpreter for the evt toy language.
//!
//! Programs are line oriented:
//!
//! ```text
//! var
//! int total ;
//! string label ;
//! begin
//! set total + 2 * 3 4 ;
//! set label "grand total: " ;
//! print label ;
//! println total ;
//! end
//! ```
//!
//! Expressions are prefix (`+ 2 * 3 4` is `2 + 3 * 4`) and are built and
//! evaluated by `evt_expr`. This crate supplies everything around them:
//! sections, declarations, commands, diagnostics with line numbers, and
//! the closing symbol table dump.

pub mod config;
pub mod diagnostic;
pub mod interpreter;
pub mod run;
pub mod statement;
pub mod symbols;
mod tracing_setup;

pub use config::{ConfigError, InputSource, InterpreterConfig};
pub use diagnostic::{InterpError, LineError};
pub use interpreter::{Interpreter, Mode, RunSummary, Section};
pub use run::{run_program, RunError};
pub use symbols::SymbolTable;
pub use tracing_setup::{init_tracing, LOG_ENV};
