//! Evt Expr - expression trees for the evt interpreter.
//!
//! Two entry points, used bottom-up:
//!
//! - [`build`] turns a flat prefix-order token sequence into an
//!   [`ExprNode`] tree. `*` and `+` take the next two subtrees as
//!   operands; anything else is a leaf.
//! - [`evaluate`] reduces a tree to a [`Value`] using a read-only
//!   [`VariableLookup`].
//!
//! Tokens are untyped text until evaluation. Each one is classified on
//! the spot, in a fixed order: quoted string, integer literal, declared
//! variable, operator, otherwise undeclared.
//!
//! ```text
//! ["*", "+", "1", "2", "x"]   =>        *
//!                                      / \
//!                                     +   x
//!                                    / \
//!                                   1   2
//! ```

mod builder;
mod errors;
mod evaluator;
mod node;
pub mod stack;
pub mod token;
mod value;

pub use builder::build;
pub use errors::{ExprError, ExprResult};
pub use evaluator::{evaluate, evaluate_node};
pub use node::ExprNode;
pub use token::{classify, BinaryOp, TokenKind};
pub use value::{FxVariables, NoVariables, Value, VariableLookup};
