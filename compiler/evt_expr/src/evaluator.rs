//! Typed evaluation of expression trees.
//!
//! A post-order walk with no state beyond the call stack. Every node's
//! token is classified on arrival (see [`classify`]), so the same tree can
//! be evaluated again after the variable table changes and will see the
//! new values. The first failure unwinds the whole walk.

use crate::errors::{ExprError, ExprResult};
use crate::node::ExprNode;
use crate::stack::ensure_sufficient_stack;
use crate::token::{classify, BinaryOp, TokenKind};
use crate::value::{Value, VariableLookup};

/// Evaluate a built tree against `vars`.
///
/// # Errors
///
/// [`ExprError::MissingToken`], [`ExprError::InvalidType`] or
/// [`ExprError::UndeclaredIdentifier`]; see [`evaluate_node`].
pub fn evaluate<V>(root: &ExprNode, vars: &V) -> ExprResult<Value>
where
    V: VariableLookup + ?Sized,
{
    evaluate_node(Some(root), vars)
}

/// Evaluate a possibly absent node against `vars`.
///
/// # Errors
///
/// - [`ExprError::MissingToken`] when `node`, or an operand reached while
///   walking it, is absent.
/// - [`ExprError::InvalidType`] when an operand of `*` or `+` is a string.
/// - [`ExprError::UndeclaredIdentifier`] for a token that is no literal,
///   no declared variable and no operator.
pub fn evaluate_node<V>(node: Option<&ExprNode>, vars: &V) -> ExprResult<Value>
where
    V: VariableLookup + ?Sized,
{
    Evaluator { vars }.eval(node)
}

struct Evaluator<'v, V: ?Sized> {
    vars: &'v V,
}

impl<V> Evaluator<'_, V>
where
    V: VariableLookup + ?Sized,
{
    fn eval(&self, node: Option<&ExprNode>) -> ExprResult<Value> {
        let node = node.ok_or(ExprError::MissingToken)?;
        let kind = classify(&node.token, self.vars);
        tracing::trace!(token = %node.token, ?kind, "evaluating node");
        match kind {
            TokenKind::StringLiteral(s) => Ok(Value::Str(s.to_string())),
            TokenKind::IntLiteral(n) => Ok(Value::Int(n)),
            TokenKind::Variable(value) => Ok(value.clone()),
            TokenKind::Operator(op) => self.eval_binary(op, node),
            TokenKind::Unrecognized => Err(ExprError::undeclared(node.token.as_str())),
        }
    }

    /// Evaluate both operands left to right and combine them.
    ///
    /// The left operand's type is checked before the right one is visited.
    fn eval_binary(&self, op: BinaryOp, node: &ExprNode) -> ExprResult<Value> {
        ensure_sufficient_stack(|| {
            let left = self.eval_int_operand(node.left())?;
            let right = self.eval_int_operand(node.right())?;
            Ok(Value::Int(op.apply(left, right)))
        })
    }

    fn eval_int_operand(&self, node: Option<&ExprNode>) -> ExprResult<i64> {
        self.eval(node)?.as_int().ok_or(ExprError::InvalidType)
    }
}
