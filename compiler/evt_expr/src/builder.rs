//! Tree construction from a flat prefix-order token sequence.
//!
//! The tree's shape comes entirely from token arity: `*` and `+` take the
//! next two subtrees as operands, every other token is a leaf. One cursor
//! walks the sequence left to right across all recursive calls and is
//! never rewound.

use crate::errors::{ExprError, ExprResult};
use crate::node::ExprNode;
use crate::stack::ensure_sufficient_stack;
use crate::token::is_operator;

/// Build one expression tree, consuming every token.
///
/// # Errors
///
/// - [`ExprError::MissingToken`] if the sequence runs out before the root
///   or an operator operand could be built (including an empty sequence).
/// - [`ExprError::ExtraToken`] if tokens remain after the root is complete.
pub fn build<I>(tokens: I) -> ExprResult<ExprNode>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut builder = TreeBuilder::new(tokens.into_iter());
    let root = builder.build_subtree()?;
    builder.finish()?;
    tracing::trace!(nodes = root.node_count(), "built expression tree");
    Ok(root)
}

/// Cursor state shared by every level of the recursive build.
struct TreeBuilder<I> {
    tokens: I,
}

impl<I> TreeBuilder<I>
where
    I: Iterator,
    I::Item: Into<String>,
{
    fn new(tokens: I) -> Self {
        TreeBuilder { tokens }
    }

    /// Build the subtree rooted at the next token.
    ///
    /// Used for the root and for both operands of an operator alike.
    fn build_subtree(&mut self) -> ExprResult<ExprNode> {
        ensure_sufficient_stack(|| {
            let token: String = self.tokens.next().ok_or(ExprError::MissingToken)?.into();
            if !is_operator(&token) {
                return Ok(ExprNode::leaf(token));
            }
            let left = self.build_subtree()?;
            let right = self.build_subtree()?;
            Ok(ExprNode::binary(token, left, right))
        })
    }

    /// Reject anything left over once the root is complete.
    fn finish(&mut self) -> ExprResult<()> {
        match self.tokens.next() {
            Some(extra) => {
                let extra: String = extra.into();
                tracing::trace!(%extra, "trailing token after expression");
                Err(ExprError::ExtraToken)
            }
            None => Ok(()),
        }
    }
}
