//! Binary expression tree nodes.

/// One node of an expression tree.
///
/// Each node owns its children outright; there is no sharing and no
/// back-reference. A node built by [`build`](crate::build) is either a
/// leaf or an operator with both children present. Hand-built trees may
/// leave a child out, in which case evaluation reports a missing token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExprNode {
    /// The token text, exactly as it appeared in the input.
    pub token: String,
    /// Left operand.
    pub left: Option<Box<ExprNode>>,
    /// Right operand.
    pub right: Option<Box<ExprNode>>,
}

impl ExprNode {
    /// A node with no children.
    pub fn leaf(token: impl Into<String>) -> Self {
        ExprNode {
            token: token.into(),
            left: None,
            right: None,
        }
    }

    /// A node applying `token` to two operands.
    pub fn binary(token: impl Into<String>, left: ExprNode, right: ExprNode) -> Self {
        ExprNode {
            token: token.into(),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// A node whose children may be absent.
    pub fn with_children(
        token: impl Into<String>,
        left: Option<ExprNode>,
        right: Option<ExprNode>,
    ) -> Self {
        ExprNode {
            token: token.into(),
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// `true` when the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The left operand, if present.
    #[inline]
    pub fn left(&self) -> Option<&ExprNode> {
        self.left.as_deref()
    }

    /// The right operand, if present.
    #[inline]
    pub fn right(&self) -> Option<&ExprNode> {
        self.right.as_deref()
    }

    /// Number of nodes in this subtree, its root included.
    pub fn node_count(&self) -> usize {
        1 + self.left().map_or(0, ExprNode::node_count)
            + self.right().map_or(0, ExprNode::node_count)
    }

    /// Tokens in prefix order. For a built tree this is the input sequence.
    pub fn prefix_tokens(&self) -> Vec<&str> {
        let mut out = Vec::with_capacity(self.node_count());
        self.collect_prefix(&mut out);
        out
    }

    fn collect_prefix<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.token);
        if let Some(left) = self.left() {
            left.collect_prefix(out);
        }
        if let Some(right) = self.right() {
            right.collect_prefix(out);
        }
    }
}

#[cfg(test)]
mod tests;
