use super::*;
use pretty_assertions::assert_eq;

#[test]
fn leaf_has_no_children() {
    let node = ExprNode::leaf("5");
    assert!(node.is_leaf());
    assert_eq!(node.left(), None);
    assert_eq!(node.right(), None);
    assert_eq!(node.node_count(), 1);
}

#[test]
fn binary_owns_both_children() {
    let node = ExprNode::binary("+", ExprNode::leaf("1"), ExprNode::leaf("2"));
    assert!(!node.is_leaf());
    assert_eq!(node.left().map(|n| n.token.as_str()), Some("1"));
    assert_eq!(node.right().map(|n| n.token.as_str()), Some("2"));
    assert_eq!(node.node_count(), 3);
}

#[test]
fn prefix_order_walk() {
    let node = ExprNode::binary(
        "*",
        ExprNode::binary("+", ExprNode::leaf("1"), ExprNode::leaf("2")),
        ExprNode::leaf("x"),
    );
    assert_eq!(node.prefix_tokens(), vec!["*", "+", "1", "2", "x"]);
    assert_eq!(node.node_count(), 5);
}

#[test]
fn partial_children() {
    let node = ExprNode::with_children("+", Some(ExprNode::leaf("1")), None);
    assert!(!node.is_leaf());
    assert!(node.right().is_none());
    assert_eq!(node.prefix_tokens(), vec!["+", "1"]);
    assert_eq!(node.node_count(), 2);
}
