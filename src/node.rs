//! A single vertex of a [`Tree`][crate::Tree].

use std::fmt;

/// A `Node` holds one pushed value and owns up to two children. Outside of
/// this crate a `Node` is read-only: the value and links can be inspected but
/// never changed, so a `&Node` handed out by [`Tree::find`][crate::Tree::find]
/// can't be used to break the tree's ordering.
pub struct Node<T> {
    value: T,
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Construct a new `Node` holding `value` with no children.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any. Every value in it is less than
    /// or equal to this node's value.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any. Every value in it is strictly
    /// greater than this node's value.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Only shows this node's value and its immediate children's values. Use
/// [`Tree`][crate::Tree]'s `Debug` to see every value.
impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}
