//! Borrowing traversals over a [`Tree`][crate::Tree].
//!
//! A `Node` has no pointer to its parent so every traversal keeps the path it
//! still has to visit on an explicit stack. None of these recurse, which keeps
//! degenerate (chain shaped) trees from overflowing the call stack.

use std::iter::FusedIterator;

use crate::node::Node;

/// In-order iterator: left subtree, node, right subtree. Yields values in
/// non-decreasing order.
///
/// Created by [`Tree::iter`][crate::Tree::iter].
pub struct Iter<'a, T> {
    /// Nodes whose left subtree has been pushed but which haven't been
    /// yielded yet. The top of the stack is the next node to yield.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_edge(root);
        iter
    }

    fn push_left_edge(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_edge(node.right());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Pre-order iterator: node, left subtree, right subtree.
///
/// Created by [`Tree::pre_order`][crate::Tree::pre_order].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is finished before it.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PreOrder<'_, T> {}
impl<T> FusedIterator for PreOrder<'_, T> {}

/// Where a node on the [`PostOrderNodes`] stack is in its visit.
enum Visit<'a, T> {
    /// Children haven't been scheduled yet.
    Enter(&'a Node<T>),
    /// Both subtrees have been emitted, the node itself is next.
    Exit(&'a Node<T>),
}

/// Post-order walk over the nodes themselves rather than their values.
/// [`Tree`][crate::Tree] uses this where it needs a node's children to be
/// handled before the node.
pub(crate) struct PostOrderNodes<'a, T> {
    stack: Vec<Visit<'a, T>>,
}

impl<'a, T> PostOrderNodes<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(Visit::Enter).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrderNodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Visit::Exit(node) => return Some(node),
                Visit::Enter(node) => {
                    self.stack.push(Visit::Exit(node));
                    self.stack.extend(node.right().map(Visit::Enter));
                    self.stack.extend(node.left().map(Visit::Enter));
                }
            }
        }
    }
}

/// Post-order iterator: left subtree, right subtree, node. Every child is
/// yielded before its parent, so the root always comes last.
///
/// Created by [`Tree::post_order`][crate::Tree::post_order].
pub struct PostOrder<'a, T> {
    nodes: PostOrderNodes<'a, T>,
    remaining: usize,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            nodes: PostOrderNodes::new(root),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PostOrder<'_, T> {}
impl<T> FusedIterator for PostOrder<'_, T> {}
