//! An unbalanced, mutable BST. Values are pushed in place and never removed.
//! Nothing rebalances the tree so its shape depends entirely on the order in
//! which values were pushed.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(tree.find(&1).is_none());
//! assert_eq!(tree.min(), None);
//!
//! tree.push(5);
//! tree.push(4);
//! tree.push(6);
//!
//! // Smaller values go left, larger values go right.
//! let root = tree.root().unwrap();
//! assert_eq!(root.value(), &5);
//! assert_eq!(root.left().map(|n| *n.value()), Some(4));
//! assert_eq!(root.right().map(|n| *n.value()), Some(6));
//!
//! // Equal values are kept and also go left.
//! tree.push(5);
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.sort(), vec![4, 5, 5, 6]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use log::{debug, trace};

use crate::iter::{Iter, PostOrder, PostOrderNodes, PreOrder};
use crate::node::Node;

/// An unbalanced Binary Search Tree. For every node, values in its left
/// subtree are less than or equal to its value and values in its right
/// subtree are strictly greater.
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.drop_nodes();
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        // Children come out of the walk before their parent so both of a
        // node's copied subtrees are on top of `built` when it's reached,
        // right above left.
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for node in PostOrderNodes::new(self.root()) {
            let mut copy = Node::new_boxed(node.value().clone());
            if node.right.is_some() {
                copy.right = built.pop();
            }
            if node.left.is_some() {
                copy.left = built.pop();
            }
            built.push(copy);
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Whether nothing has been pushed into this tree.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many values are stored, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The root node, if the tree isn't empty. Nodes are read-only so this
    /// can be used to inspect the tree's shape but not to change it.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Inserts `value` into the tree. Values strictly greater than a node's
    /// value go to its right, everything else (including equal values) goes
    /// to its left. Exactly one node is allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.push(5);
    /// tree.push(5);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.left().map(|n| *n.value()), Some(5));
    /// assert!(root.right().is_none());
    /// ```
    pub fn push(&mut self, value: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        let mut depth = 0;
        while let Some(node) = slot {
            slot = if &value > node.value() {
                &mut node.right
            } else {
                &mut node.left
            };
            depth += 1;
        }

        *slot = Some(Node::new_boxed(value));
        self.len += 1;
        trace!("pushed value at depth {} (len {})", depth, self.len);
    }

    /// Searches for a node holding a value equal to `value`. The first match
    /// along the search path is returned. When duplicates are stored there is
    /// no promise about which of them this is.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.push(1);
    ///
    /// assert_eq!(tree.find(&1).map(|n| *n.value()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(node.value()) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether a value equal to `value` is stored.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// The smallest stored value. Only walks the left edge of the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.value())
    }

    /// The largest stored value. Only walks the right edge of the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.value())
    }

    /// Number of nodes on the longest path from the root to a leaf. An empty
    /// tree has a height of 0 and a single node has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|n| n.left().into_iter().chain(n.right()))
                .collect();
        }
        height
    }

    /// Borrowing in-order iterator. Values come out in non-decreasing order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.len)
    }

    /// Borrowing pre-order iterator: a node, then its left subtree, then its
    /// right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root(), self.len)
    }

    /// Borrowing post-order iterator: a node's left subtree, then its right
    /// subtree, then the node.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root(), self.len)
    }

    /// Copies out every value with an in-order walk, so the result is sorted
    /// in non-decreasing order. This is the same as [`Tree::sort`].
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = vec![5, 4, 6, 7, 3].into_iter().collect();
    /// assert_eq!(tree.to_array(), vec![3, 4, 5, 6, 7]);
    /// ```
    pub fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Every stored value in non-decreasing order. This is the same as
    /// [`Tree::to_array`].
    pub fn sort(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.to_array()
    }

    /// Copies out every value with a post-order walk so that every node comes
    /// after all of its descendants.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// //       4
    /// //      / \
    /// //     2   5
    /// //    / \
    /// //   1   3
    /// let tree: Tree<_> = vec![4, 2, 5, 1, 3].into_iter().collect();
    /// assert_eq!(tree.post_ordered(), vec![1, 3, 2, 5, 4]);
    /// ```
    pub fn post_ordered(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.post_order().cloned().collect()
    }

    /// Copies out every value with a pre-order walk so that every node comes
    /// before all of its descendants.
    pub fn pre_ordered(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.pre_order().cloned().collect()
    }

    /// Drops every node leaving an empty tree.
    pub fn clear(&mut self) {
        let dropped = self.drop_nodes();
        debug!("cleared tree of {} nodes", dropped);
    }

    /// Detaches and drops nodes one at a time. Dropping the root `Box`
    /// directly would recurse once per level.
    fn drop_nodes(&mut self) -> usize {
        let mut dropped = 0;
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
            dropped += 1;
        }
        self.len = 0;
        dropped
    }
}
