//! This crate exposes a plain, unbalanced Binary Search Tree (BST) holding
//! ordered values.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores the value that was pushed
//! and will sometimes have child `Node`s. The invariants this tree keeps are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than **or equal to** its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    strictly greater than its own value.
//!
//! > Duplicates are kept as distinct nodes and always go left.
//!
//! Searching takes `O(height)`. Nothing here rebalances the tree, so pushing
//! values in sorted order produces a chain whose height is the number of
//! values pushed. Every walk over the tree (including dropping it) uses an
//! explicit stack, so such chains are slow but never overflow the call stack.
//!
//! Visiting the left subtree, then the node, then the right subtree yields
//! the values in non-decreasing order ([`Tree::sort`]). Visiting both
//! subtrees before the node gives a bottom-up order ([`Tree::post_ordered`]).
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::Tree;
//!
//! let mut tree = Tree::new();
//! for x in [4, 6, 7, 2, 3, 5, 1] {
//!     tree.push(x);
//! }
//!
//! assert_eq!(tree.sort(), vec![1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(tree.min(), Some(&1));
//! assert_eq!(tree.max(), Some(&7));
//! assert_eq!(tree.find(&3).map(|n| *n.value()), Some(3));
//! assert!(tree.find(&80).is_none());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod iter;
pub mod node;
pub mod tree;


pub use node::Node;
pub use tree::Tree;
