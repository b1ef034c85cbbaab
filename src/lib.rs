//! This crate exposes a plain (unbalanced) Binary Search Tree over a set of
//! distinct values, together with cursors for walking it in pre-order,
//! in-order, post-order, and level-order.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! number of `Node`s on the longest path from the root `Node` to a leaf
//! `Node`). This tree never rebalances, so adding values in sorted order
//! produces a tree whose height equals its size.
//!
//! ## Traversals
//!
//! [`Tree::traverse`] hands out a [`Traversal`]: a cursor that doesn't borrow
//! the tree. Each step is given the tree again and checks whether the tree has
//! been modified since the cursor was created, failing with
//! [`TraversalError::ConcurrentModification`] if so. When no mutation is
//! needed mid-walk, [`Tree::iter`] and [`Tree::iter_order`] give ordinary
//! borrowing iterators.
//!
//! ```
//! use bst::{Tree, TraversalOrder};
//!
//! let tree: Tree<char> = ('A'..='E').collect();
//!
//! assert_eq!(tree.height(), 5);
//! let pre_order: String = tree.iter_order(TraversalOrder::PreOrder).collect();
//! assert_eq!(pre_order, "ABCDE");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
mod error;
pub mod traversal;
pub mod tree;

pub use error::{ParseOrderError, TraversalError};
pub use traversal::{Iter, Traversal, TraversalOrder};
pub use tree::Tree;
