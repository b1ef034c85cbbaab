//! An unbalanced Binary Search Tree holding a set of distinct values. Values are inserted where
//! plain comparison sends them and nothing is ever rotated, so inserting sorted input builds a
//! chain as tall as the tree is large.
//!
//! # Examples
//!
//! ```
//! use bst::{Tree, TraversalOrder};
//!
//! let mut tree = Tree::new();
//! assert!(tree.is_empty());
//!
//! assert!(tree.add(5));
//! assert!(tree.add(3));
//! assert!(tree.add(8));
//!
//! // Duplicates are rejected.
//! assert!(!tree.add(5));
//! assert_eq!(tree.size(), 3);
//!
//! let pre_order: Vec<_> = tree.iter_order(TraversalOrder::PreOrder).copied().collect();
//! assert_eq!(pre_order, [5, 3, 8]);
//!
//! assert!(tree.remove(&5));
//! assert!(!tree.contains(&5));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 8]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use log::trace;

use crate::arena::{Arena, Link, Node, NodeId, Slot};
use crate::traversal::{Iter, Traversal, TraversalOrder};

/// A Binary Search Tree over distinct, totally ordered values. This can be used for adding,
/// finding, and removing values, and for walking them in any of the four
/// [`TraversalOrder`]s.
///
/// Every successful mutation bumps an internal stamp. A [`Traversal`] remembers the stamp it was
/// created under and refuses to continue once the tree has changed. It also remembers which tree
/// it was created from and refuses to walk any other.
pub struct Tree<T> {
    nodes: Arena<T>,
    root: Link,
    len: usize,
    /// Bumped on every mutation so outstanding traversals can tell they are stale.
    stamp: u64,
    /// Distinct for every tree (clones included), so a traversal can't wander into another arena.
    identity: u64,
}

/// Source of [`Tree`] identities.
static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(0);

fn next_identity() -> u64 {
    NEXT_IDENTITY.fetch_add(1, AtomicOrdering::Relaxed)
}

/// Manual implementation of `Clone` so the copy gets an identity of its own.
impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
            len: self.len,
            stamp: self.stamp,
            identity: next_identity(),
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
            stamp: 0,
            identity: next_identity(),
        }
    }

    /// The number of values in the tree.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The number of nodes on the longest path from the root down to a leaf. An empty tree has a
    /// height of 0 and a tree holding one value has a height of 1.
    ///
    /// Heights are not cached, so this visits every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// // Sorted input never branches.
    /// tree.extend(1..=4);
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            tallest = tallest.max(depth);
            let node = &self.nodes[id];
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }

        tallest
    }

    /// The smallest value in the tree, found by following left children from the root.
    pub fn min(&self) -> Option<&T> {
        let mut id = self.root?;
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        Some(&self.nodes[id].value)
    }

    /// The largest value in the tree, found by following right children from the root.
    pub fn max(&self) -> Option<&T> {
        let mut id = self.root?;
        while let Some(right) = self.nodes[id].right {
            id = right;
        }
        Some(&self.nodes[id].value)
    }

    /// Removes every value. Any outstanding [`Traversal`] becomes stale.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
        self.touch();
    }

    /// Starts a walk over the values currently in the tree in the given order. The returned
    /// [`Traversal`] doesn't borrow the tree; pass the tree back in at every step. If the tree is
    /// modified in between, the next step fails with
    /// [`ConcurrentModification`][crate::TraversalError::ConcurrentModification].
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{Tree, TraversalError, TraversalOrder};
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let mut walk = tree.traverse(TraversalOrder::LevelOrder);
    /// assert_eq!(walk.advance(&tree), Ok(&2));
    /// assert_eq!(walk.advance(&tree), Ok(&1));
    ///
    /// tree.add(4);
    /// assert_eq!(walk.advance(&tree), Err(TraversalError::ConcurrentModification));
    /// ```
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<T> {
        Traversal::new(self, order)
    }

    /// Borrowing iterator over the values in the given order. While it lives the tree can't be
    /// modified, so it never sees a stale tree.
    pub fn iter_order(&self, order: TraversalOrder) -> Iter<'_, T> {
        self.traverse(order).bind(self)
    }

    /// Borrowing iterator over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.iter_order(TraversalOrder::InOrder)
    }

    pub(crate) fn root(&self) -> Link {
        self.root
    }

    pub(crate) fn nodes(&self) -> &Arena<T> {
        &self.nodes
    }

    pub(crate) fn stamp(&self) -> u64 {
        self.stamp
    }

    pub(crate) fn identity(&self) -> u64 {
        self.identity
    }

    fn touch(&mut self) {
        self.stamp = self.stamp.wrapping_add(1);
    }

    fn link(&self, slot: Slot) -> Link {
        match slot {
            Slot::Root => self.root,
            Slot::Left(parent) => self.nodes[parent].left,
            Slot::Right(parent) => self.nodes[parent].right,
        }
    }

    fn link_mut(&mut self, slot: Slot) -> &mut Link {
        match slot {
            Slot::Root => &mut self.root,
            Slot::Left(parent) => &mut self.nodes[parent].left,
            Slot::Right(parent) => &mut self.nodes[parent].right,
        }
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Whether the tree holds a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add('b');
    ///
    /// assert!(tree.contains(&'b'));
    /// assert!(!tree.contains(&'z'));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.locate(value).is_some()
    }

    /// Adds `value` as a new leaf. Returns `false` and leaves the tree untouched if an equal value
    /// is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.add(1));
    /// assert!(!tree.add(1));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        let mut slot = Slot::Root;
        let mut depth = 1;
        while let Some(id) = self.link(slot) {
            slot = match value.cmp(&self.nodes[id].value) {
                Ordering::Less => Slot::Left(id),
                Ordering::Equal => return false,
                Ordering::Greater => Slot::Right(id),
            };
            depth += 1;
        }

        let id = self.nodes.alloc(Node::leaf(value));
        *self.link_mut(slot) = Some(id);
        self.len += 1;
        self.touch();
        trace!("attached {:?} under {:?} at depth {}", id, slot, depth);

        if cfg!(debug_assertions) {
            match slot {
                Slot::Left(parent) => assert!(self.nodes[id].value < self.nodes[parent].value),
                Slot::Right(parent) => assert!(self.nodes[id].value > self.nodes[parent].value),
                Slot::Root => {}
            }
        }
        true
    }

    /// Removes the value equal to `value`. Returns `false` if there was none.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.remove(&5));
    /// assert!(!tree.remove(&5));
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes the value equal to `value` and returns it. If the tree does not contain such a
    /// value, nothing happens.
    ///
    /// A node with at most one child is replaced by that child. A node with two children takes
    /// the value of its in-order successor (the leftmost node of its right subtree) and the
    /// successor's node is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(String::from("kept"));
    /// tree.add(String::from("taken"));
    ///
    /// assert_eq!(tree.take(&String::from("taken")), Some(String::from("taken")));
    /// assert_eq!(tree.take(&String::from("missing")), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        let (slot, id) = self.locate(value)?;
        let node = &self.nodes[id];
        let removed = match (node.left, node.right) {
            (None, child) | (child, None) => {
                *self.link_mut(slot) = child;
                trace!("released {:?}, {:?} now holds {:?}", id, slot, child);
                self.nodes.release(id).value
            }
            (Some(_), Some(right)) => {
                let successor = self.detach_leftmost(Slot::Right(id), right);
                std::mem::replace(&mut self.nodes[id].value, successor)
            }
        };

        self.len -= 1;
        self.touch();
        Some(removed)
    }

    /// Finds the node holding `value` along with the slot that owns it.
    fn locate(&self, value: &T) -> Option<(Slot, NodeId)> {
        let mut slot = Slot::Root;
        while let Some(id) = self.link(slot) {
            slot = match value.cmp(&self.nodes[id].value) {
                Ordering::Less => Slot::Left(id),
                Ordering::Equal => return Some((slot, id)),
                Ordering::Greater => Slot::Right(id),
            };
        }

        None
    }

    /// Unhooks the leftmost node of the subtree rooted at `id` (which hangs from `slot`) and
    /// returns its value. The leftmost node has no left child, so its right child takes its place.
    fn detach_leftmost(&mut self, mut slot: Slot, mut id: NodeId) -> T {
        while let Some(left) = self.nodes[id].left {
            slot = Slot::Left(id);
            id = left;
        }

        let right = self.nodes[id].right;
        *self.link_mut(slot) = right;
        trace!("released successor {:?}, {:?} now holds {:?}", id, slot, right);
        self.nodes.release(id).value
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
            self.add(value);
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
