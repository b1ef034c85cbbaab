//! Walking a [`Tree`] in one of four orders.
//!
//! A [`Traversal`] is a cursor made of node indices plus the tree's modification stamp at the
//! moment it was created. It holds no borrow, so the tree can be changed between steps; the next
//! step then notices the stamp moved and fails with [`TraversalError::ConcurrentModification`]
//! rather than following links that may no longer exist. It also records which tree it came
//! from, so it never indexes into some other tree's nodes.
//!
//! Every order is an explicit stack or queue state machine, so even a degenerate tree (one long
//! chain) is walked without recursion.

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::str::FromStr;

use log::debug;

use crate::arena::{Arena, Link, NodeId};
use crate::error::{ParseOrderError, TraversalError};
use crate::tree::Tree;

/// The order in which a [`Traversal`] visits nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree. Yields values in ascending order.
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
    /// Breadth first: the root, then every node at depth 2 from left to right, and so on.
    LevelOrder,
}

impl TraversalOrder {
    /// Every order, in declaration order.
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::PreOrder,
        TraversalOrder::InOrder,
        TraversalOrder::PostOrder,
        TraversalOrder::LevelOrder,
    ];
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PreOrder => "pre-order",
            Self::InOrder => "in-order",
            Self::PostOrder => "post-order",
            Self::LevelOrder => "level-order",
        };
        f.write_str(name)
    }
}

/// Accepts `pre`, `pre-order`, `pre_order`, `PRE_ORDER`, `preorder`, and likewise for the other
/// orders.
impl FromStr for TraversalOrder {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], "");
        match normalized.strip_suffix("order").unwrap_or(normalized.as_str()) {
            "pre" => Ok(Self::PreOrder),
            "in" => Ok(Self::InOrder),
            "post" => Ok(Self::PostOrder),
            "level" => Ok(Self::LevelOrder),
            _ => Err(ParseOrderError(s.to_owned())),
        }
    }
}

/// A single pass over the values a [`Tree`] held when [`Tree::traverse`] was called.
///
/// Each step takes the tree again. If the tree has been modified since the traversal was
/// created, the step fails with [`TraversalError::ConcurrentModification`]. Handing it any other
/// tree, a clone included, fails with [`TraversalError::ForeignTree`].
///
/// # Examples
///
/// ```
/// use bst::{Tree, TraversalError, TraversalOrder};
///
/// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
/// let mut walk = tree.traverse(TraversalOrder::PostOrder);
///
/// let mut seen = Vec::new();
/// while walk.has_next(&tree)? {
///     seen.push(*walk.advance(&tree)?);
/// }
/// assert_eq!(seen, [1, 3, 2]);
/// assert_eq!(walk.advance(&tree), Err(TraversalError::OutOfElements));
/// # Ok::<(), TraversalError>(())
/// ```
pub struct Traversal<T> {
    cursor: Cursor,
    /// The tree's stamp when this traversal was created.
    expected: u64,
    /// Identity of the tree this traversal was created from.
    owner: u64,
    remaining: usize,
    _values: PhantomData<fn() -> T>,
}

/// Manual implementation of `Clone` so cloning a cursor doesn't require `T: Clone`.
impl<T> Clone for Traversal<T> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
            expected: self.expected,
            owner: self.owner,
            remaining: self.remaining,
            _values: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Traversal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("order", &self.order())
            .field("remaining", &self.remaining)
            .finish()
    }
}

impl<T> Traversal<T> {
    pub(crate) fn new(tree: &Tree<T>, order: TraversalOrder) -> Self {
        let cursor = match order {
            TraversalOrder::PreOrder => Cursor::PreOrder(PreOrder::new(tree)),
            TraversalOrder::InOrder => Cursor::InOrder(InOrder::new(tree)),
            TraversalOrder::PostOrder => Cursor::PostOrder(PostOrder::new(tree)),
            TraversalOrder::LevelOrder => Cursor::LevelOrder(LevelOrder::new(tree)),
        };
        Self {
            cursor,
            expected: tree.stamp(),
            owner: tree.identity(),
            remaining: tree.size(),
            _values: PhantomData,
        }
    }

    /// The order this traversal visits values in.
    pub fn order(&self) -> TraversalOrder {
        match self.cursor {
            Cursor::PreOrder(_) => TraversalOrder::PreOrder,
            Cursor::InOrder(_) => TraversalOrder::InOrder,
            Cursor::PostOrder(_) => TraversalOrder::PostOrder,
            Cursor::LevelOrder(_) => TraversalOrder::LevelOrder,
        }
    }

    /// Whether another value is available.
    pub fn has_next(&self, tree: &Tree<T>) -> Result<bool, TraversalError> {
        self.check(tree)?;
        Ok(!self.cursor.is_done())
    }

    /// Produces the next value.
    ///
    /// Fails with [`TraversalError::OutOfElements`] once every value has been produced.
    pub fn advance<'t>(&mut self, tree: &'t Tree<T>) -> Result<&'t T, TraversalError> {
        self.check(tree)?;
        let id = self
            .cursor
            .step(tree.nodes())
            .ok_or(TraversalError::OutOfElements)?;
        self.remaining = self.remaining.saturating_sub(1);
        Ok(&tree.nodes()[id].value)
    }

    /// Traversals are read-only. This always fails with [`TraversalError::Unsupported`]; use
    /// [`Tree::remove`] instead.
    pub fn remove(&mut self) -> Result<(), TraversalError> {
        Err(TraversalError::Unsupported)
    }

    /// Ties the traversal to `tree` as a standard [`Iterator`]. The iterator borrows the tree, so
    /// the tree can't change underneath it. If it had already changed before binding, or `tree`
    /// is not the tree the traversal came from, the iterator yields nothing.
    pub fn bind(self, tree: &Tree<T>) -> Iter<'_, T> {
        Iter {
            tree,
            traversal: self,
        }
    }

    fn check(&self, tree: &Tree<T>) -> Result<(), TraversalError> {
        if tree.identity() != self.owner {
            debug!("{} traversal was handed a different tree", self.order());
            Err(TraversalError::ForeignTree)
        } else if tree.stamp() == self.expected {
            Ok(())
        } else {
            debug!(
                "{} traversal is stale: created at stamp {}, tree is at {}",
                self.order(),
                self.expected,
                tree.stamp()
            );
            Err(TraversalError::ConcurrentModification)
        }
    }
}

/// Borrowing iterator over a [`Tree`]'s values in some [`TraversalOrder`]. Created by
/// [`Tree::iter`], [`Tree::iter_order`], or [`Traversal::bind`].
pub struct Iter<'a, T> {
    tree: &'a Tree<T>,
    traversal: Traversal<T>,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            traversal: self.traversal.clone(),
        }
    }
}

impl<'a, T> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.traversal).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.traversal.advance(self.tree).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.traversal.check(self.tree) {
            Ok(()) => (self.traversal.remaining, Some(self.traversal.remaining)),
            Err(_) => (0, Some(0)),
        }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// One state machine per [`TraversalOrder`].
#[derive(Clone, Debug)]
enum Cursor {
    PreOrder(PreOrder),
    InOrder(InOrder),
    PostOrder(PostOrder),
    LevelOrder(LevelOrder),
}

impl Cursor {
    fn step<T>(&mut self, nodes: &Arena<T>) -> Option<NodeId> {
        match self {
            Self::PreOrder(c) => c.step(nodes),
            Self::InOrder(c) => c.step(nodes),
            Self::PostOrder(c) => c.step(),
            Self::LevelOrder(c) => c.step(nodes),
        }
    }

    fn is_done(&self) -> bool {
        match self {
            Self::PreOrder(c) => c.stack.is_empty(),
            Self::InOrder(c) => c.stack.is_empty(),
            Self::PostOrder(c) => c.output.is_empty(),
            Self::LevelOrder(c) => c.queue.is_empty(),
        }
    }
}

#[derive(Clone, Debug)]
struct PreOrder {
    stack: Vec<NodeId>,
}

impl PreOrder {
    fn new<T>(tree: &Tree<T>) -> Self {
        Self {
            stack: tree.root().into_iter().collect(),
        }
    }

    fn step<T>(&mut self, nodes: &Arena<T>) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let node = &nodes[id];
        // Right goes on first so the left subtree is popped next.
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(id)
    }
}

#[derive(Clone, Debug)]
struct InOrder {
    /// The left spine still to visit. The top is always the smallest unvisited value.
    stack: Vec<NodeId>,
}

impl InOrder {
    fn new<T>(tree: &Tree<T>) -> Self {
        let mut cursor = Self { stack: Vec::new() };
        cursor.push_left_spine(tree.nodes(), tree.root());
        cursor
    }

    fn step<T>(&mut self, nodes: &Arena<T>) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.push_left_spine(nodes, nodes[id].right);
        Some(id)
    }

    fn push_left_spine<T>(&mut self, nodes: &Arena<T>, mut link: Link) {
        while let Some(id) = link {
            self.stack.push(id);
            link = nodes[id].left;
        }
    }
}

#[derive(Clone, Debug)]
struct PostOrder {
    /// Every node in root-right-left order, built up front. Popping it gives left-right-root.
    output: Vec<NodeId>,
}

impl PostOrder {
    fn new<T>(tree: &Tree<T>) -> Self {
        let nodes = tree.nodes();
        let mut pending: Vec<NodeId> = tree.root().into_iter().collect();
        let mut output = Vec::with_capacity(tree.size());
        while let Some(id) = pending.pop() {
            output.push(id);
            pending.extend(nodes[id].left);
            pending.extend(nodes[id].right);
        }

        Self { output }
    }

    fn step(&mut self) -> Option<NodeId> {
        self.output.pop()
    }
}

#[derive(Clone, Debug)]
struct LevelOrder {
    queue: VecDeque<NodeId>,
}

impl LevelOrder {
    fn new<T>(tree: &Tree<T>) -> Self {
        Self {
            queue: tree.root().into_iter().collect(),
        }
    }

    fn step<T>(&mut self, nodes: &Arena<T>) -> Option<NodeId> {
        let id = self.queue.pop_front()?;
        self.queue.extend(nodes[id].left);
        self.queue.extend(nodes[id].right);
        Some(id)
    }
}
