//! Errors surfaced by traversals and by parsing a [`TraversalOrder`][crate::TraversalOrder].

/// Failure of a single step of a [`Traversal`][crate::Traversal].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TraversalError {
    /// Every value has already been produced.
    #[error("traversal has no more elements")]
    OutOfElements,
    /// The tree was modified after the traversal was created.
    #[error("tree was modified during traversal")]
    ConcurrentModification,
    /// The traversal was given a tree other than the one it was created from.
    #[error("traversal belongs to a different tree")]
    ForeignTree,
    /// Traversals are read-only; values cannot be removed through them.
    #[error("traversals do not support removal")]
    Unsupported,
}

/// The string didn't name any [`TraversalOrder`][crate::TraversalOrder].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown traversal order {0:?}, expected one of: pre, in, post, level")]
pub struct ParseOrderError(pub(crate) String);
