//! Error types surfaced by the collections.
//!
//! Lookups never fail: absent keys are reported through `Option`/`bool`.
//! The only hard error is a traversal started without a visitor.

use thiserror::Error;

/// Error returned by [`OrderedTree::traverse`](crate::OrderedTree::traverse).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalError {
    #[error("a visitor is required to traverse the tree")]
    MissingVisitor,
}
