//! Error types.
//!
//! [`TreeError`] is returned by lookup primitives whose callers did not
//! guard existence first. [`ValidationError`] is only produced by the
//! `assert_valid` checkers; a tree that fails them has a bug.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("key not found")]
    KeyNotFound,
    #[error("node {node} has no left subtree to take a predecessor from")]
    NoLeftChild { node: u32 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("root node {root} has a parent")]
    RootHasParent { root: u32 },
    #[error("child {child} of node {node} does not point back to it")]
    BrokenParentLink { node: u32, child: u32 },
    #[error("balance mismatch at node {node}: expected {expected}, got {actual}")]
    BalanceMismatch { node: u32, expected: i64, actual: i8 },
    #[error("balance {balance} at node {node} is outside -1..=1")]
    BalanceOutOfRange { node: u32, balance: i8 },
    #[error("in-order sequence not strictly ascending at node {node}")]
    OrderViolated { node: u32 },
    #[error("{reachable} nodes reachable from the root, {stored} stored")]
    Unreachable { reachable: usize, stored: usize },
}
