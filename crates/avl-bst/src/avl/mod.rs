//! AVL tree: [`AvlNode`] layout, the rebalancing engine in [`util`] and the
//! [`AvlTree`] map built on [`TreeMap`](crate::TreeMap).

pub mod tree;
pub mod types;
pub mod util;

pub use tree::{AvlOps, AvlTree};
pub use types::{AvlNode, AvlNodeLike};
