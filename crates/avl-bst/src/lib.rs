//! Arena-backed AVL tree with an unbalanced ordered-tree base.
//!
//! Nodes live in a `Vec` owned by the tree. Links are `Option<u32>` indices
//! into it: `l` / `r` (and the tree's root slot) own their targets, `p` is a
//! back-reference for upward walks. Removal physically releases the node,
//! keeping the arena dense.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] / [`KvNode`] traits, [`Side`], comparators |
//! [`tree_node`] | [`TreeNode`], the plain BST node |
//! [`util`] | search, navigation, `swap`, `splice`, `release`, validation, printing |
//! [`map`] | [`TreeMap`] core and the [`TreeOps`] flavour hooks |
//! [`avl`] | [`AvlNode`], rotations and balance fix-ups, [`AvlTree`] |
//! [`bst`] | [`BinarySearchTree`] |
//! [`error`] | [`TreeError`], [`ValidationError`] |
//!
//! ```
//! use avl_bst::AvlTree;
//!
//! let tree: AvlTree<i32, &str> = [(5, "e"), (3, "c"), (8, "h")].into_iter().collect();
//! assert_eq!(tree.first(), Some((&3, &"c")));
//! assert!(tree.assert_valid().is_ok());
//! ```

pub mod avl;
pub mod bst;
pub mod error;
pub mod iter;
pub mod map;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod tree_node;
pub mod types;
pub mod util;

pub use avl::{AvlNode, AvlNodeLike, AvlTree};
pub use bst::BinarySearchTree;
pub use error::{TreeError, ValidationError};
pub use iter::Iter;
pub use map::{TreeMap, TreeOps};
pub use tree_node::TreeNode;
pub use types::{default_comparator, Comparator, KvNode, Node, Side};
