//! Node trait definitions.
//!
//! Every tree in this crate keeps its nodes in a `Vec`-backed arena owned by
//! the tree. A "pointer" is an `Option<u32>` index into that arena. The root
//! slot and each node's `l` / `r` links own their targets; `p` is a
//! back-reference used only for upward walks and never owns anything.

use std::cmp::Ordering;

/// Structural links (`p`, `l`, `r`) of an arena node.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Key/value payload carried by a node.
pub trait KvNode<K, V>: Node {
    fn from_entry(key: K, value: V) -> Self
    where
        Self: Sized;

    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;

    /// Stores `value`, returning the previous one.
    fn replace_value(&mut self, value: V) -> V;

    fn into_entry(self) -> (K, V)
    where
        Self: Sized;
}

/// Three-way comparator: negative, zero or positive like `a - b`.
pub type Comparator<K> = dyn Fn(&K, &K) -> i32;

/// Comparator derived from [`Ord`], used by every `new()` constructor.
pub fn default_comparator<K: Ord>(a: &K, b: &K) -> i32 {
    match a.cmp(b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Balance change of a parent whose subtree on this side grew by one.
    ///
    /// Balance is `height(right) - height(left)`, so growth on the left is
    /// `-1` and growth on the right is `+1`. A shrink is the negation.
    pub fn delta(self) -> i8 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }
}
