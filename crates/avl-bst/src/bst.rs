//! Unbalanced binary search tree on the shared [`TreeMap`] core.
//!
//! Shape depends entirely on insertion order; ascending keys produce a
//! chain. Useful as a baseline and for building specific shapes in tests.

use std::fmt;

use log::trace;

use crate::error::{TreeError, ValidationError};
use crate::iter::Iter;
use crate::map::{TreeMap, TreeOps};
use crate::tree_node::TreeNode;
use crate::types::{default_comparator, Node, Side};
use crate::util;

/// Plain BST callbacks: attach without rebalancing, remove by predecessor
/// swap and splice.
#[derive(Clone, Copy, Debug, Default)]
pub struct BstOps;

impl<N: Node> TreeOps<N> for BstOps {
    fn insert_at(arena: &mut [N], root: u32, node: u32, parent: u32, side: Side) -> u32 {
        util::attach(arena, parent, side, node);
        root
    }

    fn remove(arena: &mut Vec<N>, root: u32, node: u32) -> (N, Option<u32>) {
        let mut root = root;
        if arena[node as usize].r().is_some() {
            if let Ok(pred) = util::predecessor(arena, node) {
                trace!("node {node} has two children, swapping with predecessor {pred}");
                root = util::swap(arena, root, node, pred);
            }
        }
        let splice = util::splice(arena, Some(root), node);
        util::release(arena, splice.root, node)
    }
}

/// Ordered map without any balancing.
#[derive(Clone)]
pub struct BinarySearchTree<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    inner: TreeMap<K, V, TreeNode<K, V>, BstOps, C>,
}

impl<K, V> BinarySearchTree<K, V, fn(&K, &K) -> i32>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: TreeMap::with_capacity_and_comparator(
                capacity,
                default_comparator::<K> as fn(&K, &K) -> i32,
            ),
        }
    }
}

impl<K, V> Default for BinarySearchTree<K, V, fn(&K, &K) -> i32>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> BinarySearchTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            inner: TreeMap::with_comparator(comparator),
        }
    }

    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.inner.insert(key, value)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.remove(key)
    }

    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.inner.remove_entry(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.inner.get_mut(key)
    }

    pub fn try_get(&self, key: &K) -> Result<&V, TreeError> {
        self.inner.try_get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        self.inner.find(key)
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        self.inner.first()
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        self.inner.last()
    }

    pub fn iter(&self) -> Iter<'_, K, V, TreeNode<K, V>> {
        self.inner.iter()
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.iter().map(|(_, v)| v)
    }

    pub fn for_each<G: FnMut(u32, &TreeNode<K, V>)>(&self, f: G) {
        self.inner.for_each(f)
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn height(&self) -> usize {
        self.inner.height()
    }

    pub fn is_balanced(&self) -> bool {
        self.inner.is_balanced()
    }

    pub fn equal_paths(&self) -> bool {
        self.inner.equal_paths()
    }

    pub fn root_index(&self) -> Option<u32> {
        self.inner.root_index()
    }

    pub fn node(&self, idx: u32) -> &TreeNode<K, V> {
        self.inner.node(idx)
    }

    /// Links, order and reachability; no balance requirement.
    pub fn assert_valid(&self) -> Result<(), ValidationError> {
        util::validate(
            self.inner.arena(),
            self.inner.root_index(),
            |n| &n.k,
            self.inner.comparator(),
        )
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for BinarySearchTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V, C> fmt::Display for BinarySearchTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.print("Tree", |_, n| n.k.to_string()))
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BinarySearchTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, V, C> Extend<(K, V)> for BinarySearchTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a BinarySearchTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, TreeNode<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
