use std::fmt;

use crate::error::{TreeError, ValidationError};
use crate::iter::Iter;
use crate::map::{TreeMap, TreeOps};
use crate::types::{default_comparator, Side};

use super::types::AvlNode;
use super::util;

/// Height-balancing callbacks for [`TreeMap`].
#[derive(Clone, Copy, Debug, Default)]
pub struct AvlOps;

impl<K, V> TreeOps<AvlNode<K, V>> for AvlOps {
    fn insert_at(
        arena: &mut [AvlNode<K, V>],
        root: u32,
        node: u32,
        parent: u32,
        side: Side,
    ) -> u32 {
        util::insert_at(arena, root, node, parent, side)
    }

    fn remove(
        arena: &mut Vec<AvlNode<K, V>>,
        root: u32,
        node: u32,
    ) -> (AvlNode<K, V>, Option<u32>) {
        util::remove(arena, root, node)
    }
}

/// Ordered map kept height-balanced by AVL rotations.
///
/// Every node's balance (`height(right) - height(left)`) stays within
/// `-1..=1`, so insert, remove and lookup are `O(log n)`.
///
/// ```
/// use avl_bst::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for k in [1, 2, 3] {
///     tree.insert(k, k * 10);
/// }
/// assert_eq!(tree.height(), 2);
/// assert_eq!(tree.remove(&2), Some(20));
/// assert_eq!(tree.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
/// ```
#[derive(Clone)]
pub struct AvlTree<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    inner: TreeMap<K, V, AvlNode<K, V>, AvlOps, C>,
}

impl<K, V> AvlTree<K, V, fn(&K, &K) -> i32>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }

    /// Preallocates room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: TreeMap::with_capacity_and_comparator(
                capacity,
                default_comparator::<K> as fn(&K, &K) -> i32,
            ),
        }
    }
}

impl<K, V> Default for AvlTree<K, V, fn(&K, &K) -> i32>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> AvlTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    /// Orders keys by `comparator`, which returns a negative number, zero or
    /// a positive number like `a - b`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            inner: TreeMap::with_comparator(comparator),
        }
    }

    /// Inserts `key`, or overwrites its value in place when present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.inner.insert(key, value)
    }

    /// Removes `key`; absent keys are a no-op.
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

    /// Arena index of `key`; valid until the next removal.
    pub fn find(&self, key: &K) -> Option<u32> {
        self.inner.find(key)
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        self.inner.first()
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        self.inner.last()
    }

    pub fn iter(&self) -> Iter<'_, K, V, AvlNode<K, V>> {
        self.inner.iter()
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.iter().map(|(_, v)| v)
    }

    pub fn for_each<G: FnMut(u32, &AvlNode<K, V>)>(&self, f: G) {
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

    /// Number of nodes on the longest root-to-leaf path; 0 when empty.
    pub fn height(&self) -> usize {
        self.inner.height()
    }

    /// Recomputes heights; does not trust the stored balances.
    pub fn is_balanced(&self) -> bool {
        self.inner.is_balanced()
    }

    /// Whether every leaf sits at the same depth.
    pub fn equal_paths(&self) -> bool {
        self.inner.equal_paths()
    }

    pub fn root_index(&self) -> Option<u32> {
        self.inner.root_index()
    }

    pub fn node(&self, idx: u32) -> &AvlNode<K, V> {
        self.inner.node(idx)
    }

    pub fn assert_valid(&self) -> Result<(), ValidationError> {
        util::assert_avl_tree(
            self.inner.arena(),
            self.inner.root_index(),
            |n| &n.k,
            self.inner.comparator(),
        )
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for AvlTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Box-drawing dump with each node's balance in brackets.
impl<K: fmt::Display, V, C> fmt::Display for AvlTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dump = self
            .inner
            .print("AvlTree", |_, n| format!("{} [{}]", n.k, n.balance));
        f.write_str(&dump)
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, V, C> Extend<(K, V)> for AvlTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a AvlTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, AvlNode<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
