use std::marker::PhantomData;

use log::debug;

use crate::error::TreeError;
use crate::iter::Iter;
use crate::types::{KvNode, Side};
use crate::util::{self, Search};

/// Structural callbacks that distinguish one tree flavour from another.
pub trait TreeOps<N> {
    /// Hangs the freshly pushed `node` from `parent` on `side` and restores
    /// the flavour's invariants. Returns the new root.
    fn insert_at(arena: &mut [N], root: u32, node: u32, parent: u32, side: Side) -> u32;

    /// Unlinks `node` and releases it from the arena. Returns the released
    /// node and the new root.
    fn remove(arena: &mut Vec<N>, root: u32, node: u32) -> (N, Option<u32>);
}

/// Arena-backed ordered map core shared by every tree in the crate.
///
/// The arena is kept dense: slot `i` is always a live node, so the number of
/// entries is the arena length. Indices handed out by [`TreeMap::find`] stay
/// valid until the next removal.
#[derive(Clone)]
pub struct TreeMap<K, V, N, O, C>
where
    N: KvNode<K, V>,
    O: TreeOps<N>,
    C: Fn(&K, &K) -> i32,
{
    arena: Vec<N>,
    root: Option<u32>,
    comparator: C,
    _kv: PhantomData<(K, V)>,
    _ops: PhantomData<O>,
}

impl<K, V, N, O, C> TreeMap<K, V, N, O, C>
where
    N: KvNode<K, V>,
    O: TreeOps<N>,
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(0, comparator)
    }

    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            arena: Vec::with_capacity(capacity),
            root: None,
            comparator,
            _kv: PhantomData,
            _ops: PhantomData,
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &[N] {
        &self.arena
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn node(&self, idx: u32) -> &N {
        &self.arena[idx as usize]
    }

    fn push_node(&mut self, key: K, value: V) -> u32 {
        self.arena.push(N::from_entry(key, value));
        (self.arena.len() - 1) as u32
    }

    fn entry(&self, idx: u32) -> (&K, &V) {
        let node = &self.arena[idx as usize];
        (node.key(), node.value())
    }

    /// Inserts or overwrites. An overwrite returns the previous value and
    /// leaves the tree shape untouched.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let Some(root) = self.root else {
            self.root = Some(self.push_node(key, value));
            return None;
        };

        let search = util::insertion_search(&self.arena, root, &key, |n| n.key(), |a, b| {
            (self.comparator)(a, b)
        });
        match search {
            Search::Found(idx) => Some(self.arena[idx as usize].replace_value(value)),
            Search::Vacant { parent, side } => {
                let node = self.push_node(key, value);
                self.root = Some(O::insert_at(&mut self.arena, root, node, parent, side));
                None
            }
        }
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        util::find(&self.arena, self.root, key, |n| n.key(), |a, b| {
            (self.comparator)(a, b)
        })
    }

    /// Like [`TreeMap::find`] for callers that have not checked membership.
    pub fn try_find(&self, key: &K) -> Result<u32, TreeError> {
        self.find(key).ok_or(TreeError::KeyNotFound)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|i| self.arena[i as usize].value())
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find(key)?;
        Some(self.arena[idx as usize].value_mut())
    }

    pub fn try_get(&self, key: &K) -> Result<&V, TreeError> {
        self.try_find(key).map(|i| self.arena[i as usize].value())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key`, returning its entry. Absent keys are a no-op.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let node = self.find(key)?;
        let root = self.root?;
        let (removed, root) = O::remove(&mut self.arena, root, node);
        self.root = root;
        Some(removed.into_entry())
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    pub fn clear(&mut self) {
        debug!("clearing tree of {} nodes", self.arena.len());
        self.arena.clear();
        self.root = None;
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        util::first(&self.arena, self.root).map(|i| self.entry(i))
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        util::last(&self.arena, self.root).map(|i| self.entry(i))
    }

    pub fn iter(&self) -> Iter<'_, K, V, N> {
        Iter::new(&self.arena, self.root)
    }

    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    pub fn is_balanced(&self) -> bool {
        util::is_balanced(&self.arena, self.root)
    }

    pub fn equal_paths(&self) -> bool {
        util::equal_paths(&self.arena, self.root)
    }

    pub fn for_each<G: FnMut(u32, &N)>(&self, mut f: G) {
        let mut curr = util::first(&self.arena, self.root);
        while let Some(i) = curr {
            f(i, &self.arena[i as usize]);
            curr = util::next(&self.arena, i);
        }
    }

    /// Multi-line dump of the tree shape; `label` renders one node.
    pub fn print<F>(&self, name: &str, label: F) -> String
    where
        F: Fn(u32, &N) -> String,
    {
        if self.root.is_none() {
            return format!("{name} ∅");
        }
        let root: &util::print::PrintChild<'_> =
            &|tab: &str| util::print::print_node(&self.arena, self.root, tab, &label);
        format!("{name}{}", util::print::print_tree("", &[Some(root)]))
    }
}
