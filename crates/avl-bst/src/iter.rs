use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::types::KvNode;
use crate::util::{first, last, next, prev};

/// In-order iterator over `(&K, &V)`.
///
/// Steps through successor / predecessor links; holds no stack. A fresh
/// call to `iter()` restarts from the smallest key.
pub struct Iter<'a, K, V, N> {
    arena: &'a [N],
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
    _kv: PhantomData<(&'a K, &'a V)>,
}

impl<'a, K, V, N> Iter<'a, K, V, N>
where
    N: KvNode<K, V>,
{
    pub(crate) fn new(arena: &'a [N], root: Option<u32>) -> Self {
        Self {
            arena,
            front: first(arena, root),
            back: last(arena, root),
            remaining: arena.len(),
            _kv: PhantomData,
        }
    }

    fn entry(&self, idx: u32) -> (&'a K, &'a V) {
        let node = &self.arena[idx as usize];
        (node.key(), node.value())
    }
}

impl<'a, K, V, N> Iterator for Iter<'a, K, V, N>
where
    N: KvNode<K, V>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front?;
        self.remaining -= 1;
        self.front = next(self.arena, idx);
        Some(self.entry(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V, N> DoubleEndedIterator for Iter<'a, K, V, N>
where
    N: KvNode<K, V>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back?;
        self.remaining -= 1;
        self.back = prev(self.arena, idx);
        Some(self.entry(idx))
    }
}

impl<K, V, N> ExactSizeIterator for Iter<'_, K, V, N> where N: KvNode<K, V> {}

impl<K, V, N> FusedIterator for Iter<'_, K, V, N> where N: KvNode<K, V> {}

impl<K, V, N> Clone for Iter<'_, K, V, N> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
            _kv: PhantomData,
        }
    }
}
