//! Ordered-tree base: unbalanced BST mechanics over an arena.
//!
//! - navigation (`first`, `last`, `next`, `prev`, `predecessor`)
//! - key search (`find`, `insertion_search`)
//! - structural edits (`attach`, `splice`, `swap`, `release`)
//! - measurements (`size`, `height`, `is_balanced`, `equal_paths`)
//!
//! Key-based helpers accept a `key_of` accessor and a three-way comparator so
//! they work over any node layout implementing [`Node`].

pub mod paths;
pub mod print;
pub mod swap;

use crate::error::{TreeError, ValidationError};
use crate::types::{Node, Side};

pub use paths::{equal_paths, height, is_balanced, size};
pub use swap::swap;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

#[inline]
pub(crate) fn get_child<N: Node>(arena: &[N], idx: u32, side: Side) -> Option<u32> {
    match side {
        Side::Left => get_l(arena, idx),
        Side::Right => get_r(arena, idx),
    }
}

#[inline]
pub(crate) fn set_child<N: Node>(arena: &mut [N], idx: u32, side: Side, v: Option<u32>) {
    match side {
        Side::Left => set_l(arena, idx, v),
        Side::Right => set_r(arena, idx, v),
    }
}

/// Side of `parent` that `child` hangs from.
#[inline]
pub fn child_side<N: Node>(arena: &[N], parent: u32, child: u32) -> Side {
    if get_l(arena, parent) == Some(child) {
        Side::Left
    } else {
        Side::Right
    }
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor, climbing through parents when there is no left
/// subtree.
pub fn prev<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, node) {
        return last(arena, Some(l));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Rightmost node of the left subtree of `node`.
///
/// Only meaningful when `node` has a left child; removal calls it after
/// establishing that `node` has two children.
pub fn predecessor<N: Node>(arena: &[N], node: u32) -> Result<u32, TreeError> {
    let l = get_l(arena, node).ok_or(TreeError::NoLeftChild { node })?;
    Ok(last(arena, Some(l)).unwrap_or(l))
}

/// Finds a node by key.
pub fn find<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(key, key_of(&arena[i as usize]));
        if cmp == 0 {
            return Some(i);
        }
        curr = if cmp < 0 {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }
    None
}

/// Outcome of [`insertion_search`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Search {
    /// The key is already stored at this node.
    Found(u32),
    /// The key is absent; a new node would hang from `parent` on `side`.
    Vacant { parent: u32, side: Side },
}

/// Descends from `root` to the slot where `key` lives or would be attached.
pub fn insertion_search<N, K, F, C>(
    arena: &[N],
    root: u32,
    key: &K,
    key_of: F,
    comparator: C,
) -> Search
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    loop {
        let cmp = comparator(key, key_of(&arena[curr as usize]));
        if cmp == 0 {
            return Search::Found(curr);
        }
        let side = if cmp < 0 { Side::Left } else { Side::Right };
        match get_child(arena, curr, side) {
            Some(child) => curr = child,
            None => return Search::Vacant { parent: curr, side },
        }
    }
}

/// Hangs the detached `node` from the empty `side` slot of `parent`.
pub fn attach<N: Node>(arena: &mut [N], parent: u32, side: Side, node: u32) {
    debug_assert!(get_child(arena, parent, side).is_none());
    set_child(arena, parent, side, Some(node));
    set_p(arena, node, Some(parent));
}

/// Result of [`splice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Splice {
    /// Root after the node was unlinked.
    pub root: Option<u32>,
    /// Former parent of the unlinked node, and the side it hung from.
    pub parent: Option<(u32, Side)>,
}

/// Unlinks `node`, which must have at most one child, lifting that child
/// into its slot. The node is left fully detached but still in the arena.
pub fn splice<N: Node>(arena: &mut [N], root: Option<u32>, node: u32) -> Splice {
    let p = get_p(arena, node);
    let l = get_l(arena, node);
    let r = get_r(arena, node);
    debug_assert!(l.is_none() || r.is_none(), "splice of a node with two children");

    let child = l.or(r);
    if let Some(c) = child {
        set_p(arena, c, p);
    }
    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);

    match p {
        None => Splice {
            root: child,
            parent: None,
        },
        Some(p) => {
            let side = child_side(arena, p, node);
            set_child(arena, p, side, child);
            Splice {
                root,
                parent: Some((p, side)),
            }
        }
    }
}

/// Physically removes a detached `node` from the arena.
///
/// The arena stays dense: the last node moves into the freed slot and every
/// link that referred to it (parent slot, children back-links, root) is
/// re-pointed. Returns the removed node and the possibly renumbered root.
pub fn release<N: Node>(arena: &mut Vec<N>, root: Option<u32>, node: u32) -> (N, Option<u32>) {
    let moved = (arena.len() - 1) as u32;
    let removed = arena.swap_remove(node as usize);
    if moved == node {
        return (removed, root);
    }

    if let Some(p) = get_p(arena, node) {
        let side = child_side(arena, p, moved);
        set_child(arena, p, side, Some(node));
    }
    if let Some(l) = get_l(arena, node) {
        set_p(arena, l, Some(node));
    }
    if let Some(r) = get_r(arena, node) {
        set_p(arena, r, Some(node));
    }

    let root = if root == Some(moved) { Some(node) } else { root };
    (removed, root)
}

/// Checks parent back-links, strict key order and that every stored node is
/// reachable from `root`.
pub fn validate<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key_of: F,
    comparator: C,
) -> Result<(), ValidationError>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return if arena.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Unreachable {
                reachable: 0,
                stored: arena.len(),
            })
        };
    };

    if get_p(arena, root).is_some() {
        return Err(ValidationError::RootHasParent { root });
    }

    let mut stack = vec![root];
    let mut reachable = 0usize;
    while let Some(node) = stack.pop() {
        reachable += 1;
        for child in [get_l(arena, node), get_r(arena, node)].into_iter().flatten() {
            if get_p(arena, child) != Some(node) {
                return Err(ValidationError::BrokenParentLink { node, child });
            }
            stack.push(child);
        }
    }
    if reachable != arena.len() {
        return Err(ValidationError::Unreachable {
            reachable,
            stored: arena.len(),
        });
    }

    let mut prev_node = first(arena, Some(root));
    let mut curr = prev_node.and_then(|i| next(arena, i));
    while let (Some(p), Some(i)) = (prev_node, curr) {
        if comparator(key_of(&arena[p as usize]), key_of(&arena[i as usize])) >= 0 {
            return Err(ValidationError::OrderViolated { node: i });
        }
        prev_node = curr;
        curr = next(arena, i);
    }

    Ok(())
}
