//! Depth-first measurements over a subtree.

use crate::types::Node;

use super::{get_l, get_r};

fn size_inner<N: Node>(arena: &[N], root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes on the longest root-to-leaf path; `0` for an empty tree.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |i| {
        1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i)))
    })
}

fn balanced_height<N: Node>(arena: &[N], root: Option<u32>) -> Option<usize> {
    let Some(i) = root else {
        return Some(0);
    };
    let lh = balanced_height(arena, get_l(arena, i))?;
    let rh = balanced_height(arena, get_r(arena, i))?;
    (lh.abs_diff(rh) <= 1).then(|| 1 + lh.max(rh))
}

/// Whether the subtree heights of every node differ by at most one.
pub fn is_balanced<N: Node>(arena: &[N], root: Option<u32>) -> bool {
    balanced_height(arena, root).is_some()
}

fn leaves_at_depth<N: Node>(
    arena: &[N],
    node: u32,
    depth: usize,
    leaf_depth: &mut Option<usize>,
) -> bool {
    let l = get_l(arena, node);
    let r = get_r(arena, node);
    if l.is_none() && r.is_none() {
        return *leaf_depth.get_or_insert(depth) == depth;
    }
    l.map_or(true, |l| leaves_at_depth(arena, l, depth + 1, leaf_depth))
        && r.map_or(true, |r| leaves_at_depth(arena, r, depth + 1, leaf_depth))
}

/// Whether every leaf lies at the same depth below `root`.
///
/// The first leaf reached fixes the expected depth; an empty tree and a
/// single node both qualify.
pub fn equal_paths<N: Node>(arena: &[N], root: Option<u32>) -> bool {
    let mut leaf_depth = None;
    root.map_or(true, |r| leaves_at_depth(arena, r, 0, &mut leaf_depth))
}
