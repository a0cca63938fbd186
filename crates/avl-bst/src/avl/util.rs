//! AVL rebalancing over an arena of [`AvlNodeLike`] nodes.
//!
//! Balance is `height(right) - height(left)`. Insertion walks up with
//! [`insert_fix`] while a subtree keeps growing; removal walks up with
//! [`remove_fix`] while a subtree keeps shrinking. Both walks are iterative
//! and stop at the first level whose height is unchanged.

use log::trace;

use crate::error::ValidationError;
use crate::types::{Node, Side};
use crate::util::{self, child_side, get_child, get_l, get_p, get_r, set_child, set_p};

use super::types::AvlNodeLike;

#[inline]
fn balance<N: AvlNodeLike>(arena: &[N], i: u32) -> i8 {
    arena[i as usize].balance()
}

#[inline]
fn set_balance<N: AvlNodeLike>(arena: &mut [N], i: u32, b: i8) {
    arena[i as usize].set_balance(b);
}

/// Moves `x` down towards `dir`, lifting its child on the opposite side into
/// its slot. Balances are left for the caller. Returns the new root.
fn rotate<N: Node>(arena: &mut [N], root: u32, x: u32, dir: Side) -> u32 {
    let lifted_side = dir.opposite();
    let up = get_child(arena, x, lifted_side).expect("rotated node has a child to lift");
    let p = get_p(arena, x);
    let inner = get_child(arena, up, dir);

    set_child(arena, x, lifted_side, inner);
    if let Some(inner) = inner {
        set_p(arena, inner, Some(x));
    }
    set_child(arena, up, dir, Some(x));
    set_p(arena, x, Some(up));
    set_p(arena, up, p);
    trace!("rotate {dir:?} at node {x}, node {up} lifted");

    match p {
        None => up,
        Some(p) => {
            let side = child_side(arena, p, x);
            set_child(arena, p, side, Some(up));
            root
        }
    }
}

/// `x`'s right child becomes the subtree root; `x` becomes its left child.
pub fn rotate_left<N: Node>(arena: &mut [N], root: u32, x: u32) -> u32 {
    rotate(arena, root, x, Side::Left)
}

/// Mirror of [`rotate_left`].
pub fn rotate_right<N: Node>(arena: &mut [N], root: u32, x: u32) -> u32 {
    rotate(arena, root, x, Side::Right)
}

/// Balances of the heavy child and of the old subtree root after a double
/// rotation, given the pivot's balance before it and the heavy side's delta.
/// The pivot itself always ends at 0.
fn zigzag_balances(pivot: i8, heavy: i8) -> (i8, i8) {
    if pivot == heavy {
        (0, -heavy)
    } else if pivot == 0 {
        (0, 0)
    } else {
        (heavy, 0)
    }
}

/// Attaches the fresh `node` below `parent` and rebalances. Returns the new
/// root.
pub fn insert_at<N: AvlNodeLike>(
    arena: &mut [N],
    root: u32,
    node: u32,
    parent: u32,
    side: Side,
) -> u32 {
    util::attach(arena, parent, side, node);
    set_balance(arena, node, 0);

    // A lopsided parent can only have had its empty side filled.
    if balance(arena, parent) != 0 {
        set_balance(arena, parent, 0);
        return root;
    }
    set_balance(arena, parent, side.delta());
    insert_fix(arena, root, parent, node)
}

/// Propagates growth of the subtree rooted at `parent` (whose child on the
/// growing path is `child`) towards the root.
pub fn insert_fix<N: AvlNodeLike>(
    arena: &mut [N],
    root: u32,
    mut parent: u32,
    mut child: u32,
) -> u32 {
    while let Some(grand) = get_p(arena, parent) {
        let side = child_side(arena, grand, parent);
        let b = balance(arena, grand) + side.delta();
        set_balance(arena, grand, b);
        match b {
            0 => return root,
            -1 | 1 => {
                child = parent;
                parent = grand;
            }
            _ => return rotate_after_insert(arena, root, grand, parent, child, side),
        }
    }
    root
}

/// `grand` leans two levels towards `side`, where `parent` hangs.
fn rotate_after_insert<N: AvlNodeLike>(
    arena: &mut [N],
    root: u32,
    grand: u32,
    parent: u32,
    child: u32,
    side: Side,
) -> u32 {
    let lift = side.opposite();
    if child_side(arena, parent, child) == side {
        let root = rotate(arena, root, grand, lift);
        set_balance(arena, parent, 0);
        set_balance(arena, grand, 0);
        return root;
    }

    let root = rotate(arena, root, parent, side);
    let root = rotate(arena, root, grand, lift);
    let (pb, gb) = zigzag_balances(balance(arena, child), side.delta());
    set_balance(arena, parent, pb);
    set_balance(arena, grand, gb);
    set_balance(arena, child, 0);
    root
}

/// Swaps the positions of `x` and `y` and exchanges their balances, so each
/// balance stays with the position it describes.
pub fn swap_positions<N: AvlNodeLike>(arena: &mut [N], root: u32, x: u32, y: u32) -> u32 {
    let root = util::swap(arena, root, x, y);
    let (bx, by) = (balance(arena, x), balance(arena, y));
    set_balance(arena, x, by);
    set_balance(arena, y, bx);
    root
}

/// Removes `node` and rebalances. A node with two children first trades
/// places with its in-order predecessor, so the node unlinked from the tree
/// (and released from the arena) is always the one holding `node`'s entry.
pub fn remove<N: AvlNodeLike>(arena: &mut Vec<N>, root: u32, node: u32) -> (N, Option<u32>) {
    let mut root = root;
    if get_r(arena, node).is_some() {
        if let Ok(pred) = util::predecessor(arena, node) {
            trace!("node {node} has two children, swapping with predecessor {pred}");
            root = swap_positions(arena, root, node, pred);
        }
    }

    let splice = util::splice(arena, Some(root), node);
    let mut new_root = splice.root;
    if let (Some((parent, side)), Some(r)) = (splice.parent, splice.root) {
        new_root = Some(remove_fix(arena, r, parent, -side.delta()));
    }
    util::release(arena, new_root, node)
}

/// Propagates a possible height decrease below `parent`. `diff` is the
/// balance change implied by the shrink: `+1` when the left side shrank,
/// `-1` when the right side did.
pub fn remove_fix<N: AvlNodeLike>(
    arena: &mut [N],
    mut root: u32,
    mut parent: u32,
    mut diff: i8,
) -> u32 {
    loop {
        let b = balance(arena, parent) + diff;
        let top = match b {
            -1 | 1 => {
                set_balance(arena, parent, b);
                return root;
            }
            0 => {
                set_balance(arena, parent, 0);
                parent
            }
            _ => {
                let (new_root, top, shrunk) = rotate_after_remove(arena, root, parent, b);
                root = new_root;
                if !shrunk {
                    trace!("rotation at node {parent} kept subtree height");
                    return root;
                }
                top
            }
        };

        let Some(up) = get_p(arena, top) else {
            return root;
        };
        diff = -child_side(arena, up, top).delta();
        parent = up;
    }
}

/// Restores `node`, whose balance would be `b` (±2). Returns the new root,
/// the root of the rotated subtree and whether that subtree got shorter.
fn rotate_after_remove<N: AvlNodeLike>(
    arena: &mut [N],
    root: u32,
    node: u32,
    b: i8,
) -> (u32, u32, bool) {
    let side = if b < 0 { Side::Left } else { Side::Right };
    let heavy_delta = side.delta();
    let lift = side.opposite();
    let heavy =
        get_child(arena, node, side).expect("heavy side of an unbalanced node is non-empty");
    let hb = balance(arena, heavy);

    if hb == heavy_delta {
        let root = rotate(arena, root, node, lift);
        set_balance(arena, node, 0);
        set_balance(arena, heavy, 0);
        return (root, heavy, true);
    }

    if hb == 0 {
        let root = rotate(arena, root, node, lift);
        set_balance(arena, node, heavy_delta);
        set_balance(arena, heavy, -heavy_delta);
        return (root, heavy, false);
    }

    let pivot = get_child(arena, heavy, lift)
        .expect("inner grandchild exists when heavy child leans inward");
    let pb = balance(arena, pivot);
    let root = rotate(arena, root, heavy, side);
    let root = rotate(arena, root, node, lift);
    let (heavy_b, node_b) = zigzag_balances(pb, heavy_delta);
    set_balance(arena, heavy, heavy_b);
    set_balance(arena, node, node_b);
    set_balance(arena, pivot, 0);
    (root, pivot, true)
}

fn checked_height<N: AvlNodeLike>(arena: &[N], node: u32) -> Result<i64, ValidationError> {
    let lh = match get_l(arena, node) {
        Some(l) => checked_height(arena, l)?,
        None => 0,
    };
    let rh = match get_r(arena, node) {
        Some(r) => checked_height(arena, r)?,
        None => 0,
    };

    let expected = rh - lh;
    let actual = balance(arena, node);
    if i64::from(actual) != expected {
        return Err(ValidationError::BalanceMismatch {
            node,
            expected,
            actual,
        });
    }
    if !(-1..=1).contains(&actual) {
        return Err(ValidationError::BalanceOutOfRange {
            node,
            balance: actual,
        });
    }
    Ok(1 + lh.max(rh))
}

/// Full AVL check: links, order, reachability, and every stored balance
/// against independently computed subtree heights.
pub fn assert_avl_tree<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key_of: F,
    comparator: C,
) -> Result<(), ValidationError>
where
    N: AvlNodeLike,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    util::validate(arena, root, key_of, comparator)?;
    if let Some(root) = root {
        checked_height(arena, root)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avl::types::AvlNode;
    use crate::types::default_comparator;

    type Arena = Vec<AvlNode<i32, ()>>;

    fn chain(keys: &[i32], side: Side) -> Arena {
        let mut arena: Arena = keys.iter().map(|&k| AvlNode::new(k, ())).collect();
        for i in 1..arena.len() as u32 {
            util::attach(&mut arena, i - 1, side, i);
        }
        arena
    }

    #[test]
    fn rotate_left_lifts_right_child() {
        let mut arena = chain(&[1, 2, 3], Side::Right);
        let root = rotate_left(&mut arena, 0, 0);
        assert_eq!(root, 1);
        assert_eq!(arena[1].p, None);
        assert_eq!(arena[1].l, Some(0));
        assert_eq!(arena[1].r, Some(2));
        assert_eq!(arena[0].p, Some(1));
        assert_eq!(arena[0].r, None);
    }

    #[test]
    fn rotate_right_below_root_relinks_parent() {
        // 10 -> (left) 5 -> (left) 3
        let mut arena: Arena = [10, 5, 3, 4].into_iter().map(|k| AvlNode::new(k, ())).collect();
        util::attach(&mut arena, 0, Side::Left, 1);
        util::attach(&mut arena, 1, Side::Left, 2);
        util::attach(&mut arena, 2, Side::Right, 3);
        let root = rotate_right(&mut arena, 0, 1);
        assert_eq!(root, 0);
        assert_eq!(arena[0].l, Some(2));
        assert_eq!(arena[2].p, Some(0));
        assert_eq!(arena[2].r, Some(1));
        // 4 moves from 3's right to 5's left.
        assert_eq!(arena[1].l, Some(3));
        assert_eq!(arena[3].p, Some(1));
    }

    #[test]
    fn zigzag_balance_table() {
        // Left-heavy grandparent.
        assert_eq!(zigzag_balances(-1, -1), (0, 1));
        assert_eq!(zigzag_balances(0, -1), (0, 0));
        assert_eq!(zigzag_balances(1, -1), (-1, 0));
        // Right-heavy grandparent.
        assert_eq!(zigzag_balances(1, 1), (0, -1));
        assert_eq!(zigzag_balances(-1, 1), (1, 0));
    }

    #[test]
    fn insert_at_levels_lopsided_parent() {
        let mut arena: Arena = [5, 3, 8].into_iter().map(|k| AvlNode::new(k, ())).collect();
        util::attach(&mut arena, 0, Side::Left, 1);
        arena[0].balance = -1;
        let root = insert_at(&mut arena, 0, 2, 0, Side::Right);
        assert_eq!(root, 0);
        assert_eq!(arena[0].balance, 0);
        assert_avl_tree(&arena, Some(root), |n| &n.k, default_comparator).unwrap();
    }

    #[test]
    fn assert_avl_tree_reports_stale_balance() {
        let mut arena: Arena = [5, 3].into_iter().map(|k| AvlNode::new(k, ())).collect();
        util::attach(&mut arena, 0, Side::Left, 1);
        assert_eq!(
            assert_avl_tree(&arena, Some(0), |n| &n.k, default_comparator),
            Err(ValidationError::BalanceMismatch {
                node: 0,
                expected: -1,
                actual: 0
            })
        );
    }

    #[test]
    fn swap_positions_keeps_balance_with_position() {
        let mut arena: Arena = [5, 3, 8, 4].into_iter().map(|k| AvlNode::new(k, ())).collect();
        util::attach(&mut arena, 0, Side::Left, 1);
        util::attach(&mut arena, 0, Side::Right, 2);
        util::attach(&mut arena, 1, Side::Right, 3);
        arena[0].balance = -1;
        arena[1].balance = 1;
        let root = swap_positions(&mut arena, 0, 0, 3);
        assert_eq!(root, 3);
        assert_eq!(arena[3].balance, -1);
        assert_eq!(arena[0].balance, 0);
        assert_eq!(arena[1].balance, 1);
    }
}
