use crate::types::{Node, Side};

use super::{child_side, get_l, get_p, get_r, set_child, set_l, set_p, set_r};

/// Swaps the structural positions of `x` and `y`.
///
/// Parent/child links and root ownership are exchanged; each node keeps its
/// own payload. Works for adjacent nodes (one the child of the other) and for
/// siblings. Returns the new root.
pub fn swap<N: Node>(arena: &mut [N], root: u32, x: u32, y: u32) -> u32 {
    if x == y {
        return root;
    }

    let (xp, xl, xr) = (get_p(arena, x), get_l(arena, x), get_r(arena, x));
    let (yp, yl, yr) = (get_p(arena, y), get_l(arena, y), get_r(arena, y));
    let x_side: Option<(u32, Side)> = xp.map(|p| (p, child_side(arena, p, x)));
    let y_side: Option<(u32, Side)> = yp.map(|p| (p, child_side(arena, p, y)));

    // A link to the partner becomes a link to self once positions flip.
    let remap = |link: Option<u32>| match link {
        Some(i) if i == x => Some(y),
        Some(i) if i == y => Some(x),
        other => other,
    };

    set_p(arena, x, remap(yp));
    set_l(arena, x, remap(yl));
    set_r(arena, x, remap(yr));
    set_p(arena, y, remap(xp));
    set_l(arena, y, remap(xl));
    set_r(arena, y, remap(xr));

    for (node, partner) in [(x, y), (y, x)] {
        for child in [get_l(arena, node), get_r(arena, node)].into_iter().flatten() {
            if child != partner {
                set_p(arena, child, Some(node));
            }
        }
    }

    if let Some((p, side)) = x_side {
        if p != y {
            set_child(arena, p, side, Some(y));
        }
    }
    if let Some((p, side)) = y_side {
        if p != x {
            set_child(arena, p, side, Some(x));
        }
    }

    match (xp, yp) {
        (None, _) => y,
        (_, None) => x,
        _ => root,
    }
}
