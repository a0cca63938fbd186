//! Box-drawing tree dumps.

use crate::types::Node;

use super::{get_l, get_r};

/// Renders a child subtree given the indentation it should continue with.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Lays out `children` below the current line, one branch per child.
///
/// Trailing `None` entries are dropped so the last present child gets the
/// closing `└─` branch.
pub fn print_tree(tab: &str, children: &[Option<&PrintChild<'_>>]) -> String {
    let Some(last) = children.iter().rposition(Option::is_some) else {
        return String::new();
    };

    let mut out = String::new();
    for (i, child_fn) in children.iter().enumerate().take(last + 1) {
        let Some(child_fn) = child_fn else {
            continue;
        };

        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let child = child_fn(&child_tab);
        let branch = if child.is_empty() {
            "│"
        } else if is_last {
            "└─"
        } else {
            "├─"
        };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        if !child.is_empty() {
            out.push(' ');
            out.push_str(&child);
        }
    }
    out
}

/// Renders the subtree at `node`, labelling each node with `label`.
///
/// A node with a single child shows the missing side as `∅`.
pub fn print_node<N, F>(arena: &[N], node: Option<u32>, tab: &str, label: &F) -> String
where
    N: Node,
    F: Fn(u32, &N) -> String,
{
    let Some(i) = node else {
        return "∅".to_string();
    };
    let head = label(i, &arena[i as usize]);
    let l = get_l(arena, i);
    let r = get_r(arena, i);
    if l.is_none() && r.is_none() {
        return head;
    }
    let left: &PrintChild<'_> = &|tab: &str| print_node(arena, l, tab, label);
    let right: &PrintChild<'_> = &|tab: &str| print_node(arena, r, tab, label);
    format!("{head}{}", print_tree(tab, &[Some(left), Some(right)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_tree_marks_last_branch() {
        let a: &PrintChild<'_> = &|_: &str| "a".to_string();
        let b: &PrintChild<'_> = &|_: &str| "b".to_string();
        assert_eq!(print_tree("", &[Some(a), Some(b), None]), "\n├─ a\n└─ b");
        assert_eq!(print_tree("", &[None, None]), "");
    }
}
