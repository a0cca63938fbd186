use avl_bst::{BinarySearchTree, TreeError};

fn keys(tree: &BinarySearchTree<i32, i32>) -> Vec<i32> {
    tree.keys().copied().collect()
}

fn sample() -> BinarySearchTree<i32, i32> {
    [4, 2, 6, 1, 3, 5, 7].into_iter().map(|k| (k, k)).collect()
}

#[test]
fn bst_ascending_inserts_form_chain_matrix() {
    let mut tree = BinarySearchTree::new();
    for k in 1..=5 {
        tree.insert(k, k);
    }
    assert_eq!(tree.height(), 5);
    assert!(!tree.is_balanced());
    // One leaf only.
    assert!(tree.equal_paths());
    assert_eq!(keys(&tree), vec![1, 2, 3, 4, 5]);
    tree.assert_valid().unwrap();
}

#[test]
fn bst_insert_overwrite_matrix() {
    let mut tree = sample();
    assert_eq!(tree.insert(5, 50), Some(5));
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.get(&5), Some(&50));
    assert_eq!(tree.try_get(&8), Err(TreeError::KeyNotFound));
    assert!(tree.is_balanced());
    tree.assert_valid().unwrap();
}

#[test]
fn bst_remove_two_children_takes_predecessor_matrix() {
    let mut tree = sample();
    assert_eq!(tree.remove(&4), Some(4));

    let root = tree.root_index().unwrap();
    assert_eq!(tree.node(root).k, 3);
    let left = tree.node(root).l.unwrap();
    assert_eq!(tree.node(left).k, 2);
    assert_eq!(tree.node(left).r, None);
    assert_eq!(keys(&tree), vec![1, 2, 3, 5, 6, 7]);
    tree.assert_valid().unwrap();
}

#[test]
fn bst_remove_single_child_and_leaf_matrix() {
    let mut tree = BinarySearchTree::new();
    for k in [1, 2, 3] {
        tree.insert(k, k);
    }
    assert_eq!(tree.remove(&2), Some(2));
    let root = tree.root_index().unwrap();
    assert_eq!(tree.node(root).k, 1);
    let right = tree.node(root).r.unwrap();
    assert_eq!(tree.node(right).k, 3);
    tree.assert_valid().unwrap();

    assert_eq!(tree.remove(&1), Some(1));
    assert_eq!(keys(&tree), vec![3]);
    assert_eq!(tree.remove(&3), Some(3));
    assert_eq!(tree.remove(&3), None);
    assert!(tree.is_empty());
    tree.assert_valid().unwrap();
}

#[test]
fn bst_remove_every_key_matrix() {
    let order = [50, 30, 70, 20, 40, 60, 80, 35, 45, 65];
    let mut tree = BinarySearchTree::new();
    for k in order {
        tree.insert(k, k);
    }
    for (removed, k) in order.iter().enumerate() {
        assert_eq!(tree.remove(k), Some(*k));
        tree.assert_valid().unwrap();
        assert_eq!(tree.len(), order.len() - removed - 1);
        let mut expected: Vec<i32> = order[removed + 1..].to_vec();
        expected.sort_unstable();
        assert_eq!(keys(&tree), expected);
    }
}

#[test]
fn bst_navigation_matrix() {
    let tree = sample();
    assert_eq!(tree.first(), Some((&1, &1)));
    assert_eq!(tree.last(), Some((&7, &7)));
    assert_eq!(tree.keys().rev().copied().collect::<Vec<_>>(), vec![7, 6, 5, 4, 3, 2, 1]);
    assert_eq!(tree.iter().len(), 7);
    assert!(tree.contains_key(&6));
    assert_eq!(tree.find(&9), None);
}

#[test]
fn bst_custom_comparator_matrix() {
    let mut tree = BinarySearchTree::with_comparator(|a: &i32, b: &i32| b - a);
    tree.extend([(1, 'a'), (3, 'c'), (2, 'b')]);
    assert_eq!(tree.values().collect::<String>(), "cba");
    tree.assert_valid().unwrap();
}

#[test]
fn bst_display_matrix() {
    let mut tree: BinarySearchTree<i32, ()> = BinarySearchTree::default();
    assert_eq!(tree.to_string(), "Tree ∅");
    for k in [2, 1, 3] {
        tree.insert(k, ());
    }
    assert_eq!(tree.to_string(), "Tree\n└─ 2\n   ├─ 1\n   └─ 3");

    tree.clear();
    tree.insert(1, ());
    tree.insert(2, ());
    assert_eq!(tree.to_string(), "Tree\n└─ 1\n   ├─ ∅\n   └─ 2");
}
