use avl_bst::{AvlTree, TreeError};

fn keys(tree: &AvlTree<i32, i32>) -> Vec<i32> {
    tree.keys().copied().collect()
}

fn key_of(tree: &AvlTree<i32, i32>, idx: Option<u32>) -> Option<i32> {
    idx.map(|i| tree.node(i).k)
}

#[test]
fn avl_ascending_triple_rotates_matrix() {
    let mut tree = AvlTree::new();
    for k in [1, 2, 3] {
        tree.insert(k, k);
    }

    let root = tree.root_index().unwrap();
    assert_eq!(tree.node(root).k, 2);
    assert_eq!(key_of(&tree, tree.node(root).l), Some(1));
    assert_eq!(key_of(&tree, tree.node(root).r), Some(3));
    tree.for_each(|_, n| assert_eq!(n.balance, 0));
    tree.assert_valid().unwrap();
}

#[test]
fn avl_zigzag_insert_rotates_twice_matrix() {
    let mut tree = AvlTree::new();
    for k in [3, 1, 2] {
        tree.insert(k, k);
    }

    let root = tree.root_index().unwrap();
    assert_eq!(tree.node(root).k, 2);
    assert_eq!(key_of(&tree, tree.node(root).l), Some(1));
    assert_eq!(key_of(&tree, tree.node(root).r), Some(3));
    tree.assert_valid().unwrap();
}

#[test]
fn avl_insert_remove_round_trip_matrix() {
    let mut tree = AvlTree::new();
    for k in [5, 3, 8, 1, 4, 7, 9] {
        assert_eq!(tree.insert(k, k * 10), None);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.remove(&3), Some(30));
    tree.assert_valid().unwrap();
    assert_eq!(tree.remove(&8), Some(80));
    tree.assert_valid().unwrap();

    assert_eq!(keys(&tree), vec![1, 4, 5, 7, 9]);
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.get(&3), None);
    assert_eq!(tree.get(&8), None);
    assert_eq!(tree.get(&7), Some(&70));
}

#[test]
fn avl_overwrite_keeps_shape_matrix() {
    let mut tree = AvlTree::new();
    for k in 1..=7 {
        tree.insert(k, k);
    }
    let before = tree.to_string();

    assert_eq!(tree.insert(4, 400), Some(4));
    assert_eq!(tree.insert(1, 100), Some(1));

    assert_eq!(tree.to_string(), before);
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.get(&4), Some(&400));
    assert_eq!(tree.get(&1), Some(&100));
    tree.assert_valid().unwrap();
}

#[test]
fn avl_ladder_insert_delete_matrix() {
    let mut tree = AvlTree::new();
    for i in 0..300 {
        tree.insert(i, i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 300);
    // A perfectly balanced 300-node tree is 9 high; AVL allows ~1.44x.
    assert!(tree.height() <= 12);

    for i in (0..300).step_by(3) {
        assert_eq!(tree.remove(&i), Some(i));
        tree.assert_valid().unwrap();
    }

    for i in 0..300 {
        assert_eq!(tree.contains_key(&i), i % 3 != 0, "key {i}");
    }
    assert_eq!(tree.len(), 200);

    for i in (0..300).rev() {
        tree.remove(&i);
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.root_index(), None);
}

#[test]
fn avl_descending_and_interleaved_inserts_matrix() {
    let mut tree = AvlTree::new();
    for i in (0..127).rev() {
        tree.insert(i, ());
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.height(), 7);

    let mut tree = AvlTree::new();
    for i in 0..200 {
        let k = (i * 37) % 211;
        tree.insert(k, ());
        tree.assert_valid().unwrap();
    }
    let seen: Vec<i32> = tree.keys().copied().collect();
    let mut expected: Vec<i32> = (0..200).map(|i| (i * 37) % 211).collect();
    expected.sort_unstable();
    assert_eq!(seen, expected);
}

#[test]
fn avl_remove_with_balanced_heavy_child_stops_matrix() {
    let mut tree = AvlTree::new();
    for k in [2, 1, 4, 3, 5] {
        tree.insert(k, k);
    }
    assert_eq!(tree.remove(&1), Some(1));

    let root = tree.root_index().unwrap();
    assert_eq!(tree.node(root).k, 4);
    assert_eq!(tree.node(root).balance, -1);
    let left = tree.node(root).l.unwrap();
    assert_eq!(tree.node(left).k, 2);
    assert_eq!(tree.node(left).balance, 1);
    assert_eq!(key_of(&tree, tree.node(left).r), Some(3));
    assert_eq!(keys(&tree), vec![2, 3, 4, 5]);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_remove_with_inward_heavy_child_rotates_twice_matrix() {
    let mut tree = AvlTree::new();
    for k in [5, 2, 8, 3] {
        tree.insert(k, k);
    }
    assert_eq!(tree.remove(&8), Some(8));

    let root = tree.root_index().unwrap();
    assert_eq!(tree.node(root).k, 3);
    assert_eq!(key_of(&tree, tree.node(root).l), Some(2));
    assert_eq!(key_of(&tree, tree.node(root).r), Some(5));
    tree.for_each(|_, n| assert_eq!(n.balance, 0));
    tree.assert_valid().unwrap();
}

#[test]
fn avl_remove_root_with_two_children_matrix() {
    let mut tree = AvlTree::new();
    for k in 1..=7 {
        tree.insert(k, k * 10);
    }
    assert!(tree.equal_paths());

    assert_eq!(tree.remove_entry(&4), Some((4, 40)));
    let root = tree.root_index().unwrap();
    assert_eq!(tree.node(root).k, 3);
    assert_eq!(keys(&tree), vec![1, 2, 3, 5, 6, 7]);
    assert!(tree.equal_paths());
    tree.assert_valid().unwrap();
}

#[test]
fn avl_membership_and_lookup_matrix() {
    let mut tree: AvlTree<String, usize> = AvlTree::new();
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);
    assert_eq!(tree.remove(&"x".to_string()), None);

    for (i, w) in ["pear", "apple", "fig", "kiwi"].iter().enumerate() {
        tree.insert(w.to_string(), i);
    }
    assert!(tree.contains_key(&"fig".to_string()));
    assert!(!tree.contains_key(&"plum".to_string()));
    assert_eq!(tree.first(), Some((&"apple".to_string(), &1)));
    assert_eq!(tree.last(), Some((&"pear".to_string(), &0)));

    if let Some(v) = tree.get_mut(&"kiwi".to_string()) {
        *v += 10;
    }
    assert_eq!(tree.get(&"kiwi".to_string()), Some(&13));
    assert_eq!(
        tree.try_get(&"plum".to_string()),
        Err(TreeError::KeyNotFound)
    );
    assert_eq!(tree.try_get(&"fig".to_string()), Ok(&2));
}

#[test]
fn avl_iteration_matrix() {
    let tree: AvlTree<i32, char> = [(3, 'c'), (1, 'a'), (2, 'b'), (4, 'd')]
        .into_iter()
        .collect();

    let forward: Vec<(i32, char)> = tree.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(forward, vec![(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd')]);

    let backward: Vec<i32> = tree.keys().rev().copied().collect();
    assert_eq!(backward, vec![4, 3, 2, 1]);

    let mut it = tree.iter();
    assert_eq!(it.len(), 4);
    assert_eq!(it.next(), Some((&1, &'a')));
    assert_eq!(it.next_back(), Some((&4, &'d')));
    assert_eq!(it.next(), Some((&2, &'b')));
    assert_eq!(it.next_back(), Some((&3, &'c')));
    assert_eq!(it.next(), None);
    assert_eq!(it.next_back(), None);

    // A fresh iterator restarts from the smallest key.
    assert_eq!(tree.values().copied().collect::<String>(), "abcd");

    let mut total = 0;
    for (k, _) in &tree {
        total += k;
    }
    assert_eq!(total, 10);
}

#[test]
fn avl_custom_comparator_matrix() {
    let mut tree = AvlTree::with_comparator(|a: &i32, b: &i32| b - a);
    tree.extend((0..10).map(|k| (k, ())));
    assert_eq!(
        tree.keys().copied().collect::<Vec<_>>(),
        (0..10).rev().collect::<Vec<_>>()
    );
    tree.assert_valid().unwrap();
}

#[test]
fn avl_display_matrix() {
    let mut tree: AvlTree<i32, ()> = AvlTree::new();
    assert_eq!(tree.to_string(), "AvlTree ∅");

    tree.insert(2, ());
    tree.insert(1, ());
    assert_eq!(tree.to_string(), "AvlTree\n└─ 2 [-1]\n   ├─ 1 [0]\n   └─ ∅");

    tree.insert(3, ());
    assert_eq!(
        tree.to_string(),
        "AvlTree\n└─ 2 [0]\n   ├─ 1 [0]\n   └─ 3 [0]"
    );
    assert_eq!(format!("{tree:?}"), "{1: (), 2: (), 3: ()}");
}

#[test]
fn avl_clear_matrix() {
    let mut tree = AvlTree::with_capacity(16);
    for k in 0..10 {
        tree.insert(k, k);
    }
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.iter().next(), None);
    tree.assert_valid().unwrap();

    tree.insert(42, 1);
    assert_eq!(keys(&tree), vec![42]);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_removed_values_are_returned_by_value_matrix() {
    let mut tree: AvlTree<i32, Vec<u8>> = AvlTree::default();
    tree.insert(1, vec![1]);
    tree.insert(2, vec![2, 2]);
    tree.insert(3, vec![3, 3, 3]);

    let v = tree.remove(&2).unwrap();
    assert_eq!(v, vec![2, 2]);
    assert_eq!(tree.len(), 2);
    assert!(tree.is_balanced());
}
