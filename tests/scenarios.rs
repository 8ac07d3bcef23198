//! End-to-end scenarios exercising each index through its public surface
//! exactly as a calling program would.

use tridex::{BPlusTree, BTree, Point, RTree, Rect};

#[test]
fn btree_basic_operations() {
    let mut tree = BTree::new(3);
    tree.insert(10, "ten");
    tree.insert(20, "twenty");
    tree.insert(5, "five");
    tree.insert(6, "six");
    tree.insert(12, "twelve");
    tree.insert(30, "thirty");
    tree.insert(7, "seven");
    tree.insert(17, "seventeen");

    assert_eq!(tree.size(), 8);
    assert_eq!(tree.search(&10), Some(&"ten"));
    assert_eq!(tree.search(&25), None);

    let keys: Vec<i32> = tree.in_order().iter().map(|(k, _)| **k).collect();
    assert_eq!(keys, vec![5, 6, 7, 10, 12, 17, 20, 30]);
    tree.verify().unwrap();
}

#[test]
fn btree_deletion() {
    let mut tree = BTree::new(3);
    for key in [10, 20, 5, 6, 12, 30, 7, 17, 25, 40, 50] {
        tree.insert(key, "value");
    }

    assert!(tree.delete(&6).is_some());
    assert!(tree.delete(&100).is_none());
    assert_eq!(tree.size(), 10);
    assert_eq!(tree.search(&6), None);
    tree.verify().unwrap();
}

#[test]
fn bplustree_range_over_twenty_keys() {
    let mut tree = BPlusTree::new(3);
    for key in 1..=20 {
        tree.insert(key, key * 10);
    }

    let hits = tree.range(&5, &15);
    assert_eq!(hits.len(), 11);
    let keys: Vec<i32> = hits.iter().map(|(k, _)| **k).collect();
    assert_eq!(keys, (5..=15).collect::<Vec<_>>());
    assert_eq!(tree.len(), 20);
    tree.verify().unwrap();
}

#[test]
fn bplustree_reverse_deletion_drains_the_tree() {
    let mut tree = BPlusTree::new(2);
    for key in 1..=10 {
        tree.insert(key, key);
    }

    for key in (1..=10).rev() {
        assert!(tree.delete(&key).is_some());
        assert_eq!(tree.len(), (key - 1) as usize);
        tree.verify().unwrap();

        let keys: Vec<i32> = tree.all().iter().map(|(k, _)| **k).collect();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }
    assert!(tree.is_empty());
}

#[test]
fn rtree_window_point_and_nearest_queries() {
    let mut tree = RTree::new(2, 4);
    tree.insert(Rect::new(0.0, 0.0, 10.0, 10.0), "A");
    tree.insert(Rect::new(20.0, 20.0, 30.0, 30.0), "B");
    tree.insert(Rect::new(5.0, 5.0, 15.0, 15.0), "C");
    tree.insert(Rect::new(100.0, 100.0, 110.0, 110.0), "D");

    let mut window_hits: Vec<&str> = tree
        .search(Rect::new(0.0, 0.0, 20.0, 20.0))
        .iter()
        .map(|item| item.data)
        .collect();
    window_hits.sort_unstable();
    assert_eq!(window_hits, ["A", "B", "C"]);

    let mut point_hits: Vec<&str> = tree
        .search_point(Point::new(7.0, 7.0))
        .iter()
        .map(|item| item.data)
        .collect();
    point_hits.sort_unstable();
    assert_eq!(point_hits, ["A", "C"]);

    let nearest = tree.nearest_neighbor(Point::new(0.0, 0.0), 1);
    assert_eq!(nearest.len(), 1);
    assert_eq!(nearest[0].data, "A");
}

#[test]
fn rtree_split_keeps_structure_legal() {
    let mut tree = RTree::new(2, 4);
    for i in 0..5 {
        let base = f64::from(i) * 10.0;
        tree.insert(Rect::new(base, base, base + 5.0, base + 5.0), i);
    }

    assert_eq!(tree.size(), 5);
    assert!(tree.height() >= 2, "fifth insert must split the root");
    tree.verify().unwrap();

    // The whole extent is reachable through the root.
    assert_eq!(tree.search(Rect::new(0.0, 0.0, 45.0, 45.0)).len(), 5);
    assert!(tree.search(Rect::new(46.0, 46.0, 90.0, 90.0)).is_empty());
}

/// The library's motivating walk-through: build a small B+tree, scan a
/// range, overwrite a key, delete another, and read everything back.
#[test]
fn bplustree_sample_program() {
    let mut tree = BPlusTree::new(3);
    for key in (5..=35).step_by(5) {
        tree.insert(key, format!("Value-{key}"));
    }
    tree.insert(12, "Value-12".to_string());
    tree.insert(18, "Value-18".to_string());

    assert_eq!(tree.len(), 9);

    let hits: Vec<(i32, &str)> = tree
        .range(&10, &25)
        .iter()
        .map(|(k, v)| (**k, v.as_str()))
        .collect();
    assert_eq!(
        hits,
        vec![
            (10, "Value-10"),
            (12, "Value-12"),
            (15, "Value-15"),
            (18, "Value-18"),
            (20, "Value-20"),
            (25, "Value-25"),
        ]
    );

    assert_eq!(tree.insert(10, "Updated-10".to_string()), Some("Value-10".to_string()));
    assert!(tree.delete(&5).is_some());

    assert_eq!(tree.len(), 8);
    assert_eq!(tree.search(&10).map(String::as_str), Some("Updated-10"));
    let keys: Vec<i32> = tree.all().iter().map(|(k, _)| **k).collect();
    assert_eq!(keys, vec![10, 12, 15, 18, 20, 25, 30, 35]);
    tree.verify().unwrap();
}
