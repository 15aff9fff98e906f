use sneklib_containers::{LinkedBst, Printable, Traversal};

#[test]
fn linked_bst_duplicates_matrix() {
    let mut tree: LinkedBst<i32> = [5, 3, 8, 3, 5, 5].into_iter().collect();
    tree.assert_valid().unwrap();
    assert_eq!(tree.len(), 6);
    assert_eq!(tree.distinct_len(), 3);
    assert_eq!(tree.occurrences(&5), 3);
    assert_eq!(tree.occurrences(&3), 2);
    assert_eq!(tree.occurrences(&4), 0);
    assert_eq!(tree.sorted(), vec![3, 3, 5, 5, 5, 8]);
    assert_eq!(tree.reverse(), vec![8, 5, 5, 5, 3, 3]);

    assert!(tree.remove(&5));
    assert_eq!(tree.occurrences(&5), 2);
    assert_eq!(tree.distinct_len(), 3);
    assert_eq!(tree.len(), 5);
    tree.assert_valid().unwrap();
}

#[test]
fn linked_bst_traversals_matrix() {
    let tree: LinkedBst<i32> = [5, 3, 8, 3].into_iter().collect();
    assert_eq!(tree.pre_order(), vec![5, 3, 3, 8]);
    assert_eq!(tree.post_order(), vec![3, 3, 8, 5]);
    assert_eq!(tree.sorted(), vec![3, 3, 5, 8]);
    assert_eq!(tree.reverse(), vec![8, 5, 3, 3]);

    let mut counts = Vec::new();
    tree.traverse(Traversal::PreOrder, |v, n| counts.push((*v, n)));
    assert_eq!(counts, vec![(5, 1), (3, 2), (8, 1)]);
}

#[test]
fn linked_bst_remove_leaf_matrix() {
    let mut tree: LinkedBst<i32> = [5, 3, 8].into_iter().collect();
    assert!(tree.remove(&3));
    assert!(!tree.contains(&3));
    assert_eq!(tree.sorted(), vec![5, 8]);
    tree.assert_valid().unwrap();
    assert!(!tree.remove(&3));
}

#[test]
fn linked_bst_remove_one_child_matrix() {
    let mut tree: LinkedBst<i32> = [10, 5, 3, 4].into_iter().collect();
    assert!(tree.remove(&5));
    assert_eq!(tree.sorted(), vec![3, 4, 10]);
    assert_eq!(tree.pre_order(), vec![10, 3, 4]);
    tree.assert_valid().unwrap();
}

#[test]
fn linked_bst_remove_two_children_matrix() {
    let mut tree: LinkedBst<i32> = [50, 30, 70, 60, 80, 65].into_iter().collect();
    assert!(tree.remove(&50));
    tree.assert_valid().unwrap();
    assert_eq!(tree.pre_order(), vec![60, 30, 70, 65, 80]);
    assert_eq!(tree.min(), Some(&30));
    assert_eq!(tree.max(), Some(&80));
    assert_eq!(tree.height(), 3);
}

#[test]
fn linked_bst_remove_everything_matrix() {
    let values = [41, 20, 65, 11, 29, 50, 91, 32, 72, 99, 20, 65];
    let mut tree: LinkedBst<i32> = values.into_iter().collect();
    for v in values {
        assert!(tree.remove(&v));
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.distinct_len(), 0);
    assert_eq!(tree.min(), None);
}

#[test]
fn linked_bst_remove_all_matrix() {
    let mut tree: LinkedBst<&str> = ["m", "c", "c", "x", "c"].into_iter().collect();
    assert_eq!(tree.remove_all(&"c"), 3);
    assert_eq!(tree.remove_all(&"c"), 0);
    assert_eq!(tree.sorted(), vec!["m", "x"]);
    assert_eq!(tree.len(), 2);
    tree.assert_valid().unwrap();
    tree.clear();
    assert!(tree.is_empty());
}

#[test]
fn linked_bst_print_matrix() {
    let tree: LinkedBst<i32> = [2, 1, 1].into_iter().collect();
    assert_eq!(tree.dump(), "LinkedBst\n└─ 2\n   └─ ←1 ×2");
    assert_eq!(LinkedBst::<i32>::new().dump(), "LinkedBst ∅");
}

#[test]
fn linked_bst_sorted_input_chain_matrix() {
    // Ascending inserts build a right spine as deep as the element count.
    let n = 50_000;
    let mut tree: LinkedBst<i32> = (0..n).collect();
    assert_eq!(tree.height(), n as usize);
    tree.assert_valid().unwrap();

    let pre = tree.pre_order();
    assert_eq!(pre.len(), n as usize);
    assert!(pre.iter().copied().eq(0..n));
    let post = tree.post_order();
    assert!(post.iter().copied().eq((0..n).rev()));

    assert!(tree.remove(&0));
    assert!(tree.remove(&(n / 2)));
    assert_eq!(tree.height(), n as usize - 2);
    assert_eq!(tree.len(), n as usize - 2);
    tree.assert_valid().unwrap();
}
