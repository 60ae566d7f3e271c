use dense_forest::{AvlTree, SetOutcome, TraceEvent};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[test]
fn ascending_insertion_stays_balanced() {
    let mut tree = AvlTree::new();
    for key in [10, 20, 30, 40, 50] {
        tree.set(key, u64::from(key)).unwrap();
        tree.check_invariants().unwrap();
    }

    let root = tree.root_index().unwrap();
    assert_eq!(tree.key(root), 20);
    assert_eq!(tree.node(root).meta.0, 3);

    for key in [10, 20, 30, 40, 50] {
        assert_eq!(tree.get(key), Some(u64::from(key)));
    }
}

#[test]
fn monotonic_hundred_keys() {
    let mut tree = AvlTree::new();
    for key in 1..=100 {
        tree.set(key, u64::from(key) * 2).unwrap();
        tree.check_invariants().unwrap();
    }

    // A 100-node AVL tree is at most ~1.44 * log2(n) deep.
    let root = tree.root_index().unwrap();
    assert!(tree.node(root).meta.0 <= 9);
    assert_eq!(tree.len(), 100);
}

#[test]
fn update_in_place_keeps_shape_and_heights() {
    let mut tree = AvlTree::new();
    for key in [8, 4, 12, 2, 6, 10, 14] {
        tree.set(key, 0).unwrap();
    }

    let shape = |t: &AvlTree| {
        (0..t.len() as u32)
            .map(|i| {
                let n = t.node(i);
                (n.p, n.l, n.r, n.key, n.meta)
            })
            .collect::<Vec<_>>()
    };

    let before = shape(&tree);
    assert_eq!(tree.set(12, 1200).unwrap(), SetOutcome::Updated);
    assert_eq!(tree.get(12), Some(1200));
    assert_eq!(shape(&tree), before);
}

#[test]
fn remove_rebalances_up_to_the_root() {
    let mut tree = AvlTree::new();
    for key in 1..=64 {
        tree.set(key, u64::from(key)).unwrap();
    }

    // Carve out one side so the walk has to repair several ancestors.
    for key in 1..=32 {
        assert_eq!(tree.remove(key), Some(u64::from(key)));
        tree.check_invariants().unwrap();
    }

    assert_eq!(tree.len(), 32);
    for key in 33..=64 {
        assert_eq!(tree.get(key), Some(u64::from(key)));
    }
}

#[test]
fn two_child_removal_detaches_the_successor_position() {
    let mut tree = AvlTree::new();
    for key in [40, 20, 60, 10, 30, 50, 70, 45, 55] {
        tree.set(key, u64::from(key)).unwrap();
    }

    // 40 has two children; its successor 45 sits deep in the right subtree,
    // so the detachment point is the successor's old parent, not 40 itself.
    assert_eq!(tree.remove(40), Some(40));
    tree.check_invariants().unwrap();
    assert_eq!(tree.get(40), None);
    for key in [20, 60, 10, 30, 50, 70, 45, 55] {
        assert_eq!(tree.get(key), Some(u64::from(key)));
    }
}

#[test]
fn removing_every_key_empties_the_tree() {
    let mut tree = AvlTree::new();
    let keys: Vec<u32> = (0..64).map(|i| i * 3 + 1).collect();
    for &key in &keys {
        tree.set(key, 7).unwrap();
    }
    for &key in &keys {
        assert_eq!(tree.remove(key), Some(7));
        tree.check_invariants().unwrap();
    }

    assert!(tree.is_empty());
    assert_eq!(tree.root_index(), None);
    assert_eq!(tree.remove(1), None);
}

#[test]
fn shuffled_workload_holds_invariants() {
    let mut rng = StdRng::seed_from_u64(0xa71);
    let mut keys: Vec<u32> = (0..500).collect();
    keys.shuffle(&mut rng);

    let mut tree = AvlTree::new();
    for &key in &keys {
        tree.set(key, u64::from(key) + 1).unwrap();
    }
    tree.check_invariants().unwrap();

    keys.shuffle(&mut rng);
    for &key in &keys[..250] {
        assert!(tree.remove(key).is_some());
    }
    tree.check_invariants().unwrap();

    for &key in &keys[250..] {
        assert_eq!(tree.get(key), Some(u64::from(key) + 1));
    }
}

#[test]
fn trace_captures_rotations_and_height_updates() {
    let mut tree = AvlTree::new();
    tree.enable_trace();

    for key in 1..=10 {
        tree.set(key, 0).unwrap();
    }
    let events = tree.take_trace();

    assert!(events
        .iter()
        .any(|e| matches!(e, TraceEvent::RotateLeft { .. })));
    assert!(events
        .iter()
        .any(|e| matches!(e, TraceEvent::HeightUpdate { .. })));
    assert!(events
        .iter()
        .all(|e| !matches!(e, TraceEvent::Recolor { .. })));
}
