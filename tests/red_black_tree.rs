use dense_forest::{RbTree, SetOutcome, TraceEvent};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[test]
fn seven_key_scenario() {
    let mut tree = RbTree::new();
    for key in [50, 30, 70, 20, 40, 60, 80] {
        assert_eq!(tree.set(key, u64::from(key) * 10).unwrap(), SetOutcome::Inserted);
        tree.check_invariants().unwrap();
    }

    let root = tree.root_index().unwrap();
    assert_eq!(tree.key(root), 50);

    assert_eq!(tree.remove(30), Some(300));
    tree.check_invariants().unwrap();

    assert_eq!(tree.get(30), None);
    for key in [50, 70, 20, 40, 60, 80] {
        assert_eq!(tree.get(key), Some(u64::from(key) * 10), "key {key}");
    }
    assert_eq!(tree.len(), 6);
}

#[test]
fn update_in_place_keeps_shape_and_colors() {
    let mut tree = RbTree::new();
    for key in [8, 4, 12, 2, 6, 10, 14, 1, 3] {
        tree.set(key, 0).unwrap();
    }

    let shape = |t: &RbTree| {
        (0..t.len() as u32)
            .map(|i| {
                let n = t.node(i);
                (n.p, n.l, n.r, n.key, n.meta)
            })
            .collect::<Vec<_>>()
    };

    let before = shape(&tree);
    assert_eq!(tree.set(6, 66).unwrap(), SetOutcome::Updated);
    assert_eq!(tree.get(6), Some(66));
    assert_eq!(shape(&tree), before);
    tree.check_invariants().unwrap();
}

#[test]
fn remove_absent_is_a_no_op() {
    let mut tree = RbTree::new();
    for key in [5, 3, 8] {
        tree.set(key, u64::from(key)).unwrap();
    }

    let before = tree.to_text();
    assert_eq!(tree.remove(42), None);
    assert_eq!(tree.to_text(), before);
    assert_eq!(tree.len(), 3);
}

#[test]
fn ladder_insert_delete() {
    let mut tree = RbTree::new();

    for i in 0..200 {
        tree.set(i, u64::from(i)).unwrap();
        assert_eq!(tree.get(i), Some(u64::from(i)));
        tree.check_invariants().unwrap();
    }
    assert_eq!(tree.len(), 200);

    for i in (0..200).step_by(2) {
        assert_eq!(tree.remove(i), Some(u64::from(i)));
        tree.check_invariants().unwrap();
    }
    assert_eq!(tree.len(), 100);

    for i in 0..200 {
        if i % 2 == 0 {
            assert_eq!(tree.get(i), None);
        } else {
            assert_eq!(tree.get(i), Some(u64::from(i)));
        }
    }
}

#[test]
fn removing_every_key_empties_the_tree() {
    let mut tree = RbTree::new();
    let keys = [13, 7, 21, 3, 9, 17, 29, 1, 5];
    for key in keys {
        tree.set(key, 1).unwrap();
    }
    for key in keys {
        assert!(tree.remove(key).is_some());
        tree.check_invariants().unwrap();
    }

    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
    assert_eq!(tree.root_index(), None);
}

#[test]
fn shuffled_workload_holds_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut keys: Vec<u32> = (0..500).collect();
    keys.shuffle(&mut rng);

    let mut tree = RbTree::new();
    for &key in &keys {
        tree.set(key, u64::from(key)).unwrap();
    }
    tree.check_invariants().unwrap();

    keys.shuffle(&mut rng);
    for &key in &keys[..250] {
        assert!(tree.remove(key).is_some());
    }
    tree.check_invariants().unwrap();
    assert_eq!(tree.len(), 250);

    for &key in &keys[250..] {
        assert_eq!(tree.get(key), Some(u64::from(key)));
    }
}

#[test]
fn trace_captures_rotation_and_recoloring() {
    let mut tree = RbTree::new();
    tree.enable_trace();

    tree.set(1, 1).unwrap();
    tree.take_trace();

    tree.set(2, 2).unwrap();
    // Red leaf under a black root needs no repair.
    assert!(tree.take_trace().is_empty());

    tree.set(3, 3).unwrap();
    let events = tree.take_trace();
    assert!(events.contains(&TraceEvent::RotateLeft { pivot: 0 }));
    assert!(events
        .iter()
        .any(|e| matches!(e, TraceEvent::Recolor { .. })));
    tree.check_invariants().unwrap();
}

#[test]
fn print_visits_every_live_node_once() {
    let mut tree = RbTree::new();
    for key in [4, 2, 6, 1, 3, 5, 7] {
        tree.set(key, 0).unwrap();
    }

    let text = tree.to_text();
    for id in 0..tree.len() as u32 {
        assert_eq!(
            text.matches(&format!("Node[{id}]")).count(),
            1,
            "node {id} must be rendered exactly once"
        );
    }
    assert!(RbTree::new().to_text().contains('∅'));
}
