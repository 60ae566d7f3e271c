//! Ordered traversal and the structural-replace primitive.

use crate::arena::Arena;
use crate::node::BalanceMeta;
use crate::types::Key;

/// Iterative BST descent. Returns `(found, parent)`: the node holding `key`
/// (or `None`) and the id of its parent, which on a failed search is the node
/// a new child would attach under, so no second traversal is needed.
pub fn search_node<M: BalanceMeta>(
    arena: &Arena<M>,
    root: Option<u32>,
    key: Key,
) -> (Option<u32>, Option<u32>) {
    let mut parent = None;
    let mut curr = root;
    while let Some(i) = curr {
        let node = &arena[i];
        if key == node.key {
            return (Some(i), parent);
        }
        parent = Some(i);
        curr = if key < node.key { node.l } else { node.r };
    }
    (None, parent)
}

/// Leftmost node of the subtree rooted at `subtree`.
pub fn minimum<M: BalanceMeta>(arena: &Arena<M>, mut subtree: u32) -> u32 {
    while let Some(l) = arena[subtree].l {
        subtree = l;
    }
    subtree
}

/// Replaces the subtree rooted at `old` with the one rooted at `new` by
/// rewriting the parent's child pointer (or the root pointer) and the new
/// subtree root's parent pointer. Balance metadata is untouched.
pub fn transplant<M: BalanceMeta>(
    arena: &mut Arena<M>,
    root: &mut Option<u32>,
    old: u32,
    new: Option<u32>,
) {
    let old_parent = arena[old].p;
    match old_parent {
        None => *root = new,
        Some(p) => {
            if arena[p].l == Some(old) {
                arena[p].l = new;
            } else {
                arena[p].r = new;
            }
        }
    }
    if let Some(new) = new {
        arena[new].p = old_parent;
    }
}

/// First node in key order, for validators.
pub(crate) fn first<M: BalanceMeta>(arena: &Arena<M>, root: Option<u32>) -> Option<u32> {
    root.map(|r| minimum(arena, r))
}

/// In-order successor, for validators.
pub(crate) fn next_in_order<M: BalanceMeta>(arena: &Arena<M>, node: u32) -> Option<u32> {
    if let Some(r) = arena[node].r {
        return Some(minimum(arena, r));
    }
    let mut curr = node;
    let mut parent = arena[curr].p;
    while let Some(p) = parent {
        if arena[p].l == Some(curr) {
            return Some(p);
        }
        curr = p;
        parent = arena[p].p;
    }
    None
}

/// Shared structural checks: every child points back at its parent and an
/// in-order walk yields strictly increasing keys.
pub(crate) fn assert_linked_in_order<M: BalanceMeta>(
    arena: &Arena<M>,
    root: Option<u32>,
) -> Result<(), String> {
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root].p.is_some() {
        return Err("root has a parent".to_string());
    }

    fn check_links<M: BalanceMeta>(arena: &Arena<M>, node: u32) -> Result<(), String> {
        if let Some(l) = arena[node].l {
            if arena[l].p != Some(node) {
                return Err(format!("broken parent link on left child of node {node}"));
            }
            check_links(arena, l)?;
        }
        if let Some(r) = arena[node].r {
            if arena[r].p != Some(node) {
                return Err(format!("broken parent link on right child of node {node}"));
            }
            check_links(arena, r)?;
        }
        Ok(())
    }
    check_links(arena, root)?;

    let mut curr = first(arena, Some(root));
    let mut prev: Option<Key> = None;
    while let Some(i) = curr {
        let key = arena[i].key;
        if let Some(prev) = prev {
            if prev >= key {
                return Err(format!("key order violated: {prev} before {key}"));
            }
        }
        prev = Some(key);
        curr = next_in_order(arena, i);
    }

    Ok(())
}
