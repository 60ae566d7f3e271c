//! AVL balancing discipline.
//!
//! Every node stores the height of its subtree (a leaf has height 1, a
//! sentinel height 0). After a structural change the rebalance walk climbs to
//! the root unconditionally, recomputing heights and rotating wherever the
//! balance factor leaves `{-1, 0, 1}`; unlike the red-black fixup, higher
//! ancestors may still need repair after a lower rotation.

use crate::arena::Arena;
use crate::node::BalanceMeta;
use crate::rotate::{rotate_left, rotate_right};
use crate::search::assert_linked_in_order;
use crate::trace::{Trace, TraceEvent};
use crate::tree::Discipline;

/// Stored subtree height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Height(pub i32);

impl BalanceMeta for Height {
    fn fresh() -> Self {
        Height(1)
    }

    fn rotated(arena: &mut Arena<Self>, demoted: u32, promoted: u32) {
        // Heights of the two pivot nodes are purely local; the walk repairs
        // the rest of the ancestor chain.
        let h = 1 + height(arena, arena[demoted].l).max(height(arena, arena[demoted].r));
        arena[demoted].meta = Height(h);
        let h = 1 + height(arena, arena[promoted].l).max(height(arena, arena[promoted].r));
        arena[promoted].meta = Height(h);
    }

    fn label(&self) -> String {
        format!("h={}", self.0)
    }
}

#[inline]
pub(crate) fn height(arena: &Arena<Height>, node: Option<u32>) -> i32 {
    node.map(|i| arena[i].meta.0).unwrap_or(0)
}

/// Left height minus right height.
#[inline]
pub(crate) fn balance_factor(arena: &Arena<Height>, node: u32) -> i32 {
    height(arena, arena[node].l) - height(arena, arena[node].r)
}

/// Marker type selecting AVL balancing for a [`crate::Tree`].
pub enum Avl {}

impl Discipline for Avl {
    type Meta = Height;

    fn fixup_insert(
        arena: &mut Arena<Height>,
        root: &mut Option<u32>,
        node: u32,
        trace: &mut Trace,
    ) {
        rebalance(arena, root, Some(node), trace);
    }

    fn fixup_remove(
        arena: &mut Arena<Height>,
        root: &mut Option<u32>,
        _detached: Height,
        _child: Option<u32>,
        parent: Option<u32>,
        trace: &mut Trace,
    ) {
        rebalance(arena, root, parent, trace);
    }

    fn validate(arena: &Arena<Height>, root: Option<u32>) -> Result<(), String> {
        assert_avl(arena, root)
    }
}

/// Walks from `from` to the root, recomputing heights and rotating where the
/// balance factor exceeds the AVL bound.
fn rebalance(arena: &mut Arena<Height>, root: &mut Option<u32>, from: Option<u32>, trace: &mut Trace) {
    let mut at = from;
    while let Some(node) = at {
        // The node's parent may change under a rotation; remember it first.
        let parent = arena[node].p;
        let bf = balance_factor(arena, node);

        if bf > 1 {
            let left = arena[node].l.expect("left-heavy node has a left child");
            if balance_factor(arena, left) < 0 {
                // Left-right: straighten the inner subtree first.
                rotate_left(arena, root, left, trace);
            }
            rotate_right(arena, root, node, trace);
        } else if bf < -1 {
            let right = arena[node].r.expect("right-heavy node has a right child");
            if balance_factor(arena, right) > 0 {
                rotate_right(arena, root, right, trace);
            }
            rotate_left(arena, root, node, trace);
        } else {
            let h = 1 + height(arena, arena[node].l).max(height(arena, arena[node].r));
            if arena[node].meta.0 != h {
                arena[node].meta = Height(h);
                trace.record(TraceEvent::HeightUpdate { node, height: h });
            }
        }

        at = parent;
    }
}

/// Checks that stored heights match recomputed ones and every balance factor
/// is in `{-1, 0, 1}`, plus the shared link and ordering checks.
pub fn assert_avl(arena: &Arena<Height>, root: Option<u32>) -> Result<(), String> {
    fn check(arena: &Arena<Height>, node: Option<u32>) -> Result<i32, String> {
        let Some(i) = node else {
            return Ok(0);
        };
        let lh = check(arena, arena[i].l)?;
        let rh = check(arena, arena[i].r)?;

        let computed = 1 + lh.max(rh);
        let stored = arena[i].meta.0;
        if stored != computed {
            return Err(format!(
                "stored height {stored} != computed {computed} at node {i}"
            ));
        }
        if !(-1..=1).contains(&(lh - rh)) {
            return Err(format!("balance factor {} out of bounds at node {i}", lh - rh));
        }
        Ok(computed)
    }
    check(arena, root)?;

    assert_linked_in_order(arena, root)
}
