//! Left/right rotations shared by both balancing disciplines.

use crate::arena::Arena;
use crate::node::BalanceMeta;
use crate::trace::{Trace, TraceEvent};

/// Promotes the right child of `node` to subtree root. Requires that child.
///
/// ```text
///    node                     ret
///    / \                      / \
///   T1 ret     ------->     node T3
///      / \                  / \
///     T2  T3               T1  T2
/// ```
///
/// Returns the id of the new subtree root.
pub fn rotate_left<M: BalanceMeta>(
    arena: &mut Arena<M>,
    root: &mut Option<u32>,
    node: u32,
    trace: &mut Trace,
) -> u32 {
    let ret = arena[node].r.expect("rotate_left needs a right child");
    let inner = arena[ret].l;
    let parent = arena[node].p;

    arena[node].p = Some(ret);
    arena[node].r = inner;
    arena[ret].l = Some(node);
    arena[ret].p = parent;
    if let Some(inner) = inner {
        arena[inner].p = Some(node);
    }
    match parent {
        None => *root = Some(ret),
        Some(p) => {
            if arena[p].l == Some(node) {
                arena[p].l = Some(ret);
            } else {
                arena[p].r = Some(ret);
            }
        }
    }

    M::rotated(arena, node, ret);
    trace.record(TraceEvent::RotateLeft { pivot: node });
    ret
}

/// Mirror image of [`rotate_left`]: promotes the left child of `node`.
/// Requires that child.
pub fn rotate_right<M: BalanceMeta>(
    arena: &mut Arena<M>,
    root: &mut Option<u32>,
    node: u32,
    trace: &mut Trace,
) -> u32 {
    let ret = arena[node].l.expect("rotate_right needs a left child");
    let inner = arena[ret].r;
    let parent = arena[node].p;

    arena[node].p = Some(ret);
    arena[node].l = inner;
    arena[ret].r = Some(node);
    arena[ret].p = parent;
    if let Some(inner) = inner {
        arena[inner].p = Some(node);
    }
    match parent {
        None => *root = Some(ret),
        Some(p) => {
            if arena[p].l == Some(node) {
                arena[p].l = Some(ret);
            } else {
                arena[p].r = Some(ret);
            }
        }
    }

    M::rotated(arena, node, ret);
    trace.record(TraceEvent::RotateRight { pivot: node });
    ret
}
