//! Red-black balancing discipline.
//!
//! Insert and remove fixups are the classic bottom-up case analyses on node
//! color. Sentinel children count as black; every fixup step either recolors
//! or rotates, and neither can fail.

use crate::arena::Arena;
use crate::node::BalanceMeta;
use crate::rotate::{rotate_left, rotate_right};
use crate::search::assert_linked_in_order;
use crate::trace::{Trace, TraceEvent};
use crate::tree::Discipline;

/// Node color. Fresh nodes are red; only the fixups repaint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl BalanceMeta for Color {
    fn fresh() -> Self {
        Color::Red
    }

    fn rotated(_arena: &mut Arena<Self>, _demoted: u32, _promoted: u32) {
        // Colors are managed by the fixup passes, not by rotations.
    }

    fn label(&self) -> String {
        match self {
            Color::Red => "red".to_string(),
            Color::Black => "black".to_string(),
        }
    }
}

#[inline]
fn is_black(arena: &Arena<Color>, node: Option<u32>) -> bool {
    node.map(|i| arena[i].meta == Color::Black).unwrap_or(true)
}

#[inline]
fn paint(arena: &mut Arena<Color>, trace: &mut Trace, node: u32, color: Color) {
    if arena[node].meta != color {
        arena[node].meta = color;
        trace.record(TraceEvent::Recolor {
            node,
            black: color == Color::Black,
        });
    }
}

/// Marker type selecting red-black balancing for a [`crate::Tree`].
pub enum RedBlack {}

impl Discipline for RedBlack {
    type Meta = Color;

    fn fixup_insert(arena: &mut Arena<Color>, root: &mut Option<u32>, node: u32, trace: &mut Trace) {
        insert_fixup(arena, root, node, trace);
    }

    fn fixup_remove(
        arena: &mut Arena<Color>,
        root: &mut Option<u32>,
        detached: Color,
        child: Option<u32>,
        parent: Option<u32>,
        trace: &mut Trace,
    ) {
        // Detaching a red node changes no path's black count.
        if detached == Color::Black {
            remove_fixup(arena, root, child, parent, trace);
        }
    }

    fn validate(arena: &Arena<Color>, root: Option<u32>) -> Result<(), String> {
        assert_red_black(arena, root)
    }
}

fn insert_fixup(arena: &mut Arena<Color>, root: &mut Option<u32>, mut node: u32, trace: &mut Trace) {
    while let Some(parent) = arena[node].p {
        if arena[parent].meta == Color::Black {
            break;
        }
        let Some(grand) = arena[parent].p else {
            break;
        };

        if arena[grand].l == Some(parent) {
            let uncle = arena[grand].r;
            if !is_black(arena, uncle) {
                paint(arena, trace, parent, Color::Black);
                paint(arena, trace, uncle.expect("red uncle exists"), Color::Black);
                paint(arena, trace, grand, Color::Red);
                node = grand;
            } else {
                if arena[parent].r == Some(node) {
                    // Inner grandchild: straighten the zig-zag first.
                    node = parent;
                    rotate_left(arena, root, node, trace);
                }
                let parent = arena[node].p.expect("outer grandchild has a parent");
                let grand = arena[parent].p.expect("grandparent survives the inner rotation");
                paint(arena, trace, parent, Color::Black);
                paint(arena, trace, grand, Color::Red);
                rotate_right(arena, root, grand, trace);
            }
        } else {
            let uncle = arena[grand].l;
            if !is_black(arena, uncle) {
                paint(arena, trace, parent, Color::Black);
                paint(arena, trace, uncle.expect("red uncle exists"), Color::Black);
                paint(arena, trace, grand, Color::Red);
                node = grand;
            } else {
                if arena[parent].l == Some(node) {
                    node = parent;
                    rotate_right(arena, root, node, trace);
                }
                let parent = arena[node].p.expect("outer grandchild has a parent");
                let grand = arena[parent].p.expect("grandparent survives the inner rotation");
                paint(arena, trace, parent, Color::Black);
                paint(arena, trace, grand, Color::Red);
                rotate_left(arena, root, grand, trace);
            }
        }
    }

    let root_id = root.expect("insert fixup runs on a non-empty tree");
    paint(arena, trace, root_id, Color::Black);
}

/// Restores black-height after a black node was detached. `node` is the child
/// that replaced it (possibly a sentinel), `parent` its parent.
fn remove_fixup(
    arena: &mut Arena<Color>,
    root: &mut Option<u32>,
    mut node: Option<u32>,
    mut parent: Option<u32>,
    trace: &mut Trace,
) {
    while let Some(p) = parent {
        if !is_black(arena, node) {
            break;
        }

        if arena[p].l == node {
            // Black heights match on both sides, so the sibling exists.
            let mut sibling = arena[p].r.expect("short side has a sibling");
            if !is_black(arena, Some(sibling)) {
                paint(arena, trace, sibling, Color::Black);
                paint(arena, trace, p, Color::Red);
                rotate_left(arena, root, p, trace);
                sibling = arena[p].r.expect("sibling refreshed after rotation");
            }

            let sl = arena[sibling].l;
            let sr = arena[sibling].r;
            if is_black(arena, sl) && is_black(arena, sr) {
                paint(arena, trace, sibling, Color::Red);
                node = Some(p);
            } else {
                if is_black(arena, sr) {
                    // Near nephew is red: rotate it outward first.
                    paint(arena, trace, sl.expect("near nephew is red"), Color::Black);
                    paint(arena, trace, sibling, Color::Red);
                    rotate_right(arena, root, sibling, trace);
                    sibling = arena[p].r.expect("sibling refreshed after rotation");
                }
                let parent_color = arena[p].meta;
                paint(arena, trace, sibling, parent_color);
                paint(arena, trace, p, Color::Black);
                let far = arena[sibling].r.expect("far nephew is red");
                paint(arena, trace, far, Color::Black);
                rotate_left(arena, root, p, trace);
                node = *root;
            }
        } else {
            let mut sibling = arena[p].l.expect("short side has a sibling");
            if !is_black(arena, Some(sibling)) {
                paint(arena, trace, sibling, Color::Black);
                paint(arena, trace, p, Color::Red);
                rotate_right(arena, root, p, trace);
                sibling = arena[p].l.expect("sibling refreshed after rotation");
            }

            let sl = arena[sibling].l;
            let sr = arena[sibling].r;
            if is_black(arena, sl) && is_black(arena, sr) {
                paint(arena, trace, sibling, Color::Red);
                node = Some(p);
            } else {
                if is_black(arena, sl) {
                    paint(arena, trace, sr.expect("near nephew is red"), Color::Black);
                    paint(arena, trace, sibling, Color::Red);
                    rotate_left(arena, root, sibling, trace);
                    sibling = arena[p].l.expect("sibling refreshed after rotation");
                }
                let parent_color = arena[p].meta;
                paint(arena, trace, sibling, parent_color);
                paint(arena, trace, p, Color::Black);
                let far = arena[sibling].l.expect("far nephew is red");
                paint(arena, trace, far, Color::Black);
                rotate_right(arena, root, p, trace);
                node = *root;
            }
        }

        parent = node.and_then(|n| arena[n].p);
    }

    if let Some(n) = node {
        paint(arena, trace, n, Color::Black);
    }
}

/// Checks the red-black invariants: black root, no red node with a red
/// parent, equal black count on every root-to-sentinel path, plus the shared
/// link and ordering checks.
pub fn assert_red_black(arena: &Arena<Color>, root: Option<u32>) -> Result<(), String> {
    let Some(root_id) = root else {
        return Ok(());
    };

    if arena[root_id].meta != Color::Black {
        return Err("root is not black".to_string());
    }

    fn black_height(arena: &Arena<Color>, node: Option<u32>) -> Result<usize, String> {
        let Some(i) = node else {
            return Ok(0);
        };
        let n = &arena[i];

        if n.meta == Color::Red {
            if !is_black(arena, n.l) || !is_black(arena, n.r) {
                return Err(format!("red node {i} has a red child"));
            }
        }

        let lh = black_height(arena, n.l)?;
        let rh = black_height(arena, n.r)?;
        if lh != rh {
            return Err(format!("black-height mismatch under node {i}: {lh} vs {rh}"));
        }

        Ok(lh + usize::from(n.meta == Color::Black))
    }
    black_height(arena, root)?;

    assert_linked_in_order(arena, root)
}
