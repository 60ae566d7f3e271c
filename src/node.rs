//! Node record and the balance-metadata seam shared by both disciplines.

use std::fmt::Debug;

use crate::arena::Arena;
use crate::types::{Key, Value};

/// A tree node addressed by its arena index. All "pointers" are `Option<u32>`
/// indices; `None` is the sentinel for "no node".
#[derive(Clone, Copy, Debug)]
pub struct Node<M> {
    /// Parent id, `None` for the root.
    pub p: Option<u32>,
    /// Left child id.
    pub l: Option<u32>,
    /// Right child id.
    pub r: Option<u32>,
    pub key: Key,
    pub value: Value,
    /// Discipline-specific balance metadata.
    pub meta: M,
}

/// Per-node balance metadata: a color for red-black trees, a subtree height
/// for AVL trees.
pub trait BalanceMeta: Copy + Debug {
    /// Metadata of a freshly allocated, not-yet-linked node.
    fn fresh() -> Self;

    /// Hook invoked after a rotation, with the demoted node and the child
    /// promoted over it. Colors need no repair here; heights are recomputed
    /// locally for the two nodes involved.
    fn rotated(arena: &mut Arena<Self>, demoted: u32, promoted: u32);

    /// Short human-readable form used by the debug printer.
    fn label(&self) -> String;
}
