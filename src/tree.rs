//! Tree facade: public operations composing arena, search, rotations, and the
//! selected balancing discipline.

use std::marker::PhantomData;

use crate::arena::Arena;
use crate::error::TreeError;
use crate::node::{BalanceMeta, Node};
use crate::print::print_subtree;
use crate::search::{minimum, search_node, transplant};
use crate::trace::{Trace, TraceEvent};
use crate::types::{Key, Value};

/// Balancing strategy, chosen at construction time. Both disciplines share
/// the arena, search, and rotation layers; only the fixups differ.
pub trait Discipline {
    type Meta: BalanceMeta;

    /// Restores the discipline's invariants after `node` was linked in.
    fn fixup_insert(
        arena: &mut Arena<Self::Meta>,
        root: &mut Option<u32>,
        node: u32,
        trace: &mut Trace,
    );

    /// Restores the discipline's invariants after a node was detached.
    /// `detached` is the metadata the detached node carried, `child` the
    /// subtree that replaced it, `parent` the parent of the detachment point.
    fn fixup_remove(
        arena: &mut Arena<Self::Meta>,
        root: &mut Option<u32>,
        detached: Self::Meta,
        child: Option<u32>,
        parent: Option<u32>,
        trace: &mut Trace,
    );

    /// When a successor is moved into a removed node's position it takes over
    /// that position's balance metadata.
    fn on_displace(arena: &mut Arena<Self::Meta>, from: u32, to: u32) {
        let meta = arena[from].meta;
        arena[to].meta = meta;
    }

    /// Full invariant check, for tests and debugging.
    fn validate(arena: &Arena<Self::Meta>, root: Option<u32>) -> Result<(), String>;
}

/// Outcome of [`Tree::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The key was absent; a node was created.
    Inserted,
    /// The key existed; its value was overwritten in place, with no
    /// structural change.
    Updated,
}

/// Self-balancing binary search tree over a dense node arena.
///
/// Single-threaded and privately owned; concurrent use requires external
/// exclusion. Dropping the tree releases the backing storage.
pub struct Tree<D: Discipline> {
    arena: Arena<D::Meta>,
    root: Option<u32>,
    trace: Trace,
    _discipline: PhantomData<D>,
}

impl<D: Discipline> Tree<D> {
    /// Empty tree with a capacity-1 arena.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            trace: Trace::disabled(),
            _discipline: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Allocated arena slots; grows by doubling and never shrinks.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &Arena<D::Meta> {
        &self.arena
    }

    pub fn node(&self, id: u32) -> &Node<D::Meta> {
        &self.arena[id]
    }

    pub fn key(&self, id: u32) -> Key {
        self.arena[id].key
    }

    pub fn value(&self, id: u32) -> Value {
        self.arena[id].value
    }

    /// Arena id of the node holding `key`, if present.
    pub fn find(&self, key: Key) -> Option<u32> {
        search_node(&self.arena, self.root, key).0
    }

    /// Value stored under `key`. Absence is a normal outcome, not an error.
    pub fn get(&self, key: Key) -> Option<Value> {
        self.find(key).map(|i| self.arena[i].value)
    }

    pub fn has(&self, key: Key) -> bool {
        self.find(key).is_some()
    }

    /// Inserts or overwrites `key`.
    ///
    /// An existing key is updated in place with no structural change and no
    /// rebalancing. Otherwise a node is allocated (the only failure point,
    /// surfaced before the tree is touched), linked under the parent found by
    /// the search descent, and the discipline's insert fixup runs from it.
    pub fn set(&mut self, key: Key, value: Value) -> Result<SetOutcome, TreeError> {
        let (found, parent) = search_node(&self.arena, self.root, key);
        if let Some(found) = found {
            self.arena[found].value = value;
            return Ok(SetOutcome::Updated);
        }

        let node = self.arena.allocate(key, value)?;
        match parent {
            None => self.root = Some(node),
            Some(p) => {
                if key < self.arena[p].key {
                    self.arena[p].l = Some(node);
                } else {
                    self.arena[p].r = Some(node);
                }
                self.arena[node].p = Some(p);
            }
        }

        D::fixup_insert(&mut self.arena, &mut self.root, node, &mut self.trace);
        Ok(SetOutcome::Inserted)
    }

    /// Removes `key` and returns its value, or `None` if absent (the tree is
    /// then left untouched).
    ///
    /// A node with at most one child is spliced out directly; with two
    /// children its in-order successor is moved into its place and the
    /// successor's old position becomes the detachment point. The rebalance
    /// walk always starts at the parent of the physically detached node;
    /// only afterwards is the arena slot reclaimed, while all ids are still
    /// stable.
    pub fn remove(&mut self, key: Key) -> Option<Value> {
        let (found, _) = search_node(&self.arena, self.root, key);
        let selected = found?;
        let sel = self.arena[selected];

        let detached_meta;
        let child;
        let parent;

        if sel.l.is_none() {
            detached_meta = sel.meta;
            child = sel.r;
            parent = sel.p;
            transplant(&mut self.arena, &mut self.root, selected, sel.r);
        } else if sel.r.is_none() {
            detached_meta = sel.meta;
            child = sel.l;
            parent = sel.p;
            transplant(&mut self.arena, &mut self.root, selected, sel.l);
        } else {
            let right = sel.r.expect("two-child node has a right child");
            let left = sel.l.expect("two-child node has a left child");
            let succ = minimum(&self.arena, right);
            detached_meta = self.arena[succ].meta;
            child = self.arena[succ].r;

            let succ_parent = self.arena[succ].p.expect("successor has a parent");
            if succ_parent == selected {
                // Successor is the direct right child; it keeps its own right
                // subtree and the detachment point sits under the successor
                // itself.
                parent = Some(succ);
            } else {
                parent = Some(succ_parent);
                transplant(&mut self.arena, &mut self.root, succ, child);
                self.arena[succ].r = Some(right);
                self.arena[right].p = Some(succ);
            }

            transplant(&mut self.arena, &mut self.root, selected, Some(succ));
            self.arena[succ].l = Some(left);
            self.arena[left].p = Some(succ);
            D::on_displace(&mut self.arena, selected, succ);
        }

        D::fixup_remove(
            &mut self.arena,
            &mut self.root,
            detached_meta,
            child,
            parent,
            &mut self.trace,
        );

        self.arena.free(&mut self.root, selected);
        Some(sel.value)
    }

    /// Runs the discipline's full invariant check.
    pub fn check_invariants(&self) -> Result<(), String> {
        D::validate(&self.arena, self.root)
    }

    /// Tree-shaped rendering for debugging.
    pub fn to_text(&self) -> String {
        print_subtree(&self.arena, self.root, "")
    }

    /// Writes [`Tree::to_text`] to standard output.
    pub fn print(&self) {
        println!("{}", self.to_text());
    }

    /// Starts buffering fixup steps; see [`Trace`].
    pub fn enable_trace(&mut self) {
        if !self.trace.is_enabled() {
            self.trace = Trace::enabled();
        }
    }

    /// Drains the buffered fixup steps.
    pub fn take_trace(&mut self) -> Vec<TraceEvent> {
        self.trace.take()
    }
}

impl<D: Discipline> Default for Tree<D> {
    fn default() -> Self {
        Self::new()
    }
}
