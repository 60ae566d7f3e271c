//! Dense, pointer-free node storage.
//!
//! Node identity is the index into a growable array; live ids are exactly
//! `[0, len)` with no holes. Removal keeps the array dense by moving the last
//! record into the freed slot and relinking, so no free list is needed and a
//! slot swap never invalidates any other live id.

use std::ops::{Index, IndexMut};

use crate::error::TreeError;
use crate::node::{BalanceMeta, Node};
use crate::types::{Key, Value};

/// Dense array of node records. Starting capacity is 1; growth doubles the
/// backing storage and capacity never shrinks on removal.
#[derive(Debug)]
pub struct Arena<M> {
    nodes: Vec<Node<M>>,
}

impl<M: BalanceMeta> Arena<M> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(1),
        }
    }

    /// Count of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocated slot count, before another growth is needed.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Allocates a fresh unlinked node and returns its id.
    ///
    /// Growth doubles the capacity; failure to acquire memory surfaces as
    /// [`TreeError::OutOfMemory`] with the arena untouched.
    pub fn allocate(&mut self, key: Key, value: Value) -> Result<u32, TreeError> {
        if self.nodes.len() == self.nodes.capacity() {
            let additional = self.nodes.capacity().max(1);
            self.nodes.try_reserve_exact(additional)?;
        }
        let id = self.nodes.len() as u32;
        self.nodes.push(Node {
            p: None,
            l: None,
            r: None,
            key,
            value,
            meta: M::fresh(),
        });
        Ok(id)
    }

    /// Reclaims the slot of an already-detached node.
    ///
    /// The last record is copied into the freed slot and every link touching
    /// the moved node is rewritten to the new id, including the tree root.
    /// Rebalancing is not this layer's job; callers run their fixup before
    /// releasing the slot, while all ids are still stable.
    pub fn free(&mut self, root: &mut Option<u32>, freed: u32) {
        let last = (self.nodes.len() - 1) as u32;
        if freed != last {
            let moved = self.nodes[last as usize];
            self.nodes[freed as usize] = moved;

            match moved.p {
                None => *root = Some(freed),
                Some(p) => {
                    let parent = &mut self.nodes[p as usize];
                    if parent.l == Some(last) {
                        parent.l = Some(freed);
                    } else {
                        parent.r = Some(freed);
                    }
                }
            }
            if let Some(l) = moved.l {
                self.nodes[l as usize].p = Some(freed);
            }
            if let Some(r) = moved.r {
                self.nodes[r as usize].p = Some(freed);
            }
        }
        self.nodes.pop();
    }
}

impl<M: BalanceMeta> Default for Arena<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Index<u32> for Arena<M> {
    type Output = Node<M>;

    #[inline]
    fn index(&self, id: u32) -> &Node<M> {
        &self.nodes[id as usize]
    }
}

impl<M> IndexMut<u32> for Arena<M> {
    #[inline]
    fn index_mut(&mut self, id: u32) -> &mut Node<M> {
        &mut self.nodes[id as usize]
    }
}
