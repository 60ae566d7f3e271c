//! Arena-backed self-balancing binary search trees.
//!
//! Nodes live in a dense, growable array and are addressed by `Option<u32>`
//! index handles instead of pointers; removal compacts the array by moving
//! the last record into the freed slot, so live ids are always the contiguous
//! range `[0, len)`. Two balancing disciplines, red-black coloring and AVL
//! height-balance, plug into one shared data model, selected by the tree's
//! type parameter.
//!
//! ```
//! use dense_forest::{AvlTree, RbTree, SetOutcome};
//!
//! let mut tree = RbTree::new();
//! assert_eq!(tree.set(50, 500).unwrap(), SetOutcome::Inserted);
//! assert_eq!(tree.set(50, 555).unwrap(), SetOutcome::Updated);
//! assert_eq!(tree.get(50), Some(555));
//! assert_eq!(tree.remove(50), Some(555));
//! assert!(tree.is_empty());
//!
//! let mut avl = AvlTree::new();
//! for k in 1..=100 {
//!     avl.set(k, u64::from(k)).unwrap();
//! }
//! avl.check_invariants().unwrap();
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`arena`] | dense node store, allocate / free with swap-compaction |
//! | [`search`] | BST descent, `minimum`, `transplant` |
//! | [`rotate`] | left/right rotations shared by both disciplines |
//! | [`red_black`] | [`Color`] metadata, insert/remove fixups, validator |
//! | [`avl`] | [`Height`] metadata, rebalance walk, validator |
//! | [`tree`] | [`Tree`] facade and the [`Discipline`] strategy trait |
//! | [`trace`] | opt-in step log replacing inline debug output |
//! | [`print`] | return-composed debug rendering |

pub mod arena;
pub mod avl;
pub mod error;
pub mod node;
pub mod print;
pub mod red_black;
pub mod rotate;
pub mod search;
pub mod trace;
pub mod tree;
pub mod types;

pub use arena::Arena;
pub use avl::{assert_avl, Avl, Height};
pub use error::TreeError;
pub use node::{BalanceMeta, Node};
pub use red_black::{assert_red_black, Color, RedBlack};
pub use search::{minimum, search_node, transplant};
pub use trace::{Trace, TraceEvent};
pub use tree::{Discipline, SetOutcome, Tree};
pub use types::{Key, Value};

/// Red-black tree over the dense arena.
pub type RbTree = Tree<RedBlack>;

/// AVL tree over the dense arena.
pub type AvlTree = Tree<Avl>;
