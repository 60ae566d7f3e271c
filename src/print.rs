//! Return-composed debug rendering of a subtree.

use crate::arena::Arena;
use crate::node::BalanceMeta;

/// Renders the subtree under `node` as indented text, `∅` for sentinels.
/// Every live node of the subtree appears exactly once.
pub fn print_subtree<M: BalanceMeta>(arena: &Arena<M>, node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i];
            let deeper = format!("{tab}  ");
            let left = print_subtree(arena, n.l, &deeper);
            let right = print_subtree(arena, n.r, &deeper);
            format!(
                "Node[{i}] {} {{ {} = {} }}\n{tab}L={left}\n{tab}R={right}",
                n.meta.label(),
                n.key,
                n.value
            )
        }
    }
}
