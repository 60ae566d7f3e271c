//! Fixed-width key/value types stored in every tree node.
//!
//! Keys are totally ordered unsigned integers; generic comparators are out of
//! scope for this crate. Values are an opaque fixed-width payload.

/// Node key. Ordering is the integer order.
pub type Key = u32;

/// Node payload.
pub type Value = u64;
