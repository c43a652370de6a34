//! # Layer 2: Slots
//!
//! - `named.rs`: [`Named`], the (tag, payload type) descriptor of one slot.
//! - `list.rs`: `HCons`/`HNil` lists, positional access by Peano index, and
//!   the [`SlotList`] mapping from descriptors to stored values.

pub mod named;
pub mod list;

pub use named::Named;
pub use list::{At, DebugSlots, HCons, HNil, SlotList};
