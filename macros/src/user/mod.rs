//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `named_tuple!` | type position | Spell an aggregate type |
//! | `named!` | expression position | Build an aggregate value |

mod construct;
mod slot_list;

pub use construct::{expand_named, ConstructInput};
pub use slot_list::{expand_named_tuple, SlotListInput};
