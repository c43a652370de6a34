#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables String conversions in no_std

//! # named-tuple
//!
//! Tuples whose elements are addressed by compile-time names.
//!
//! **Name lookups are resolved by the trait solver, not at runtime.**
//!
//! ## Architecture
//!
//! A name such as `"key"` is lifted into a type: its bytes become a
//! type-level list of nibble pairs. Resolving a name to a slot index is then
//! an ordinary trait query over the declared slot list, answered by the
//! compiler with a Peano index. An access through a name compiles to the same
//! field path as a positional access.
//!
//! ```text
//! "key" -> LCons<Byte<X6, XB>, LCons<Byte<X6, X5>, LCons<Byte<X7, X9>, LNil>>>
//! ```
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present/Absent), Nibble (X0-XF), Byte lists, Peano       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1-2: Tags and Slots                                        |
//! |  - Tag<Chars>, Named<Tag, T>, HCons/HNil slot lists               |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Name Resolution                                         |
//! |  - Position, IndexOf, Contains, AllUnique, Field                  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 4-5: NamedTuple + Tuple Protocol                           |
//! |  - get/set by name, at::<I>, comparisons, Arity, Element<I>       |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Guarantees
//!
//! - **Unique names**: a slot list that repeats a name is rejected wherever
//!   the aggregate type is used.
//! - **Checked lookups**: an unknown name, an out-of-range index or a value of
//!   the wrong type is a compile error.
//! - **Name-aligned comparison**: two aggregates compare slot by slot through
//!   their names, so declaration order does not affect equality.
//!
//! ## Quick Start
//!
//! ```
//! use named_tuple::{named, named_tuple, tag};
//!
//! type Config = named_tuple![host: &'static str, port: u16, verbose: bool];
//!
//! let mut config = Config::new(("localhost", 8080, false));
//! config.set::<tag!(verbose)>(true);
//! *config.get_mut::<tag!(port)>() += 1;
//!
//! assert_eq!(*config.get::<tag!(port)>(), 8081);
//! assert_eq!(*config.at::<0>(), "localhost");
//!
//! // Same names, another order: still equal.
//! let other = named! { verbose: true, port: 8081u16, host: "localhost" };
//! assert!(config == other);
//!
//! let (host, port, verbose) = config.into_tuple();
//! assert_eq!((host, port, verbose), ("localhost", 8081, true));
//! ```
//!
//! Repeating a name is a compile error:
//!
//! ```compile_fail
//! use named_tuple::named_tuple;
//!
//! type Broken = named_tuple![id: u32, id: u64];
//! ```

// Allow `::named_tuple` to work inside the crate itself
extern crate self as named_tuple;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for tags! macro
pub use paste;

// Declarative macros (tags!, for_each_arity!); must precede the modules that
// expand them.
#[macro_use]
mod syntax_macros;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1-2: Tags and Slot Descriptors
// =============================================================================
pub mod tag;
pub mod slot;

// =============================================================================
// Layer 3: Name Resolution
// =============================================================================
pub mod resolve;

// =============================================================================
// Layer 4: Named Aggregate
// =============================================================================
pub mod tuple;

// =============================================================================
// Layer 5: Tuple Protocol
// =============================================================================
pub mod protocol;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use tag::{Label, LabelEq, Tag};
pub use slot::{At, DebugSlots, HCons, HNil, Named, SlotList};
pub use resolve::{AllUnique, Contains, Field, FieldType, IndexOf, Position, UniqueSlots};
pub use tuple::{get, get_mut, NamedTuple};
pub use protocol::{Arity, Element, ElementType, List, Tuple};
pub use primitives::bool::{Absent, Bool, Present};
pub use primitives::peano::{Peano, S, Z};

// Re-export proc-macros
pub use macros::{named, named_tuple, tag};

/// Common items for declaring and using named tuples.
pub mod prelude {
    pub use crate::protocol::{Arity, Element, List, Tuple};
    pub use crate::resolve::{Field, FieldType};
    pub use crate::tuple::NamedTuple;
    pub use macros::{named, named_tuple, tag};
    // Note: tags!, hlist!, hlist_pat! and HList! are #[macro_export] so they're at crate root
}
