//! # Layer 4: Named Aggregate
//!
//! - `named.rs`: `NamedTuple`, construction, access by name and position.
//! - `compare.rs`: name-aligned comparison between aggregates, positional
//!   comparison and conversion against std tuples.

pub mod named;
pub mod compare;

pub use named::{get, get_mut, NamedTuple};
pub use compare::{ArityGate, CmpByName, EqByName, SameArity};
