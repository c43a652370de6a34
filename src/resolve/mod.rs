//! # Layer 3: Name Resolution
//!
//! Everything here is evaluated by the trait solver:
//! - `position.rs`: `Position` (total), `IndexOf` (partial), `Contains`.
//! - `unique.rs`: the `AllUnique` permutation check and the `UniqueSlots`
//!   bound built on it.
//! - `field.rs`: `Field`, typed slot access through `IndexOf`.

pub mod position;
pub mod unique;
pub mod field;

pub use position::{Contains, IndexOf, IndexStep, Position, PositionStep};
pub use unique::{AllMarked, AllUnique, Distinct, Marked, SeenPositions, UniqueSlots};
pub use field::{Field, FieldType};
