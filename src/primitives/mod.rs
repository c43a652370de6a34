//! # Layer 0: Primitives
//!
//! Basic building blocks for compile-time names:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `nibble.rs`: Type-level 4-bit values (X0-XF).
//! - `chars.rs`: Type-level byte strings built from nibble pairs.
//! - `peano.rs`: Peano numbers used as slot indices.

pub mod bool;
pub mod nibble;
pub mod chars;
pub mod peano;

// Re-export key types at this level
pub use bool::{Bool, Present, Absent, BoolAnd, BoolOr};
pub use nibble::{Nibble, NibbleEq, X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF};
pub use chars::{Byte, Char, CharEq, CharList, CharsEq, LCons, LNil};
pub use peano::{Peano, PeanoEq, Z, S};
