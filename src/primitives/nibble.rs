//! Type-level nibble system (4-bit values X0-XF).
//!
//! Tag bytes are split into a high and a low nibble so that byte equality can
//! be decided with a finite table of impls (16 x 16) instead of one impl per
//! byte pair.

use super::bool::{Absent, Bool, Present};

// =============================================================================
// Nibble iteration macros
// =============================================================================

/// Generate impls for all distinct pairs (A, B) and (B, A) where A != B.
macro_rules! for_distinct_pairs {
    ($mac:ident) => {
        for_distinct_pairs!(@recurse $mac, [X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF]);
    };
    (@recurse $mac:ident, [$head:ident, $($tail:ident),*]) => {
        $(
            $mac!($head, $tail);
            $mac!($tail, $head);
        )*
        for_distinct_pairs!(@recurse $mac, [$($tail),*]);
    };
    (@recurse $mac:ident, [$last:ident]) => {};
}

// =============================================================================
// Nibble trait and types
// =============================================================================

/// Type-level nibble (4-bit value, 0..15)
pub trait Nibble: 'static {
    const VALUE: u8;
}

macro_rules! define_nibble {
    ($($n:ident = $v:literal),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $n;
            impl Nibble for $n {
                const VALUE: u8 = $v;
            }
        )*
    };
}

define_nibble!(
    X0 = 0x0, X1 = 0x1, X2 = 0x2, X3 = 0x3,
    X4 = 0x4, X5 = 0x5, X6 = 0x6, X7 = 0x7,
    X8 = 0x8, X9 = 0x9, XA = 0xA, XB = 0xB,
    XC = 0xC, XD = 0xD, XE = 0xE, XF = 0xF,
);

// =============================================================================
// Nibble equality
// =============================================================================

/// Type-level nibble equality
pub trait NibbleEq<Other: Nibble>: Nibble {
    type Out: Bool;
}

// Self-equality: X == X → Present
macro_rules! impl_eq_self {
    ($($n:ident),*) => { $(impl NibbleEq<$n> for $n { type Out = Present; })* };
}
impl_eq_self!(X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF);

// Cross-inequality: X != Y → Absent
macro_rules! impl_neq { ($a:ident, $b:ident) => { impl NibbleEq<$b> for $a { type Out = Absent; } }; }
for_distinct_pairs!(impl_neq);
