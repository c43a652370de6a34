//! Type-level byte strings.
//!
//! A string is a cons list of bytes, each byte a pair of nibbles:
//!
//! ```text
//! "ab" -> LCons<Byte<X6, X1>, LCons<Byte<X6, X2>, LNil>>
//! ```
//!
//! Two lists compare equal iff they have the same length and the same bytes
//! in the same order. Lists of different lengths are simply unequal.

use core::marker::PhantomData;

use super::bool::{Absent, Bool, BoolAnd, Present};
use super::nibble::{Nibble, NibbleEq};

// =============================================================================
// Bytes
// =============================================================================

/// A single byte as a (high, low) nibble pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Byte<Hi, Lo>(PhantomData<(Hi, Lo)>);

/// Runtime value of a type-level byte.
pub trait Char: 'static {
    const VALUE: u8;
}

impl<Hi: Nibble, Lo: Nibble> Char for Byte<Hi, Lo> {
    const VALUE: u8 = (Hi::VALUE << 4) | Lo::VALUE;
}

/// Type-level byte equality.
pub trait CharEq<Other> {
    type Out: Bool;
}

impl<A0, A1, B0, B1> CharEq<Byte<B0, B1>> for Byte<A0, A1>
where
    A0: NibbleEq<B0>,
    A1: NibbleEq<B1>,
    B0: Nibble,
    B1: Nibble,
    <A0 as NibbleEq<B0>>::Out: BoolAnd<<A1 as NibbleEq<B1>>::Out>,
{
    type Out = <<A0 as NibbleEq<B0>>::Out as BoolAnd<<A1 as NibbleEq<B1>>::Out>>::Out;
}

// =============================================================================
// Byte lists
// =============================================================================

/// List cons cell: head byte + tail
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LCons<Head, Tail>(PhantomData<(Head, Tail)>);

/// Empty list (end marker)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LNil;

/// Runtime view of a type-level byte list.
pub trait CharList: 'static {
    /// Number of bytes in the list.
    const LEN: usize;

    /// Byte at position `index`, if any.
    fn byte_at(index: usize) -> Option<u8>;

    /// Whether `bytes` spells exactly this list.
    fn matches(bytes: &[u8]) -> bool;
}

impl CharList for LNil {
    const LEN: usize = 0;

    #[inline(always)]
    fn byte_at(_index: usize) -> Option<u8> {
        None
    }

    #[inline(always)]
    fn matches(bytes: &[u8]) -> bool {
        bytes.is_empty()
    }
}

impl<C: Char, Tail: CharList> CharList for LCons<C, Tail> {
    const LEN: usize = Tail::LEN + 1;

    #[inline(always)]
    fn byte_at(index: usize) -> Option<u8> {
        match index {
            0 => Some(C::VALUE),
            n => Tail::byte_at(n - 1),
        }
    }

    #[inline(always)]
    fn matches(bytes: &[u8]) -> bool {
        match bytes.split_first() {
            Some((first, rest)) => *first == C::VALUE && Tail::matches(rest),
            None => false,
        }
    }
}

// =============================================================================
// CharsEq: Compare two lists for equality
// =============================================================================

/// Compare two type-level byte lists.
pub trait CharsEq<Other> {
    type Out: Bool;
}

// Empty == Empty -> Present
impl CharsEq<LNil> for LNil {
    type Out = Present;
}

// Empty != Non-empty -> Absent
impl<C, Tail> CharsEq<LCons<C, Tail>> for LNil {
    type Out = Absent;
}

// Non-empty != Empty -> Absent
impl<C, Tail> CharsEq<LNil> for LCons<C, Tail> {
    type Out = Absent;
}

// Compare head bytes; the tails are only compared when the heads match.
impl<CA, CB, TailA, TailB> CharsEq<LCons<CB, TailB>> for LCons<CA, TailA>
where
    CA: CharEq<CB>,
    <CA as CharEq<CB>>::Out: CharsEqStep<TailA, TailB>,
{
    type Out = <<CA as CharEq<CB>>::Out as CharsEqStep<TailA, TailB>>::Out;
}

/// Continuation of [`CharsEq`] after the head comparison.
pub trait CharsEqStep<TailA, TailB> {
    type Out: Bool;
}

impl<TailA, TailB> CharsEqStep<TailA, TailB> for Absent {
    type Out = Absent;
}

impl<TailA, TailB> CharsEqStep<TailA, TailB> for Present
where
    TailA: CharsEq<TailB>,
{
    type Out = <TailA as CharsEq<TailB>>::Out;
}
