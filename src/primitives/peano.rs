//! Peano numbers.
//!
//! Slot indices produced by name resolution are types, not values: a `usize`
//! computed from trait resolution cannot be fed back into a const generic on
//! stable Rust, while `S<S<Z>>` can drive further trait selection. Each
//! number still exposes its value as an associated constant.

use core::marker::PhantomData;

use super::bool::{Absent, Bool, Present};

/// Peano number trait
pub trait Peano: 'static {
    const VALUE: usize;
}

/// Zero (base case)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Z;
impl Peano for Z {
    const VALUE: usize = 0;
}

/// Successor (S<N> = N + 1)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct S<N>(PhantomData<N>);
impl<N: Peano> Peano for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

// =============================================================================
// Peano comparison
// =============================================================================

/// Type-level equality of two Peano numbers.
pub trait PeanoEq<Other> {
    type Out: Bool;
}

impl PeanoEq<Z> for Z {
    type Out = Present;
}

impl<N> PeanoEq<S<N>> for Z {
    type Out = Absent;
}

impl<N> PeanoEq<Z> for S<N> {
    type Out = Absent;
}

impl<A: PeanoEq<B>, B> PeanoEq<S<B>> for S<A> {
    type Out = A::Out;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq<A: PeanoEq<B>, B>() -> bool {
        <A::Out as Bool>::VALUE
    }

    type Two = S<S<Z>>;
    type Three = S<Two>;

    #[test]
    fn values_count_up() {
        assert_eq!(Z::VALUE, 0);
        assert_eq!(<S<Z>>::VALUE, 1);
        assert_eq!(Three::VALUE, 3);
    }

    #[test]
    fn equality() {
        assert!(eq::<Z, Z>());
        assert!(eq::<Three, Three>());
        assert!(!eq::<Three, Two>());
        assert!(!eq::<Z, Two>());
        assert!(!eq::<Two, Z>());
    }
}
