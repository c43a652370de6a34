//! Comparisons.
//!
//! Two aggregates compare **by name**: the left side walks its own slots in
//! declaration order and looks each name up in the right side. Declaration
//! order therefore does not affect equality, and ordering follows the left
//! side's order:
//!
//! ```
//! use named_tuple::named_tuple;
//!
//! let a = <named_tuple![k1: i32, k2: i32, k3: i32]>::new((1, 2, 3));
//! let b = <named_tuple![k3: i32, k2: i32, k1: i32]>::new((3, 2, 1));
//! assert!(a == b);
//! ```
//!
//! Both sides must have the same arity:
//!
//! ```compile_fail
//! use named_tuple::named_tuple;
//!
//! let a = <named_tuple![k1: i32, k2: i32]>::new((1, 2));
//! let b = <named_tuple![k1: i32]>::new((1,));
//! let _ = a == b;
//! ```
//!
//! and the same names:
//!
//! ```compile_fail
//! use named_tuple::named_tuple;
//!
//! let a = <named_tuple![k1: i32]>::new((1,));
//! let b = <named_tuple![k2: i32]>::new((1,));
//! let _ = a == b;
//! ```
//!
//! A std tuple has no names, so against one the comparison is positional.

use core::cmp::Ordering;

use super::NamedTuple;
use crate::primitives::{PeanoEq, Present};
use crate::protocol::Tuple;
use crate::resolve::{Field, UniqueSlots};
use crate::slot::{HCons, HNil, Named, SlotList};
use crate::tag::Label;
use crate::{hlist_pat, HList};

// =============================================================================
// Arity gate
// =============================================================================

/// Gate on the arity comparison: only `Present` passes.
#[diagnostic::on_unimplemented(
    message = "cannot compare named tuples of different arity",
    label = "`{Lhs}` and `{Rhs}` have different numbers of slots",
    note = "named tuples compare slot by slot; both sides must declare the same names"
)]
pub trait ArityGate<Lhs, Rhs> {}

impl<Lhs, Rhs> ArityGate<Lhs, Rhs> for Present {}

/// Two slot lists of equal arity.
pub trait SameArity<Rhs: SlotList>: SlotList {}

impl<L, R> SameArity<R> for L
where
    L: SlotList,
    R: SlotList,
    L::Arity: PeanoEq<R::Arity>,
    <L::Arity as PeanoEq<R::Arity>>::Out: ArityGate<L, R>,
{
}

// =============================================================================
// Name-aligned equality
// =============================================================================

/// Equality of two value lists, matching slots of `Self` to slots of `Rhs`
/// by name.
pub trait EqByName<Rhs: SlotList>: SlotList {
    fn eq_by_name(lhs: &Self::Values, rhs: &Rhs::Values) -> bool;
}

impl<Rhs: SlotList> EqByName<Rhs> for HNil {
    #[inline(always)]
    fn eq_by_name(_lhs: &HNil, _rhs: &Rhs::Values) -> bool {
        true
    }
}

impl<K, T, Rest, Rhs> EqByName<Rhs> for HCons<Named<K, T>, Rest>
where
    K: Label,
    Rest: EqByName<Rhs>,
    Rhs: Field<K>,
    T: PartialEq<<Rhs as Field<K>>::Type>,
{
    #[inline(always)]
    fn eq_by_name(lhs: &Self::Values, rhs: &Rhs::Values) -> bool {
        lhs.head == *<Rhs as Field<K>>::field(rhs) && Rest::eq_by_name(&lhs.tail, rhs)
    }
}

// =============================================================================
// Name-aligned ordering
// =============================================================================

/// Lexicographic ordering of two value lists in `Self`'s declaration order,
/// matching slots by name. The first slot that is not `Equal` decides,
/// including an unordered (`None`) slot.
pub trait CmpByName<Rhs: SlotList>: SlotList {
    fn partial_cmp_by_name(lhs: &Self::Values, rhs: &Rhs::Values) -> Option<Ordering>;
}

impl<Rhs: SlotList> CmpByName<Rhs> for HNil {
    #[inline(always)]
    fn partial_cmp_by_name(_lhs: &HNil, _rhs: &Rhs::Values) -> Option<Ordering> {
        Some(Ordering::Equal)
    }
}

impl<K, T, Rest, Rhs> CmpByName<Rhs> for HCons<Named<K, T>, Rest>
where
    K: Label,
    Rest: CmpByName<Rhs>,
    Rhs: Field<K>,
    T: PartialOrd<<Rhs as Field<K>>::Type>,
{
    #[inline(always)]
    fn partial_cmp_by_name(lhs: &Self::Values, rhs: &Rhs::Values) -> Option<Ordering> {
        match lhs.head.partial_cmp(<Rhs as Field<K>>::field(rhs)) {
            Some(Ordering::Equal) => Rest::partial_cmp_by_name(&lhs.tail, rhs),
            ordering => ordering,
        }
    }
}

// =============================================================================
// NamedTuple vs NamedTuple
// =============================================================================

impl<S1, S2> PartialEq<NamedTuple<S2>> for NamedTuple<S1>
where
    S1: UniqueSlots + SameArity<S2> + EqByName<S2>,
    S2: UniqueSlots,
{
    fn eq(&self, other: &NamedTuple<S2>) -> bool {
        S1::eq_by_name(self.values(), other.values())
    }
}

impl<S> Eq for NamedTuple<S>
where
    S: UniqueSlots + SameArity<S> + EqByName<S>,
    S::Values: Eq,
{
}

impl<S1, S2> PartialOrd<NamedTuple<S2>> for NamedTuple<S1>
where
    S1: UniqueSlots + SameArity<S2> + EqByName<S2> + CmpByName<S2>,
    S2: UniqueSlots,
{
    fn partial_cmp(&self, other: &NamedTuple<S2>) -> Option<Ordering> {
        S1::partial_cmp_by_name(self.values(), other.values())
    }
}

// Against itself every name resolves to its own position, so the name-aligned
// order is the positional one.
impl<S> Ord for NamedTuple<S>
where
    S: UniqueSlots + SameArity<S> + EqByName<S> + CmpByName<S>,
    S::Values: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.values().cmp(other.values())
    }
}

// =============================================================================
// NamedTuple vs std tuple
// =============================================================================

macro_rules! positional {
    ($($T:ident $v:ident $idx:tt),*) => {
        paste::paste! {
            impl<S, $($T),*> From<($($T,)*)> for NamedTuple<S>
            where
                S: UniqueSlots<Values = HList![$($T),*]>,
            {
                fn from(tuple: ($($T,)*)) -> Self {
                    NamedTuple::from_values(tuple.into_list())
                }
            }

            #[allow(unused_variables)]
            impl<S, $($T,)* $([<$T 2>]),*> PartialEq<($([<$T 2>],)*)> for NamedTuple<S>
            where
                S: UniqueSlots<Values = HList![$($T),*]>,
                $($T: PartialEq<[<$T 2>]>,)*
            {
                fn eq(&self, other: &($([<$T 2>],)*)) -> bool {
                    let hlist_pat![$($v),*] = self.values();
                    true $(&& *$v == other.$idx)*
                }
            }

            #[allow(unused_variables)]
            impl<S, $($T,)* $([<$T 2>]),*> PartialOrd<($([<$T 2>],)*)> for NamedTuple<S>
            where
                S: UniqueSlots<Values = HList![$($T),*]>,
                $($T: PartialOrd<[<$T 2>]>,)*
            {
                fn partial_cmp(&self, other: &($([<$T 2>],)*)) -> Option<Ordering> {
                    let hlist_pat![$($v),*] = self.values();
                    $(
                        match $v.partial_cmp(&other.$idx) {
                            Some(Ordering::Equal) => {}
                            ordering => return ordering,
                        }
                    )*
                    Some(Ordering::Equal)
                }
            }
        }
    };
}

for_each_arity!(positional);
