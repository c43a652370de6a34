//! Flat tuples and cons lists.
//!
//! `(A, B, C)` and `HCons<A, HCons<B, HCons<C, HNil>>>` hold the same data;
//! [`Tuple`] and [`List`] convert between the two shapes. Std tuples also get
//! [`Arity`] and [`Element`] here, so generic code can treat a std tuple, a
//! cons list and a [`NamedTuple`](crate::NamedTuple) alike.

use super::{Arity, Element};
use crate::{hlist, hlist_pat, HList};

/// A flat tuple that has a cons-list form.
pub trait Tuple {
    type AsList: List;

    fn into_list(self) -> Self::AsList;
}

/// A cons list that has a flat-tuple form.
pub trait List {
    type AsTuple: Tuple;

    /// The flat tuple of shared references to each element.
    type Refs<'a>
    where
        Self: 'a;

    /// The flat tuple of mutable references to each element.
    type Muts<'a>
    where
        Self: 'a;

    fn into_tuple(self) -> Self::AsTuple;
    fn as_refs(&self) -> Self::Refs<'_>;
    fn as_muts(&mut self) -> Self::Muts<'_>;
}

macro_rules! tuple_protocol {
    ($($T:ident $v:ident $idx:tt),*) => {
        impl<$($T),*> Arity for ($($T,)*) {
            const ARITY: usize = <HList![$($T),*] as Arity>::ARITY;
        }

        impl<$($T),*> Tuple for ($($T,)*) {
            type AsList = HList![$($T),*];

            #[inline(always)]
            fn into_list(self) -> Self::AsList {
                let ($($v,)*) = self;
                hlist![$($v),*]
            }
        }

        impl<$($T),*> List for HList![$($T),*] {
            type AsTuple = ($($T,)*);
            type Refs<'a> = ($(&'a $T,)*) where Self: 'a;
            type Muts<'a> = ($(&'a mut $T,)*) where Self: 'a;

            #[inline(always)]
            fn into_tuple(self) -> Self::AsTuple {
                let hlist_pat![$($v),*] = self;
                ($($v,)*)
            }

            #[inline(always)]
            fn as_refs(&self) -> Self::Refs<'_> {
                let hlist_pat![$($v),*] = self;
                ($($v,)*)
            }

            #[inline(always)]
            fn as_muts(&mut self) -> Self::Muts<'_> {
                let hlist_pat![$($v),*] = self;
                ($($v,)*)
            }
        }

        tuple_elements!(($($T),*); $($T $idx),*);
    };
}

macro_rules! tuple_elements {
    ($all:tt; $($T:ident $idx:tt),*) => {
        $( tuple_element!($all; $T $idx); )*
    };
}

macro_rules! tuple_element {
    (($($All:ident),*); $T:ident $idx:tt) => {
        impl<$($All),*> Element<$idx> for ($($All,)*) {
            type Type = $T;

            #[inline(always)]
            fn element(&self) -> &$T {
                &self.$idx
            }

            #[inline(always)]
            fn element_mut(&mut self) -> &mut $T {
                &mut self.$idx
            }

            #[inline(always)]
            fn into_element(self) -> $T {
                self.$idx
            }
        }
    };
}

for_each_arity!(tuple_protocol);
