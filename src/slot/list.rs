//! Heterogeneous lists.
//!
//! One cons list serves two roles:
//! - at the type level, `HCons<Named<K, T>, ..>` is the ordered slot list of
//!   an aggregate;
//! - at runtime, `HCons<T, ..>` holds the values themselves.
//!
//! [`SlotList`] maps the first onto the second.

use core::fmt;

use crate::primitives::{CharList, Peano, S, Z};
use crate::slot::Named;
use crate::tag::{Label, Tag};

/// Empty list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HNil;

/// List cons cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HCons<H, T> {
    pub head: H,
    pub tail: T,
}

impl<H, T> HCons<H, T> {
    pub const fn new(head: H, tail: T) -> Self {
        HCons { head, tail }
    }
}

/// Build an `HCons` list value: `hlist![a, b, c]`.
#[macro_export]
macro_rules! hlist {
    () => { $crate::HNil };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::HCons::new($head, $crate::hlist![$($tail),*])
    };
}

/// Destructure an `HCons` list value: `let hlist_pat![a, b, c] = list;`.
#[macro_export]
macro_rules! hlist_pat {
    () => { $crate::HNil };
    ($head:pat $(, $tail:pat)* $(,)?) => {
        $crate::HCons { head: $head, tail: $crate::hlist_pat![$($tail),*] }
    };
}

/// Spell an `HCons` list type: `HList![A, B, C]`.
#[macro_export]
macro_rules! HList {
    () => { $crate::HNil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::HCons<$head, $crate::HList![$($tail),*]>
    };
}

// =============================================================================
// At: positional access by Peano index
// =============================================================================

/// Access the element at type-level index `Idx`.
pub trait At<Idx> {
    type Output;

    fn at(&self) -> &Self::Output;
    fn at_mut(&mut self) -> &mut Self::Output;
    fn into_at(self) -> Self::Output;
}

impl<H, T> At<Z> for HCons<H, T> {
    type Output = H;

    #[inline(always)]
    fn at(&self) -> &H {
        &self.head
    }

    #[inline(always)]
    fn at_mut(&mut self) -> &mut H {
        &mut self.head
    }

    #[inline(always)]
    fn into_at(self) -> H {
        self.head
    }
}

impl<H, T, N> At<S<N>> for HCons<H, T>
where
    T: At<N>,
{
    type Output = T::Output;

    #[inline(always)]
    fn at(&self) -> &T::Output {
        self.tail.at()
    }

    #[inline(always)]
    fn at_mut(&mut self) -> &mut T::Output {
        self.tail.at_mut()
    }

    #[inline(always)]
    fn into_at(self) -> T::Output {
        self.tail.into_at()
    }
}

// =============================================================================
// SlotList: descriptor list -> value list
// =============================================================================

/// An ordered list of slot descriptors.
///
/// Implemented for `HNil` and for `HCons<Named<K, T>, Rest>`; anything else
/// in the list is rejected when the aggregate type is used.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a list of slot descriptors",
    label = "expected `HCons<Named<tag!(..), T>, ..>` or `HNil`",
    note = "build slot lists with `named_tuple![name: Type, ..]`"
)]
pub trait SlotList {
    /// Storage: one value per slot, in declaration order.
    type Values;

    /// Number of slots as a Peano type.
    type Arity: Peano;

    /// Number of slots.
    const ARITY: usize = <Self::Arity as Peano>::VALUE;

    /// Call `f(index, name)` for every slot, in declaration order.
    fn for_each_name<F: FnMut(usize, &dyn fmt::Display)>(mut f: F) {
        Self::visit_names(0, &mut f);
    }

    #[doc(hidden)]
    fn visit_names<F: FnMut(usize, &dyn fmt::Display)>(offset: usize, f: &mut F);

    /// Index of the slot whose tag spells `name`, if there is one.
    fn position_of(name: &str) -> Option<usize>;
}

impl SlotList for HNil {
    type Values = HNil;
    type Arity = Z;

    fn visit_names<F: FnMut(usize, &dyn fmt::Display)>(_offset: usize, _f: &mut F) {}

    fn position_of(_name: &str) -> Option<usize> {
        None
    }
}

impl<K, T, Rest> SlotList for HCons<Named<K, T>, Rest>
where
    K: Label,
    Rest: SlotList,
{
    type Values = HCons<T, Rest::Values>;
    type Arity = S<Rest::Arity>;

    fn visit_names<F: FnMut(usize, &dyn fmt::Display)>(offset: usize, f: &mut F) {
        f(offset, &Tag::<K::Chars>::new());
        Rest::visit_names(offset + 1, f);
    }

    fn position_of(name: &str) -> Option<usize> {
        if <K::Chars as CharList>::matches(name.as_bytes()) {
            Some(0)
        } else {
            Rest::position_of(name).map(|index| index + 1)
        }
    }
}

/// Debug rendering of a value list, keyed by slot name.
pub trait DebugSlots: SlotList {
    fn debug_entries(values: &Self::Values, map: &mut fmt::DebugMap<'_, '_>);
}

impl DebugSlots for HNil {
    fn debug_entries(_values: &HNil, _map: &mut fmt::DebugMap<'_, '_>) {}
}

impl<K, T, Rest> DebugSlots for HCons<Named<K, T>, Rest>
where
    K: Label,
    T: fmt::Debug,
    Rest: DebugSlots,
{
    fn debug_entries(values: &Self::Values, map: &mut fmt::DebugMap<'_, '_>) {
        map.entry(&format_args!("{}", Tag::<K::Chars>::new()), &values.head);
        Rest::debug_entries(&values.tail, map);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::{String, ToString};
    use std::vec::Vec;

    use super::*;
    use crate::tag;

    type Slots = HList![Named<tag!(a), u8>, Named<tag!(b), char>, Named<tag!(c), &'static str>];

    #[test]
    fn peano_access() {
        let mut list = hlist![1u8, 'x', "three"];
        assert_eq!(*At::<Z>::at(&list), 1);
        assert_eq!(*At::<S<Z>>::at(&list), 'x');
        *At::<S<S<Z>>>::at_mut(&mut list) = "changed";
        assert_eq!(At::<S<S<Z>>>::into_at(list), "changed");
    }

    #[test]
    fn slot_list_arity() {
        assert_eq!(<HNil as SlotList>::ARITY, 0);
        assert_eq!(<Slots as SlotList>::ARITY, 3);
    }

    #[test]
    fn names_in_declaration_order() {
        let mut seen: Vec<(usize, String)> = Vec::new();
        Slots::for_each_name(|index, name| seen.push((index, name.to_string())));
        assert_eq!(
            seen,
            [(0, "a".to_string()), (1, "b".to_string()), (2, "c".to_string())]
        );
    }

    #[test]
    fn runtime_position() {
        assert_eq!(Slots::position_of("a"), Some(0));
        assert_eq!(Slots::position_of("c"), Some(2));
        assert_eq!(Slots::position_of("d"), None);
        assert_eq!(HNil::position_of("a"), None);
    }
}
