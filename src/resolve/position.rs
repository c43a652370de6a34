//! Name → index resolution.
//!
//! All three lookups scan the slot list left to right and stop at the first
//! slot whose tag equals the needle's tag. The needle may be a bare [`Tag`]
//! or a full [`Named`] descriptor; only the tag takes part in the comparison.
//!
//! [`Tag`]: crate::Tag
//! [`Named`]: crate::Named

use crate::primitives::{Absent, Bool, BoolOr, Peano, Present, S, Z};
use crate::slot::{HCons, HNil};
use crate::tag::LabelEq;

// =============================================================================
// Position (total)
// =============================================================================

/// Index of the first slot named like `Needle`, or the list length when no
/// slot matches.
///
/// The one-past-end result is only meaningful together with [`Contains`];
/// accessors use [`IndexOf`], which has no answer for an absent name.
pub trait Position<Needle> {
    type Index: Peano;
    const INDEX: usize = <Self::Index as Peano>::VALUE;
}

impl<Needle> Position<Needle> for HNil {
    type Index = Z;
}

impl<Needle, Head, Rest> Position<Needle> for HCons<Head, Rest>
where
    Head: LabelEq<Needle>,
    <Head as LabelEq<Needle>>::Out: PositionStep<Needle, Rest>,
{
    type Index = <<Head as LabelEq<Needle>>::Out as PositionStep<Needle, Rest>>::Index;
}

/// Continuation of [`Position`] after comparing one slot.
pub trait PositionStep<Needle, Rest> {
    type Index: Peano;
}

// Match: stop here.
impl<Needle, Rest> PositionStep<Needle, Rest> for Present {
    type Index = Z;
}

// No match: one further along than wherever the rest resolves.
impl<Needle, Rest> PositionStep<Needle, Rest> for Absent
where
    Rest: Position<Needle>,
{
    type Index = S<<Rest as Position<Needle>>::Index>;
}

// =============================================================================
// IndexOf (partial)
// =============================================================================

/// Index of the first slot named like `Needle`.
///
/// Not implemented when no slot matches, so looking up an absent name is a
/// compile error rather than an out-of-range index:
///
/// ```compile_fail
/// use named_tuple::{named_tuple, tag};
///
/// type Row = named_tuple![id: u32, name: &'static str];
/// let _ = Row::index_of::<tag!(Name)>();
/// ```
#[diagnostic::on_unimplemented(
    message = "no slot with this name in the named tuple",
    label = "the name is not among the declared slots",
    note = "the name is the one written in `tag!(..)`; it must match a declared slot exactly (same bytes, same length, same case)"
)]
pub trait IndexOf<Needle> {
    type Index: Peano;
    const INDEX: usize = <Self::Index as Peano>::VALUE;
}

impl<Needle, Head, Rest> IndexOf<Needle> for HCons<Head, Rest>
where
    Head: LabelEq<Needle>,
    <Head as LabelEq<Needle>>::Out: IndexStep<Needle, Rest>,
{
    type Index = <<Head as LabelEq<Needle>>::Out as IndexStep<Needle, Rest>>::Index;
}

/// Continuation of [`IndexOf`] after comparing one slot.
pub trait IndexStep<Needle, Rest> {
    type Index: Peano;
}

impl<Needle, Rest> IndexStep<Needle, Rest> for Present {
    type Index = Z;
}

impl<Needle, Rest> IndexStep<Needle, Rest> for Absent
where
    Rest: IndexOf<Needle>,
{
    type Index = S<<Rest as IndexOf<Needle>>::Index>;
}

// =============================================================================
// Contains
// =============================================================================

/// Whether any slot is named like `Needle`.
pub trait Contains<Needle> {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl<Needle> Contains<Needle> for HNil {
    type Out = Absent;
}

impl<Needle, Head, Rest> Contains<Needle> for HCons<Head, Rest>
where
    Head: LabelEq<Needle>,
    Rest: Contains<Needle>,
    <Head as LabelEq<Needle>>::Out: BoolOr<<Rest as Contains<Needle>>::Out>,
{
    type Out = <<Head as LabelEq<Needle>>::Out as BoolOr<<Rest as Contains<Needle>>::Out>>::Out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tag, HList, Named};

    type Slots = HList![
        Named<tag!("key1"), i32>,
        Named<tag!("key2"), char>,
        Named<tag!("key3"), f32>,
    ];

    #[test]
    fn first_match_by_tag() {
        assert_eq!(<Slots as IndexOf<tag!("key1")>>::INDEX, 0);
        assert_eq!(<Slots as IndexOf<tag!("key2")>>::INDEX, 1);
        assert_eq!(<Slots as IndexOf<tag!("key3")>>::INDEX, 2);
    }

    #[test]
    fn descriptor_needles_ignore_payload_type() {
        assert_eq!(<Slots as IndexOf<Named<tag!("key3"), f32>>>::INDEX, 2);
        assert_eq!(<Slots as IndexOf<Named<tag!("key3"), ()>>>::INDEX, 2);
    }

    #[test]
    fn position_is_one_past_end_when_absent() {
        assert_eq!(<Slots as Position<tag!("key2")>>::INDEX, 1);
        assert_eq!(<Slots as Position<tag!("nope")>>::INDEX, 3);
        assert_eq!(<HNil as Position<tag!("key1")>>::INDEX, 0);
    }

    #[test]
    fn contains_predicate() {
        assert!(<Slots as Contains<tag!("key1")>>::VALUE);
        assert!(<Slots as Contains<tag!("key3")>>::VALUE);
        assert!(!<Slots as Contains<tag!("key")>>::VALUE);
        assert!(!<Slots as Contains<tag!("key10")>>::VALUE);
        assert!(!<HNil as Contains<tag!("key1")>>::VALUE);
    }

    #[test]
    fn duplicates_resolve_to_the_first_occurrence() {
        type Dup = HList![Named<tag!(a), u8>, Named<tag!(b), u8>, Named<tag!(a), u16>];
        assert_eq!(<Dup as Position<tag!(a)>>::INDEX, 0);
        assert_eq!(<Dup as IndexOf<Named<tag!(a), u16>>>::INDEX, 0);
    }
}
