//! Uniqueness of slot names.
//!
//! Resolve every slot's own name against the whole list with [`Position`]
//! and mark the index it lands on. Because resolution always stops at the
//! *first* match, a repeated name lands on its earlier twin and leaves its
//! own index unmarked. The list is unique iff every index `0..arity` ends up
//! marked, i.e. iff self-resolution is a permutation.
//!
//! ```text
//! [a, b, c] -> marks {0, 1, 2}      all marked  -> unique
//! [a, b, a] -> marks {0, 1, 0}      2 unmarked  -> duplicate
//! ```

use crate::primitives::{Absent, Bool, BoolAnd, BoolOr, PeanoEq, Present, S, Z};
use crate::resolve::Position;
use crate::slot::{HCons, HNil, SlotList};

// =============================================================================
// Seen positions
// =============================================================================

/// The index each element of `Self` resolves to within `Whole`.
pub trait SeenPositions<Whole> {
    /// An `HCons` list of Peano indices.
    type Out;
}

impl<Whole> SeenPositions<Whole> for HNil {
    type Out = HNil;
}

impl<Whole, Head, Rest> SeenPositions<Whole> for HCons<Head, Rest>
where
    Whole: Position<Head>,
    Rest: SeenPositions<Whole>,
{
    type Out = HCons<<Whole as Position<Head>>::Index, <Rest as SeenPositions<Whole>>::Out>;
}

/// Whether index `I` appears in a list of seen indices.
pub trait Marked<I> {
    type Out: Bool;
}

impl<I> Marked<I> for HNil {
    type Out = Absent;
}

impl<I, P, Rest> Marked<I> for HCons<P, Rest>
where
    P: PeanoEq<I>,
    Rest: Marked<I>,
    <P as PeanoEq<I>>::Out: BoolOr<<Rest as Marked<I>>::Out>,
{
    type Out = <<P as PeanoEq<I>>::Out as BoolOr<<Rest as Marked<I>>::Out>>::Out;
}

/// Walks `Self` only for its length, checking that indices `I, I+1, ..` are
/// all marked in `Seen`.
pub trait AllMarked<Seen, I> {
    type Out: Bool;
}

impl<Seen, I> AllMarked<Seen, I> for HNil {
    type Out = Present;
}

impl<Seen, I, Head, Rest> AllMarked<Seen, I> for HCons<Head, Rest>
where
    Seen: Marked<I>,
    Rest: AllMarked<Seen, S<I>>,
    <Seen as Marked<I>>::Out: BoolAnd<<Rest as AllMarked<Seen, S<I>>>::Out>,
{
    type Out = <<Seen as Marked<I>>::Out as BoolAnd<<Rest as AllMarked<Seen, S<I>>>::Out>>::Out;
}

// =============================================================================
// AllUnique
// =============================================================================

/// Whether no two elements of the list share a tag.
pub trait AllUnique {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl<L> AllUnique for L
where
    L: SeenPositions<L>,
    L: AllMarked<<L as SeenPositions<L>>::Out, Z>,
{
    type Out = <L as AllMarked<<L as SeenPositions<L>>::Out, Z>>::Out;
}

/// Gate on the result of [`AllUnique`]: only `Present` passes.
#[diagnostic::on_unimplemented(
    message = "duplicate slot name in the named tuple",
    label = "two slots share a name",
    note = "each name may appear only once; `named_tuple!` and `named!` point at the repeat"
)]
pub trait Distinct<L> {}

impl<L> Distinct<L> for Present {}

/// A slot list whose names are pairwise distinct.
///
/// This is the bound on [`NamedTuple`](crate::NamedTuple): any use of an
/// aggregate type with a repeated name fails to compile.
///
/// ```compile_fail
/// use named_tuple::{tag, HList, Named, NamedTuple};
///
/// type Twice = NamedTuple<HList![Named<tag!(id), u8>, Named<tag!(id), u16>]>;
/// let _ = Twice::default();
/// ```
pub trait UniqueSlots: SlotList {}

impl<L> UniqueSlots for L
where
    L: SlotList + AllUnique,
    <L as AllUnique>::Out: Distinct<L>,
{
}
