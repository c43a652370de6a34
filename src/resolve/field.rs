//! Slot access by name: resolve the index, then fetch from the value list.

use crate::resolve::IndexOf;
use crate::slot::{At, SlotList};

/// Typed access to the slot named `Name`.
///
/// Implemented for every slot list containing `Name`; the payload type and
/// index are fixed at compile time.
#[diagnostic::on_unimplemented(
    message = "no slot with this name in the named tuple",
    label = "unknown slot name",
    note = "the name is the one written in `tag!(..)`; it must match a declared slot exactly (same bytes, same length, same case)"
)]
pub trait Field<Name>: SlotList {
    /// Payload type of the slot.
    type Type;

    fn field(values: &Self::Values) -> &Self::Type;
    fn field_mut(values: &mut Self::Values) -> &mut Self::Type;
    fn into_field(values: Self::Values) -> Self::Type;
}

impl<L, Name> Field<Name> for L
where
    L: SlotList + IndexOf<Name>,
    L::Values: At<<L as IndexOf<Name>>::Index>,
{
    type Type = <L::Values as At<<L as IndexOf<Name>>::Index>>::Output;

    #[inline(always)]
    fn field(values: &L::Values) -> &Self::Type {
        <L::Values as At<<L as IndexOf<Name>>::Index>>::at(values)
    }

    #[inline(always)]
    fn field_mut(values: &mut L::Values) -> &mut Self::Type {
        <L::Values as At<<L as IndexOf<Name>>::Index>>::at_mut(values)
    }

    #[inline(always)]
    fn into_field(values: L::Values) -> Self::Type {
        <L::Values as At<<L as IndexOf<Name>>::Index>>::into_at(values)
    }
}

/// Payload type of the slot named `Name` in slot list `L`.
pub type FieldType<L, Name> = <L as Field<Name>>::Type;
