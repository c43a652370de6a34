//! Arity and positional element access.

use crate::slot::{HCons, HNil};

/// Number of elements, as a compile-time constant.
pub trait Arity {
    const ARITY: usize;
}

impl Arity for HNil {
    const ARITY: usize = 0;
}

impl<H, T: Arity> Arity for HCons<H, T> {
    const ARITY: usize = 1 + T::ARITY;
}

/// The element at position `I`: its type, and access to it.
///
/// Only implemented for `I < ARITY`, so an out-of-range index does not
/// compile:
///
/// ```compile_fail
/// use named_tuple::protocol::Element;
///
/// let pair = (1u8, 'x');
/// let _ = Element::<2>::element(&pair);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no element at index {I}",
    label = "index out of range",
    note = "positional indices run from 0 to arity - 1"
)]
pub trait Element<const I: usize> {
    type Type;

    fn element(&self) -> &Self::Type;
    fn element_mut(&mut self) -> &mut Self::Type;
    fn into_element(self) -> Self::Type;
}

/// Type of the element at position `I` of `T`.
pub type ElementType<T, const I: usize> = <T as Element<I>>::Type;

impl<H, T> Element<0> for HCons<H, T> {
    type Type = H;

    #[inline(always)]
    fn element(&self) -> &H {
        &self.head
    }

    #[inline(always)]
    fn element_mut(&mut self) -> &mut H {
        &mut self.head
    }

    #[inline(always)]
    fn into_element(self) -> H {
        self.head
    }
}

// Element<1> ..= Element<63>
macros::positions!(63);
