//! Slot descriptors: a tag paired with a payload type.

use core::fmt;
use core::marker::PhantomData;

use crate::primitives::{Bool, CharList};
use crate::tag::{Label, LabelEq, Tag};

/// Describes one slot of a [`NamedTuple`](crate::NamedTuple): the name `K`
/// (a [`Tag`]) and the payload type `T`.
///
/// Identity is the name alone. Two descriptors with the same tag are the same
/// slot whatever their payload types are:
///
/// ```
/// use named_tuple::{tag, Named};
///
/// let a = Named::<tag!("id"), u32>::new();
/// let b = Named::<tag!("id"), String>::new();
/// let c = Named::<tag!("name"), u32>::new();
/// assert!(a == b);
/// assert!(a != c);
/// assert!(a == "id");
/// ```
pub struct Named<K, T>(PhantomData<(K, fn() -> T)>);

impl<K, T> Named<K, T> {
    pub const fn new() -> Self {
        Named(PhantomData)
    }
}

impl<C, T> Named<Tag<C>, T> {
    /// The descriptor's tag.
    pub const fn tag(&self) -> Tag<C> {
        Tag::new()
    }
}

impl<K, T> Clone for Named<K, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, T> Copy for Named<K, T> {}

impl<K, T> Default for Named<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> fmt::Debug for Named<K, T>
where
    K: Label,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Named<{:?}, {}>", Tag::<K::Chars>::new(), core::any::type_name::<T>())
    }
}

impl<K: Label, T> Label for Named<K, T> {
    type Chars = K::Chars;
}

// =============================================================================
// Equality (by tag only)
// =============================================================================

impl<K1, T, K2, U> PartialEq<Named<K2, U>> for Named<K1, T>
where
    Named<K1, T>: LabelEq<Named<K2, U>>,
{
    fn eq(&self, _other: &Named<K2, U>) -> bool {
        <<Self as LabelEq<Named<K2, U>>>::Out as Bool>::VALUE
    }
}

impl<K, T> Eq for Named<K, T> where Named<K, T>: LabelEq<Named<K, T>> {}

impl<K, T, C> PartialEq<Tag<C>> for Named<K, T>
where
    Named<K, T>: LabelEq<Tag<C>>,
{
    fn eq(&self, _other: &Tag<C>) -> bool {
        <<Self as LabelEq<Tag<C>>>::Out as Bool>::VALUE
    }
}

impl<K: Label, T> PartialEq<str> for Named<K, T> {
    fn eq(&self, other: &str) -> bool {
        <K::Chars as CharList>::matches(other.as_bytes())
    }
}

impl<K: Label, T> PartialEq<&str> for Named<K, T> {
    fn eq(&self, other: &&str) -> bool {
        <K::Chars as CharList>::matches(other.as_bytes())
    }
}
