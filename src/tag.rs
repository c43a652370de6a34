//! # Layer 1: Literal Tags
//!
//! A [`Tag`] is a string literal lifted into the type system. Build one with
//! the [`tag!`](crate::tag) macro:
//!
//! ```
//! use named_tuple::tag;
//!
//! type Key = tag!("key");
//! assert_eq!(<Key>::new(), "key");
//! assert_eq!(<Key>::LEN, 3);
//! ```
//!
//! The same literal always produces the same type, at any call site, so
//! `tag!("key")` written twice names one slot.

use core::fmt;
use core::marker::PhantomData;

use crate::primitives::{Bool, CharList, CharsEq};

/// A compile-time string.
///
/// `Chars` is a type-level byte list (`LCons<Byte<..>, ..>` / `LNil`). The
/// value itself is zero-sized.
pub struct Tag<Chars>(PhantomData<Chars>);

impl<C> Tag<C> {
    /// The (zero-sized) tag value.
    pub const fn new() -> Self {
        Tag(PhantomData)
    }
}

impl<C: CharList> Tag<C> {
    /// Length of the tag in bytes.
    pub const LEN: usize = C::LEN;

    pub const fn len(&self) -> usize {
        C::LEN
    }

    pub const fn is_empty(&self) -> bool {
        C::LEN == 0
    }

    /// Compare against a runtime string.
    pub fn matches(name: &str) -> bool {
        C::matches(name.as_bytes())
    }

    /// The tag as an owned string.
    #[cfg(feature = "alloc")]
    pub fn name() -> alloc::string::String {
        use alloc::string::ToString;
        Self::new().to_string()
    }
}

impl<C> Clone for Tag<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Tag<C> {}

impl<C> Default for Tag<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CharList> fmt::Display for Tag<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chars::<C>(f)
    }
}

impl<C: CharList> fmt::Debug for Tag<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tag!({:?})", Str::<C>(PhantomData))
    }
}

/// Debug-quoting helper so tags print like string literals.
struct Str<C>(PhantomData<C>);

impl<C: CharList> fmt::Debug for Str<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        write_chars::<C>(&mut EscapeQuotes(f))?;
        f.write_str("\"")
    }
}

struct EscapeQuotes<'a, 'b>(&'a mut fmt::Formatter<'b>);

impl fmt::Write for EscapeQuotes<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            write!(self.0, "{}", c.escape_debug())?;
        }
        Ok(())
    }
}

/// Decode the byte list as UTF-8 and write it out.
///
/// Tags are produced from Rust string literals, so the bytes are valid UTF-8;
/// a malformed sequence from a hand-written list is written as U+FFFD.
fn write_chars<C: CharList>(out: &mut impl fmt::Write) -> fmt::Result {
    let mut buf = [0u8; 4];
    let mut index = 0;
    while let Some(first) = C::byte_at(index) {
        let width = match first {
            0x00..=0x7F => 1,
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        for (offset, slot) in buf.iter_mut().enumerate().take(width) {
            *slot = C::byte_at(index + offset).unwrap_or(0);
        }
        match core::str::from_utf8(&buf[..width]) {
            Ok(s) => out.write_str(s)?,
            Err(_) => out.write_char(char::REPLACEMENT_CHARACTER)?,
        }
        index += width;
    }
    Ok(())
}

// =============================================================================
// Equality
// =============================================================================

/// Tags of different lengths are unequal; otherwise bytes are compared in order.
impl<C1, C2> PartialEq<Tag<C2>> for Tag<C1>
where
    C1: CharsEq<C2>,
{
    fn eq(&self, _other: &Tag<C2>) -> bool {
        <C1::Out as Bool>::VALUE
    }
}

impl<C: CharsEq<C>> Eq for Tag<C> {}

impl<C: CharList> PartialEq<str> for Tag<C> {
    fn eq(&self, other: &str) -> bool {
        C::matches(other.as_bytes())
    }
}

impl<C: CharList> PartialEq<&str> for Tag<C> {
    fn eq(&self, other: &&str) -> bool {
        C::matches(other.as_bytes())
    }
}

#[cfg(feature = "alloc")]
impl<C: CharList> PartialEq<alloc::string::String> for Tag<C> {
    fn eq(&self, other: &alloc::string::String) -> bool {
        C::matches(other.as_bytes())
    }
}

// =============================================================================
// Label: anything that carries a tag
// =============================================================================

/// Types that name a slot: a bare [`Tag`] or a full slot descriptor.
///
/// Lookups accept any `Label` as the needle, so a name can be searched for
/// either on its own or together with a payload type.
pub trait Label {
    /// The tag's byte list.
    type Chars: CharList;
}

impl<C: CharList> Label for Tag<C> {
    type Chars = C;
}

/// Type-level label equality: compares tags only.
pub trait LabelEq<Other> {
    type Out: Bool;
}

impl<A, B> LabelEq<B> for A
where
    A: Label,
    B: Label,
    A::Chars: CharsEq<B::Chars>,
{
    type Out = <A::Chars as CharsEq<B::Chars>>::Out;
}
