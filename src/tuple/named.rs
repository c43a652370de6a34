//! The named aggregate.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem;

use crate::protocol::{Arity, Element, ElementType, List, Tuple};
use crate::resolve::{Contains, Field, FieldType, IndexOf, UniqueSlots};
use crate::slot::DebugSlots;

/// A fixed-arity heterogeneous aggregate whose slots are addressed by name.
///
/// `S` is the slot list, `HCons<Named<tag!(..), T>, ..>`, usually spelled
/// with [`named_tuple!`](crate::named_tuple). Values are stored in
/// declaration order in a cons list; every name lookup is resolved by the
/// compiler to a fixed field path.
///
/// ```
/// use named_tuple::{named_tuple, tag};
///
/// type Reading = named_tuple![sensor: &'static str, celsius: f32, ok: bool];
///
/// let mut r = Reading::new(("north", 21.5, true));
/// assert_eq!(*r.get::<tag!(celsius)>(), 21.5);
///
/// r.set::<tag!(ok)>(false);
/// assert_eq!(r.at::<2>(), &false);
///
/// let (sensor, celsius, ok) = r.into_tuple();
/// assert_eq!((sensor, celsius, ok), ("north", 21.5, false));
/// ```
///
/// Names that are not declared do not compile:
///
/// ```compile_fail
/// use named_tuple::{named_tuple, tag};
///
/// let r = <named_tuple![celsius: f32]>::new((21.5,));
/// let _ = r.get::<tag!(fahrenheit)>();
/// ```
///
/// Neither does a value of the wrong type:
///
/// ```compile_fail
/// use named_tuple::{named_tuple, tag};
///
/// let mut r = <named_tuple![celsius: f32]>::new((21.5,));
/// r.set::<tag!(celsius)>("warm");
/// ```
///
/// Nor an initializer of the wrong arity:
///
/// ```compile_fail
/// use named_tuple::named_tuple;
///
/// let _ = <named_tuple![celsius: f32, ok: bool]>::new((21.5,));
/// ```
pub struct NamedTuple<S: UniqueSlots> {
    values: S::Values,
}

// =============================================================================
// Construction
// =============================================================================

impl<S: UniqueSlots> NamedTuple<S> {
    /// Number of slots.
    pub const SIZE: usize = S::ARITY;

    /// Build from a std tuple holding one value per slot, in declaration
    /// order.
    pub fn new<T>(tuple: T) -> Self
    where
        T: Tuple<AsList = S::Values>,
    {
        Self::from_values(tuple.into_list())
    }

    /// Build from a value list (`hlist![..]`).
    pub const fn from_values(values: S::Values) -> Self {
        NamedTuple { values }
    }

    pub const fn size(&self) -> usize {
        S::ARITY
    }
}

// =============================================================================
// Access by name
// =============================================================================

impl<S: UniqueSlots> NamedTuple<S> {
    /// Shared reference to the slot named `Name`.
    #[inline(always)]
    pub fn get<Name>(&self) -> &FieldType<S, Name>
    where
        S: Field<Name>,
    {
        S::field(&self.values)
    }

    /// Mutable reference to the slot named `Name`.
    #[inline(always)]
    pub fn get_mut<Name>(&mut self) -> &mut FieldType<S, Name>
    where
        S: Field<Name>,
    {
        S::field_mut(&mut self.values)
    }

    /// Consume the aggregate, keeping only the slot named `Name`.
    #[inline(always)]
    pub fn into_field<Name>(self) -> FieldType<S, Name>
    where
        S: Field<Name>,
    {
        S::into_field(self.values)
    }

    /// Assign to the slot named `Name`.
    #[inline(always)]
    pub fn set<Name>(&mut self, value: impl Into<FieldType<S, Name>>)
    where
        S: Field<Name>,
    {
        *S::field_mut(&mut self.values) = value.into();
    }

    /// Assign to the slot named `Name`, returning the previous value.
    #[inline(always)]
    pub fn replace<Name>(&mut self, value: FieldType<S, Name>) -> FieldType<S, Name>
    where
        S: Field<Name>,
    {
        mem::replace(S::field_mut(&mut self.values), value)
    }

    /// Declared position of `Name`.
    pub const fn index_of<Name>() -> usize
    where
        S: IndexOf<Name>,
    {
        <S as IndexOf<Name>>::INDEX
    }

    /// Whether a slot is named `Name`. Never fails to compile.
    pub const fn contains<Name>() -> bool
    where
        S: Contains<Name>,
    {
        <S as Contains<Name>>::VALUE
    }

    /// Declared position of the slot whose name equals `name`, if any.
    pub fn position(name: &str) -> Option<usize> {
        S::position_of(name)
    }

    /// Call `f(index, name)` for every slot, in declaration order.
    pub fn for_each_name<F: FnMut(usize, &dyn fmt::Display)>(f: F) {
        S::for_each_name(f)
    }
}

/// Shared reference to the slot named `Name`, as a free function.
#[inline(always)]
pub fn get<Name, S>(tuple: &NamedTuple<S>) -> &FieldType<S, Name>
where
    S: UniqueSlots + Field<Name>,
{
    tuple.get::<Name>()
}

/// Mutable reference to the slot named `Name`, as a free function.
#[inline(always)]
pub fn get_mut<Name, S>(tuple: &mut NamedTuple<S>) -> &mut FieldType<S, Name>
where
    S: UniqueSlots + Field<Name>,
{
    tuple.get_mut::<Name>()
}

// =============================================================================
// Access by position
// =============================================================================

impl<S: UniqueSlots> NamedTuple<S> {
    /// Shared reference to the slot at position `I`.
    #[inline(always)]
    pub fn at<const I: usize>(&self) -> &ElementType<Self, I>
    where
        Self: Element<I>,
    {
        <Self as Element<I>>::element(self)
    }

    /// Mutable reference to the slot at position `I`.
    #[inline(always)]
    pub fn at_mut<const I: usize>(&mut self) -> &mut ElementType<Self, I>
    where
        Self: Element<I>,
    {
        <Self as Element<I>>::element_mut(self)
    }

    /// Consume the aggregate, keeping only the slot at position `I`.
    #[inline(always)]
    pub fn into_at<const I: usize>(self) -> ElementType<Self, I>
    where
        Self: Element<I>,
    {
        <Self as Element<I>>::into_element(self)
    }
}

// =============================================================================
// Whole-aggregate views
// =============================================================================

impl<S: UniqueSlots> NamedTuple<S> {
    /// The values as a std tuple, in declaration order.
    pub fn into_tuple(self) -> <S::Values as List>::AsTuple
    where
        S::Values: List,
    {
        self.values.into_tuple()
    }

    /// A std tuple of references to each value, for destructuring in place.
    pub fn as_tuple(&self) -> <S::Values as List>::Refs<'_>
    where
        S::Values: List,
    {
        self.values.as_refs()
    }

    /// A std tuple of mutable references to each value.
    pub fn as_tuple_mut(&mut self) -> <S::Values as List>::Muts<'_>
    where
        S::Values: List,
    {
        self.values.as_muts()
    }

    pub fn into_values(self) -> S::Values {
        self.values
    }

    pub const fn values(&self) -> &S::Values {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut S::Values {
        &mut self.values
    }
}

// =============================================================================
// Tuple protocol
// =============================================================================

impl<S: UniqueSlots> Arity for NamedTuple<S> {
    const ARITY: usize = S::ARITY;
}

impl<S, const I: usize> Element<I> for NamedTuple<S>
where
    S: UniqueSlots,
    S::Values: Element<I>,
{
    type Type = <S::Values as Element<I>>::Type;

    #[inline(always)]
    fn element(&self) -> &Self::Type {
        <S::Values as Element<I>>::element(&self.values)
    }

    #[inline(always)]
    fn element_mut(&mut self) -> &mut Self::Type {
        <S::Values as Element<I>>::element_mut(&mut self.values)
    }

    #[inline(always)]
    fn into_element(self) -> Self::Type {
        <S::Values as Element<I>>::into_element(self.values)
    }
}

// =============================================================================
// Value semantics
// =============================================================================

impl<S> Clone for NamedTuple<S>
where
    S: UniqueSlots,
    S::Values: Clone,
{
    fn clone(&self) -> Self {
        NamedTuple { values: self.values.clone() }
    }
}

impl<S> Copy for NamedTuple<S>
where
    S: UniqueSlots,
    S::Values: Copy,
{
}

impl<S> Default for NamedTuple<S>
where
    S: UniqueSlots,
    S::Values: Default,
{
    fn default() -> Self {
        NamedTuple { values: S::Values::default() }
    }
}

impl<S> Hash for NamedTuple<S>
where
    S: UniqueSlots,
    S::Values: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}

impl<S> fmt::Debug for NamedTuple<S>
where
    S: UniqueSlots + DebugSlots,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        S::debug_entries(&self.values, &mut map);
        map.finish()
    }
}
