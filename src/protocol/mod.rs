//! # Layer 5: Tuple Protocol
//!
//! The generic-tuple surface shared by std tuples, cons lists and
//! [`NamedTuple`](crate::NamedTuple):
//! - `element.rs`: `Arity` (element count) and `Element<I>` (element type and
//!   positional extraction).
//! - `convert.rs`: `Tuple` / `List`, conversion between flat tuples and cons
//!   lists, and the std tuple impls up to arity 16.
//!
//! ```
//! use named_tuple::protocol::{Arity, Element};
//!
//! fn first_and_count<T: Arity + Element<0>>(t: &T) -> (&T::Type, usize) {
//!     (t.element(), T::ARITY)
//! }
//!
//! assert_eq!(first_and_count(&(7, "x")), (&7, 2));
//! ```

pub mod element;
pub mod convert;

pub use element::{Arity, Element, ElementType};
pub use convert::{List, Tuple};
