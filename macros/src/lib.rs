//! Procedural macros for the named-tuple crate
//!
//! | Macro | Position | Purpose |
//! |-------|----------|---------|
//! | `tag!` | type | Lift a name into a `Tag` type |
//! | `named_tuple!` | type | Spell a `NamedTuple` type from `name: Type` pairs |
//! | `named!` | expression | Build a `NamedTuple` value from `name: value` pairs |
//!
//! ## Example
//!
//! ```ignore
//! type Point = named_tuple![x: i32, y: i32];
//!
//! let p: Point = named! { x: 1, y: 2 };
//! assert_eq!(*p.get::<tag!(x)>(), 1);
//! ```
//!
//! All expansions refer to the library as `::named_tuple`.

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod inner;
mod common;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate `Element<1..=n>` impls for `HCons`.
///
/// # Usage
/// ```ignore
/// impl<H, T> Element<0> for HCons<H, T> { .. }  // written by hand
/// positions!(63);                               // Element<1> ..= Element<63>
/// ```
#[proc_macro]
pub fn positions(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::positions::PositionsInput);
    inner::positions::expand_positions(input).into()
}

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// A compile-time name as a type.
///
/// # Usage
/// ```ignore
/// type Key = tag!(key);     // identifier
/// type Key2 = tag!("key");  // same type
/// type Odd = tag!("two words");
/// ```
#[proc_macro]
pub fn tag(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::literal::TagInput);
    inner::literal::expand_tag(input).into()
}

/// A `NamedTuple` type from `name: Type` pairs.
///
/// # Usage
/// ```ignore
/// type Row = named_tuple![id: u64, "display name": String];
/// type Unit = named_tuple![];
/// ```
///
/// Repeating a name is an error spanned on the repeat.
#[proc_macro]
pub fn named_tuple(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::SlotListInput);
    user::expand_named_tuple(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// A `NamedTuple` value from `name: value` pairs, payload types inferred.
///
/// # Usage
/// ```ignore
/// let row = named! { id: 7u64, "display name": String::from("seven") };
/// ```
#[proc_macro]
pub fn named(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::ConstructInput);
    user::expand_named(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
