// Internal generators used by the library crate itself
//
// - positions: Element<I> impls for cons lists
// - literal: string -> type-level byte list (shared with tag!)

pub mod positions;
pub mod literal;
