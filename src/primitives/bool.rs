//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//!
//! Every comparison in the crate (nibble, byte, tag, Peano index) reduces to
//! one of these two types, so lookups can branch on the result through
//! ordinary trait resolution.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;
}

/// Type-level AND as a standalone trait, for use in where clauses.
pub trait BoolAnd<Other: Bool>: Bool {
    type Out: Bool;
}
impl<A: Bool, B: Bool> BoolAnd<B> for A {
    type Out = A::And<B>;
}

/// Type-level OR as a standalone trait, for use in where clauses.
pub trait BoolOr<Other: Bool>: Bool {
    type Out: Bool;
}
impl<A: Bool, B: Bool> BoolOr<B> for A {
    type Out = A::Or<B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truth_tables() {
        assert!(<<Present as BoolAnd<Present>>::Out as Bool>::VALUE);
        assert!(!<<Present as BoolAnd<Absent>>::Out as Bool>::VALUE);
        assert!(!<<Absent as BoolAnd<Present>>::Out as Bool>::VALUE);
        assert!(<<Absent as BoolOr<Present>>::Out as Bool>::VALUE);
        assert!(!<<Absent as BoolOr<Absent>>::Out as Bool>::VALUE);
    }
}
