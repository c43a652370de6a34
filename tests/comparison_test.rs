//! Equality and ordering.
//!
//! Between two named tuples, slots are matched by name; the left side's
//! declaration order drives lexicographic ordering. Against a plain tuple the
//! comparison is positional.

use std::cmp::Ordering;

use named_tuple::prelude::*;

type Forward = named_tuple![k1: i32, k2: i32, k3: i32];
type Backward = named_tuple![k3: i32, k2: i32, k1: i32];

// =============================================================================
// Equality between named tuples
// =============================================================================

#[test]
fn test_empty_equal() {
    let nt1 = <named_tuple![]>::default();
    let nt2 = <named_tuple![]>::default();
    assert!(nt1 == nt2);
    assert_eq!(nt1.partial_cmp(&nt2), Some(Ordering::Equal));
    assert_eq!(nt1.cmp(&nt2), Ordering::Equal);
}

#[test]
fn test_same_declaration_order() {
    assert_eq!(Forward::new((1, 2, 3)), Forward::new((1, 2, 3)));
    assert_ne!(Forward::new((1, 2, 3)), Forward::new((1, 2, 4)));
}

#[test]
fn test_equality_ignores_declaration_order() {
    let a = Forward::new((1, 2, 3));
    let b = Backward::new((3, 2, 1));
    assert!(a == b);
    assert!(b == a);
}

#[test]
fn test_equality_is_by_name_not_position() {
    // Positionally identical, but every name maps to a different value.
    let a = Forward::new((1, 2, 3));
    let b = Backward::new((1, 2, 3));
    assert!(a != b);
    assert!(b != a);
}

#[test]
fn test_equality_across_payload_types() {
    let owned = <named_tuple![name: String, id: u32]>::new((String::from("x"), 1));
    let borrowed = <named_tuple![id: u32, name: &str]>::new((1, "x"));
    assert!(owned == borrowed);
}

// =============================================================================
// Ordering between named tuples
// =============================================================================

#[test]
fn test_ordering_by_name() {
    let a = Forward::new((1, 1, 1));
    let b = Forward::new((2, 2, 2));
    assert!(a < b);

    // Same values declared in reverse: `a` still drives the comparison.
    let reordered = Backward::new((2, 2, 2));
    assert!(a < reordered);
    assert!(reordered > a);
}

#[test]
fn test_ordering_follows_left_declaration_order() {
    // k1 decides for Forward, k3 decides for Backward.
    let forward = Forward::new((1, 0, 9));
    let backward = Backward::new((0, 0, 2));

    assert_eq!(forward.partial_cmp(&backward), Some(Ordering::Less));
    assert_eq!(backward.partial_cmp(&forward), Some(Ordering::Less));
}

#[test]
fn test_ordering_short_circuits() {
    let a = Forward::new((1, 5, 0));
    let b = Forward::new((1, 4, 9));
    assert!(a > b);
    assert_eq!(a.cmp(&b), Ordering::Greater);
}

#[test]
fn test_partial_order_with_unordered_slot() {
    type Measure = named_tuple![value: f64, unit: char];
    let nan = Measure::new((f64::NAN, 'm'));
    let one = Measure::new((1.0, 'm'));
    assert_eq!(nan.partial_cmp(&one), None);
    assert!(!(nan < one));
    assert!(!(nan > one));
    assert!(nan != one);
}

#[test]
fn test_mixed_order_categories() {
    // A total-order slot before a partial-order slot: the first decides.
    type Mixed = named_tuple![rank: u8, score: f32];
    let a = Mixed::new((1, f32::NAN));
    let b = Mixed::new((2, 0.0));
    assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));

    let c = Mixed::new((1, 0.0));
    assert_eq!(a.partial_cmp(&c), None);
}

#[test]
fn test_sort_uses_total_order() {
    type Entry = named_tuple![priority: u8, label: &'static str];
    let mut entries = vec![
        Entry::new((2, "b")),
        Entry::new((1, "z")),
        Entry::new((2, "a")),
    ];
    entries.sort();
    let labels: Vec<_> = entries.iter().map(|e| *e.get::<tag!(label)>()).collect();
    assert_eq!(labels, ["z", "a", "b"]);
}

// =============================================================================
// Against plain tuples
// =============================================================================

#[test]
fn test_tuple_equality_is_positional() {
    let a = Forward::new((1, 2, 3));
    let b = Backward::new((1, 2, 3));
    // Different names, same positions: both equal the same plain tuple.
    assert!(a == (1, 2, 3));
    assert!(b == (1, 2, 3));
    assert!(a != (3, 2, 1));
}

#[test]
fn test_tuple_ordering_is_positional() {
    let b = Backward::new((1, 2, 3));
    assert!(b < (1, 2, 4));
    assert!(b > (0, 9, 9));
    assert_eq!(b.partial_cmp(&(1, 2, 3)), Some(Ordering::Equal));
}

#[test]
fn test_tuple_comparison_across_types() {
    let nt = <named_tuple![name: String, n: i64]>::new((String::from("x"), 4));
    assert!(nt == ("x", 4i64));
}

#[test]
fn test_empty_against_unit() {
    let nt = <named_tuple![]>::default();
    assert!(nt == ());
    assert_eq!(nt.partial_cmp(&()), Some(Ordering::Equal));
}
