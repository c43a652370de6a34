//! Construction and shape of named tuples.
//!
//! Every aggregate here is declared with `named_tuple!` (type position) or
//! built with `named!` (expression position).

use std::any::TypeId;

use named_tuple::prelude::*;
use named_tuple::{hlist, ElementType, Named};

fn same_type<T: 'static, U: 'static>() -> bool {
    TypeId::of::<T>() == TypeId::of::<U>()
}

fn type_of_val<T: 'static>(_: &T) -> TypeId {
    TypeId::of::<T>()
}

// =============================================================================
// Arity
// =============================================================================

#[test]
fn test_empty() {
    let nt = <named_tuple![]>::default();
    assert_eq!(nt.size(), 0);
    assert_eq!(<named_tuple![] as Arity>::ARITY, 0);
}

#[test]
fn test_single_slot() {
    type One = named_tuple![key: i32];
    let nt = One::default();
    assert_eq!(nt.size(), 1);
    assert_eq!(*nt.get::<tag!(key)>(), 0);
    assert!(same_type::<ElementType<One, 0>, i32>());
}

#[test]
fn test_eight_slots() {
    type Eight = named_tuple![
        key1: i32, key2: i32, key3: i32, key4: i32,
        key5: i32, key6: i32, key7: i32, key8: i32,
    ];
    assert_eq!(Eight::SIZE, 8);
    assert_eq!(Eight::default().size(), 8);
}

#[test]
fn test_sixteen_slots_round_trip() {
    type Sixteen = named_tuple![
        s0: u8, s1: u8, s2: u8, s3: u8, s4: u8, s5: u8, s6: u8, s7: u8,
        s8: u8, s9: u8, s10: u8, s11: u8, s12: u8, s13: u8, s14: u8, s15: char,
    ];
    let nt = Sixteen::new((0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 'z'));
    assert_eq!(Sixteen::SIZE, 16);
    assert_eq!(*nt.at::<15>(), 'z');
    assert_eq!(*nt.get::<tag!(s10)>(), 10);
    assert_eq!(*nt.get::<tag!(s15)>(), 'z');

    let (a0, _, _, _, _, _, _, a7, _, _, _, _, _, _, _, a15) = nt.into_tuple();
    assert_eq!((a0, a7, a15), (0, 7, 'z'));
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_positional_initialization() {
    type Mixed = named_tuple![
        key1: i32, key2: char, key3: i32, key4: char,
        key5: i32, key6: char, key7: i32, key8: char,
    ];
    let nt = Mixed::new((1, 'a', 3, 'b', 5, 'c', 7, 'd'));

    assert_eq!(*nt.at::<0>(), 1);
    assert_eq!(*nt.at::<1>(), 'a');
    assert_eq!(*nt.at::<2>(), 3);
    assert_eq!(*nt.at::<3>(), 'b');
    assert_eq!(*nt.at::<4>(), 5);
    assert_eq!(*nt.at::<5>(), 'c');
    assert_eq!(*nt.at::<6>(), 7);
    assert_eq!(*nt.at::<7>(), 'd');

    assert_eq!(*nt.get::<tag!(key1)>(), 1);
    assert_eq!(*nt.get::<tag!(key2)>(), 'a');
    assert_eq!(*nt.get::<tag!(key3)>(), 3);
    assert_eq!(*nt.get::<tag!(key4)>(), 'b');
    assert_eq!(*nt.get::<tag!(key5)>(), 5);
    assert_eq!(*nt.get::<tag!(key6)>(), 'c');
    assert_eq!(*nt.get::<tag!(key7)>(), 7);
    assert_eq!(*nt.get::<tag!(key8)>(), 'd');
}

#[test]
fn test_initializers_convert_through_from() {
    let nt: named_tuple![small: u8, wide: i64] = (3u8, -9i64).into();
    assert_eq!(*nt.get::<tag!(small)>(), 3);
    assert_eq!(*nt.get::<tag!(wide)>(), -9);
}

#[test]
fn test_from_value_list() {
    type Pair = named_tuple![a: u8, b: &'static str];
    let nt = Pair::from_values(hlist![1, "b"]);
    assert_eq!(nt.into_tuple(), (1, "b"));
}

#[test]
fn test_default_initialization() {
    let nt = <named_tuple![text: String, count: usize, flag: bool]>::default();
    assert_eq!(nt.get::<tag!(text)>(), "");
    assert_eq!(*nt.get::<tag!(count)>(), 0);
    assert!(!*nt.get::<tag!(flag)>());
}

// =============================================================================
// named! macro
// =============================================================================

#[test]
fn test_named_macro_infers_payload_types() {
    let nt = named! { int_key: 5i32, float_key: 1.0f32, char_key: 'c' };
    assert_eq!(nt.size(), 3);
    assert_eq!(
        type_of_val(&nt),
        TypeId::of::<named_tuple![int_key: i32, float_key: f32, char_key: char]>()
    );
}

#[test]
fn test_named_macro_accepts_string_keys() {
    let nt = named! { "display name": "Ada", id: 7u32 };
    assert_eq!(*nt.get::<tag!("display name")>(), "Ada");
    assert_eq!(*nt.get::<tag!(id)>(), 7);
    assert_eq!(<named_tuple![]>::default(), named! {});
}

#[test]
fn test_identifier_and_literal_keys_are_one_name() {
    assert!(same_type::<named_tuple![key: u8], named_tuple!["key": u8]>());
    assert!(same_type::<tag!(r#type), tag!("type")>());
}

// =============================================================================
// Nesting
// =============================================================================

#[test]
fn test_nested() {
    type Inner = named_tuple![inner: i32];
    type Level2 = named_tuple![nested: Inner];
    type Level3 = named_tuple![nested: Level2];
    type Outer = named_tuple![nested: Level3];

    let mut nt = Outer::default();
    assert_eq!(type_of_val(nt.get::<tag!(nested)>()), TypeId::of::<Level3>());
    assert_eq!(
        type_of_val(nt.get::<tag!(nested)>().get::<tag!(nested)>()),
        TypeId::of::<Level2>()
    );

    *nt.get_mut::<tag!(nested)>()
        .get_mut::<tag!(nested)>()
        .get_mut::<tag!(nested)>()
        .get_mut::<tag!(inner)>() = 9;

    let inner = nt
        .into_field::<tag!(nested)>()
        .into_field::<tag!(nested)>()
        .into_field::<tag!(nested)>()
        .into_field::<tag!(inner)>();
    assert_eq!(inner, 9);
}

// =============================================================================
// Many distinct payload types
// =============================================================================

type Everything = named_tuple![
    bool: bool,
    int8_t: i8,
    int16_t: i16,
    int32_t: i32,
    int64_t: i64,
    uint8_t: u8,
    uint16_t: u16,
    uint32_t: u32,
    uint64_t: u64,
    float: f32,
    double: f64,
    string: String,
];

#[test]
fn test_distinct_types_resolve_exactly() {
    let nt = Everything::default();
    assert_eq!(type_of_val(nt.get::<tag!(bool)>()), TypeId::of::<bool>());
    assert_eq!(type_of_val(nt.get::<tag!(int8_t)>()), TypeId::of::<i8>());
    assert_eq!(type_of_val(nt.get::<tag!(int16_t)>()), TypeId::of::<i16>());
    assert_eq!(type_of_val(nt.get::<tag!(int32_t)>()), TypeId::of::<i32>());
    assert_eq!(type_of_val(nt.get::<tag!(int64_t)>()), TypeId::of::<i64>());
    assert_eq!(type_of_val(nt.get::<tag!(uint8_t)>()), TypeId::of::<u8>());
    assert_eq!(type_of_val(nt.get::<tag!(uint16_t)>()), TypeId::of::<u16>());
    assert_eq!(type_of_val(nt.get::<tag!(uint32_t)>()), TypeId::of::<u32>());
    assert_eq!(type_of_val(nt.get::<tag!(uint64_t)>()), TypeId::of::<u64>());
    assert_eq!(type_of_val(nt.get::<tag!(float)>()), TypeId::of::<f32>());
    assert_eq!(type_of_val(nt.get::<tag!(double)>()), TypeId::of::<f64>());
    assert_eq!(type_of_val(nt.get::<tag!(string)>()), TypeId::of::<String>());
}

#[test]
fn test_distinct_types_preserve_values() {
    let nt = Everything::new((
        true,
        -8i8,
        -16i16,
        -32i32,
        -64i64,
        8u8,
        16u16,
        32u32,
        64u64,
        0.5f32,
        0.25f64,
        String::from("twelve"),
    ));
    assert!(*nt.get::<tag!(bool)>());
    assert_eq!(*nt.get::<tag!(int8_t)>(), -8);
    assert_eq!(*nt.get::<tag!(int16_t)>(), -16);
    assert_eq!(*nt.get::<tag!(int32_t)>(), -32);
    assert_eq!(*nt.get::<tag!(int64_t)>(), -64);
    assert_eq!(*nt.get::<tag!(uint8_t)>(), 8);
    assert_eq!(*nt.get::<tag!(uint16_t)>(), 16);
    assert_eq!(*nt.get::<tag!(uint32_t)>(), 32);
    assert_eq!(*nt.get::<tag!(uint64_t)>(), 64);
    assert_eq!(*nt.get::<tag!(float)>(), 0.5);
    assert_eq!(*nt.get::<tag!(double)>(), 0.25);
    assert_eq!(nt.get::<tag!(string)>(), "twelve");
}

// =============================================================================
// Descriptor identity
// =============================================================================

#[test]
fn test_descriptor_needles() {
    type Row = named_tuple![id: u32, name: &'static str];
    let row = Row::new((1, "one"));
    // A full descriptor resolves by its tag alone.
    assert_eq!(*row.get::<Named<tag!(name), ()>>(), "one");
    assert_eq!(Row::index_of::<Named<tag!(name), u64>>(), 1);
}
