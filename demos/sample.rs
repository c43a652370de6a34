//! Named Tuple Walkthrough
//!
//! Build a named tuple holding a reference, write through every slot by name,
//! then read it back by name, by position and by destructuring.

use named_tuple::{get, named, tag, Element};

fn main() {
    let mut i = 5;
    let mut nt = named! { int_key: &mut i, float_key: 1.0f32, char_key: 'c' };

    // =========================================================================
    // Write by name
    // =========================================================================

    // `int_key` holds `&mut i`: this writes to `i`.
    **nt.get_mut::<tag!(int_key)>() = 42;
    nt.set::<tag!(float_key)>(0.3f32);
    nt.set::<tag!(char_key)>('g');

    // =========================================================================
    // Read by name
    // =========================================================================

    println!("{}", nt.get::<tag!(int_key)>());
    println!("{}", nt.get::<tag!(float_key)>());
    println!("{}", nt.get::<tag!(char_key)>());

    println!("{}", get::<tag!(int_key), _>(&nt));
    println!("{}", get::<tag!(float_key), _>(&nt));
    println!("{}", get::<tag!(char_key), _>(&nt));

    // =========================================================================
    // Read by position
    // =========================================================================

    println!("{}", nt.at::<0>());
    println!("{}", nt.at::<1>());
    println!("{}", Element::<2>::element(&nt));

    // =========================================================================
    // Destructure
    // =========================================================================

    let (int_key, float_key, char_key) = nt.as_tuple_mut();
    **int_key += 1;
    *float_key *= 2.0;
    *char_key = 'h';
    println!("{int_key}");
    println!("{float_key}");
    println!("{char_key}");

    println!("{nt:?}");
    println!("i = {i}");
}
