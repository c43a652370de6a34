//! Declarative macros.
//!
//! - `tags!`: declare reusable tag aliases.
//! - `for_each_arity!` (internal): instantiate a per-arity macro for std
//!   tuples of arity 0 through 16.

// =============================================================================
// tags! - name a set of tags once
// =============================================================================

/// Declare a type alias for each tag, in `UpperCamelCase`.
///
/// # Usage
///
/// ```
/// use named_tuple::{named_tuple, tag, tags};
///
/// tags! { user_id, display_name }
/// // type UserId = tag!(user_id);
/// // type DisplayName = tag!(display_name);
///
/// let row: named_tuple![user_id: u64, display_name: &str] = (7, "seven").into();
/// assert_eq!(*row.get::<UserId>(), 7);
/// assert_eq!(*row.get::<DisplayName>(), "seven");
/// ```
///
/// A visibility may precede the list: `tags! { pub(crate) user_id }`.
#[macro_export]
macro_rules! tags {
    ($vis:vis $($name:ident),* $(,)?) => {
        $crate::paste::paste! {
            $(
                #[doc = concat!("Tag `", stringify!($name), "`.")]
                #[allow(dead_code)]
                $vis type [<$name:camel>] = $crate::tag!($name);
            )*
        }
    };
}

// =============================================================================
// for_each_arity! - std tuple impls
// =============================================================================

// Calls `$m!(A a 0, B b 1, ..)` once per arity: type parameter, binding
// name, field index.
macro_rules! for_each_arity {
    ($m:ident) => {
        $m!();
        $m!(A a 0);
        $m!(A a 0, B b 1);
        $m!(A a 0, B b 1, C c 2);
        $m!(A a 0, B b 1, C c 2, D d 3);
        $m!(A a 0, B b 1, C c 2, D d 3, E e 4);
        $m!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5);
        $m!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6);
        $m!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7);
        $m!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7, I i 8);
        $m!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7, I i 8, J j 9);
        $m!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7, I i 8, J j 9, K k 10);
        $m!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7, I i 8, J j 9, K k 10, L l 11);
        $m!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7, I i 8, J j 9, K k 10, L l 11, M m 12);
        $m!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7, I i 8, J j 9, K k 10, L l 11, M m 12, N n 13);
        $m!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7, I i 8, J j 9, K k 10, L l 11, M m 12, N n 13, O o 14);
        $m!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7, I i 8, J j 9, K k 10, L l 11, M m 12, N n 13, O o 14, P p 15);
    };
}
