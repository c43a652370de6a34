// Common utilities shared between internal and user-facing macros
//
// - parse_utils: slot keys, `key: value` entries, duplicate detection

mod parse_utils;

pub use parse_utils::*;
