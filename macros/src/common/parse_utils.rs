//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use std::collections::HashSet;

use proc_macro2::Span;
use syn::{
    ext::IdentExt,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Ident, LitStr, Token,
};

// =============================================================================
// Slot keys: `name` or `"name"`
// =============================================================================

/// A slot name as written by the user.
///
/// Identifiers (keywords included, raw prefix stripped) and string literals
/// spell the same tag: `key` and `"key"` are one name.
#[derive(Clone)]
pub enum SlotKey {
    Ident(Ident),
    Str(LitStr),
}

impl SlotKey {
    pub fn name(&self) -> String {
        match self {
            SlotKey::Ident(ident) => ident.unraw().to_string(),
            SlotKey::Str(lit) => lit.value(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            SlotKey::Ident(ident) => ident.span(),
            SlotKey::Str(lit) => lit.span(),
        }
    }
}

impl Parse for SlotKey {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(LitStr) {
            Ok(SlotKey::Str(input.parse()?))
        } else if input.peek(Ident::peek_any) {
            Ok(SlotKey::Ident(input.call(Ident::parse_any)?))
        } else {
            Err(input.error("expected a slot name: an identifier or a string literal"))
        }
    }
}

// =============================================================================
// Slot entries: `key: V`
// =============================================================================

/// One `key: value` pair, where the value is a type or an expression.
pub struct SlotEntry<V> {
    pub key: SlotKey,
    pub value: V,
}

impl<V: Parse> Parse for SlotEntry<V> {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: SlotKey = input.parse()?;
        input.parse::<Token![:]>()?;
        let value: V = input.parse()?;
        Ok(SlotEntry { key, value })
    }
}

/// Comma-separated `key: V` entries, trailing comma allowed.
pub struct SlotEntries<V> {
    pub entries: Vec<SlotEntry<V>>,
}

impl<V: Parse> Parse for SlotEntries<V> {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let entries = parse_comma_separated(input)?;
        Ok(SlotEntries { entries })
    }
}

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse a comma-separated list of items
pub fn parse_comma_separated<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let items = Punctuated::<T, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().collect())
}

// =============================================================================
// Duplicate detection
// =============================================================================

/// Reject a key list in which any name appears twice.
///
/// The error points at the second occurrence; all repeats are reported.
pub fn check_duplicates<'a>(keys: impl IntoIterator<Item = &'a SlotKey>) -> syn::Result<()> {
    let mut seen = HashSet::new();
    let mut errors: Option<syn::Error> = None;

    for key in keys {
        let name = key.name();
        if !seen.insert(name.clone()) {
            let err = syn::Error::new(
                key.span(),
                format!(
                    "duplicate slot name `{}`\n\
                     \n\
                     Each name may appear only once in a named tuple.",
                    name
                ),
            );
            match errors.as_mut() {
                Some(all) => all.combine(err),
                None => errors = Some(err),
            }
        }
    }

    match errors {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
