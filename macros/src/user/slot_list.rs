//! `named_tuple![..]`: spell an aggregate type from `name: Type` pairs.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::Type;

use crate::common::{check_duplicates, SlotEntries, SlotKey};
use crate::inner::literal::tag_type;

pub type SlotListInput = SlotEntries<Type>;

pub fn expand_named_tuple(input: SlotListInput) -> syn::Result<TokenStream2> {
    let slots = build_slot_list(input.entries.iter().map(|e| (&e.key, &e.value)))?;
    Ok(quote! { ::named_tuple::NamedTuple<#slots> })
}

/// `HCons<Named<tag, T>, ..., HNil>` for the given (key, payload) pairs.
///
/// `payload` is any type-position token stream, including `_`.
pub fn build_slot_list<'a, P>(
    slots: impl DoubleEndedIterator<Item = (&'a SlotKey, P)> + Clone,
) -> syn::Result<TokenStream2>
where
    P: quote::ToTokens,
{
    check_duplicates(slots.clone().map(|(key, _)| key))?;

    let mut list = quote! { ::named_tuple::HNil };
    for (key, payload) in slots.rev() {
        let tag = tag_type(key);
        list = quote! {
            ::named_tuple::HCons<::named_tuple::Named<#tag, #payload>, #list>
        };
    }
    Ok(list)
}
