//! String literal -> type-level byte list.
//!
//! Each byte becomes `Byte<Xh, Xl>` (high and low nibble), chained with
//! `LCons` and terminated by `LNil`:
//!
//! ```text
//! "ab" -> LCons<Byte<X6, X1>, LCons<Byte<X6, X2>, LNil>>
//! ```

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::Ident;

use crate::common::SlotKey;

pub struct TagInput {
    pub key: SlotKey,
}

impl Parse for TagInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: SlotKey = input.parse()?;
        if !input.is_empty() {
            return Err(input.error("expected a single name: `tag!(name)` or `tag!(\"name\")`"));
        }
        Ok(TagInput { key })
    }
}

pub fn expand_tag(input: TagInput) -> TokenStream {
    tag_type(&input.key)
}

/// `::named_tuple::Tag<..>` for a slot key.
pub fn tag_type(key: &SlotKey) -> TokenStream {
    let chars = chars_type(key.name().as_bytes());
    quote! { ::named_tuple::Tag<#chars> }
}

fn chars_type(bytes: &[u8]) -> TokenStream {
    // Built back to front so the nesting comes out in order without recursion.
    let mut list = quote! { ::named_tuple::primitives::LNil };
    for &byte in bytes.iter().rev() {
        let high = nibble_ident(byte >> 4);
        let low = nibble_ident(byte & 0xF);
        list = quote! {
            ::named_tuple::primitives::LCons<
                ::named_tuple::primitives::Byte<
                    ::named_tuple::primitives::#high,
                    ::named_tuple::primitives::#low
                >,
                #list
            >
        };
    }
    list
}

fn nibble_ident(n: u8) -> Ident {
    let mut ident = format_ident!("X{:X}", n);
    ident.set_span(Span::call_site());
    ident
}
