//! `named!{..}`: build an aggregate value from `name: expr` pairs.
//!
//! Payload types are left to inference:
//!
//! ```ignore
//! named! { id: 7u32, "label": "x" }
//! // NamedTuple::<HCons<Named<tag!(id), _>, HCons<Named<tag!("label"), _>, HNil>>>
//! //     ::from_values(hlist![7u32, "x"])
//! ```

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Expr, Token};

use crate::common::SlotEntries;
use crate::user::slot_list::build_slot_list;

pub type ConstructInput = SlotEntries<Expr>;

pub fn expand_named(input: ConstructInput) -> syn::Result<TokenStream2> {
    let infer = <Token![_]>::default();
    let slots = build_slot_list(input.entries.iter().map(|e| (&e.key, &infer)))?;

    let mut values = quote! { ::named_tuple::HNil };
    for entry in input.entries.iter().rev() {
        let value = &entry.value;
        values = quote! { ::named_tuple::HCons::new(#value, #values) };
    }

    Ok(quote! {
        ::named_tuple::NamedTuple::<#slots>::from_values(#values)
    })
}
