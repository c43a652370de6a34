//! Positional `Element<I>` impls for cons lists.
//!
//! A const generic cannot be decremented in a where clause on stable Rust, so
//! each index gets its own impl delegating to the tail at `I - 1`.

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, LitInt};

pub struct PositionsInput {
    pub max: usize,
}

impl Parse for PositionsInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        if max == 0 {
            return Err(syn::Error::new(lit.span(), "expected a maximum index of at least 1"));
        }
        Ok(PositionsInput { max })
    }
}

/// `impl Element<i> for HCons<H, T> where T: Element<i - 1>` for `i` in `1..=max`.
///
/// Expects `Element` and `HCons` in scope at the call site.
pub fn expand_positions(input: PositionsInput) -> TokenStream {
    let impls = (1..=input.max).map(|i| {
        let curr = Literal::usize_unsuffixed(i);
        let prev = Literal::usize_unsuffixed(i - 1);
        quote! {
            impl<H, T> Element<#curr> for HCons<H, T>
            where
                T: Element<#prev>,
            {
                type Type = <T as Element<#prev>>::Type;

                #[inline(always)]
                fn element(&self) -> &Self::Type {
                    <T as Element<#prev>>::element(&self.tail)
                }

                #[inline(always)]
                fn element_mut(&mut self) -> &mut Self::Type {
                    <T as Element<#prev>>::element_mut(&mut self.tail)
                }

                #[inline(always)]
                fn into_element(self) -> Self::Type {
                    <T as Element<#prev>>::into_element(self.tail)
                }
            }
        }
    });

    quote! { #(#impls)* }
}
