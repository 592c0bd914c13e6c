//! Procedural macros behind `typerel::labels!`.
//!
//! A field label has to compare equal to every other label with the same
//! name, wherever it was declared. `label_id!` spells the name out as a
//! type-level list of bytes, so the id depends on nothing but the name.

use proc_macro::TokenStream;
use proc_macro2::{TokenStream as TokenStream2, TokenTree};
use quote::quote;
use syn::{ext::IdentExt, Ident};

/// Expands `label_id!(path::to::typerel; name)` to the type-level spelling
/// of `name`.
///
/// The leading path is how the generated type names the `typerel` crate;
/// `labels!` passes `$crate` here.
#[proc_macro]
pub fn label_id(input: TokenStream) -> TokenStream {
    match expand(input.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: TokenStream2) -> syn::Result<TokenStream2> {
    let mut tokens = input.into_iter();
    let mut krate = TokenStream2::new();
    for tt in tokens.by_ref() {
        match &tt {
            TokenTree::Punct(p) if p.as_char() == ';' => break,
            _ => krate.extend(Some(tt)),
        }
    }
    let label: Ident = syn::parse2(tokens.collect())?;
    Ok(spell(&krate, &label.unraw().to_string()))
}

fn spell(krate: &TokenStream2, name: &str) -> TokenStream2 {
    let mut id = quote!(#krate::id::End);
    for byte in name.bytes().rev() {
        let bits = (0..8).rev().map(|i| {
            if (byte >> i) & 1 == 1 {
                quote!(#krate::logic::True)
            } else {
                quote!(#krate::logic::False)
            }
        });
        id = quote!(#krate::id::Chars<#krate::id::Byte<#(#bits),*>, #id>);
    }
    id
}
