// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Derive macros for aviation weather decode tables.
//!
//! This crate allows to `derive` a `Code` implementation on a field-less enum
//! and implements `Display` with the decoded description too.
//!
//! # Example
//!
//! Deriving the table of cloud coverages:
//!
//! ```ignore
//! #[derive(Code)]
//! pub enum Coverage {
//!     #[code(abbr = "FEW", desc = "Few")]
//!     Few,
//!     #[code(abbr = "SCT", desc = "Scattered")]
//!     Scattered,
//! }
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr, Variant};

struct CodeAttribute {
    abbr: LitStr,
    desc: LitStr,
}

fn parse_variant_attributes(variant: &Variant) -> syn::Result<CodeAttribute> {
    let mut abbr: Option<LitStr> = None;
    let mut desc: Option<LitStr> = None;

    for attr in &variant.attrs {
        if !attr.path().is_ident("code") {
            continue;
        }

        // Handle #[code(abbr = "..", desc = "..")]
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("abbr") {
                abbr = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("desc") {
                desc = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `abbr` or `desc`"))
            }
        })?;
    }

    match (abbr, desc) {
        (Some(abbr), Some(desc)) => Ok(CodeAttribute { abbr, desc }),
        _ => Err(syn::Error::new_spanned(
            &variant.ident,
            "variant needs #[code(abbr = \"..\", desc = \"..\")]",
        )),
    }
}

/// Derive macro for implementing the `Code` trait.
///
/// Generates the `Code` trait implementation and a `Display` implementation
/// that writes the description.
#[proc_macro_derive(Code, attributes(code))]
pub fn derive_code(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return syn::Error::new_spanned(name, "Code derive only supports enums")
                .to_compile_error()
                .into()
        }
    };

    let mut idents = Vec::new();
    let mut abbrs = Vec::new();
    let mut descs = Vec::new();

    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new_spanned(variant, "Code derive only supports unit variants")
                .to_compile_error()
                .into();
        }

        match parse_variant_attributes(variant) {
            Ok(CodeAttribute { abbr, desc }) => {
                idents.push(&variant.ident);
                abbrs.push(abbr);
                descs.push(desc);
            }
            Err(err) => return err.to_compile_error().into(),
        }
    }

    let expanded = quote! {
        impl #impl_generics crate::tables::Code for #name #ty_generics #where_clause {
            const ALL: &'static [Self] = &[#(Self::#idents),*];

            fn code(&self) -> &'static str {
                match self {
                    #(Self::#idents => #abbrs),*
                }
            }

            fn description(&self) -> &'static str {
                match self {
                    #(Self::#idents => #descs),*
                }
            }
        }

        impl #impl_generics ::core::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<Self as crate::tables::Code>::description(self))
            }
        }
    };

    TokenStream::from(expanded)
}
