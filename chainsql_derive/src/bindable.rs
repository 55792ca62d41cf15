use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Error, Fields, Ident, parse_macro_input};

/// Generates `From<T>` and `IntoBind` for every single-field variant of the bind enum.
///
/// Attributes on a variant (`#[cfg(feature = "...")]` mostly) are copied onto the
/// generated impls so feature gated variants stay feature gated.
pub fn bindable_derive_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;

    let variants = match &input.data {
        Data::Enum(e) => &e.variants,
        _ => {
            return Error::new_spanned(
                &input.ident,
                "`#[derive(Bindable)]` can only be applied to enums",
            )
            .to_compile_error()
            .into();
        }
    };

    let mut impls = Vec::with_capacity(variants.len() * 2 + 1);

    for variant in variants {
        if variant.attrs.iter().any(is_bindable_ignore) {
            continue;
        }

        let var_ident = &variant.ident;
        let forwarded: Vec<&Attribute> = variant
            .attrs
            .iter()
            .filter(|attr| !attr.path().is_ident("bindable") && !attr.path().is_ident("doc"))
            .collect();

        let field_ty = match &variant.fields {
            Fields::Unnamed(unnamed) if unnamed.unnamed.len() == 1 => &unnamed.unnamed[0].ty,
            _ => {
                return Error::new_spanned(
                    var_ident,
                    "bindable variants must hold exactly one unnamed field, mark the others with `#[bindable(ignore)]`",
                )
                .to_compile_error()
                .into();
            }
        };

        impls.push(quote! {
            #(#forwarded)*
            impl From<#field_ty> for #enum_name {
                fn from(value: #field_ty) -> Self {
                    #enum_name::#var_ident(value)
                }
            }

            #(#forwarded)*
            impl crate::bind::IntoBind for #field_ty {
                fn into_bind(self) -> #enum_name {
                    #enum_name::#var_ident(self)
                }
            }
        });
    }

    // a bind is trivially bindable so helpers can take `impl IntoBind` everywhere
    impls.push(quote! {
        impl crate::bind::IntoBind for #enum_name {
            fn into_bind(self) -> #enum_name {
                self
            }
        }
    });

    quote! { #(#impls)* }.into()
}

/// Returns true for `#[bindable(ignore)]`.
fn is_bindable_ignore(attr: &Attribute) -> bool {
    if !attr.path().is_ident("bindable") {
        return false;
    }
    matches!(attr.parse_args::<Ident>(), Ok(ident) if ident == "ignore")
}
