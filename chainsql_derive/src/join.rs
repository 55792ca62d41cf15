use darling::{FromDeriveInput, FromVariant, ast};
use heck::ToSnakeCase;
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, parse_macro_input};

#[derive(Debug, FromDeriveInput)]
#[darling(supports(enum_unit))]
struct JoinDeriveInput {
    ident: syn::Ident,
    data: ast::Data<JoinVariant, ()>,
}

#[derive(Debug, FromVariant)]
#[darling(attributes(join))]
struct JoinVariant {
    ident: syn::Ident,
    /// Overrides the generated `<variant>_join` method name.
    #[darling(default)]
    method: Option<String>,
    #[darling(default)]
    ignore: bool,
}

pub fn join_methods_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_info = match JoinDeriveInput::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return e.write_errors().into(),
    };

    let enum_name = &enum_info.ident;
    let variants = enum_info.data.take_enum().unwrap_or_default();

    let methods = variants.iter().filter_map(|var| {
        if var.ignore {
            return None;
        }

        let var_name = &var.ident;
        let method = match var.method {
            Some(ref name) => format_ident!("{}", name),
            None => format_ident!("{}_join", var_name.to_string().to_snake_case()),
        };
        let doc = format!(
            "Appends a join on `table` using the `{enum_name}::{var_name}` keyword, followed by `ON on`."
        );

        Some(quote! {
            #[doc = #doc]
            pub fn #method(self, table: &str, on: &str) -> Self {
                self.join_clause(#enum_name::#var_name, table, on)
            }
        })
    });

    quote! {
        impl crate::Query {
            #(#methods)*
        }
    }
    .into()
}
