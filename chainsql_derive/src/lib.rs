use proc_macro::TokenStream;

mod bindable;
mod join;

#[proc_macro_derive(JoinMethods, attributes(join))]
pub fn join_methods(input: TokenStream) -> TokenStream {
    join::join_methods_impl(input)
}

#[proc_macro_derive(Bindable, attributes(bindable))]
pub fn bindable_derive(input: TokenStream) -> TokenStream {
    bindable::bindable_derive_impl(input)
}
