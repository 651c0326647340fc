use proc_macro2::TokenStream;
use quote::quote;

/// Quote an `Option`, applying the transform to the inner value when present.
pub fn quote_option<T, F>(opt: Option<&T>, transform: F) -> TokenStream
where
    T: ?Sized,
    F: FnOnce(&T) -> TokenStream,
{
    if let Some(v) = opt {
        let transformed = transform(v);
        quote!(Some(#transformed))
    } else {
        quote!(None)
    }
}

/// Convert a string into a string literal token.
pub fn to_str_lit(s: &str) -> TokenStream {
    quote!(#s)
}
