use proc_macro::TokenStream;

/// Renders a `syn::Error` as `compile_error!` invocations.
pub fn to_compile_error(err: syn::Error) -> TokenStream {
    err.to_compile_error().into()
}

/// Creates a `syn::Error` pointing at `tokens`.
pub fn error_spanned<T: quote::ToTokens>(tokens: &T, msg: impl Into<String>) -> syn::Error {
    syn::Error::new_spanned(tokens, msg.into())
}

/// Folds several errors into one so every problem is reported at once.
pub fn combine(errors: impl IntoIterator<Item = syn::Error>) -> Option<syn::Error> {
    errors.into_iter().reduce(|mut acc, err| {
        acc.combine(err);
        acc
    })
}
