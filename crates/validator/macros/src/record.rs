use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use std::collections::HashSet;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, LitStr, Member, Type, parse_macro_input, parse_quote};

use crate::support::{attrs, diag};

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

/// A field visible to lookups.
struct RecordField {
    /// Name the field is looked up by.
    name: LitStr,
    member: Member,
    ty: Type,
}

fn collect_fields(fields: &Fields) -> syn::Result<Vec<RecordField>> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let field_attrs = match attrs::parse_field_attrs(&field.attrs) {
            Ok(parsed) => parsed,
            Err(err) => {
                errors.push(err);
                continue;
            }
        };
        if field_attrs.skip {
            continue;
        }

        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(index.into()),
        };
        let name = field_attrs.rename.unwrap_or_else(|| {
            let text = match &field.ident {
                Some(ident) => ident.unraw().to_string(),
                None => index.to_string(),
            };
            LitStr::new(&text, Span::call_site())
        });

        if !seen.insert(name.value()) {
            errors.push(diag::error_spanned(
                field,
                format!("duplicate record field name `{}`", name.value()),
            ));
            continue;
        }

        out.push(RecordField {
            name,
            member,
            ty: field.ty.clone(),
        });
    }

    match diag::combine(errors) {
        Some(err) => Err(err),
        None => Ok(out),
    }
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => collect_fields(&data.fields)?,
        _ => {
            return Err(syn::Error::new(
                input.ident.span(),
                "Record can only be derived for structs",
            ));
        }
    };

    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        let where_clause = generics.make_where_clause();
        for field in &fields {
            let ty = &field.ty;
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::condval::value::Inspect));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let names = fields.iter().map(|f| &f.name);
    let members: Vec<&Member> = fields.iter().map(|f| &f.member).collect();

    let expanded = quote! {
        impl #impl_generics ::condval::value::Record for #struct_name #ty_generics #where_clause {
            fn field_by_name(
                &self,
                name: &str,
            ) -> ::core::option::Option<::condval::value::FieldValue<'_>> {
                match name {
                    #(
                        #names => ::core::option::Option::Some(
                            ::condval::value::Inspect::field_value(&self.#members),
                        ),
                    )*
                    _ => ::core::option::Option::None,
                }
            }

            fn is_zero(&self) -> bool {
                true #(&& ::condval::value::Inspect::field_value(&self.#members).is_zero())*
            }
        }

        impl #impl_generics ::condval::value::Inspect for #struct_name #ty_generics #where_clause {
            fn field_value(&self) -> ::condval::value::FieldValue<'_> {
                ::condval::value::FieldValue::Record(self)
            }
        }
    };

    Ok(expanded)
}
