use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Data, DeriveInput, Field, Fields, GenericArgument, Ident, PathArguments, PathSegment, Type,
    Variant,
};

/// What the expansion needs to know about one error variant.
struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<&'a Field>,
    has_context: bool,
    has_message: bool,
    field_count: usize,
}

impl<'a> ErrorVariant<'a> {
    fn parse(variant: &'a Variant) -> syn::Result<Self> {
        let Fields::Named(fields) = &variant.fields else {
            return Err(syn::Error::new_spanned(
                variant,
                "codebook_error requires named fields on every variant",
            ));
        };

        let mut has_context = false;
        let mut has_message = false;
        for field in &fields.named {
            let Some(ident) = &field.ident else { continue };
            if ident == "message" {
                has_message = true;
            }
            if ident == "context" {
                if !is_context_type(&field.ty) {
                    return Err(syn::Error::new_spanned(
                        &field.ty,
                        "context field must be Option<Cow<'static, str>>",
                    ));
                }
                has_context = true;
            }
        }

        let source = fields.named.iter().find(|field| is_source_field(field));
        if source.is_some() && !has_context {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "codebook_error requires `context: Option<Cow<'static, str>>` for variants with a source",
            ));
        }

        Ok(Self {
            ident: &variant.ident,
            source,
            has_context,
            has_message,
            field_count: fields.named.len(),
        })
    }

    /// `source` + `context` and nothing else, so `From<Source>` can build it.
    const fn is_pure_wrapper(&self) -> bool {
        self.source.is_some() && self.field_count == 2
    }
}

pub(crate) fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "codebook_error can only be applied to enums",
        ));
    };

    let variants =
        data.variants.iter().map(ErrorVariant::parse).collect::<syn::Result<Vec<_>>>()?;
    check_unique_sources(&variants)?;

    let name = &input.ident;
    let ext = format_ident!("{}Ext", name);

    let derived = derived_traits(&input);
    let mut derives = Vec::new();
    if !derived.contains("Debug") {
        derives.push(quote! { Debug });
    }
    if !derived.contains("Error") {
        derives.push(quote! { ::thiserror::Error });
    }
    let derive_attr = if derives.is_empty() {
        quote! {}
    } else {
        quote! { #[derive(#(#derives),*)] }
    };

    let ext_trait = expand_ext_trait(name, &ext, &variants);
    let from_impls = variants
        .iter()
        .filter(|v| v.ident != "Internal" && v.is_pure_wrapper())
        .map(|v| expand_source_impls(name, &ext, v));
    let internal_impls = expand_internal_impls(name, &variants);

    Ok(quote! {
        #derive_attr
        #input

        #ext_trait
        #(#from_impls)*
        #internal_impls

        #[allow(dead_code, clippy::ref_option)]
        fn format_context(
            context: &Option<::std::borrow::Cow<'static, str>>,
        ) -> ::std::borrow::Cow<'static, str> {
            context.as_ref().map_or(::std::borrow::Cow::Borrowed(""), |c| {
                ::std::borrow::Cow::Owned(format!(" ({c})"))
            })
        }
    })
}

fn expand_ext_trait(name: &Ident, ext: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let ident = v.ident;
        quote! { #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });
    let fallback = if variants.iter().all(|v| v.has_context) {
        quote! {}
    } else {
        quote! { _ => {} }
    };

    quote! {
        /// Attaches a human-readable context to the error carried by a `Result`.
        pub trait #ext<T> {
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::core::result::Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::core::result::Result<T, #name> {
            #[inline]
            #[allow(unused_variables)]
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    match &mut err {
                        #(#arms)*
                        #fallback
                    }
                    err
                })
            }
        }
    }
}

fn expand_source_impls(name: &Ident, ext: &Ident, v: &ErrorVariant<'_>) -> TokenStream {
    let Some(field) = v.source else {
        return quote! {};
    };
    let Some(field_ident) = &field.ident else {
        return quote! {};
    };
    let ty = &field.ty;
    let ident = v.ident;

    quote! {
        #[automatically_derived]
        impl ::core::convert::From<#ty> for #name {
            #[inline]
            fn from(#field_ident: #ty) -> Self {
                Self::#ident { #field_ident, context: None }
            }
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::core::result::Result<T, #ty> {
            #[inline]
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::core::result::Result<T, #name> {
                self.map_err(|#field_ident| #name::#ident {
                    #field_ident,
                    context: Some(context.into()),
                })
            }
        }
    }
}

fn expand_internal_impls(name: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let usable = variants
        .iter()
        .any(|v| v.ident == "Internal" && v.has_message && v.has_context && v.field_count == 2);
    if !usable {
        return quote! {};
    }

    quote! {
        #[automatically_derived]
        impl ::core::convert::From<&'static str> for #name {
            #[inline]
            fn from(message: &'static str) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Borrowed(message), context: None }
            }
        }

        #[automatically_derived]
        impl ::core::convert::From<String> for #name {
            #[inline]
            fn from(message: String) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Owned(message), context: None }
            }
        }
    }
}

/// Two variants wrapping the same source type would produce conflicting `From` impls.
fn check_unique_sources(variants: &[ErrorVariant<'_>]) -> syn::Result<()> {
    let mut seen = FxHashSet::default();
    for v in variants.iter().filter(|v| v.ident != "Internal" && v.is_pure_wrapper()) {
        let Some(field) = v.source else { continue };
        let ty = &field.ty;
        if !seen.insert(quote!(#ty).to_string()) {
            return Err(syn::Error::new_spanned(
                ty,
                "codebook_error found two variants wrapping the same source type",
            ));
        }
    }
    Ok(())
}

fn is_source_field(field: &Field) -> bool {
    field.ident.as_ref().is_some_and(|ident| ident == "source")
        || field.attrs.iter().any(|attr| attr.path().is_ident("source") || attr.path().is_ident("from"))
}

fn derived_traits(input: &DeriveInput) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                traits.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }
    traits
}

fn last_segment(ty: &Type) -> Option<&PathSegment> {
    let Type::Path(path) = ty else { return None };
    path.path.segments.last()
}

fn generic_args(segment: &PathSegment) -> impl Iterator<Item = &GenericArgument> {
    let args = match &segment.arguments {
        PathArguments::AngleBracketed(args) => Some(args.args.iter()),
        _ => None,
    };
    args.into_iter().flatten()
}

/// Matches `Option<Cow<'static, str>>`, with or without path prefixes.
fn is_context_type(ty: &Type) -> bool {
    let Some(option) = last_segment(ty).filter(|s| s.ident == "Option") else {
        return false;
    };
    let mut option_args = generic_args(option);
    let (Some(GenericArgument::Type(inner)), None) = (option_args.next(), option_args.next())
    else {
        return false;
    };

    let Some(cow) = last_segment(inner).filter(|s| s.ident == "Cow") else {
        return false;
    };
    let mut cow_args = generic_args(cow);
    let (Some(GenericArgument::Lifetime(lifetime)), Some(GenericArgument::Type(target)), None) =
        (cow_args.next(), cow_args.next(), cow_args.next())
    else {
        return false;
    };

    lifetime.ident == "static" && last_segment(target).is_some_and(|s| s.ident == "str")
}
