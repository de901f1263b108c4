#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the codebook crates.
//!
//! Currently this is a single attribute, [`macro@codebook_error`], which every crate in the
//! workspace uses to declare its error enum.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for declaring a crate error enum.
///
/// # What it adds
///
/// * `#[derive(Debug, thiserror::Error)]` unless the enum already derives them.
/// * A companion `<Name>Ext` trait with `.context(..)`, implemented for `Result<T, Name>`
///   and for `Result<T, Source>` of every variant that wraps a source error.
/// * `From<Source>` for every variant with a `source` field (or a field marked
///   `#[source]` / `#[from]`), so `?` works on upstream errors.
/// * `From<&'static str>` and `From<String>` when the enum has an `Internal` variant
///   with a `message` field.
/// * A private `format_context` helper to be used inside `#[error(..)]` strings.
///
/// # Requirements
///
/// * Applied to an enum whose variants all use named fields.
/// * Variants with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[codebook_derive::codebook_error]
/// pub enum StoreError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn open(path: &str) -> Result<std::fs::File, StoreError> {
///     std::fs::File::open(path).context("Opening store file")
/// }
/// ```
#[proc_macro_attribute]
pub fn codebook_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).unwrap_or_else(syn::Error::into_compile_error).into()
}
