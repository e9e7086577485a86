#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Bolt Bucket workspace.
//!
//! * [`macro@main`] turns an `async fn main` into a synchronous entry point running on a
//!   [`bolt-runtime`](../bolt_runtime/index.html) preset.
//! * [`macro@bolt_error`] turns a plain enum into a `thiserror` error with `.context(..)`
//!   support and source conversions.
//!
//! Examples below are `ignore`d because a proc-macro crate cannot use its own macros in
//! doctests; the trybuild suite under `tests/` exercises them instead.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, parse_macro_input};

/// Attribute macro to bootstrap a Tokio runtime from a `bolt_runtime` preset.
///
/// The annotated function must be `async` and must return a `Result`.
///
/// # Arguments
///
/// * `single_threaded` - Current-thread scheduler; suited to interactive front-ends.
/// * `memory_efficient` - Small multi-threaded pool for clients.
/// * `default` - Worker threads auto-detected from available parallelism.
///
/// # Examples
///
/// ```rust,ignore
/// #[bolt_runtime::main(single_threaded)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for defining crate-level error enums.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * A `<Name>Ext` trait adding `.context(..)` to `Result<T, Name>` and, for every variant
///   carrying a `source` field, to `Result<T, SourceType>` as well.
/// * `From<SourceType>` for each variant with a `source` field.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A private `format_context` helper usable inside `#[error(...)]` strings.
///
/// # Requirements
///
/// * Only enums with named-field variants are accepted.
/// * A `context` field must have type `Option<Cow<'static, str>>`.
/// * Variants with a `source` field must also have a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use bolt_derive::bolt_error;
/// use std::borrow::Cow;
///
/// #[bolt_error]
/// pub enum FetchError {
///     #[error("Transport failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read() -> Result<String, FetchError> {
///     std::fs::read_to_string("cars.json").context("Reading cached cars")
/// }
/// ```
#[proc_macro_attribute]
pub fn bolt_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
