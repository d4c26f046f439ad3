#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the `MoodFlag` crates.
//!
//! * [`macro@main`] bootstraps a profiled Tokio runtime for a binary entry point.
//! * [`macro@moodflag_error`] turns a plain enum into a crate error type with
//!   context support.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own macros;
//! the consuming crates exercise them in their tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, parse_macro_input};

/// Attribute macro to bootstrap a `MoodFlag` Tokio runtime.
///
/// Transforms an `async fn main` into a standard `fn main` that builds a runtime
/// from a [`moodflag_runtime::RuntimeConfig`] preset and blocks on the body.
///
/// # Arguments
///
/// * `interactive` - Current-thread runtime for terminal clients that block on one call at a time.
/// * `service` - Multi-threaded runtime (used by test harnesses hosting mock services).
/// * `default` - Same as omitting the argument.
///
/// # Examples
///
/// ```rust,ignore
/// #[moodflag_runtime::main(interactive)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for defining crate error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to `Result<T, ErrorName>` and to results of every wrapped source error.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field,
///   enabling `?` on upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` when an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. Applied to an **enum** with named-field variants only.
/// 2. Variants with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[moodflag_derive::moodflag_error]
/// pub enum ClientError {
///     #[error("Transport failure{}: {source}", format_context(.context))]
///     Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn moodflag_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
