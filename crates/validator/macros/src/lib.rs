//! # condval-macros
//!
//! Derive macros for `condval`. Use them through the `condval` crate
//! (`condval::Record`) rather than depending on this crate directly.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod record;
mod support;

/// Derive macro for the `Record` and `Inspect` traits.
///
/// Every field becomes addressable by name from rule parameter strings,
/// and the struct reports itself as zero when all of its fields are.
/// Each field type must implement `condval::value::Inspect`.
///
/// # Attributes
///
/// ## Field attributes
///
/// - `#[record(rename = "...")]` - Looks the field up by another name
/// - `#[record(skip)]` - Hides the field from lookups and zero checks
///
/// Tuple struct fields are named by their index (`"0"`, `"1"`, ...).
///
/// # Example
///
/// ```ignore
/// use condval::Record;
///
/// #[derive(Record)]
/// struct Search {
///     limit: u32,
///     #[record(rename = "Query")]
///     query: String,
///     #[record(skip)]
///     cache: Cache,
/// }
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
