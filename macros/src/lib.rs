//! Procedural macros for the projectable crate
//!
//! This crate provides the derive that builds a host type's accessor table,
//! so attribute-reference fields can be resolved without hand-written
//! lookups.

use proc_macro::TokenStream;

// Import modules
mod attribute_source;
mod utils;

// Tests
#[cfg(test)]
mod tests;

/// Derive macro for `projectable::AttributeSource`
///
/// Every named field becomes an accessor called after the field. Field
/// values must implement `serde::Serialize`.
///
/// # Field attributes
///
/// - `#[attribute(rename = "name")]` exposes the field under another name
/// - `#[attribute(skip)]` leaves the field out of the accessor table
///
/// # Example
///
/// ```rust,ignore
/// #[derive(AttributeSource)]
/// struct User {
///     id: u64,
///
///     #[attribute(rename = "display_name")]
///     name: String,
///
///     #[attribute(skip)]
///     password_hash: String,
/// }
/// ```
#[proc_macro_derive(AttributeSource, attributes(attribute))]
pub fn derive_attribute_source(input: TokenStream) -> TokenStream {
    attribute_source::process_derive_attribute_source(input)
}
