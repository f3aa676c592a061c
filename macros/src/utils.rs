//! Utility functions for procedural macros
//!
//! Name resolution and validation shared by the derive implementations.

use syn::ext::IdentExt;
use syn::Ident;

/// Accessor name of a field: the `rename` value, or the field name without
/// any `r#` prefix
pub fn accessor_name(ident: &Ident, rename: Option<&str>) -> String {
    match rename {
        Some(name) => name.to_string(),
        None => ident.unraw().to_string(),
    }
}

/// First accessor name that occurs twice, with the field that repeats it
pub fn find_duplicate<'a>(names: &'a [(String, &'a Ident)]) -> Option<(&'a str, &'a Ident)> {
    names.iter().enumerate().find_map(|(i, (name, ident))| {
        names[..i]
            .iter()
            .any(|(earlier, _)| earlier == name)
            .then_some((name.as_str(), *ident))
    })
}
