//! Declarative, allow-listed key-value projections of Rust values.
//!
//! A host type declares once which of its attributes and computed values
//! are visible; everything else stays out of the projected mapping.
//!
//! ```rust
//! use projectable::{projectable, AttributeSource, Projectable};
//! use serde_json::json;
//!
//! #[derive(AttributeSource)]
//! struct User {
//!     id: u64,
//!     name: String,
//!     secret_token: String,
//! }
//!
//! projectable! {
//!     User {
//!         id,
//!         name,
//!         encrypted_token => |user| format!("{} secret sauce", user.secret_token),
//!     }
//! }
//!
//! let mut user = User { id: 1, name: "pote".into(), secret_token: "abc".into() };
//! assert_eq!(
//!     user.to_map().unwrap().to_json(),
//!     json!({ "id": 1, "name": "pote", "encrypted_token": "abc secret sauce" })
//! );
//!
//! user.secret_token = "NEW STUFF".into();
//! assert_eq!(
//!     user.to_hash().unwrap().symbol("encrypted_token"),
//!     Some(&json!("NEW STUFF secret sauce"))
//! );
//! ```

pub mod config;
pub mod error;
pub mod projection;
pub mod schema;

// Re-export the most common types for easier use
pub use config::{DuplicateKeyPolicy, ProjectionConfig, RedeclarationPolicy};
pub use error::{DeclarationError, ProjectionError, Result};
pub use projection::{
    AttributeResult, AttributeSource, Projectable, Projection, encode_attribute, project_all,
};
pub use schema::{FieldKey, FieldSource, FieldSpec, ProjectionSchema, SchemaBuilder};

// Derive macro for the compile-time accessor table
pub use projectable_macros::AttributeSource;
