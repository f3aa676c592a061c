//! Module for projection field definitions
//!
//! This module provides the field keys, field sources and per-type schemas
//! that decide what a projection contains.

pub mod field;
mod macros;
pub mod mapping;
mod registry_schema;

pub use field::{FieldKey, FieldSource, FieldSpec};
pub use mapping::{ComputeFn, Computed, FieldComputer};
pub use registry_schema::{ProjectionSchema, SchemaBuilder};

// Re-export the macros to make them available to users of this module
pub use crate::field_specs;
pub use crate::projectable;
