//! Declaration side of a projection: which fields a type exposes.

pub mod field_def;

pub use field_def::{
    ComputeFn, Computed, FieldComputer, FieldKey, FieldSource, FieldSpec, ProjectionSchema,
    SchemaBuilder,
};
