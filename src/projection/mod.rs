//! Evaluation side of a projection: turning an instance into a [`Projection`].
//!
//! Host types provide their accessors through [`AttributeSource`] and opt
//! in through [`Projectable`], usually via the `projectable!` macro.

mod output;
mod parallel;
mod projector;

use serde::Serialize;
use serde_json::Value;

use crate::error::{DeclarationError, Result};
use crate::schema::{FieldKey, ProjectionSchema};

pub use output::Projection;
pub use parallel::project_all;
pub(crate) use projector::read_attribute;

/// Value returned by an accessor
pub type AttributeResult = anyhow::Result<Value>;

/// Named, zero-argument accessors of a host type
///
/// `read_attribute` returns `None` when the type has no accessor called
/// `name`. Usually derived with `#[derive(AttributeSource)]`.
pub trait AttributeSource {
    fn read_attribute(&self, name: &str) -> Option<AttributeResult>;
}

impl AttributeSource for serde_json::Map<String, Value> {
    fn read_attribute(&self, name: &str) -> Option<AttributeResult> {
        self.get(name).cloned().map(Ok)
    }
}

impl<T: AttributeSource + ?Sized> AttributeSource for Box<T> {
    fn read_attribute(&self, name: &str) -> Option<AttributeResult> {
        (**self).read_attribute(name)
    }
}

/// Encode an accessor's value
///
/// NaN and infinite floats have no JSON form and encode as `null`.
pub fn encode_attribute<V: Serialize + ?Sized>(value: &V) -> AttributeResult {
    Ok(serde_json::to_value(value)?)
}

/// A host type with a declared projection schema
pub trait Projectable: AttributeSource + Sized + 'static {
    /// The type's schema, built once per process
    fn projection_schema() -> std::result::Result<&'static ProjectionSchema<Self>, DeclarationError>;

    /// Project the current state of `self`
    fn to_map(&self) -> Result<Projection> {
        Self::projection_schema()?.project(self)
    }

    /// Alias of [`Projectable::to_map`]
    fn to_hash(&self) -> Result<Projection> {
        self.to_map()
    }

    /// Keys every projection of this type contains, in order
    fn declared_keys() -> std::result::Result<Vec<FieldKey>, DeclarationError> {
        Ok(Self::projection_schema()?.keys().cloned().collect())
    }
}
