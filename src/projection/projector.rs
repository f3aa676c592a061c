//! Evaluating a schema against one instance.

use indexmap::IndexMap;
use log::{debug, trace};
use serde_json::Value;

use super::{AttributeSource, Projection};
use crate::error::{ProjectionError, Result};
use crate::schema::{FieldKey, FieldSource, FieldSpec, ProjectionSchema};

impl<T: AttributeSource> ProjectionSchema<T> {
    /// Project the current state of `instance`
    ///
    /// Every field is evaluated on each call. The first failing field aborts
    /// the projection; no partial mapping is returned.
    pub fn project(&self, instance: &T) -> Result<Projection> {
        let mut entries = IndexMap::with_capacity(self.len());

        for field in self.fields() {
            if self.config().log_projections {
                trace!("{}: evaluating {}", self.type_name(), field.key);
            }
            let value = self.evaluate(field, instance).inspect_err(|e| {
                debug!("{}: field {} failed: {e}", self.type_name(), field.key);
            })?;
            entries.insert(field.key.clone(), value);
        }

        Ok(Projection::from(entries))
    }

    fn evaluate(&self, field: &FieldSpec<T>, instance: &T) -> Result<Value> {
        match &field.source {
            FieldSource::Attribute => read_attribute(instance, self.type_name(), &field.key),
            FieldSource::Computed(f) => f(instance),
        }
    }
}

/// Read the accessor named after `key`
pub(crate) fn read_attribute<T: AttributeSource + ?Sized>(
    instance: &T,
    type_name: &'static str,
    key: &FieldKey,
) -> Result<Value> {
    match instance.read_attribute(key.name()) {
        Some(value) => value.map_err(ProjectionError::Evaluation),
        None => Err(ProjectionError::Resolution {
            type_name,
            accessor: key.name().to_string(),
        }),
    }
}
