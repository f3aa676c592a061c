//! Projecting many instances at once.

use log::debug;
use rayon::prelude::*;

use super::{AttributeSource, Projectable, Projection};
use crate::error::Result;
use crate::schema::ProjectionSchema;

impl<T: AttributeSource + Sync> ProjectionSchema<T> {
    /// Project every item in parallel
    ///
    /// Results are in slice order. If any item fails, the call fails.
    pub fn project_all(&self, items: &[T]) -> Result<Vec<Projection>> {
        debug!(
            "projecting {} {} instances in parallel",
            items.len(),
            self.type_name()
        );
        items.par_iter().map(|item| self.project(item)).collect()
    }
}

/// Project every item of a [`Projectable`] type in parallel
pub fn project_all<T: Projectable + Sync>(items: &[T]) -> Result<Vec<Projection>> {
    T::projection_schema()?.project_all(items)
}
