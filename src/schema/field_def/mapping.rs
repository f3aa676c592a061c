//! Computed field sources
//!
//! Functions that turn an instance into a field value, plus the factory
//! used to build them from plain closures.

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use super::field::{FieldSource, FieldSpec};
use crate::error::{ProjectionError, Result};
use crate::projection::AttributeSource;

/// A function computing one field value from an instance
pub trait FieldComputer<T>: Fn(&T) -> Result<Value> + Send + Sync + 'static {}

// Implement the trait for all compatible function types
impl<T, F> FieldComputer<T> for F where F: Fn(&T) -> Result<Value> + Send + Sync + 'static {}

/// Shared handle to a field computer
pub type ComputeFn<T> = Arc<dyn FieldComputer<T>>;

/// Factory for field computers
pub struct Computed;

impl Computed {
    /// Wrap an infallible closure; its output is encoded as JSON
    ///
    /// JSON has no non-finite numbers: NaN and infinities encode as `null`.
    pub fn value<T, F, V>(f: F) -> ComputeFn<T>
    where
        T: 'static,
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: Serialize,
    {
        Arc::new(move |instance: &T| encode(&f(instance)))
    }

    /// Wrap a closure that may fail; its error is passed through untouched
    pub fn fallible<T, F, V>(f: F) -> ComputeFn<T>
    where
        T: 'static,
        F: Fn(&T) -> anyhow::Result<V> + Send + Sync + 'static,
        V: Serialize,
    {
        Arc::new(move |instance: &T| {
            let value = f(instance).map_err(ProjectionError::Evaluation)?;
            encode(&value)
        })
    }

    /// Evaluate a field of `P` against the `P` reached through `lens`
    ///
    /// `parent` is the name reported when an attribute of `P` is missing.
    pub fn through<T, P, L>(parent: &'static str, lens: L, field: FieldSpec<P>) -> ComputeFn<T>
    where
        T: 'static,
        P: AttributeSource + 'static,
        L: Fn(&T) -> &P + Send + Sync + 'static,
    {
        let FieldSpec { key, source } = field;
        match source {
            FieldSource::Attribute => Arc::new(move |instance: &T| {
                crate::projection::read_attribute(lens(instance), parent, &key)
            }),
            FieldSource::Computed(f) => Arc::new(move |instance: &T| f(lens(instance))),
        }
    }
}

fn encode<V: Serialize + ?Sized>(value: &V) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| ProjectionError::Evaluation(e.into()))
}
