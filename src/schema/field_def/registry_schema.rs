//! Per-type projection schema and its builder
//!
//! A [`ProjectionSchema`] is the frozen, ordered field list of one host
//! type. It is produced by a [`SchemaBuilder`], which applies the
//! duplicate and redeclaration policies from [`ProjectionConfig`].

use indexmap::IndexMap;
use itertools::Itertools;
use log::debug;
use rustc_hash::FxHashSet;
use std::fmt;

use super::field::{FieldKey, FieldSpec};
use super::mapping::Computed;
use crate::config::{DuplicateKeyPolicy, ProjectionConfig, RedeclarationPolicy};
use crate::error::DeclarationError;
use crate::projection::AttributeSource;

/// The declared fields of a host type
pub struct ProjectionSchema<T> {
    type_name: &'static str,
    fields: Vec<FieldSpec<T>>,
    config: ProjectionConfig,
}

impl<T: 'static> ProjectionSchema<T> {
    /// Start declaring fields for `T` with the default configuration
    #[must_use]
    pub fn builder() -> SchemaBuilder<T> {
        SchemaBuilder::new(ProjectionConfig::default())
    }

    /// Start declaring fields for `T` with a custom configuration
    #[must_use]
    pub fn builder_with_config(config: ProjectionConfig) -> SchemaBuilder<T> {
        SchemaBuilder::new(config)
    }

    /// Declare a complete schema in one call
    pub fn declare(
        fields: impl IntoIterator<Item = FieldSpec<T>>,
    ) -> Result<Self, DeclarationError> {
        Ok(Self::builder().declare(fields)?.build())
    }
}

impl<T> ProjectionSchema<T> {
    /// Name of the host type, as used in error messages
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Fields in declaration order
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec<T>] {
        &self.fields
    }

    /// Keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &FieldKey> {
        self.fields.iter().map(|field| &field.key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &FieldKey) -> bool {
        self.fields.iter().any(|field| field.key == *key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }
}

impl<T> fmt::Debug for ProjectionSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectionSchema")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Accumulates field declarations for a host type
pub struct SchemaBuilder<T> {
    type_name: &'static str,
    fields: IndexMap<FieldKey, FieldSpec<T>>,
    config: ProjectionConfig,
}

impl<T> fmt::Debug for SchemaBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaBuilder")
            .field("type_name", &self.type_name)
            .field("keys", &self.fields.keys().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

impl<T: 'static> SchemaBuilder<T> {
    fn new(config: ProjectionConfig) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            fields: IndexMap::new(),
            config,
        }
    }

    /// Override the type name used in error messages
    #[must_use]
    pub fn named(mut self, type_name: &'static str) -> Self {
        self.type_name = type_name;
        self
    }

    /// Declare a batch of fields
    ///
    /// The batch is validated as a whole before anything is merged.
    /// Merging follows the configured [`RedeclarationPolicy`].
    pub fn declare(
        mut self,
        fields: impl IntoIterator<Item = FieldSpec<T>>,
    ) -> Result<Self, DeclarationError> {
        let batch = self.validate(fields)?;

        if self.config.redeclaration == RedeclarationPolicy::Replace && !self.fields.is_empty() {
            debug!(
                "{}: replacing {} previously declared fields",
                self.type_name,
                self.fields.len()
            );
            self.fields.clear();
        }

        for field in batch {
            // insert keeps the original position of an overridden key
            self.fields.insert(field.key.clone(), field);
        }
        Ok(self)
    }

    /// Take over the fields of a parent schema, evaluated through `lens`
    ///
    /// Keys this builder already declares are kept; later declarations
    /// override inherited keys as usual.
    #[must_use]
    pub fn inherit<P, L>(mut self, parent: &ProjectionSchema<P>, lens: L) -> Self
    where
        P: AttributeSource + 'static,
        L: Fn(&T) -> &P + Clone + Send + Sync + 'static,
    {
        for field in parent.fields() {
            if self.fields.contains_key(&field.key) {
                continue;
            }
            let inherited = FieldSpec::from_fn(
                field.key.clone(),
                Computed::through(parent.type_name(), lens.clone(), field.clone()),
            );
            self.fields.insert(field.key.clone(), inherited);
        }
        debug!(
            "{} inherits fields from {}",
            self.type_name,
            parent.type_name()
        );
        self
    }

    /// Freeze the declared fields
    #[must_use]
    pub fn build(self) -> ProjectionSchema<T> {
        debug!(
            "declared {} fields for {}: {}",
            self.fields.len(),
            self.type_name,
            self.fields.keys().join(", ")
        );
        ProjectionSchema {
            type_name: self.type_name,
            fields: self.fields.into_values().collect(),
            config: self.config,
        }
    }

    fn validate(
        &self,
        fields: impl IntoIterator<Item = FieldSpec<T>>,
    ) -> Result<Vec<FieldSpec<T>>, DeclarationError> {
        let mut seen = FxHashSet::default();
        let mut batch: Vec<FieldSpec<T>> = Vec::new();

        for field in fields {
            if let Some(reason) = field.key.malformation() {
                return Err(DeclarationError::MalformedKey {
                    type_name: self.type_name,
                    key: field.key.name().to_string(),
                    reason,
                });
            }

            if seen.insert(field.key.clone()) {
                batch.push(field);
                continue;
            }

            match self.config.duplicate_keys {
                DuplicateKeyPolicy::Reject => {
                    return Err(DeclarationError::DuplicateKey {
                        type_name: self.type_name,
                        key: field.key,
                    });
                }
                DuplicateKeyPolicy::LastWins => {
                    if let Some(slot) = batch.iter_mut().find(|f| f.key == field.key) {
                        *slot = field;
                    }
                }
            }
        }
        Ok(batch)
    }
}
