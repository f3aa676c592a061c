//! The mapping produced by a projection.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::ops::Index;

use crate::schema::FieldKey;

/// Freshly computed key-value view of one instance
///
/// Keys appear in declaration order and keep their declared kind. The
/// mapping is detached from the instance: later changes to the instance are
/// only visible in a new projection.
///
/// Serializes as a map keyed by key names, collapsed the same way as
/// [`Projection::to_json`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Projection {
    entries: IndexMap<FieldKey, Value>,
}

impl Projection {
    #[must_use]
    pub fn get(&self, key: &FieldKey) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Value under the symbol key `name`
    #[must_use]
    pub fn symbol(&self, name: &str) -> Option<&Value> {
        self.entries.get(&FieldKey::symbol(name.to_owned()))
    }

    /// Value under the string key `name`
    #[must_use]
    pub fn string(&self, name: &str) -> Option<&Value> {
        self.entries.get(&FieldKey::string(name))
    }

    #[must_use]
    pub fn contains_key(&self, key: &FieldKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &FieldKey> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, FieldKey, Value> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert to a JSON object keyed by key names
    ///
    /// A symbol and a string key with the same name collapse into one
    /// entry at the first key's position; the one declared later wins.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.by_name()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        )
    }

    fn by_name(&self) -> IndexMap<&str, &Value> {
        let mut named = IndexMap::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            named.insert(key.name(), value);
        }
        named
    }

    #[must_use]
    pub fn into_inner(self) -> IndexMap<FieldKey, Value> {
        self.entries
    }
}

impl Serialize for Projection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.by_name().serialize(serializer)
    }
}

impl From<IndexMap<FieldKey, Value>> for Projection {
    fn from(entries: IndexMap<FieldKey, Value>) -> Self {
        Self { entries }
    }
}

impl Index<&FieldKey> for Projection {
    type Output = Value;

    fn index(&self, key: &FieldKey) -> &Value {
        &self.entries[key]
    }
}

impl IntoIterator for Projection {
    type Item = (FieldKey, Value);
    type IntoIter = indexmap::map::IntoIter<FieldKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Projection {
    type Item = (&'a FieldKey, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, FieldKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
