//! Field keys and field specifications
//!
//! A [`FieldSpec`] pairs an output key with the place its value comes from:
//! either one of the host's accessors or a function of the host.

use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use super::mapping::{ComputeFn, Computed};

/// Key of a projected field
///
/// The two kinds are distinct slots: `FieldKey::symbol("quote")` and
/// `FieldKey::string("quote")` never compare equal, and a projection keeps
/// whichever kind was declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    /// Symbol-like atom, usually spelled after the accessor it reads
    Symbol(Cow<'static, str>),
    /// Plain string key
    String(String),
}

impl FieldKey {
    /// Create a symbol key
    pub fn symbol(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Symbol(name.into())
    }

    /// Create a string key
    pub fn string(name: impl Into<String>) -> Self {
        Self::String(name.into())
    }

    /// The key's name, regardless of kind
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Symbol(name) => &**name,
            Self::String(name) => name.as_str(),
        }
    }

    #[must_use]
    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }

    /// Why this key cannot be declared, if it cannot
    pub(crate) fn malformation(&self) -> Option<&'static str> {
        let name = self.name();
        if name.is_empty() {
            return Some("key is empty");
        }
        if let Self::Symbol(_) = self {
            if name.chars().any(char::is_whitespace) {
                return Some("symbol keys cannot contain whitespace");
            }
            if name.starts_with(|c: char| c.is_ascii_digit()) {
                return Some("symbol keys cannot start with a digit");
            }
        }
        None
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(name) => write!(f, ":{name}"),
            Self::String(name) => write!(f, "{name:?}"),
        }
    }
}

impl Serialize for FieldKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Where a field's value comes from
pub enum FieldSource<T> {
    /// Read the accessor named after the key
    Attribute,
    /// Call a function with the instance
    Computed(ComputeFn<T>),
}

impl<T> Clone for FieldSource<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Attribute => Self::Attribute,
            Self::Computed(f) => Self::Computed(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for FieldSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attribute => f.write_str("Attribute"),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// One declared field of a host type
pub struct FieldSpec<T> {
    /// Key in the projected mapping
    pub key: FieldKey,
    /// Source of the value
    pub source: FieldSource<T>,
}

impl<T> fmt::Debug for FieldSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("key", &self.key)
            .field("source", &self.source)
            .finish()
    }
}

impl<T> Clone for FieldSpec<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            source: self.source.clone(),
        }
    }
}

impl<T: 'static> FieldSpec<T> {
    /// A field read from the accessor named after `key`
    pub fn attribute(key: FieldKey) -> Self {
        Self {
            key,
            source: FieldSource::Attribute,
        }
    }

    /// A field computed by an infallible function of the instance
    pub fn computed<F, V>(key: FieldKey, f: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: Serialize,
    {
        Self::from_fn(key, Computed::value(f))
    }

    /// A field computed by a function of the instance that may fail
    pub fn try_computed<F, V>(key: FieldKey, f: F) -> Self
    where
        F: Fn(&T) -> anyhow::Result<V> + Send + Sync + 'static,
        V: Serialize,
    {
        Self::from_fn(key, Computed::fallible(f))
    }

    /// A field computed by an already boxed function
    pub fn from_fn(key: FieldKey, f: ComputeFn<T>) -> Self {
        Self {
            key,
            source: FieldSource::Computed(f),
        }
    }

    #[must_use]
    pub fn is_computed(&self) -> bool {
        matches!(self.source, FieldSource::Computed(_))
    }
}
