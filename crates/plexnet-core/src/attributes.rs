//! Typed, sparse attribute storage.
//!
//! An [`AttributeStore`] is a named registry of string or numeric attributes
//! not bound to a fixed set of objects: only the attribute name must be
//! registered up front, any object id can then be read or written. Objects
//! with no explicit value read back the attribute's default (empty string or
//! zero) - absence of a per-object value is not an error.
//!
//! The store does not check that objects exist; existence checks belong to
//! the network store that owns this one.

use std::hash::Hash;
use std::sync::Arc;

use arcstr::ArcStr;
use plexnet_common::collections::{plex_index_map, PlexIndexMap, PlexMap};
use plexnet_common::{AttributeType, AttributeValue, Error, Result};

/// Metadata of one registered attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: ArcStr,
    attribute_type: AttributeType,
}

impl Attribute {
    fn new(name: ArcStr, attribute_type: AttributeType) -> Self {
        Self {
            name,
            attribute_type,
        }
    }

    /// Returns the attribute's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attribute's registered type.
    #[must_use]
    pub const fn attribute_type(&self) -> AttributeType {
        self.attribute_type
    }
}

/// One attribute's column: its metadata plus the sparse per-object values.
struct AttributeColumn<K> {
    attribute: Arc<Attribute>,
    values: PlexMap<K, AttributeValue>,
}

/// A typed key -> object -> value registry with per-attribute defaults.
///
/// Generic over the object key so the network store can scope one instance
/// per entity kind. Registration order of attributes is preserved for
/// introspection.
///
/// # Example
///
/// ```
/// use plexnet_core::AttributeStore;
/// use plexnet_common::{AttributeType, NodeId};
///
/// let mut store: AttributeStore<NodeId> = AttributeStore::new();
/// store.add("weight", AttributeType::Numeric).unwrap();
///
/// let node = NodeId::new(3);
/// store.set_numeric(node, "weight", 32.4).unwrap();
/// assert_eq!(store.get_numeric(node, "weight").unwrap(), 32.4);
///
/// // Objects never written read back the default.
/// assert_eq!(store.get_numeric(NodeId::new(99), "weight").unwrap(), 0.0);
/// ```
pub struct AttributeStore<K> {
    columns: PlexIndexMap<ArcStr, AttributeColumn<K>>,
}

impl<K: Hash + Eq + Copy> AttributeStore<K> {
    /// Creates a new store with no registered attributes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: plex_index_map(),
        }
    }

    /// Registers a new attribute under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateElement`] if the name is already registered.
    pub fn add(&mut self, name: &str, attribute_type: AttributeType) -> Result<()> {
        if self.columns.contains_key(name) {
            return Err(Error::DuplicateElement(format!("attribute \"{name}\"")));
        }
        let name = ArcStr::from(name);
        let column = AttributeColumn {
            attribute: Arc::new(Attribute::new(name.clone(), attribute_type)),
            values: PlexMap::default(),
        };
        self.columns.insert(name, column);
        Ok(())
    }

    /// Sets a string value for `id` under the attribute `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementNotFound`] if the name is unregistered and
    /// [`Error::OperationNotSupported`] if the attribute is not string-typed.
    pub fn set_string(&mut self, id: K, name: &str, value: impl Into<ArcStr>) -> Result<()> {
        let column = Self::column_of_type_mut(&mut self.columns, name, AttributeType::String)?;
        column
            .values
            .insert(id, AttributeValue::String(value.into()));
        Ok(())
    }

    /// Sets a numeric value for `id` under the attribute `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementNotFound`] if the name is unregistered and
    /// [`Error::OperationNotSupported`] if the attribute is not numeric.
    pub fn set_numeric(&mut self, id: K, name: &str, value: f64) -> Result<()> {
        let column = Self::column_of_type_mut(&mut self.columns, name, AttributeType::Numeric)?;
        column.values.insert(id, AttributeValue::Numeric(value));
        Ok(())
    }

    /// Gets the string value for `id` under `name`, or the empty-string
    /// default when the object has no explicit value.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AttributeStore::set_string`].
    pub fn get_string(&self, id: K, name: &str) -> Result<ArcStr> {
        let column = self.column_of_type(name, AttributeType::String)?;
        match column.values.get(&id) {
            Some(AttributeValue::String(s)) => Ok(s.clone()),
            _ => Ok(ArcStr::new()),
        }
    }

    /// Gets the numeric value for `id` under `name`, or the zero default
    /// when the object has no explicit value.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AttributeStore::set_numeric`].
    pub fn get_numeric(&self, id: K, name: &str) -> Result<f64> {
        let column = self.column_of_type(name, AttributeType::Numeric)?;
        match column.values.get(&id) {
            Some(AttributeValue::Numeric(n)) => Ok(*n),
            _ => Ok(0.0),
        }
    }

    /// Purges every value associated with `id` across all attributes.
    ///
    /// Subsequent gets for `id` return defaults again.
    pub fn remove(&mut self, id: K) {
        for column in self.columns.values_mut() {
            column.values.remove(&id);
        }
    }

    /// Returns the number of registered attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if no attribute has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterates over attribute metadata in registration order.
    pub fn attributes(&self) -> impl Iterator<Item = &Arc<Attribute>> {
        self.columns.values().map(|c| &c.attribute)
    }

    /// Returns the `index`-th registered attribute (registration order).
    #[must_use]
    pub fn attribute_at(&self, index: usize) -> Option<&Arc<Attribute>> {
        self.columns.get_index(index).map(|(_, c)| &c.attribute)
    }

    /// Returns a registered attribute by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Arc<Attribute>> {
        self.columns.get(name).map(|c| &c.attribute)
    }

    fn column_of_type(&self, name: &str, expected: AttributeType) -> Result<&AttributeColumn<K>> {
        let column = self
            .columns
            .get(name)
            .ok_or_else(|| Error::ElementNotFound(format!("attribute \"{name}\"")))?;
        let actual = column.attribute.attribute_type();
        if actual != expected {
            return Err(Error::OperationNotSupported(format!(
                "attribute \"{name}\" is {actual}, not {expected}"
            )));
        }
        Ok(column)
    }

    fn column_of_type_mut<'a>(
        columns: &'a mut PlexIndexMap<ArcStr, AttributeColumn<K>>,
        name: &str,
        expected: AttributeType,
    ) -> Result<&'a mut AttributeColumn<K>> {
        let column = columns
            .get_mut(name)
            .ok_or_else(|| Error::ElementNotFound(format!("attribute \"{name}\"")))?;
        let actual = column.attribute.attribute_type();
        if actual != expected {
            return Err(Error::OperationNotSupported(format!(
                "attribute \"{name}\" is {actual}, not {expected}"
            )));
        }
        Ok(column)
    }
}

impl<K: Hash + Eq + Copy> Default for AttributeStore<K> {
    fn default() -> Self {
        Self::new()
    }
}
