//! Search index definition types.
//!
//! Only the index name, field names and field synonym map lists are interpreted.
//! Every other property returned by the search service is kept in `extra` so that
//! writing an index back sends the definition unchanged apart from the edits made
//! here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A search index definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchIndex {
    /// Index name.
    pub name: String,

    /// Top-level fields in definition order.
    #[serde(default)]
    pub fields: Vec<SearchField>,

    /// Uninterpreted index properties (analyzers, scoring profiles, etag, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single field of a search index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchField {
    /// Field name.
    pub name: String,

    /// Names of the synonym maps attached to this field, if any.
    #[serde(
        rename = "synonymMaps",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub synonym_maps: Option<Vec<String>>,

    /// Uninterpreted field properties (type, analyzer, nested fields, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchIndex {
    /// Create an index definition with the given fields and no extra properties.
    pub fn new(name: impl Into<String>, fields: Vec<SearchField>) -> Self {
        Self {
            name: name.into(),
            fields,
            extra: Map::new(),
        }
    }

    /// Find a top-level field by name.
    pub fn field(&self, name: &str) -> Option<&SearchField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Find a top-level field by name for modification.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut SearchField> {
        self.fields.iter_mut().find(|field| field.name == name)
    }
}

impl SearchField {
    /// Create a field with no synonym maps and no extra properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            synonym_maps: None,
            extra: Map::new(),
        }
    }

    /// Set the attached synonym map names.
    pub fn with_synonym_maps<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonym_maps = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Returns true if `map_name` is attached to this field.
    pub fn has_synonym_map(&self, map_name: &str) -> bool {
        self.synonym_maps
            .as_ref()
            .is_some_and(|maps| maps.iter().any(|name| name == map_name))
    }
}
