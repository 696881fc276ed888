//! Index field reconciler.
//!
//! Decides how the synonym map list of the managed index field has to change when
//! a map is created or deleted. Planning is pure: it reads an index definition
//! and returns a [`FieldMutation`]. Only a mutation that is not a no-op needs to
//! be applied and written back through the gateway.

use synonym_manager_shared::SearchIndex;
use tracing::warn;

use crate::utils::unique_in_order;

/// Planned change to the synonym map list of the managed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMutation {
    /// Append `map_name` to the field's list.
    Attach { field_name: String, map_name: String },
    /// Remove the first occurrence of `map_name` from the field's list.
    Detach { field_name: String, map_name: String },
    /// The field already has the desired list.
    Unchanged,
    /// The managed field does not exist in the index.
    FieldMissing,
}

impl FieldMutation {
    /// Returns true if applying this mutation changes nothing.
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::Unchanged | Self::FieldMissing)
    }

    /// Apply the mutation to `index`.
    ///
    /// Returns true if the index was modified. Applying a plan to an index that no
    /// longer matches it (field gone, map already present/absent) modifies nothing.
    pub fn apply(&self, index: &mut SearchIndex) -> bool {
        match self {
            Self::Attach {
                field_name,
                map_name,
            } => {
                let Some(field) = index.field_mut(field_name) else {
                    return false;
                };
                let maps = field.synonym_maps.get_or_insert_with(Vec::new);
                if maps.contains(map_name) {
                    return false;
                }
                maps.push(map_name.clone());
                true
            }
            Self::Detach {
                field_name,
                map_name,
            } => {
                let Some(maps) = index
                    .field_mut(field_name)
                    .and_then(|field| field.synonym_maps.as_mut())
                else {
                    return false;
                };
                match maps.iter().position(|name| name == map_name) {
                    Some(position) => {
                        maps.remove(position);
                        true
                    }
                    None => false,
                }
            }
            Self::Unchanged | Self::FieldMissing => false,
        }
    }
}

/// Plans synonym map attachments for one configured index field.
#[derive(Debug, Clone)]
pub struct FieldReconciler {
    field_name: String,
}

impl FieldReconciler {
    /// Create a reconciler managing the field called `field_name`.
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
        }
    }

    /// Name of the managed field.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Plan attaching `map_name` to the managed field.
    pub fn plan_attach(&self, index: &SearchIndex, map_name: &str) -> FieldMutation {
        let Some(field) = index.field(&self.field_name) else {
            self.warn_field_missing(index);
            return FieldMutation::FieldMissing;
        };

        if field.has_synonym_map(map_name) {
            return FieldMutation::Unchanged;
        }

        FieldMutation::Attach {
            field_name: self.field_name.clone(),
            map_name: map_name.to_string(),
        }
    }

    /// Plan detaching `map_name` from the managed field.
    pub fn plan_detach(&self, index: &SearchIndex, map_name: &str) -> FieldMutation {
        let Some(field) = index.field(&self.field_name) else {
            self.warn_field_missing(index);
            return FieldMutation::FieldMissing;
        };

        if field.has_synonym_map(map_name) {
            FieldMutation::Detach {
                field_name: self.field_name.clone(),
                map_name: map_name.to_string(),
            }
        } else {
            FieldMutation::Unchanged
        }
    }

    /// Names of the synonym maps attached to the managed field, duplicates removed.
    pub fn attached_map_names(&self, index: &SearchIndex) -> Vec<String> {
        index
            .field(&self.field_name)
            .and_then(|field| field.synonym_maps.as_deref())
            .map(|maps| unique_in_order(maps.iter().cloned()))
            .unwrap_or_default()
    }

    fn warn_field_missing(&self, index: &SearchIndex) {
        warn!(
            index_name = %index.name,
            field_name = %self.field_name,
            "Managed field not found in index, leaving index unchanged"
        );
    }
}
