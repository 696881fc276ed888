//! Outcome types for synonym map operations.

use synonym_manager_shared::SUCCESS_MESSAGE;

/// Result of creating a synonym map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    /// The map was appended to the managed field and the index written back.
    pub field_updated: bool,
}

/// Result of deleting a synonym map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// The map was removed from the managed field and the index written back.
    pub field_updated: bool,
}

impl CreateOutcome {
    /// Response message for this outcome.
    pub fn message(&self, map_name: &str, index_name: &str) -> String {
        if self.field_updated {
            SUCCESS_MESSAGE.to_string()
        } else {
            format!("Synonym map {} already exists in {} index", map_name, index_name)
        }
    }
}

impl DeleteOutcome {
    /// Response message for this outcome.
    pub fn message(&self, index_name: &str) -> String {
        if self.field_updated {
            SUCCESS_MESSAGE.to_string()
        } else {
            format!("Synonym map not found in {} index", index_name)
        }
    }
}
