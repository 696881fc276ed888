//! Response envelope returned by every synonym manager endpoint.

use serde::{Deserialize, Serialize};

use crate::types::synonym_map::EquivalenceGroup;

/// Message used for successful responses without a more specific outcome.
pub const SUCCESS_MESSAGE: &str = "Success";

/// Uniform response body: `{code, message, data}`.
///
/// `data` is always serialized, empty for mutating operations and for errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Status code, mirrored from the HTTP status.
    pub code: u16,
    /// Human readable outcome or error string.
    pub message: String,
    /// Synonym maps returned by read operations.
    #[serde(default)]
    pub data: Vec<SynonymMapEntry>,
}

/// One synonym map in decoded form.
///
/// `index_name` is only present when the map was listed through an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynonymMapEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    pub map_name: String,
    pub synonym_list: Vec<EquivalenceGroup>,
}

impl ResponseEnvelope {
    /// A 200 response carrying `data`.
    pub fn success(data: Vec<SynonymMapEntry>) -> Self {
        Self {
            code: 200,
            message: SUCCESS_MESSAGE.to_string(),
            data,
        }
    }

    /// A 200 response with a specific message and no data.
    pub fn ok_with_message(message: impl Into<String>) -> Self {
        Self {
            code: 200,
            message: message.into(),
            data: Vec::new(),
        }
    }

    /// An error response with no data.
    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: Vec::new(),
        }
    }
}

impl SynonymMapEntry {
    /// An entry listed without index context.
    pub fn new(map_name: impl Into<String>, synonym_list: Vec<EquivalenceGroup>) -> Self {
        Self {
            index_name: None,
            map_name: map_name.into(),
            synonym_list,
        }
    }

    /// An entry listed through `index_name`.
    pub fn for_index(
        index_name: impl Into<String>,
        map_name: impl Into<String>,
        synonym_list: Vec<EquivalenceGroup>,
    ) -> Self {
        Self {
            index_name: Some(index_name.into()),
            map_name: map_name.into(),
            synonym_list,
        }
    }
}
